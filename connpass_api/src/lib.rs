//! Client for the connpass event search API (`/api/v1/event/`).
//!
//! Build an [`EventQuery`], hand it to [`Client::search`], and read the
//! returned [`types::ResultSet`]. Paging is left to the caller; see
//! [`types::ResultSet::next_start`].
mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::{Client, DEFAULT_TIMEOUT};
pub use self::errors::Error;
pub use self::query::{EventQuery, Order, Query, QueryCommon, Time};
