mod common;
pub use self::common::{Order, Query, QueryCommon};

mod time;
pub use self::time::Time;

mod event;
pub use self::event::EventQuery;
