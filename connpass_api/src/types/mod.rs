mod event;
pub use self::event::{Event, EventID, SeriesID};

mod result_set;
pub use self::result_set::ResultSet;
