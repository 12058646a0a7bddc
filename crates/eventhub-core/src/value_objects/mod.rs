//! Value objects - immutable types that represent domain concepts

mod calendar;
mod coordinates;
mod record_id;
mod weekday;

pub use calendar::CalendarDate;
pub use coordinates::Coordinates;
pub use record_id::{RecordId, RecordIdParseError};
pub use weekday::{UnknownLabelSet, WeekdayLabels, DAYS_IN_WEEK};
