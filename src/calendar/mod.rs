pub mod event;
pub mod document;
pub mod month_key;
pub mod validate;

pub use event::EventRecord;
pub use document::{CalendarDocument, Legend, LegendItem};
pub use month_key::{MonthKey, MonthKeyError};
pub use validate::{Severity, ValidationIssue};
