pub mod calendar;
pub mod ui;
pub mod sync;
pub mod storage;

pub use calendar::{CalendarDocument, EventRecord, MonthKey};
pub use ui::calendar_view::CalendarView;
pub use ui::month_view::{CalendarDay, CalendarGridBuilder, MonthGrid};
