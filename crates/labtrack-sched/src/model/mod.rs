mod booking;
mod event;
mod slot;
mod viewer;

pub use booking::{Booking, BookingStatus};
pub use event::{Accent, CalendarEvent, EventKind};
pub use slot::{DayOfWeek, TimetableSlot};
pub use viewer::{MASTER_SCHEDULE, MY_CLASS, ScheduleFilter, ViewContext, Viewer};
