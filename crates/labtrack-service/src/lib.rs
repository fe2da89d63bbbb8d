//! Service layer: the calendar build orchestration plus the routine
//! timetable, booking, registration, broadcast and resource services.

pub mod booking;
pub mod broadcast;
pub mod calendar;
pub mod directory;
pub mod error;
pub mod resource;
pub mod timetable;
