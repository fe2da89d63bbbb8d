/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const CALENDAR_ROUTE_COMPONENT: &str = "calendar";
pub const CALENDAR_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", CALENDAR_ROUTE_COMPONENT);

pub const TIMETABLE_ROUTE_COMPONENT: &str = "timetable";
pub const TIMETABLE_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", TIMETABLE_ROUTE_COMPONENT);

pub const BOOKINGS_ROUTE_COMPONENT: &str = "bookings";
pub const BOOKINGS_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", BOOKINGS_ROUTE_COMPONENT);
