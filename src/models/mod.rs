pub mod booking;
pub mod service;

pub use booking::{Booking, BookingStatus};
pub use service::{service_by_id, Service, SERVICES, TIME_SLOTS};
