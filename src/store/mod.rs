pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::models::Booking;

/// Durable mirror of the booking collection. The repository writes through
/// this after every mutation and reads it exactly once, at startup.
pub trait BookingStore: Send {
    /// Loads the persisted collection. An absent or unreadable store yields
    /// an empty collection; the failure is logged, never returned.
    fn load(&self) -> Vec<Booking>;

    /// Replaces the persisted collection with `bookings`, verbatim.
    fn save(&self, bookings: &[Booking]) -> anyhow::Result<()>;
}

impl<S: BookingStore + Sync> BookingStore for std::sync::Arc<S> {
    fn load(&self) -> Vec<Booking> {
        (**self).load()
    }

    fn save(&self, bookings: &[Booking]) -> anyhow::Result<()> {
        (**self).save(bookings)
    }
}
