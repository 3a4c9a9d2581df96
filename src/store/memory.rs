use std::sync::Mutex;

use super::BookingStore;
use crate::models::Booking;

/// In-process backend for tests and ephemeral runs.
#[derive(Default)]
pub struct MemoryStore {
    bookings: Mutex<Vec<Booking>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookingStore for MemoryStore {
    fn load(&self) -> Vec<Booking> {
        self.bookings.lock().unwrap().clone()
    }

    fn save(&self, bookings: &[Booking]) -> anyhow::Result<()> {
        *self.bookings.lock().unwrap() = bookings.to_vec();
        Ok(())
    }
}
