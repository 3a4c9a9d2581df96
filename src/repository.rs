use crate::models::{Booking, BookingStatus};
use crate::store::BookingStore;

/// Owns the session's booking collection. Every mutation writes through to
/// the store; reads never touch it.
pub struct BookingRepository {
    bookings: Vec<Booking>,
    store: Box<dyn BookingStore>,
}

impl BookingRepository {
    pub fn load(store: Box<dyn BookingStore>) -> Self {
        let bookings = store.load();
        Self { bookings, store }
    }

    /// Appends a booking. No validation happens here; the submission handler
    /// already guaranteed the required fields.
    pub fn append(&mut self, booking: Booking) -> anyhow::Result<()> {
        self.bookings.push(booking);
        self.store.save(&self.bookings)
    }

    /// Replaces the status of the matching booking, leaving every other field
    /// untouched. A missing id is a silent no-op returning `false`.
    pub fn update_status(&mut self, id: &str, status: BookingStatus) -> anyhow::Result<bool> {
        let Some(booking) = self.bookings.iter_mut().find(|b| b.id == id) else {
            return Ok(false);
        };
        booking.status = status;
        self.store.save(&self.bookings)?;
        Ok(true)
    }

    pub fn get(&self, id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    /// The full, unfiltered collection, for derived views.
    pub fn all(&self) -> &[Booking] {
        &self.bookings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn repo() -> BookingRepository {
        BookingRepository::load(Box::new(MemoryStore::new()))
    }

    fn booking(id: &str) -> Booking {
        Booking {
            id: id.to_string(),
            customer_name: "Alice".to_string(),
            phone_number: "0901234567".to_string(),
            service_id: "s1".to_string(),
            date: "2025-06-16".to_string(),
            time: "08:00".to_string(),
            created_at: 1_750_000_000_000,
            status: BookingStatus::Pending,
        }
    }

    #[test]
    fn test_append_grows_by_one() {
        let mut repo = repo();
        for i in 0..5 {
            repo.append(booking(&format!("b{i}"))).unwrap();
        }
        assert_eq!(repo.all().len(), 5);
        for i in 0..5 {
            let b = repo.get(&format!("b{i}")).unwrap();
            assert_eq!(b.status, BookingStatus::Pending);
        }
    }

    #[test]
    fn test_update_status_missing_id_is_noop() {
        let mut repo = repo();
        repo.append(booking("b1")).unwrap();

        let before = serde_json::to_string(repo.all()).unwrap();
        let updated = repo.update_status("nope", BookingStatus::Completed).unwrap();
        let after = serde_json::to_string(repo.all()).unwrap();

        assert!(!updated);
        assert_eq!(before, after);
    }

    #[test]
    fn test_update_status_changes_only_status() {
        let mut repo = repo();
        repo.append(booking("b1")).unwrap();
        let original = repo.get("b1").unwrap().clone();

        let updated = repo.update_status("b1", BookingStatus::Completed).unwrap();
        assert!(updated);

        let after = repo.get("b1").unwrap();
        assert_eq!(after.status, BookingStatus::Completed);
        assert_eq!(after.id, original.id);
        assert_eq!(after.customer_name, original.customer_name);
        assert_eq!(after.phone_number, original.phone_number);
        assert_eq!(after.service_id, original.service_id);
        assert_eq!(after.date, original.date);
        assert_eq!(after.time, original.time);
        assert_eq!(after.created_at, original.created_at);
    }

    #[test]
    fn test_same_slot_booked_twice_is_allowed() {
        let mut repo = repo();
        repo.append(booking("b1")).unwrap();
        repo.append(booking("b2")).unwrap();
        assert_eq!(repo.all().len(), 2);
    }

    #[test]
    fn test_mutations_write_through_to_store() {
        let store = std::sync::Arc::new(MemoryStore::new());

        let mut repo = BookingRepository::load(Box::new(std::sync::Arc::clone(&store)));
        repo.append(booking("b1")).unwrap();
        repo.update_status("b1", BookingStatus::Cancelled).unwrap();

        // A fresh repository over the same store sees every mutation.
        let reloaded = BookingRepository::load(Box::new(store));
        assert_eq!(reloaded.all().len(), 1);
        assert_eq!(reloaded.get("b1").unwrap().status, BookingStatus::Cancelled);
    }
}
