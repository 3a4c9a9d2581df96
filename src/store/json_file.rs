use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;

use super::BookingStore;
use crate::models::Booking;

/// One file holding the whole collection as a JSON array.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl BookingStore for JsonFileStore {
    fn load(&self) -> Vec<Booking> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "failed to read booking store, starting empty"
                );
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(bookings) => bookings,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "failed to parse booking store, starting empty"
                );
                Vec::new()
            }
        }
    }

    fn save(&self, bookings: &[Booking]) -> anyhow::Result<()> {
        let json = serde_json::to_string(bookings).context("failed to serialize bookings")?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write booking store: {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookingStatus;

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
    fn test_absent_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("bookings.json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_invalid_json_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookings.json");
        fs::write(&path, "{not valid json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("bookings.json"));

        let bookings = vec![booking("a"), booking("b")];
        store.save(&bookings).unwrap();

        assert_eq!(store.load(), bookings);
    }

    #[test]
    fn test_persisted_layout_is_camel_case() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookings.json");
        let store = JsonFileStore::new(&path);

        store.save(&[booking("a")]).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"customerName\""));
        assert!(raw.contains("\"phoneNumber\""));
        assert!(raw.contains("\"serviceId\""));
        assert!(raw.contains("\"createdAt\""));
        assert!(raw.contains("\"status\":\"pending\""));
    }
}
