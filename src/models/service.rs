use serde::Serialize;

/// A fixed catalog entry. Prices are in the smallest currency unit (VND).
#[derive(Debug, Clone, Serialize)]
pub struct Service {
    pub id: &'static str,
    pub name: &'static str,
    pub price: i64,
    pub duration: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        id: "s1",
        name: "Classic Cut",
        price: 100_000,
        duration: "30 min",
        description: "A precise cut and shape-up in our signature style.",
    },
    Service {
        id: "s2",
        name: "Cut & Wash Massage",
        price: 180_000,
        duration: "60 min",
        description: "Haircut, shampoo and a relaxing facial massage.",
    },
    Service {
        id: "s3",
        name: "V.I.P. Special Combo",
        price: 350_000,
        duration: "90 min",
        description: "The full works: cut, wash, light perm or color, and waxing.",
    },
    Service {
        id: "s4",
        name: "Beard Trim & Skin Care",
        price: 120_000,
        duration: "40 min",
        description: "For gentlemen who like to keep things sharp.",
    },
];

/// The bookable time-of-day slots. The shop closes over lunch.
pub const TIME_SLOTS: &[&str] = &[
    "08:00", "09:00", "10:00", "11:00", "13:00", "14:00", "15:00", "16:00", "17:00", "18:00",
    "19:00", "20:00",
];

pub fn service_by_id(id: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_lookup() {
        let s = service_by_id("s1").unwrap();
        assert_eq!(s.name, "Classic Cut");
        assert_eq!(s.price, 100_000);
    }

    #[test]
    fn test_unknown_service_lookup() {
        assert!(service_by_id("nope").is_none());
    }

    #[test]
    fn test_catalog_ids_unique() {
        for (i, a) in SERVICES.iter().enumerate() {
            for b in &SERVICES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
