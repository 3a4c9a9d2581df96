use crate::models::Booking;

/// Display order for the owner's booking list. The default follows the
/// dashboard header, which labels the list "sorted by submission time".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortPolicy {
    /// Most recently submitted first.
    NewestFirst,
    /// Latest date first, earliest slot within a day.
    UpcomingFirst,
}

impl SortPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortPolicy::NewestFirst => "newest",
            SortPolicy::UpcomingFirst => "upcoming",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "upcoming" => SortPolicy::UpcomingFirst,
            _ => SortPolicy::NewestFirst,
        }
    }
}

pub fn sort_bookings(bookings: &mut [Booking], policy: SortPolicy) {
    match policy {
        SortPolicy::NewestFirst => {
            bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
        // Date strings are ISO dates and slots are zero-padded HH:MM, so
        // lexicographic order is chronological order.
        SortPolicy::UpcomingFirst => {
            bookings.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.time.cmp(&b.time)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookingStatus;

    fn booking(id: &str, date: &str, time: &str, created_at: i64) -> Booking {
        Booking {
            id: id.to_string(),
            customer_name: "Alice".to_string(),
            phone_number: "0901234567".to_string(),
            service_id: "s1".to_string(),
            date: date.to_string(),
            time: time.to_string(),
            created_at,
            status: BookingStatus::Pending,
        }
    }

    fn ids(bookings: &[Booking]) -> Vec<&str> {
        bookings.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_newest_first() {
        let mut bookings = vec![
            booking("old", "2025-06-20", "08:00", 100),
            booking("new", "2025-06-16", "20:00", 300),
            booking("mid", "2025-06-18", "13:00", 200),
        ];
        sort_bookings(&mut bookings, SortPolicy::NewestFirst);
        assert_eq!(ids(&bookings), vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_upcoming_first() {
        let mut bookings = vec![
            booking("a", "2025-06-16", "14:00", 1),
            booking("b", "2025-06-17", "09:00", 2),
            booking("c", "2025-06-16", "08:00", 3),
        ];
        sort_bookings(&mut bookings, SortPolicy::UpcomingFirst);
        // Latest date first, then earliest slot within the day.
        assert_eq!(ids(&bookings), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_parse_defaults_to_newest() {
        assert_eq!(SortPolicy::parse("upcoming"), SortPolicy::UpcomingFirst);
        assert_eq!(SortPolicy::parse("newest"), SortPolicy::NewestFirst);
        assert_eq!(SortPolicy::parse(""), SortPolicy::NewestFirst);
        assert_eq!(SortPolicy::parse("bogus"), SortPolicy::NewestFirst);
    }
}
