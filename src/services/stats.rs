use serde::Serialize;

use crate::models::{service_by_id, Booking, BookingStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub today_count: usize,
    pub pending_count: usize,
    pub completed_count: usize,
    /// Sum of catalog prices over today's completed bookings. A booking
    /// whose service id no longer resolves contributes 0.
    pub total_income: i64,
}

impl DashboardStats {
    /// Pure function of the collection and the supplied calendar date.
    pub fn compute(bookings: &[Booking], today: &str) -> Self {
        let todays: Vec<&Booking> = bookings.iter().filter(|b| b.date == today).collect();

        let total_income = todays
            .iter()
            .filter(|b| b.status == BookingStatus::Completed)
            .map(|b| service_by_id(&b.service_id).map(|s| s.price).unwrap_or(0))
            .sum();

        Self {
            today_count: todays.len(),
            pending_count: todays
                .iter()
                .filter(|b| b.status == BookingStatus::Pending)
                .count(),
            completed_count: todays
                .iter()
                .filter(|b| b.status == BookingStatus::Completed)
                .count(),
            total_income,
        }
    }
}

/// Today's calendar date string, UTC. The shop is not timezone-aware.
pub fn today() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TODAY: &str = "2025-06-16";

    fn booking(id: &str, service_id: &str, date: &str, status: BookingStatus) -> Booking {
        Booking {
            id: id.to_string(),
            customer_name: "Alice".to_string(),
            phone_number: "0901234567".to_string(),
            service_id: service_id.to_string(),
            date: date.to_string(),
            time: "08:00".to_string(),
            created_at: 1_750_000_000_000,
            status,
        }
    }

    #[test]
    fn test_empty_collection_all_zero() {
        let stats = DashboardStats::compute(&[], TODAY);
        assert_eq!(
            stats,
            DashboardStats {
                today_count: 0,
                pending_count: 0,
                completed_count: 0,
                total_income: 0,
            }
        );
    }

    #[test]
    fn test_completed_booking_counts_income() {
        let bookings = vec![booking("b1", "s1", TODAY, BookingStatus::Completed)];
        let stats = DashboardStats::compute(&bookings, TODAY);
        assert_eq!(stats.total_income, 100_000);
        assert_eq!(stats.completed_count, 1);
    }

    #[test]
    fn test_pending_and_cancelled_earn_nothing() {
        let bookings = vec![
            booking("b1", "s1", TODAY, BookingStatus::Pending),
            booking("b2", "s2", TODAY, BookingStatus::Cancelled),
        ];
        let stats = DashboardStats::compute(&bookings, TODAY);
        assert_eq!(stats.total_income, 0);
        assert_eq!(stats.today_count, 2);
        assert_eq!(stats.pending_count, 1);
        assert_eq!(stats.completed_count, 0);
    }

    #[test]
    fn test_other_days_excluded() {
        let bookings = vec![
            booking("b1", "s1", "2025-06-15", BookingStatus::Completed),
            booking("b2", "s1", "2025-06-17", BookingStatus::Pending),
            booking("b3", "s2", TODAY, BookingStatus::Pending),
        ];
        let stats = DashboardStats::compute(&bookings, TODAY);
        assert_eq!(stats.today_count, 1);
        assert_eq!(stats.pending_count, 1);
        assert_eq!(stats.total_income, 0);
    }

    #[test]
    fn test_today_count_partitions_by_status() {
        let bookings = vec![
            booking("b1", "s1", TODAY, BookingStatus::Pending),
            booking("b2", "s1", TODAY, BookingStatus::Pending),
            booking("b3", "s2", TODAY, BookingStatus::Completed),
            booking("b4", "s4", TODAY, BookingStatus::Cancelled),
        ];
        let stats = DashboardStats::compute(&bookings, TODAY);
        let cancelled_today = bookings
            .iter()
            .filter(|b| b.date == TODAY && b.status == BookingStatus::Cancelled)
            .count();
        assert_eq!(
            stats.today_count,
            stats.pending_count + stats.completed_count + cancelled_today
        );
    }

    #[test]
    fn test_dangling_service_contributes_zero() {
        let bookings = vec![
            booking("b1", "gone", TODAY, BookingStatus::Completed),
            booking("b2", "s1", TODAY, BookingStatus::Completed),
        ];
        let stats = DashboardStats::compute(&bookings, TODAY);
        assert_eq!(stats.total_income, 100_000);
        assert_eq!(stats.completed_count, 2);
    }
}
