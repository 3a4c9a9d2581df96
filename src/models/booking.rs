use serde::{Deserialize, Serialize};

/// A single reservation request. Field names on the wire (and in the store)
/// stay camelCase so previously persisted collections keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub customer_name: String,
    pub phone_number: String,
    pub service_id: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// One of the fixed slot strings, e.g. `"08:00"`.
    pub time: String,
    /// Submission time, epoch milliseconds. Used for ordering and freshness
    /// only, never for conflict detection.
    pub created_at: i64,
    pub status: BookingStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "completed" => BookingStatus::Completed,
            "cancelled" => BookingStatus::Cancelled,
            _ => BookingStatus::Pending,
        }
    }
}
