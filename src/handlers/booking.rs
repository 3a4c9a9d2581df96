use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{Booking, BookingStatus, Service, SERVICES, TIME_SLOTS};
use crate::services::stats;
use crate::state::AppState;

// GET /api/services
pub async fn list_services() -> Json<&'static [Service]> {
    Json(SERVICES)
}

// GET /api/slots
pub async fn list_slots() -> Json<&'static [&'static str]> {
    Json(TIME_SLOTS)
}

// POST /api/bookings
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub customer_name: String,
    pub phone_number: String,
    pub service_id: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
}

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let customer_name = body.customer_name.trim().to_string();
    let phone_number = body.phone_number.trim().to_string();

    if customer_name.is_empty() {
        return Err(AppError::Invalid("customer name is required".to_string()));
    }
    if phone_number.is_empty() {
        return Err(AppError::Invalid("phone number is required".to_string()));
    }

    // Date and time fall back to the form defaults: today, first slot.
    let date = body
        .date
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(stats::today);
    let time = body
        .time
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| TIME_SLOTS[0].to_string());

    let booking = Booking {
        id: uuid::Uuid::new_v4().to_string(),
        customer_name,
        phone_number,
        service_id: body.service_id,
        date,
        time,
        created_at: Utc::now().timestamp_millis(),
        status: BookingStatus::Pending,
    };

    {
        let mut repo = state.repo.lock().unwrap();
        repo.append(booking.clone())
            .map_err(|e| AppError::Store(e.to_string()))?;
    }

    tracing::info!(
        id = %booking.id,
        service = %booking.service_id,
        date = %booking.date,
        time = %booking.time,
        "booking created"
    );

    Ok((StatusCode::CREATED, Json(booking)))
}
