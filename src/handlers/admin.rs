use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{Booking, BookingStatus};
use crate::services::ordering;
use crate::services::stats::{self, DashboardStats};
use crate::state::AppState;

fn check_auth(headers: &HeaderMap, expected_token: &str) -> Result<(), AppError> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let token = auth.strip_prefix("Bearer ").unwrap_or("");
    if token != expected_token {
        return Err(AppError::Unauthorized);
    }
    Ok(())
}

// GET /api/admin/stats
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<DashboardStats>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let repo = state.repo.lock().unwrap();
    Ok(Json(DashboardStats::compute(repo.all(), &stats::today())))
}

// GET /api/admin/bookings
#[derive(Deserialize)]
pub struct BookingsQuery {
    pub status: Option<String>,
    pub limit: Option<usize>,
}

pub async fn get_bookings(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<BookingsQuery>,
) -> Result<Json<Vec<Booking>>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;

    let mut bookings: Vec<Booking> = {
        let repo = state.repo.lock().unwrap();
        match query.status.as_deref() {
            Some(status) => {
                let wanted = BookingStatus::parse(status);
                repo.all()
                    .iter()
                    .filter(|b| b.status == wanted)
                    .cloned()
                    .collect()
            }
            None => repo.all().to_vec(),
        }
    };

    ordering::sort_bookings(&mut bookings, state.config.booking_sort);
    bookings.truncate(query.limit.unwrap_or(50));

    Ok(Json(bookings))
}

// POST /api/admin/bookings/:id/complete
pub async fn complete_booking(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;
    set_status(&state, &id, BookingStatus::Completed)
}

// POST /api/admin/bookings/:id/cancel
pub async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    check_auth(&headers, &state.config.admin_token)?;
    set_status(&state, &id, BookingStatus::Cancelled)
}

fn set_status(
    state: &AppState,
    id: &str,
    status: BookingStatus,
) -> Result<Json<serde_json::Value>, AppError> {
    let updated = {
        let mut repo = state.repo.lock().unwrap();
        repo.update_status(id, status)
            .map_err(|e| AppError::Store(e.to_string()))?
    };

    if updated {
        tracing::info!(id, status = status.as_str(), "booking status updated");
        Ok(Json(serde_json::json!({ "ok": true })))
    } else {
        Err(AppError::NotFound(format!("booking {id}")))
    }
}
