use std::sync::Mutex;

use crate::config::AppConfig;
use crate::repository::BookingRepository;
use crate::services::consultant::ConsultantProvider;

pub struct AppState {
    pub repo: Mutex<BookingRepository>,
    pub config: AppConfig,
    /// `None` when the selected vendor's credential is absent; the status
    /// endpoint reports this so the client can show its banner.
    pub consultant: Option<Box<dyn ConsultantProvider>>,
}
