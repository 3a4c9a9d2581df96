use std::env;

use crate::services::ordering::SortPolicy;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub data_path: String,
    pub admin_token: String,
    pub booking_sort: SortPolicy,
    pub consultant_provider: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_image_model: String,
    pub replicate_api_token: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            data_path: env::var("DATA_PATH").unwrap_or_else(|_| "bookings.json".to_string()),
            admin_token: env::var("ADMIN_TOKEN").unwrap_or_else(|_| "changeme".to_string()),
            booking_sort: SortPolicy::parse(&env::var("BOOKING_SORT").unwrap_or_default()),
            consultant_provider: env::var("CONSULTANT_PROVIDER")
                .unwrap_or_else(|_| "gemini".to_string()),
            gemini_api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
            gemini_image_model: env::var("GEMINI_IMAGE_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash-image".to_string()),
            replicate_api_token: env::var("REPLICATE_API_TOKEN").unwrap_or_default(),
        }
    }
}
