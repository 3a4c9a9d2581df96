use std::sync::{Arc, Mutex};

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use barberdesk::config::AppConfig;
use barberdesk::handlers;
use barberdesk::repository::BookingRepository;
use barberdesk::services::consultant::gemini::GeminiConsultant;
use barberdesk::services::consultant::replicate::ReplicateConsultant;
use barberdesk::services::consultant::ConsultantProvider;
use barberdesk::state::AppState;
use barberdesk::store::JsonFileStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let store = JsonFileStore::new(&config.data_path);
    let repo = BookingRepository::load(Box::new(store));
    tracing::info!(
        count = repo.all().len(),
        path = %config.data_path,
        sort = config.booking_sort.as_str(),
        "loaded booking store"
    );

    let consultant: Option<Box<dyn ConsultantProvider>> =
        match config.consultant_provider.as_str() {
            "replicate" => {
                if config.replicate_api_token.is_empty() {
                    tracing::warn!("REPLICATE_API_TOKEN not set, style consultant disabled");
                    None
                } else {
                    tracing::info!("using Replicate consultant provider");
                    Some(Box::new(ReplicateConsultant::new(
                        config.replicate_api_token.clone(),
                    )))
                }
            }
            _ => {
                if config.gemini_api_key.is_empty() {
                    tracing::warn!("GEMINI_API_KEY not set, style consultant disabled");
                    None
                } else {
                    tracing::info!(
                        "using Gemini consultant provider (model: {})",
                        config.gemini_model
                    );
                    Some(Box::new(GeminiConsultant::new(
                        config.gemini_api_key.clone(),
                        config.gemini_model.clone(),
                        config.gemini_image_model.clone(),
                    )))
                }
            }
        };

    let state = Arc::new(AppState {
        repo: Mutex::new(repo),
        config: config.clone(),
        consultant,
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/services", get(handlers::booking::list_services))
        .route("/api/slots", get(handlers::booking::list_slots))
        .route("/api/bookings", post(handlers::booking::create_booking))
        .route("/api/admin/stats", get(handlers::admin::get_stats))
        .route("/api/admin/bookings", get(handlers::admin::get_bookings))
        .route(
            "/api/admin/bookings/:id/complete",
            post(handlers::admin::complete_booking),
        )
        .route(
            "/api/admin/bookings/:id/cancel",
            post(handlers::admin::cancel_booking),
        )
        .route(
            "/api/consultant/status",
            get(handlers::consultant::get_status),
        )
        .route(
            "/api/consultant/presets",
            get(handlers::consultant::list_presets),
        )
        .route("/api/consultant/advise", post(handlers::consultant::advise))
        .route(
            "/api/consultant/simulate",
            post(handlers::consultant::simulate),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
