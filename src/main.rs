// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;

use axum::{routing::get, Router};
use chrono::Utc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::application::campus_service::CampusService;
use crate::application::dashboard_service::DashboardService;
use crate::application::streaming_service::StreamingDashboardService;
use crate::infrastructure::config::{load_app_config, load_campus_config};
use crate::infrastructure::synthetic_source::SyntheticSampleSource;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_dashboard, health_check, list_floors, room_status, stream_dashboard,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let app_config = load_app_config()?;
    let campus_config = load_campus_config()?;

    // Create sample source (infrastructure layer)
    let source = Arc::new(SyntheticSampleSource::new(&app_config.demo, Utc::now()));

    // Create services (application layer)
    let dashboard_service = DashboardService::new(source.clone());
    let streaming_service = StreamingDashboardService::new(dashboard_service.clone());
    let campus_service = CampusService::new(campus_config.floors, source.clone());

    // Create application state
    let state = Arc::new(AppState {
        dashboard_service,
        streaming_service,
        campus_service,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboards/:view", get(get_dashboard))
        .route("/dashboards/:view/stream", get(stream_dashboard))
        .route("/campus/floors", get(list_floors))
        .route("/campus/rooms/:id", get(room_status))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .with_state(state);

    // Start server
    let addr = format!("{}:{}", app_config.server.host, app_config.server.port);
    tracing::info!("starting campus-telemetry service on {addr}");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
