// HTTP request handlers
use crate::application::dashboard_service::DashboardView;
use crate::domain::window::RangeToken;
use crate::infrastructure::ndjson::stream_from_receiver;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct RangeQuery {
    pub range: Option<String>,
}

impl RangeQuery {
    /// Unknown tokens fall back to the default window instead of failing
    /// the request; only the absence of the parameter takes the same path.
    fn token(&self) -> RangeToken {
        match self.range.as_deref() {
            Some(token) => RangeToken::parse_or_default(token),
            None => RangeToken::default(),
        }
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Fully composed dashboard for one view
pub async fn get_dashboard(
    Path(view): Path<String>,
    Query(query): Query<RangeQuery>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let Some(view) = DashboardView::from_slug(&view) else {
        return (StatusCode::NOT_FOUND, format!("unknown view: {view}")).into_response();
    };

    let range = query.token();
    let now_ms = Utc::now().timestamp_millis();

    match state.dashboard_service.build(view, range, now_ms).await {
        Ok(dashboard) => Json(dashboard).into_response(),
        Err(e) => {
            tracing::error!("failed to build {} dashboard: {e:#}", view.slug());
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Stream a dashboard view frame by frame (progressive loading)
pub async fn stream_dashboard(
    Path(view): Path<String>,
    Query(query): Query<RangeQuery>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let Some(view) = DashboardView::from_slug(&view) else {
        return (StatusCode::NOT_FOUND, format!("unknown view: {view}")).into_response();
    };

    let range = query.token();
    let now_ms = Utc::now().timestamp_millis();
    let rx = state.streaming_service.stream(view, range, now_ms);
    stream_from_receiver(rx).into_response()
}

/// Floor catalog for the building management screen
pub async fn list_floors(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.campus_service.floors().to_vec())
}

/// Live status for one room
pub async fn room_status(
    Path(room_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    match state.campus_service.room_status(&room_id).await {
        Ok(Some(snapshot)) => Json(snapshot).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, format!("unknown room: {room_id}")).into_response(),
        Err(e) => {
            tracing::error!("failed to fetch room {room_id}: {e:#}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_query_token_fallbacks() {
        let absent = RangeQuery { range: None };
        assert_eq!(absent.token(), RangeToken::Day7);

        let unknown = RangeQuery {
            range: Some("99d".to_string()),
        };
        assert_eq!(unknown.token(), RangeToken::Day7);

        let known = RangeQuery {
            range: Some("14d".to_string()),
        };
        assert_eq!(known.token(), RangeToken::Day14);
    }
}
