use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use chrono::{DateTime, Utc};
use folio_core_health_contracts::{HealthService, HealthStatus};
use serde::Serialize;

pub fn router(service: Arc<impl HealthService>) -> Router<()> {
    Router::new()
        .route("/api/health", routing::get(health))
        .with_state(service)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
    timestamp: DateTime<Utc>,
}

async fn health(service: State<Arc<impl HealthService>>) -> Response {
    let HealthStatus { email } = service.get_status().await;

    let (code, status, message) = if email {
        (StatusCode::OK, "OK", "Contact form server is running")
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "UNAVAILABLE",
            "Mail transport is unreachable",
        )
    };

    (
        code,
        Json(HealthResponse {
            status,
            message,
            timestamp: Utc::now(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    struct StaticHealthService(HealthStatus);

    impl HealthService for StaticHealthService {
        async fn get_status(&self) -> HealthStatus {
            self.0
        }
    }

    #[tokio::test]
    async fn healthy() {
        let service = StaticHealthService(HealthStatus { email: true });

        let response = health(State(Arc::new(service))).await;

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unhealthy() {
        let service = StaticHealthService(HealthStatus { email: false });

        let response = health(State(Arc::new(service))).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
