use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use finquiz::workflows::quiz::quiz_router;
use serde_json::json;

pub(crate) fn with_quiz_routes() -> axum::Router {
    quiz_router()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let (status, label) = if ready {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "initializing")
    };

    (status, Json(json!({ "status": label })))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn state(ready: bool) -> AppState {
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        }
    }

    #[tokio::test]
    async fn readiness_reports_initializing_until_bound() {
        let state = state(false);
        let response = readiness_endpoint(Extension(state.clone()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        state.readiness.store(true, Ordering::Release);
        let response = readiness_endpoint(Extension(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn combined_router_serves_health_and_quiz_routes() {
        let app = with_quiz_routes().layer(Extension(state(true)));

        let health = app
            .clone()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(health.status(), StatusCode::OK);

        let questions = app
            .oneshot(
                Request::get("/api/v1/quiz/questions")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(questions.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn metrics_endpoint_uses_prometheus_text_format() {
        let response = metrics_endpoint(Extension(state(true))).await.into_response();
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain; version=0.0.4"
        );
    }
}
