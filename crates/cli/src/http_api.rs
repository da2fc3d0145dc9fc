use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use lawlens_corpus::OffenceCorpus;
use lawlens_search::IncidentAnalyzer;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

#[derive(Clone)]
pub(crate) struct HttpState {
    pub(crate) corpus: Arc<OffenceCorpus>,
    pub(crate) analyzer: Arc<IncidentAnalyzer>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IncidentRequest {
    description: String,
}

pub(crate) fn router(state: HttpState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/sections", get(sections))
        .route("/analyze", post(analyze))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "message": "LawLens API is running",
    }))
}

async fn sections(State(state): State<HttpState>) -> Response {
    if state.corpus.is_empty() {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "detail": "No sections found" })),
        )
            .into_response();
    }
    Json(state.corpus.records()).into_response()
}

async fn analyze(
    State(state): State<HttpState>,
    Json(request): Json<IncidentRequest>,
) -> Response {
    log::debug!("POST /analyze ({} chars)", request.description.len());
    Json(state.analyzer.analyze(&request.description)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use lawlens_corpus::OffenceRecord;
    use lawlens_search::{analyzer_for_corpus, AnalysisConfig};
    use tower::ServiceExt;

    fn state(corpus: OffenceCorpus) -> HttpState {
        let analyzer = analyzer_for_corpus(
            &OffenceCorpus::from_records(vec![OffenceRecord::new(
                "503",
                "Criminal intimidation",
                "Whoever threatens another with injury commits criminal intimidation",
            )]),
            AnalysisConfig::default(),
        )
        .unwrap();
        HttpState {
            corpus: Arc::new(corpus),
            analyzer: Arc::new(analyzer),
        }
    }

    async fn call(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn analyze_preflight_allows_any_origin() {
        let app = router(state(OffenceCorpus::default()));
        let request = Request::options("/analyze")
            .header("origin", "http://localhost:5173")
            .header("access-control-request-method", "POST")
            .header("access-control-request-headers", "content-type")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
        assert!(response
            .headers()
            .contains_key("access-control-allow-methods"));
    }

    #[tokio::test]
    async fn cross_origin_post_carries_allow_origin() {
        let app = router(state(OffenceCorpus::default()));
        let request = Request::post("/analyze")
            .header("origin", "http://localhost:5173")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"description":"The weather is nice today."}"#))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let app = router(state(OffenceCorpus::default()));
        let (status, body) = call(app, Request::get("/").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn empty_corpus_sections_is_not_found() {
        let app = router(state(OffenceCorpus::default()));
        let (status, body) =
            call(app, Request::get("/sections").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "No sections found");
    }

    #[tokio::test]
    async fn sections_lists_records() {
        let corpus = OffenceCorpus::from_records(vec![OffenceRecord::new(
            "420",
            "Cheating",
            "Whoever cheats",
        )]);
        let app = router(state(corpus));
        let (status, body) =
            call(app, Request::get("/sections").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["ipc_section"], "420");
    }

    #[tokio::test]
    async fn analyze_returns_status_tagged_result() {
        let app = router(state(OffenceCorpus::default()));
        let request = Request::post("/analyze")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"description":"He threatened me with injury and asked me to pay"}"#))
            .unwrap();
        let (status, body) = call(app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "likely_matches");
        assert_eq!(body["results"][0]["ipc_section"], "503");
    }
}
