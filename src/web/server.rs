use axum::{
    extract::{DefaultBodyLimit, Query, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

use crate::cli::ServeArgs;
use crate::core::types::{Frequency, Prediction};
use crate::dataset::store::Dataset;
use crate::matching::engine::MatchingEngine;
use crate::utils::validation::{validate_selection, SelectionError};

/// Security configuration constants to prevent `DoS` attacks
pub const MAX_BODY_SIZE: usize = 64 * 1024; // 64KB
pub const MAX_CONCURRENT_REQUESTS: usize = 100;
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const RATE_LIMIT_PER_SECOND: u64 = 10;
pub const RATE_LIMIT_BURST: u32 = 50;

/// Default and maximum number of rows in `/api/statistics` frequency tables
pub const DEFAULT_STATISTICS_TOP: usize = 50;
pub const MAX_STATISTICS_TOP: usize = 200;

/// Shared application state
pub struct AppState {
    pub dataset: Dataset,
}

/// Enhanced error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
    pub details: Option<String>,
}

/// Request body for `POST /api/predict`
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub symptoms: Vec<String>,
}

#[derive(Serialize)]
struct PredictResponse {
    #[serde(flatten)]
    prediction: Prediction,
    processing_time_ms: u64,
}

#[derive(Serialize)]
struct SymptomsResponse<'a> {
    count: usize,
    symptoms: &'a [String],
}

#[derive(Serialize)]
struct StatisticsResponse {
    diseases: Vec<Frequency>,
    symptoms: Vec<Frequency>,
}

#[derive(Deserialize)]
struct StatisticsQueryParams {
    /// Number of rows per table (default: 50, max: 200)
    top: Option<usize>,
}

/// Create a safe error response that prevents information disclosure
/// while logging detailed errors server-side for debugging
pub fn create_safe_error_response(
    error_type: &str,
    user_message: &str,
    internal_error: Option<&str>,
) -> ErrorResponse {
    if let Some(internal_msg) = internal_error {
        tracing::error!("Internal error ({}): {}", error_type, internal_msg);
    }

    ErrorResponse {
        error: user_message.to_string(),
        error_type: error_type.to_string(),
        details: None, // Never expose internal details
    }
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created or the server fails to start.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args).await })
}

/// Build the API router over a loaded dataset.
///
/// Carries security headers, a request timeout, a concurrency limit and a body
/// size limit. Per-IP rate limiting needs the peer address, so it is added by
/// [`create_router`] for the real server only.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/symptoms", get(symptoms_handler))
        .route("/api/summary", get(summary_handler))
        .route("/api/statistics", get(statistics_handler))
        .route("/api/predict", post(predict_handler))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-frame-options"),
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("referrer-policy"),
                    HeaderValue::from_static("no-referrer"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("cache-control"),
                    HeaderValue::from_static("no-store"),
                ))
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    REQUEST_TIMEOUT,
                ))
                .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENT_REQUESTS))
                .layer(DefaultBodyLimit::max(MAX_BODY_SIZE)),
        )
}

/// Create the full application router, including per-IP rate limiting.
///
/// # Errors
///
/// Returns an error if the rate limiter configuration is rejected.
pub fn create_router(dataset: Dataset) -> anyhow::Result<Router> {
    let state = Arc::new(AppState { dataset });

    let governor_conf = GovernorConfigBuilder::default()
        .per_second(RATE_LIMIT_PER_SECOND)
        .burst_size(RATE_LIMIT_BURST)
        .finish()
        .ok_or_else(|| anyhow::anyhow!("invalid rate limiter configuration"))?;

    Ok(router(state).layer(GovernorLayer {
        config: Arc::new(governor_conf),
    }))
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let dataset = args.dataset.load()?;
    let app = create_router(dataset)?;

    let addr = format!("{}:{}", args.address, args.port);
    println!("Starting symptom-match API at http://{addr}");

    if args.open {
        let _ = open::that(format!("http://{addr}/api/symptoms"));
    }

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

async fn symptoms_handler(State(state): State<Arc<AppState>>) -> Response {
    let symptoms = state.dataset.symptom_universe();
    Json(SymptomsResponse {
        count: symptoms.len(),
        symptoms,
    })
    .into_response()
}

async fn summary_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.dataset.summary())
}

async fn statistics_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StatisticsQueryParams>,
) -> impl IntoResponse {
    let top = params
        .top
        .unwrap_or(DEFAULT_STATISTICS_TOP)
        .clamp(1, MAX_STATISTICS_TOP);

    Json(StatisticsResponse {
        diseases: state.dataset.disease_frequencies(top),
        symptoms: state.dataset.symptom_frequencies(top),
    })
}

async fn predict_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PredictRequest>,
) -> Response {
    let start_time = std::time::Instant::now();
    let engine = MatchingEngine::new(&state.dataset);

    let selection = match validate_selection(&request.symptoms, engine.symptom_universe()) {
        Ok(selection) => selection,
        Err(e) => {
            let error_type = match e {
                SelectionError::Empty => "empty_selection",
                SelectionError::TooMany(_) => "too_many_symptoms",
                SelectionError::UnknownSymptom(_) => "unknown_symptom",
            };
            return (
                StatusCode::BAD_REQUEST,
                Json(create_safe_error_response(error_type, &e.to_string(), None)),
            )
                .into_response();
        }
    };

    let Some(prediction) = engine.predict(&selection) else {
        return (
            StatusCode::NOT_FOUND,
            Json(create_safe_error_response(
                "no_prediction",
                "No prediction available",
                Some("disease table is empty"),
            )),
        )
            .into_response();
    };

    let processing_time_ms = u64::try_from(start_time.elapsed().as_millis()).unwrap_or(u64::MAX);

    Json(PredictResponse {
        prediction,
        processing_time_ms,
    })
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::disease::DiseaseRecord;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    fn test_router(dataset: Dataset) -> Router {
        router(Arc::new(AppState { dataset }))
    }

    fn flu_cold() -> Dataset {
        Dataset::from_records(
            vec![
                DiseaseRecord::new("Flu", ["fever", "cough", "fatigue"]),
                DiseaseRecord::new("Cold", ["cough", "sneezing"]),
            ],
            vec![],
        )
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn predict_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/predict")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[test]
    fn test_safe_error_response_hides_details() {
        let response = create_safe_error_response("x", "msg", Some("/secret/path"));
        assert_eq!(response.error, "msg");
        assert!(response.details.is_none());
    }

    #[tokio::test]
    async fn test_predict_returns_winner() {
        let app = test_router(flu_cold());
        let response = app
            .oneshot(predict_request(r#"{"symptoms":["cough","fatigue"]}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["disease"], "Flu");
        assert_eq!(json["score"], 2);
        assert!(json["processing_time_ms"].is_u64());
    }

    #[tokio::test]
    async fn test_predict_rejects_empty_selection() {
        let app = test_router(flu_cold());
        let response = app
            .oneshot(predict_request(r#"{"symptoms":[]}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error_type"], "empty_selection");
    }

    #[tokio::test]
    async fn test_predict_on_empty_table_rejects_symptom() {
        let app = test_router(Dataset::default());
        let response = app
            .oneshot(predict_request(r#"{"symptoms":["cough"]}"#))
            .await
            .unwrap();

        // An empty table has an empty universe, so validation rejects first
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error_type"], "unknown_symptom");
    }

    #[tokio::test]
    async fn test_statistics_clamps_top() {
        let app = test_router(flu_cold());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/statistics?top=0")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["diseases"].as_array().unwrap().len(), 1);
        assert_eq!(json["symptoms"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_security_headers_present() {
        let app = test_router(flu_cold());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/summary")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get("x-content-type-options").unwrap(),
            "nosniff"
        );
        assert_eq!(response.headers().get("x-frame-options").unwrap(), "DENY");
    }
}
