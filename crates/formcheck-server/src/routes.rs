use crate::{AppState, RequestError};
use formcheck_base::log;
use http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE,
};
use http::{HeaderValue, Method, Request, Response, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

pub const ANALYZE_FRAME_PATH: &str = "/api/analyze-frame";
pub const HEALTH_PATH: &str = "/api/health";

#[derive(Debug, Deserialize)]
struct AnalyzeFrameRequest {
    image: Option<String>,
}

#[derive(Debug, Serialize)]
struct HealthResponse<'a> {
    status: &'static str,
    model: &'a str,
}

/// Dispatch one request. Never fails: every problem becomes an error response.
pub async fn handle(state: &Arc<AppState>, request: Request<Vec<u8>>) -> Response<Vec<u8>> {
    let response = match (request.method(), request.uri().path()) {
        (&Method::OPTIONS, _) => preflight(),
        (&Method::POST, ANALYZE_FRAME_PATH) => analyze_frame(state, request.body()).await,
        (&Method::GET, HEALTH_PATH) => json_response(
            StatusCode::OK,
            &HealthResponse {
                status: "ok",
                model: state.model_name(),
            },
        ),
        (_, ANALYZE_FRAME_PATH | HEALTH_PATH) => {
            error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
        }
        _ => error_response(StatusCode::NOT_FOUND, "Not found"),
    };
    with_cors(response)
}

async fn analyze_frame(state: &Arc<AppState>, body: &[u8]) -> Response<Vec<u8>> {
    let payload = serde_json::from_slice::<AnalyzeFrameRequest>(body)
        .ok()
        .and_then(|request| request.image);
    let Some(payload) = payload else {
        return error_response(StatusCode::BAD_REQUEST, "No image data provided");
    };

    let state = state.clone();
    let result = tokio::task::spawn_blocking(move || state.analyze_frame(&payload))
        .await
        .map_err(crate::ServerError::from)
        .and_then(|r| r);

    match result {
        Ok(frame) => json_response(StatusCode::OK, &frame),
        Err(e) => {
            log::error!("Error processing frame: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}

fn preflight() -> Response<Vec<u8>> {
    let mut response = Response::new(Vec::new());
    *response.status_mut() = StatusCode::NO_CONTENT;
    let headers = response.headers_mut();
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}

/// The response sent when a request could not even be read.
pub fn request_error_response(err: &RequestError) -> Response<Vec<u8>> {
    let status = match err {
        RequestError::HeadTooLarge | RequestError::BodyTooLarge { .. } => {
            StatusCode::PAYLOAD_TOO_LARGE
        }
        RequestError::Closed | RequestError::Malformed(_) => StatusCode::BAD_REQUEST,
    };
    with_cors(error_response(status, &err.to_string()))
}

fn with_cors(mut response: Response<Vec<u8>>) -> Response<Vec<u8>> {
    response
        .headers_mut()
        .insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    response
}

fn error_response(status: StatusCode, message: &str) -> Response<Vec<u8>> {
    json_response(status, &json!({ "error": message }))
}

fn json_response<T: Serialize + ?Sized>(status: StatusCode, value: &T) -> Response<Vec<u8>> {
    let (status, body) = match serde_json::to_vec(value) {
        Ok(body) => (status, body),
        Err(e) => {
            log::error!("Failed to serialize response: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, b"{}".to_vec())
        }
    };
    let mut response = Response::new(body);
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}
