use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use portfolio_tracker_core::CoreError;
use serde_json::json;

pub type ApiResult<T> = Result<T, ApiError>;

/// Error surface of the HTTP layer: a core error, plus the few cases the
/// routing glue produces itself.
#[derive(Debug)]
pub enum ApiError {
    Core(CoreError),
    NotFound(String),
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        ApiError::Core(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Core(e) => {
                let status = match &e {
                    CoreError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
                    CoreError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
                    CoreError::PersistFailure(_) => StatusCode::BAD_GATEWAY,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                if status.is_server_error() {
                    tracing::error!("Request failed: {e}");
                }
                (status, e.to_string())
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
