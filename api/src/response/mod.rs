use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use services::ServiceError;

/// Standardized API response wrapper for all outgoing JSON responses.
///
/// ```json
/// {
///   "success": true,
///   "data": { ... },
///   "message": "Some message"
/// }
/// ```
///
/// Error responses carry an empty `data` object.
#[derive(Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }

    /// Error response with default `data`.
    pub fn error(message: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self {
            success: false,
            data: T::default(),
            message: message.into(),
        }
    }
}

/// Placeholder payload for responses without data. Serializes as `{}`.
#[derive(Serialize, Default)]
pub struct Empty {}

/// Error half of every handler's result.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ApiResponse::<Empty>::error(self.message))).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        let rejected = |status: StatusCode, msg: String| {
            tracing::warn!(status = status.as_u16(), reason = %msg, "Request rejected");
            ApiError::new(status, msg)
        };
        match err {
            ServiceError::NotFound(msg) => rejected(StatusCode::NOT_FOUND, msg),
            ServiceError::Validation(msg) => rejected(StatusCode::BAD_REQUEST, msg),
            ServiceError::Conflict(msg) => rejected(StatusCode::CONFLICT, msg),
            ServiceError::Unauthorized(msg) => rejected(StatusCode::UNAUTHORIZED, msg),
            ServiceError::Database(e) => {
                tracing::error!(error = %e, "Database error");
                ApiError::internal("Something went wrong. Please try again later.")
            }
            ServiceError::Ai(e) => {
                tracing::error!(error = %e, "AI review failed");
                ApiError::new(
                    StatusCode::BAD_GATEWAY,
                    "AI review is currently unavailable",
                )
            }
        }
    }
}

pub type ApiResult<T> = Result<(StatusCode, Json<ApiResponse<T>>), ApiError>;

/// `200 OK` with the standard envelope.
pub fn ok<T: Serialize>(data: T, message: impl Into<String>) -> ApiResult<T> {
    Ok((StatusCode::OK, Json(ApiResponse::success(data, message))))
}
