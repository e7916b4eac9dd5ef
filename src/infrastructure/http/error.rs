//! HTTP Error Handling
//!
//! 应用层错误到 HTTP 状态码的映射
//!
//! 所有错误响应携带真实的 HTTP 状态码（400/404/500/503/504），
//! 响应体统一为 `{"success": false, "message": "..."}`

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ServiceError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    /// 路径穿越请求，对外响应与 404 完全一致，仅日志区分
    PathTraversal(String),
    Internal(String),
    ServiceUnavailable(String),
    Timeout(String),
}

impl ApiError {
    /// 对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) | ApiError::PathTraversal(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Bad request");
                msg
            }
            ApiError::NotFound(msg) => {
                tracing::warn!(error = %msg, "Resource not found");
                msg
            }
            ApiError::PathTraversal(filename) => {
                tracing::warn!(filename = %filename, "Path traversal attempt");
                // 不向客户端泄露检测逻辑，响应体与普通 404 相同
                format!("Audio file not found: {}", filename)
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                msg
            }
            ApiError::ServiceUnavailable(msg) => {
                tracing::error!(error = %msg, "Service unavailable");
                msg
            }
            ApiError::Timeout(msg) => {
                tracing::error!(error = %msg, "Synthesis timed out");
                msg
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        let message = e.to_string();
        match e {
            ServiceError::Validation(_) => ApiError::BadRequest(message),
            ServiceError::NotFound(_) => ApiError::NotFound(message),
            ServiceError::PathTraversal(filename) => ApiError::PathTraversal(filename),
            ServiceError::Timeout(_) => ApiError::Timeout(message),
            ServiceError::EngineUnavailable(_) => ApiError::ServiceUnavailable(message),
            ServiceError::Synthesis(_) | ServiceError::Storage(_) => ApiError::Internal(message),
        }
    }
}

/// JSON 请求体提取器
///
/// 请求体无法反序列化（缺字段、语法错误、Content-Type 不符）时
/// 返回统一的 `{"success": false, "message": "..."}` 错误体，
/// 取代 axum 默认的纯文本拒绝响应
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(ApiError::BadRequest(rejection.body_text())),
        }
    }
}
