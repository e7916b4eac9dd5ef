//! Root Handlers
//!
//! 服务元信息与全局健康检查

use axum::Json;
use serde::Serialize;

use crate::infrastructure::http::dto::HealthResponse;

/// 对外公布的服务名称
pub const SERVICE_NAME: &str = "IntelliNews AI Service";

/// 服务元信息响应
#[derive(Serialize)]
pub struct ServiceInfoResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub status: &'static str,
}

/// 服务元信息 - GET /
pub async fn service_info() -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        status: "running",
    })
}

/// 全局健康检查 - GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
