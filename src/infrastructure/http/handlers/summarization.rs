//! Summarization HTTP Handlers
//!
//! 新闻摘要占位接口，截断逻辑在适配器内实现

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::infrastructure::http::dto::{
    HealthResponse, SummarizationRequest, SummarizationResponse,
};
use crate::infrastructure::http::error::{ApiError, ApiJson};
use crate::infrastructure::http::state::AppState;

/// 新闻摘要
pub async fn summarize_news(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<SummarizationRequest>,
) -> Result<Json<SummarizationResponse>, ApiError> {
    if req.text.trim().is_empty() {
        return Err(ApiError::BadRequest("Text cannot be empty".to_string()));
    }

    let max_length = req
        .max_length
        .unwrap_or(state.config.summarization.default_max_length);
    if max_length == 0 {
        return Err(ApiError::BadRequest(
            "max_length must be at least 1".to_string(),
        ));
    }

    let summary = state.summarizer.summarize(&req.text, max_length).await;

    tracing::debug!(
        original_chars = %summary.original_chars,
        summary_chars = %summary.summary_chars,
        max_length = %max_length,
        "Summary generated"
    );

    Ok(Json(SummarizationResponse {
        success: true,
        summary: summary.text,
        original_length: summary.original_chars,
        summary_length: summary.summary_chars,
        message: "Placeholder summary, model integration pending".to_string(),
    }))
}

/// 摘要服务健康检查
pub async fn summarization_health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
