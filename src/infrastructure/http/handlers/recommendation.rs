//! Recommendation HTTP Handlers
//!
//! 新闻推荐占位接口，响应形状已定稿

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::infrastructure::http::dto::{
    HealthResponse, RecommendationRequest, RecommendationResponse,
};
use crate::infrastructure::http::error::{ApiError, ApiJson};
use crate::infrastructure::http::state::AppState;

/// 新闻推荐
pub async fn recommend_news(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<RecommendationRequest>,
) -> Result<Json<RecommendationResponse>, ApiError> {
    let user_id = req.user_id.trim();
    if user_id.is_empty() {
        return Err(ApiError::BadRequest("user_id cannot be empty".to_string()));
    }

    let limits = &state.config.recommendation;
    let limit = req.limit.unwrap_or(limits.default_limit);
    if limit == 0 || limit > limits.max_limit {
        return Err(ApiError::BadRequest(format!(
            "limit must be between 1 and {}",
            limits.max_limit
        )));
    }

    let recommendations = state.recommender.recommend(user_id, limit).await;

    tracing::debug!(
        user_id = %user_id,
        limit = %limit,
        returned = %recommendations.len(),
        "Recommendations generated"
    );

    Ok(Json(RecommendationResponse {
        success: true,
        recommendations,
        message: "Placeholder recommendations, model integration pending".to_string(),
    }))
}

/// 推荐服务健康检查
pub async fn recommendation_health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
