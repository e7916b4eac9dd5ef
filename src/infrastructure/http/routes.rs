//! HTTP Routes
//!
//! API 路由定义
//!
//! API Endpoints:
//! - /                            GET   服务元信息
//! - /health                      GET   全局健康检查
//! - /api/tts/generate            POST  语音合成
//! - /api/tts/audio/:filename     GET   音频下载
//! - /api/tts/voices              GET   预置音色列表
//! - /api/tts/health              GET   TTS 健康检查
//! - /api/recommendation/         POST  新闻推荐（占位）
//! - /api/recommendation/health   GET   推荐健康检查
//! - /api/summarization/          POST  新闻摘要（占位）
//! - /api/summarization/health    GET   摘要健康检查

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::service_info))
        .route("/health", get(handlers::health))
        .nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/tts", tts_routes())
        .nest("/recommendation", recommendation_routes())
        .nest("/summarization", summarization_routes())
}

/// TTS 路由
fn tts_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/generate", post(handlers::generate_speech))
        .route("/audio/:filename", get(handlers::download_audio))
        .route("/voices", get(handlers::list_voices))
        .route("/health", get(handlers::tts_health))
}

/// Recommendation 路由
fn recommendation_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(handlers::recommend_news))
        .route("/health", get(handlers::recommendation_health))
}

/// Summarization 路由
fn summarization_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(handlers::summarize_news))
        .route("/health", get(handlers::summarization_health))
}
