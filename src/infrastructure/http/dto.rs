//! Data Transfer Objects
//!
//! HTTP 请求/响应结构定义

use serde::{Deserialize, Serialize};

use crate::application::{PresetVoice, RecommendedItem};

// ============================================================================
// 通用响应结构
// ============================================================================

/// 健康检查响应
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    /// 固定的存活探针响应，无副作用
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}

// ============================================================================
// TTS DTOs
// ============================================================================

/// 语音合成请求
#[derive(Debug, Deserialize)]
pub struct GenerateSpeechRequest {
    pub text: String,
    /// 预置音色 ID，缺省使用配置的默认音色
    #[serde(default)]
    pub voice_id: Option<String>,
    /// 声音克隆参考音频路径，必须与 ref_text 同时提供
    #[serde(default)]
    pub ref_audio: Option<String>,
    /// 参考音频的文字内容
    #[serde(default)]
    pub ref_text: Option<String>,
}

/// 语音合成响应
#[derive(Debug, Serialize)]
pub struct GenerateSpeechResponse {
    pub success: bool,
    pub filename: String,
    pub file_path: String,
    pub download_url: String,
    pub message: String,
}

/// 预置音色列表响应
#[derive(Debug, Serialize)]
pub struct VoiceListResponse {
    pub voices: Vec<PresetVoice>,
}

// ============================================================================
// Recommendation DTOs
// ============================================================================

/// 新闻推荐请求
#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub user_id: String,
    /// 返回条目数上限，缺省使用配置的默认值
    #[serde(default)]
    pub limit: Option<u32>,
}

/// 新闻推荐响应
#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub success: bool,
    pub recommendations: Vec<RecommendedItem>,
    pub message: String,
}

// ============================================================================
// Summarization DTOs
// ============================================================================

/// 新闻摘要请求
#[derive(Debug, Deserialize)]
pub struct SummarizationRequest {
    pub text: String,
    /// 摘要最大字符数，缺省使用配置的默认值
    #[serde(default)]
    pub max_length: Option<u32>,
}

/// 新闻摘要响应
#[derive(Debug, Serialize)]
pub struct SummarizationResponse {
    pub success: bool,
    pub summary: String,
    pub original_length: usize,
    pub summary_length: usize,
    pub message: String,
}
