//! TTS HTTP Handlers
//!
//! 语音合成、音频下载、预置音色列表

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
    Json,
};
use std::sync::Arc;
use tokio_util::io::ReaderStream;

use crate::application::GenerateSpeech;
use crate::infrastructure::http::dto::{
    GenerateSpeechRequest, GenerateSpeechResponse, HealthResponse, VoiceListResponse,
};
use crate::infrastructure::http::error::{ApiError, ApiJson};
use crate::infrastructure::http::state::AppState;

/// 音频下载路由前缀，download_url = 前缀 + filename
pub const AUDIO_DOWNLOAD_PREFIX: &str = "/api/tts/audio/";

/// 语音合成
///
/// 成功时产物已落盘，响应携带可直接回取的 download_url
pub async fn generate_speech(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<GenerateSpeechRequest>,
) -> Result<Json<GenerateSpeechResponse>, ApiError> {
    let command = GenerateSpeech {
        text: req.text,
        voice_id: req.voice_id,
        ref_audio: req.ref_audio,
        ref_text: req.ref_text,
    };

    let result = state.tts_service.generate(command).await?;

    tracing::info!(
        filename = %result.filename,
        voice_id = ?result.voice_id,
        duration_ms = ?result.duration_ms,
        "Audio generated"
    );

    Ok(Json(GenerateSpeechResponse {
        success: true,
        filename: result.filename.clone(),
        file_path: result.file_path.display().to_string(),
        download_url: format!("{}{}", AUDIO_DOWNLOAD_PREFIX, result.filename),
        message: "Audio generated successfully".to_string(),
    }))
}

/// 音频下载（流式）
///
/// 文件名先经过存储层校验，穿越路径与不存在的文件均返回 404
pub async fn download_audio(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Response, ApiError> {
    let path = state.tts_service.resolve_audio(&filename).await?;

    let file = tokio::fs::File::open(&path)
        .await
        .map_err(|e| ApiError::Internal(format!("Failed to open audio file: {}", e)))?;

    let metadata = file
        .metadata()
        .await
        .map_err(|e| ApiError::Internal(format!("Failed to get file metadata: {}", e)))?;
    let file_size = metadata.len();

    let stream = ReaderStream::new(file);
    let body = Body::from_stream(stream);

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "audio/wav")
        .header(header::CONTENT_LENGTH, file_size)
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        )
        .body(body)
        .map_err(|e| ApiError::Internal(format!("Failed to build response: {}", e)))
}

/// 预置音色列表
pub async fn list_voices(
    State(state): State<Arc<AppState>>,
) -> Result<Json<VoiceListResponse>, ApiError> {
    let voices = state.tts_service.list_voices().await?;
    Ok(Json(VoiceListResponse { voices }))
}

/// TTS 健康检查
pub async fn tts_health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
