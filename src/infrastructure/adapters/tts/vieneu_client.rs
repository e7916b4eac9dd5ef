//! VieNeu Client - 调用外部 VieNeu TTS 推理 sidecar
//!
//! 实现 TtsEnginePort trait，通过 HTTP 调用承载预训练
//! VieNeu-TTS 模型的推理进程。
//!
//! Sidecar API:
//! POST {base}/synthesize
//!   Request: {"text": "...", "model_repo": "...", "voice_id"?, "ref_audio"?, "ref_text"?}  (JSON)
//!   Response: audio/wav binary, metadata in headers
//!   404 = 未知音色, 400/422 = 参考音频不可用
//! GET {base}/voices -> {"voices": [{"voice_id": "...", "description": "..."}]}
//! GET {base}/health

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{
    EngineAudio, EngineRequest, PresetVoice, Speaker, TtsEngineError, TtsEnginePort,
};

/// 合成请求体 (JSON)
#[derive(Debug, Serialize)]
struct SynthesizeRequest {
    /// 要合成的文本
    text: String,
    /// 预训练模型仓库标识
    model_repo: String,
    /// 预置音色
    #[serde(skip_serializing_if = "Option::is_none")]
    voice_id: Option<String>,
    /// 克隆参考音频
    #[serde(skip_serializing_if = "Option::is_none")]
    ref_audio: Option<String>,
    /// 参考音频转写
    #[serde(skip_serializing_if = "Option::is_none")]
    ref_text: Option<String>,
}

/// 音色列表响应体
#[derive(Debug, Deserialize)]
struct VoicesResponse {
    voices: Vec<PresetVoice>,
}

/// VieNeu 客户端配置
#[derive(Debug, Clone)]
pub struct VieneuClientConfig {
    /// sidecar 基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// 预训练模型仓库标识
    pub model_repo: String,
}

impl Default for VieneuClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8001".to_string(),
            timeout_secs: 120,
            model_repo: "pnnbao-ump/VieNeu-TTS-0.3B-q8-gguf".to_string(),
        }
    }
}

impl VieneuClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_model_repo(mut self, repo: impl Into<String>) -> Self {
        self.model_repo = repo.into();
        self
    }
}

/// VieNeu 客户端
///
/// 通过 HTTP 调用外部 VieNeu 推理 sidecar
pub struct VieneuClient {
    client: Client,
    config: VieneuClientConfig,
}

impl VieneuClient {
    /// 创建新的 VieNeu 客户端
    pub fn new(config: VieneuClientConfig) -> Result<Self, TtsEngineError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TtsEngineError::Unavailable(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 获取合成 URL
    fn synthesize_url(&self) -> String {
        format!("{}/synthesize", self.config.base_url)
    }

    /// 获取音色列表 URL
    fn voices_url(&self) -> String {
        format!("{}/voices", self.config.base_url)
    }

    /// 获取健康检查 URL
    fn health_url(&self) -> String {
        format!("{}/health", self.config.base_url)
    }

    fn map_send_error(e: reqwest::Error) -> TtsEngineError {
        if e.is_timeout() {
            TtsEngineError::Timeout
        } else if e.is_connect() {
            TtsEngineError::Unavailable(format!("Cannot connect to TTS engine: {}", e))
        } else {
            TtsEngineError::Unavailable(e.to_string())
        }
    }
}

#[async_trait]
impl TtsEnginePort for VieneuClient {
    async fn synthesize(&self, request: EngineRequest) -> Result<EngineAudio, TtsEngineError> {
        let (voice_id, ref_audio, ref_text) = match request.speaker {
            Speaker::Preset { voice_id } => (Some(voice_id), None, None),
            Speaker::Cloned {
                ref_audio,
                ref_text,
            } => (None, Some(ref_audio), Some(ref_text)),
        };

        let http_request = SynthesizeRequest {
            text: request.text,
            model_repo: self.config.model_repo.clone(),
            voice_id: voice_id.clone(),
            ref_audio,
            ref_text,
        };

        tracing::debug!(
            url = %self.synthesize_url(),
            text_len = http_request.text.len(),
            voice_id = ?http_request.voice_id,
            cloning = http_request.ref_audio.is_some(),
            "Sending synthesize request"
        );

        let response = self
            .client
            .post(self.synthesize_url())
            .json(&http_request)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(match status {
                reqwest::StatusCode::NOT_FOUND => TtsEngineError::VoiceNotFound(
                    voice_id.unwrap_or_else(|| error_text.clone()),
                ),
                reqwest::StatusCode::BAD_REQUEST | reqwest::StatusCode::UNPROCESSABLE_ENTITY => {
                    TtsEngineError::InvalidReference(error_text)
                }
                _ => TtsEngineError::SynthesisFailed(format!("HTTP {}: {}", status, error_text)),
            });
        }

        // 从 headers 提取元数据
        let headers = response.headers();
        let sample_rate = headers
            .get("X-VieNeu-Sample-Rate")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok());
        let duration_ms = headers
            .get("X-VieNeu-Duration-Ms")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok());

        // 直接获取音频字节
        let data = response
            .bytes()
            .await
            .map_err(|e| TtsEngineError::InvalidResponse(format!("Failed to read audio: {}", e)))?
            .to_vec();

        tracing::info!(
            sample_rate = ?sample_rate,
            duration_ms = ?duration_ms,
            audio_size = data.len(),
            "VieNeu synthesis completed"
        );

        Ok(EngineAudio {
            data,
            sample_rate,
            duration_ms,
        })
    }

    async fn preset_voices(&self) -> Result<Vec<PresetVoice>, TtsEngineError> {
        let response = self
            .client
            .get(self.voices_url())
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TtsEngineError::SynthesisFailed(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body: VoicesResponse = response
            .json()
            .await
            .map_err(|e| TtsEngineError::InvalidResponse(format!("Failed to parse voices: {}", e)))?;

        Ok(body.voices)
    }

    async fn health_check(&self) -> bool {
        match self
            .client
            .get(self.health_url())
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = VieneuClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8001");
        assert_eq!(config.timeout_secs, 120);
        assert_eq!(config.model_repo, "pnnbao-ump/VieNeu-TTS-0.3B-q8-gguf");
    }

    #[test]
    fn test_config_builder() {
        let config = VieneuClientConfig::new("http://vieneu:9000")
            .with_timeout(60)
            .with_model_repo("pnnbao-ump/VieNeu-TTS");
        assert_eq!(config.base_url, "http://vieneu:9000");
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.model_repo, "pnnbao-ump/VieNeu-TTS");
    }

    #[test]
    fn test_synthesize_request_skips_absent_fields() {
        let request = SynthesizeRequest {
            text: "Xin chào".to_string(),
            model_repo: "repo".to_string(),
            voice_id: Some("Doan".to_string()),
            ref_audio: None,
            ref_text: None,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["text"], "Xin chào");
        assert_eq!(json["voice_id"], "Doan");
        assert!(json.get("ref_audio").is_none());
        assert!(json.get("ref_text").is_none());
    }
}
