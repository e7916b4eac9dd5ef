//! TTS Engine Port - TTS 推理引擎抽象
//!
//! 定义预训练 TTS 模型的抽象接口，具体实现在 infrastructure/adapters/tts 层。
//! 模型本身是外部黑盒，本服务只做编排。

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// TTS 引擎错误
#[derive(Debug, Error)]
pub enum TtsEngineError {
    #[error("Engine unavailable: {0}")]
    Unavailable(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Synthesis failed: {0}")]
    SynthesisFailed(String),

    #[error("Voice not found: {0}")]
    VoiceNotFound(String),

    #[error("Invalid reference audio: {0}")]
    InvalidReference(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 合成说话人
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Speaker {
    /// 预置音色
    Preset { voice_id: String },
    /// 参考音频克隆
    Cloned { ref_audio: String, ref_text: String },
}

/// 合成请求
#[derive(Debug, Clone)]
pub struct EngineRequest {
    /// 要合成的文本内容
    pub text: String,
    /// 说话人
    pub speaker: Speaker,
}

/// 合成结果音频
#[derive(Debug, Clone)]
pub struct EngineAudio {
    /// 原始音频数据（WAV）
    pub data: Vec<u8>,
    /// 采样率
    pub sample_rate: Option<u32>,
    /// 音频时长（毫秒）
    pub duration_ms: Option<u64>,
}

/// 预置音色
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetVoice {
    /// 音色标识（请求中的 voice_id）
    pub voice_id: String,
    /// 音色描述
    pub description: String,
}

/// TTS Engine Port
///
/// 预训练语音合成模型的抽象接口
#[async_trait]
pub trait TtsEnginePort: Send + Sync {
    /// 执行一次语音合成
    ///
    /// 发送文本和说话人信息到模型，返回合成的音频数据
    async fn synthesize(&self, request: EngineRequest) -> Result<EngineAudio, TtsEngineError>;

    /// 列出可用的预置音色
    async fn preset_voices(&self) -> Result<Vec<PresetVoice>, TtsEngineError>;

    /// 检查引擎是否可用
    async fn health_check(&self) -> bool {
        true // 默认实现
    }
}
