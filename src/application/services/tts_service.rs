//! TTS Service - 语音合成用例编排
//!
//! 串联领域校验、音色解析、引擎调用与产物落盘：
//! 1. 校验文本与音色选择规则
//! 2. 解析默认音色（配置音色失效时回退到引擎的第一个预置音色）
//! 3. 在超时保护下调用 TTS 引擎
//! 4. 以时间戳 + 随机后缀命名产物写入存储，冲突时换名重试

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use crate::application::error::ServiceError;
use crate::application::ports::{
    AudioStoreError, AudioStorePort, EngineRequest, PresetVoice, Speaker, TtsEngineError,
    TtsEnginePort,
};
use crate::config::TtsConfig;
use crate::domain::synthesis::{SpeechText, VoiceSelection};

/// 文件名冲突时的最大换名重试次数
const MAX_FILENAME_RETRIES: u32 = 3;

/// 合成命令
#[derive(Debug, Clone)]
pub struct GenerateSpeech {
    /// 待合成文本
    pub text: String,
    /// 预置音色（可选）
    pub voice_id: Option<String>,
    /// 克隆参考音频（可选，与 ref_text 成对）
    pub ref_audio: Option<String>,
    /// 参考音频转写文本（可选，与 ref_audio 成对）
    pub ref_text: Option<String>,
}

/// 合成结果
#[derive(Debug, Clone)]
pub struct GeneratedAudio {
    /// 产物文件名
    pub filename: String,
    /// 产物完整路径
    pub file_path: PathBuf,
    /// 实际使用的预置音色（克隆合成时为 None）
    pub voice_id: Option<String>,
    /// 音频时长（毫秒），引擎未报告时为 None
    pub duration_ms: Option<u64>,
}

/// TTS Service
///
/// 持有引擎与存储端口，无跨请求可变状态，可在请求间共享
pub struct TtsService {
    engine: Arc<dyn TtsEnginePort>,
    store: Arc<dyn AudioStorePort>,
    config: TtsConfig,
}

impl TtsService {
    pub fn new(
        engine: Arc<dyn TtsEnginePort>,
        store: Arc<dyn AudioStorePort>,
        config: TtsConfig,
    ) -> Self {
        Self {
            engine,
            store,
            config,
        }
    }

    /// 执行一次语音合成，分配任务标识贯穿本次请求的日志
    pub async fn generate(&self, command: GenerateSpeech) -> Result<GeneratedAudio, ServiceError> {
        let text = SpeechText::new(command.text)?;
        let selection = VoiceSelection::from_request(
            command.voice_id.as_deref(),
            command.ref_audio.as_deref(),
            command.ref_text.as_deref(),
        )?;

        let job_id = Uuid::new_v4();
        let speaker = self.resolve_speaker(job_id, selection).await?;
        let used_voice = match &speaker {
            Speaker::Preset { voice_id } => Some(voice_id.clone()),
            Speaker::Cloned { .. } => None,
        };

        tracing::info!(
            job_id = %job_id,
            text_chars = text.char_count(),
            voice = used_voice.as_deref().unwrap_or("<cloned>"),
            "Starting speech synthesis"
        );

        let request = EngineRequest {
            text: text.as_str().to_string(),
            speaker,
        };

        let timeout = Duration::from_secs(self.config.timeout_secs);
        let audio = match tokio::time::timeout(timeout, self.engine.synthesize(request)).await {
            Ok(Ok(audio)) => audio,
            Ok(Err(err)) => return Err(self.map_engine_error(err)),
            Err(_) => {
                tracing::error!(
                    job_id = %job_id,
                    timeout_secs = self.config.timeout_secs,
                    "Speech synthesis timed out"
                );
                return Err(ServiceError::Timeout(self.config.timeout_secs));
            }
        };

        if audio.data.is_empty() {
            return Err(ServiceError::Synthesis(
                "Engine returned empty audio".to_string(),
            ));
        }

        // 时间戳 + 随机后缀保证并发下无锁唯一；冲突时换名重试
        let mut attempts = 0;
        let (filename, file_path) = loop {
            let candidate = derive_filename();
            match self.store.put(&candidate, &audio.data).await {
                Ok(path) => break (candidate, path),
                Err(AudioStoreError::AlreadyExists(_)) if attempts < MAX_FILENAME_RETRIES => {
                    attempts += 1;
                    tracing::warn!(
                        job_id = %job_id,
                        filename = %candidate,
                        attempt = attempts,
                        "Artifact filename collision, retrying with a new name"
                    );
                }
                Err(err) => return Err(err.into()),
            }
        };

        tracing::info!(
            job_id = %job_id,
            filename = %filename,
            bytes = audio.data.len(),
            duration_ms = audio.duration_ms,
            "Speech synthesis completed"
        );

        Ok(GeneratedAudio {
            filename,
            file_path,
            voice_id: used_voice,
            duration_ms: audio.duration_ms,
        })
    }

    /// 解析产物完整路径（用于下载）
    pub async fn resolve_audio(&self, filename: &str) -> Result<PathBuf, ServiceError> {
        Ok(self.store.resolve(filename).await?)
    }

    /// 列出可用预置音色
    pub async fn list_voices(&self) -> Result<Vec<PresetVoice>, ServiceError> {
        self.engine
            .preset_voices()
            .await
            .map_err(|err| self.map_engine_error(err))
    }

    /// 将音色选择解析为引擎说话人
    ///
    /// 默认音色规则：配置的默认音色在引擎预置列表中则使用之，
    /// 否则回退到列表的第一个音色；列表为空视为合成失败。
    /// 显式指定的音色不做预检，由引擎拒绝未知音色。
    async fn resolve_speaker(
        &self,
        job_id: Uuid,
        selection: VoiceSelection,
    ) -> Result<Speaker, ServiceError> {
        match selection {
            VoiceSelection::Cloned {
                ref_audio,
                ref_text,
            } => Ok(Speaker::Cloned {
                ref_audio,
                ref_text,
            }),
            VoiceSelection::Preset(voice_id) => Ok(Speaker::Preset { voice_id }),
            VoiceSelection::Default => {
                let configured = &self.config.default_voice;
                match self.engine.preset_voices().await {
                    Ok(voices) => {
                        if voices.iter().any(|v| v.voice_id == *configured) {
                            Ok(Speaker::Preset {
                                voice_id: configured.clone(),
                            })
                        } else if let Some(first) = voices.first() {
                            tracing::warn!(
                                job_id = %job_id,
                                configured = %configured,
                                fallback = %first.voice_id,
                                "Configured default voice not available, falling back to first preset"
                            );
                            Ok(Speaker::Preset {
                                voice_id: first.voice_id.clone(),
                            })
                        } else {
                            Err(ServiceError::Synthesis(
                                "No preset voices available".to_string(),
                            ))
                        }
                    }
                    // 列表拿不到时仍按配置音色合成，由引擎自行报错
                    Err(err) => {
                        tracing::warn!(
                            job_id = %job_id,
                            error = %err,
                            "Failed to list preset voices, using configured default as-is"
                        );
                        Ok(Speaker::Preset {
                            voice_id: configured.clone(),
                        })
                    }
                }
            }
        }
    }

    fn map_engine_error(&self, err: TtsEngineError) -> ServiceError {
        match err {
            TtsEngineError::Unavailable(message) => ServiceError::EngineUnavailable(message),
            TtsEngineError::Timeout => ServiceError::Timeout(self.config.timeout_secs),
            TtsEngineError::VoiceNotFound(voice) => {
                ServiceError::Validation(format!("Unknown voice: {}", voice))
            }
            TtsEngineError::InvalidReference(message) => {
                ServiceError::Synthesis(format!("Invalid reference audio: {}", message))
            }
            TtsEngineError::SynthesisFailed(message) => ServiceError::Synthesis(message),
            TtsEngineError::InvalidResponse(message) => ServiceError::Synthesis(message),
        }
    }
}

/// 派生产物文件名：`tts_<UTC 时间戳>_<8 位随机十六进制>.wav`
fn derive_filename() -> String {
    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let suffix = Uuid::new_v4().simple().to_string();
    format!("tts_{}_{}.wav", timestamp, &suffix[..8])
}
