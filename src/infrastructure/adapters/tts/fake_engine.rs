//! Fake TTS Engine - 本地确定性引擎
//!
//! 实现 TtsEnginePort trait，不依赖外部推理进程。
//! 按文本与音色确定性地生成一段正弦波 WAV，
//! 用于本地开发与测试（INTELLINEWS_TTS__BACKEND=fake）。

use async_trait::async_trait;
use hound::{SampleFormat, WavSpec, WavWriter};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::io::Cursor;

use crate::application::ports::{
    EngineAudio, EngineRequest, PresetVoice, Speaker, TtsEngineError, TtsEnginePort,
};

/// Fake 引擎配置
#[derive(Debug, Clone)]
pub struct FakeEngineConfig {
    /// 生成音频的采样率
    pub sample_rate: u32,
    /// 模拟推理延迟（毫秒）
    pub latency_ms: u64,
}

impl Default for FakeEngineConfig {
    fn default() -> Self {
        Self {
            sample_rate: 24000,
            latency_ms: 100,
        }
    }
}

/// Fake TTS 引擎
///
/// 预置音色表与 VieNeu-TTS 模型的预置说话人保持一致
pub struct FakeTtsEngine {
    config: FakeEngineConfig,
    voices: Vec<PresetVoice>,
}

impl FakeTtsEngine {
    /// 创建新的 Fake 引擎
    pub fn new(config: FakeEngineConfig) -> Self {
        let voices = [
            ("Binh", "Giọng nam miền Bắc"),
            ("Doan", "Giọng nữ miền Nam"),
            ("Ly", "Giọng nữ miền Nam, trẻ trung"),
            ("Ngoc", "Giọng nữ miền Bắc, nhẹ nhàng"),
            ("Tuyen", "Giọng nữ miền Bắc, truyền cảm"),
            ("Vinh", "Giọng nam miền Nam, trầm ấm"),
        ]
        .into_iter()
        .map(|(voice_id, description)| PresetVoice {
            voice_id: voice_id.to_string(),
            description: description.to_string(),
        })
        .collect();

        tracing::info!(
            sample_rate = config.sample_rate,
            latency_ms = config.latency_ms,
            "FakeTtsEngine initialized"
        );

        Self { config, voices }
    }

    /// 使用默认配置创建
    pub fn with_defaults() -> Self {
        Self::new(FakeEngineConfig::default())
    }

    /// 由文本与说话人确定性地合成一段正弦波 WAV
    fn render_wav(&self, text: &str, speaker_key: &str) -> Result<Vec<u8>, TtsEngineError> {
        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        speaker_key.hash(&mut hasher);
        let seed = hasher.finish();

        // 音高按说话人与文本变化
        let frequency = 140.0 + (seed % 200) as f32;
        let duration_ms = synth_duration_ms(text);
        let total_samples = (self.config.sample_rate as u64 * duration_ms / 1000) as usize;

        let mut samples = Vec::with_capacity(total_samples);
        for i in 0..total_samples {
            let t = i as f32 / self.config.sample_rate as f32;
            samples.push(0.3 * (2.0 * std::f32::consts::PI * frequency * t).sin());
        }

        // 首尾 10ms 线性淡入淡出，避免爆音
        let fade = (self.config.sample_rate / 100) as usize;
        let fade = fade.min(samples.len() / 2);
        let len = samples.len();
        for i in 0..fade {
            let gain = i as f32 / fade as f32;
            samples[i] *= gain;
            samples[len - 1 - i] *= gain;
        }

        let spec = WavSpec {
            channels: 1,
            sample_rate: self.config.sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };

        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = WavWriter::new(&mut cursor, spec)
                .map_err(|e| TtsEngineError::SynthesisFailed(e.to_string()))?;
            for sample in samples {
                let value = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
                writer
                    .write_sample(value)
                    .map_err(|e| TtsEngineError::SynthesisFailed(e.to_string()))?;
            }
            writer
                .finalize()
                .map_err(|e| TtsEngineError::SynthesisFailed(e.to_string()))?;
        }

        Ok(cursor.into_inner())
    }
}

#[async_trait]
impl TtsEnginePort for FakeTtsEngine {
    async fn synthesize(&self, request: EngineRequest) -> Result<EngineAudio, TtsEngineError> {
        let speaker_key = match &request.speaker {
            Speaker::Preset { voice_id } => {
                if !self.voices.iter().any(|v| v.voice_id == *voice_id) {
                    return Err(TtsEngineError::VoiceNotFound(voice_id.clone()));
                }
                voice_id.clone()
            }
            Speaker::Cloned { ref_audio, .. } => format!("cloned:{}", ref_audio),
        };

        tracing::debug!(
            text_len = request.text.len(),
            speaker = %speaker_key,
            "FakeTtsEngine: rendering deterministic audio"
        );

        // 模拟推理延迟
        if self.config.latency_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(self.config.latency_ms)).await;
        }

        let data = self.render_wav(&request.text, &speaker_key)?;

        Ok(EngineAudio {
            data,
            sample_rate: Some(self.config.sample_rate),
            duration_ms: Some(synth_duration_ms(&request.text)),
        })
    }

    async fn preset_voices(&self) -> Result<Vec<PresetVoice>, TtsEngineError> {
        Ok(self.voices.clone())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

/// 合成时长随文本字符数线性增长，上限 3 秒。
/// 渲染采样数与上报的 duration_ms 都由此导出
fn synth_duration_ms(text: &str) -> u64 {
    (400 + text.chars().count() as u64 * 60).min(3000)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> FakeTtsEngine {
        FakeTtsEngine::new(FakeEngineConfig {
            sample_rate: 24000,
            latency_ms: 0,
        })
    }

    fn request(text: &str, voice_id: &str) -> EngineRequest {
        EngineRequest {
            text: text.to_string(),
            speaker: Speaker::Preset {
                voice_id: voice_id.to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_synthesis_is_deterministic() {
        let engine = engine();

        let first = engine.synthesize(request("Xin chào", "Doan")).await.unwrap();
        let second = engine.synthesize(request("Xin chào", "Doan")).await.unwrap();

        assert_eq!(first.data, second.data);
        assert_eq!(first.duration_ms, second.duration_ms);
    }

    #[tokio::test]
    async fn test_different_inputs_produce_different_audio() {
        let engine = engine();

        let a = engine.synthesize(request("Tin sáng", "Doan")).await.unwrap();
        let b = engine.synthesize(request("Tin chiều", "Doan")).await.unwrap();
        let c = engine.synthesize(request("Tin sáng", "Binh")).await.unwrap();

        assert_ne!(a.data, b.data);
        assert_ne!(a.data, c.data);
    }

    #[tokio::test]
    async fn test_output_is_parseable_wav() {
        let engine = engine();

        let audio = engine
            .synthesize(request("Bản tin thời sự hôm nay", "Ly"))
            .await
            .unwrap();

        assert_eq!(&audio.data[..4], b"RIFF");
        assert_eq!(&audio.data[8..12], b"WAVE");

        let reader = hound::WavReader::new(Cursor::new(&audio.data)).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 24000);
        assert_eq!(spec.bits_per_sample, 16);
        assert!(reader.len() > 0);
    }

    #[tokio::test]
    async fn test_reported_duration_matches_rendered_samples() {
        let engine = engine();

        let audio = engine
            .synthesize(request("Thời tiết hôm nay nắng đẹp", "Ngoc"))
            .await
            .unwrap();

        // 上报的 duration_ms 必须与实际渲染的采样数一致
        let duration_ms = audio.duration_ms.unwrap();
        let reader = hound::WavReader::new(Cursor::new(&audio.data)).unwrap();
        assert_eq!(reader.len() as u64, 24000 * duration_ms / 1000);
    }

    #[tokio::test]
    async fn test_unknown_voice_rejected() {
        let engine = engine();

        let err = engine
            .synthesize(request("Xin chào", "KhongCo"))
            .await
            .unwrap_err();
        assert!(matches!(err, TtsEngineError::VoiceNotFound(_)));
    }

    #[tokio::test]
    async fn test_cloned_speaker_accepted() {
        let engine = engine();

        let audio = engine
            .synthesize(EngineRequest {
                text: "Xin chào".to_string(),
                speaker: Speaker::Cloned {
                    ref_audio: "/tmp/ref.wav".to_string(),
                    ref_text: "mẫu giọng".to_string(),
                },
            })
            .await
            .unwrap();

        assert!(!audio.data.is_empty());
    }

    #[tokio::test]
    async fn test_preset_voices_match_model_speakers() {
        let engine = engine();

        let voices = engine.preset_voices().await.unwrap();
        assert_eq!(voices.len(), 6);
        assert!(voices.iter().any(|v| v.voice_id == "Doan"));
        assert!(voices.iter().any(|v| v.voice_id == "Binh"));
    }
}
