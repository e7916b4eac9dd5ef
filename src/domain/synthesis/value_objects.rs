//! Synthesis Context - Value Objects

use super::SynthesisRuleError;

/// 待合成文本
///
/// 不变量:
/// - 去除首尾空白后非空
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechText(String);

impl SpeechText {
    pub fn new(text: impl Into<String>) -> Result<Self, SynthesisRuleError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(SynthesisRuleError::EmptyText);
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 字符数（按 Unicode 标量计）
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl std::fmt::Display for SpeechText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 音色选择
///
/// 三种方式:
/// - `Default`: 使用配置的默认预置音色
/// - `Preset`: 请求中指定的预置音色
/// - `Cloned`: 参考音频 + 转写文本声音克隆
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceSelection {
    Default,
    Preset(String),
    Cloned { ref_audio: String, ref_text: String },
}

impl VoiceSelection {
    /// 从请求字段解析音色选择
    ///
    /// 规则:
    /// - 空白字符串视为未提供
    /// - `ref_audio` 与 `ref_text` 必须同时出现，缺一即拒绝
    /// - 克隆参数优先于 `voice_id`
    pub fn from_request(
        voice_id: Option<&str>,
        ref_audio: Option<&str>,
        ref_text: Option<&str>,
    ) -> Result<Self, SynthesisRuleError> {
        let voice_id = voice_id.map(str::trim).filter(|s| !s.is_empty());
        let ref_audio = ref_audio.map(str::trim).filter(|s| !s.is_empty());
        let ref_text = ref_text.map(str::trim).filter(|s| !s.is_empty());

        match (ref_audio, ref_text) {
            (Some(audio), Some(text)) => Ok(Self::Cloned {
                ref_audio: audio.to_string(),
                ref_text: text.to_string(),
            }),
            (None, None) => match voice_id {
                Some(id) => Ok(Self::Preset(id.to_string())),
                None => Ok(Self::Default),
            },
            _ => Err(SynthesisRuleError::IncompleteCloneReference),
        }
    }

    /// 是否为声音克隆请求
    pub fn is_cloned(&self) -> bool {
        matches!(self, Self::Cloned { .. })
    }
}
