//! Synthesis Context - 语音合成限界上下文
//!
//! 职责:
//! - 合成文本校验
//! - 音色选择规则（预置音色 / 参考音频克隆）

mod errors;
mod value_objects;

pub use errors::SynthesisRuleError;
pub use value_objects::{SpeechText, VoiceSelection};
