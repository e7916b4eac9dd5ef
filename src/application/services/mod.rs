//! Application Services - 用例编排
//!
//! 每个服务持有所需端口的 Arc 引用，自身无可变状态

mod tts_service;

pub use tts_service::{GenerateSpeech, GeneratedAudio, TtsService};
