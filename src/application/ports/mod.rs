//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod audio_store;
mod recommender;
mod summarizer;
mod tts_engine;

pub use audio_store::{AudioStoreError, AudioStorePort};
pub use recommender::{RecommendedItem, RecommenderPort};
pub use summarizer::{SummarizerPort, Summary};
pub use tts_engine::{
    EngineAudio, EngineRequest, PresetVoice, Speaker, TtsEngineError, TtsEnginePort,
};
