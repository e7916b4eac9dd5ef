//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（TtsEngine、AudioStore、Recommender、Summarizer）
//! - services: 用例编排服务
//! - error: 应用层错误定义

pub mod error;
pub mod ports;
pub mod services;

// Re-exports
pub use error::ServiceError;

pub use ports::{
    // Audio store
    AudioStoreError,
    AudioStorePort,
    // Recommender
    RecommendedItem,
    RecommenderPort,
    // Summarizer
    SummarizerPort,
    Summary,
    // TTS engine
    EngineAudio,
    EngineRequest,
    PresetVoice,
    Speaker,
    TtsEngineError,
    TtsEnginePort,
};

pub use services::{GenerateSpeech, GeneratedAudio, TtsService};
