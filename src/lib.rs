//! IntelliNews AI Service - 新闻应用 AI 编排服务
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Synthesis Context: 合成文本与音色选择的业务规则
//!
//! 应用层 (application/):
//! - Ports: 端口定义（TtsEngine, AudioStore, Recommender, Summarizer）
//! - Services: TTS 编排服务
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Adapters: VieNeu TTS 客户端、FakeTtsEngine、文件产物存储、占位推荐/摘要

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
