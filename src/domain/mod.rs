//! Domain Layer - 领域层
//!
//! 包含一个限界上下文:
//! - Synthesis Context: 语音合成请求规则

pub mod synthesis;
