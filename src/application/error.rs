//! 应用层错误定义
//!
//! 统一的服务错误类型，HTTP 层据此映射状态码

use thiserror::Error;

use crate::application::ports::AudioStoreError;
use crate::domain::synthesis::SynthesisRuleError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ServiceError {
    /// 请求校验失败
    #[error("Validation error: {0}")]
    Validation(String),

    /// 合成失败
    #[error("Synthesis failed: {0}")]
    Synthesis(String),

    /// 合成超时
    #[error("Synthesis timed out after {0}s")]
    Timeout(u64),

    /// TTS 引擎不可用
    #[error("TTS engine unavailable: {0}")]
    EngineUnavailable(String),

    /// 产物不存在
    #[error("Audio file not found: {0}")]
    NotFound(String),

    /// 请求的文件名试图越出输出目录
    #[error("Path traversal rejected: {0}")]
    PathTraversal(String),

    /// 存储错误
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<SynthesisRuleError> for ServiceError {
    fn from(err: SynthesisRuleError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<AudioStoreError> for ServiceError {
    fn from(err: AudioStoreError) -> Self {
        match err {
            AudioStoreError::NotFound(filename) => Self::NotFound(filename),
            AudioStoreError::UnsafeFilename(filename) => Self::PathTraversal(filename),
            other => Self::Storage(other.to_string()),
        }
    }
}
