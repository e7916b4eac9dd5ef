//! Audio Store Port - 出站端口
//!
//! 定义合成音频产物的存储抽象接口。产物以文件名为键，
//! 文件名由服务生成，外部请求的文件名必须经过安全校验。

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// 音频存储错误
#[derive(Debug, Error)]
pub enum AudioStoreError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Unsafe filename: {0}")]
    UnsafeFilename(String),

    #[error("File already exists: {0}")]
    AlreadyExists(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Audio Store Port - 出站端口
///
/// 管理合成音频产物的写入与读取
#[async_trait]
pub trait AudioStorePort: Send + Sync {
    /// 写入新产物
    ///
    /// 文件名必须尚未被占用，已存在时返回 `AlreadyExists`，
    /// 由调用方换名重试。返回产物的完整路径。
    async fn put(&self, filename: &str, data: &[u8]) -> Result<PathBuf, AudioStoreError>;

    /// 读取产物内容
    async fn read(&self, filename: &str) -> Result<Vec<u8>, AudioStoreError>;

    /// 解析产物完整路径
    ///
    /// 仅当文件名安全且产物存在时返回路径
    async fn resolve(&self, filename: &str) -> Result<PathBuf, AudioStoreError>;

    /// 检查产物是否存在
    ///
    /// 不安全的文件名视为不存在
    async fn exists(&self, filename: &str) -> bool;
}
