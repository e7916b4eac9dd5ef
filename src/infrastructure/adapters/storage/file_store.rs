//! File Audio Store - 文件系统音频产物存储实现
//!
//! 实现 AudioStorePort trait。产物平铺在单一输出目录下，
//! 文件名必须是单一路径分量，拒绝一切目录穿越形式。

use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::application::ports::{AudioStoreError, AudioStorePort};

/// 文件系统音频产物存储
pub struct FileAudioStore {
    /// 输出目录
    base_dir: PathBuf,
}

impl FileAudioStore {
    /// 创建新的文件存储
    pub async fn new(base_dir: impl AsRef<Path>) -> Result<Self, AudioStoreError> {
        let base_dir = base_dir.as_ref().to_path_buf();

        // 确保目录存在
        fs::create_dir_all(&base_dir)
            .await
            .map_err(|e| AudioStoreError::IoError(e.to_string()))?;

        Ok(Self { base_dir })
    }

    /// 获取输出目录
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// 校验文件名并拼接完整路径
    ///
    /// 文件名必须恰好是一个普通路径分量，`..`、绝对路径、
    /// 含分隔符或空字符串一律拒绝
    fn safe_path(&self, filename: &str) -> Result<PathBuf, AudioStoreError> {
        let mut components = Path::new(filename).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) if name.to_str() == Some(filename) => {
                Ok(self.base_dir.join(filename))
            }
            _ => Err(AudioStoreError::UnsafeFilename(filename.to_string())),
        }
    }
}

#[async_trait]
impl AudioStorePort for FileAudioStore {
    async fn put(&self, filename: &str, data: &[u8]) -> Result<PathBuf, AudioStoreError> {
        let path = self.safe_path(filename)?;

        // create_new 保证并发写入同名文件时只有一个成功
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::AlreadyExists => {
                    AudioStoreError::AlreadyExists(filename.to_string())
                }
                _ => AudioStoreError::IoError(e.to_string()),
            })?;

        if let Err(e) = file.write_all(data).await {
            // 写失败时移除半成品文件
            drop(file);
            let _ = fs::remove_file(&path).await;
            return Err(AudioStoreError::IoError(e.to_string()));
        }

        if let Err(e) = file.flush().await {
            drop(file);
            let _ = fs::remove_file(&path).await;
            return Err(AudioStoreError::IoError(e.to_string()));
        }

        tracing::debug!("Saved artifact: {} ({} bytes)", filename, data.len());

        Ok(path)
    }

    async fn read(&self, filename: &str) -> Result<Vec<u8>, AudioStoreError> {
        let path = self.safe_path(filename)?;

        if !path.exists() {
            return Err(AudioStoreError::NotFound(filename.to_string()));
        }

        fs::read(&path)
            .await
            .map_err(|e| AudioStoreError::IoError(e.to_string()))
    }

    async fn resolve(&self, filename: &str) -> Result<PathBuf, AudioStoreError> {
        let path = self.safe_path(filename)?;

        match fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => Ok(path),
            _ => Err(AudioStoreError::NotFound(filename.to_string())),
        }
    }

    async fn exists(&self, filename: &str) -> bool {
        match self.safe_path(filename) {
            Ok(path) => path.exists(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_put_and_read_round_trip() {
        let temp_dir = tempdir().unwrap();
        let store = FileAudioStore::new(temp_dir.path()).await.unwrap();

        let data = b"fake wav data";
        let path = store.put("tts_test.wav", data).await.unwrap();
        assert!(path.exists());
        assert_eq!(path, temp_dir.path().join("tts_test.wav"));

        let read_back = store.read("tts_test.wav").await.unwrap();
        assert_eq!(read_back, data);
        assert!(store.exists("tts_test.wav").await);
    }

    #[tokio::test]
    async fn test_put_rejects_duplicate_filename() {
        let temp_dir = tempdir().unwrap();
        let store = FileAudioStore::new(temp_dir.path()).await.unwrap();

        store.put("tts_dup.wav", b"first").await.unwrap();
        let err = store.put("tts_dup.wav", b"second").await.unwrap_err();
        assert!(matches!(err, AudioStoreError::AlreadyExists(_)));

        // 原内容未被覆盖
        assert_eq!(store.read("tts_dup.wav").await.unwrap(), b"first");
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let temp_dir = tempdir().unwrap();
        let store = FileAudioStore::new(temp_dir.path()).await.unwrap();

        let err = store.read("tts_missing.wav").await.unwrap_err();
        assert!(matches!(err, AudioStoreError::NotFound(_)));
        assert!(!store.exists("tts_missing.wav").await);
    }

    #[tokio::test]
    async fn test_resolve_requires_existing_file() {
        let temp_dir = tempdir().unwrap();
        let store = FileAudioStore::new(temp_dir.path()).await.unwrap();

        assert!(matches!(
            store.resolve("tts_absent.wav").await.unwrap_err(),
            AudioStoreError::NotFound(_)
        ));

        store.put("tts_here.wav", b"data").await.unwrap();
        let path = store.resolve("tts_here.wav").await.unwrap();
        assert_eq!(path, temp_dir.path().join("tts_here.wav"));
    }

    #[tokio::test]
    async fn test_rejects_traversal_filenames() {
        let temp_dir = tempdir().unwrap();
        let outside = temp_dir.path().join("secret.txt");
        std::fs::write(&outside, b"top secret").unwrap();

        let base = temp_dir.path().join("store");
        let store = FileAudioStore::new(&base).await.unwrap();

        let bad_names = [
            "../secret.txt",
            "..",
            ".",
            "",
            "/etc/passwd",
            "a/b.wav",
            "foo/../bar.wav",
            "..\\secret.txt",
        ];

        for name in bad_names {
            // "..\\secret.txt" 在 Unix 上是合法文件名，但与其余一样不得读到目录外内容
            match store.read(name).await {
                Err(AudioStoreError::UnsafeFilename(_)) | Err(AudioStoreError::NotFound(_)) => {}
                other => panic!("expected rejection for {:?}, got {:?}", name, other),
            }
            match store.put(name, b"x").await {
                Err(_) => {}
                Ok(path) => {
                    // 即使接受，也必须落在输出目录内
                    assert!(path.starts_with(&base), "escaped base dir: {:?}", path);
                }
            }
        }

        // 目录外的文件始终不可达
        assert!(store.read("../secret.txt").await.is_err());
        assert_eq!(std::fs::read(&outside).unwrap(), b"top secret");
    }
}
