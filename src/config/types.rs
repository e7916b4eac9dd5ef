//! Configuration Types
//!
//! 定义所有配置结构体。配置在进程启动时加载一次，随后只读。

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// TTS 引擎配置
    #[serde(default)]
    pub tts: TtsConfig,

    /// 音频产物存储配置
    #[serde(default)]
    pub storage: StorageConfig,

    /// 推荐服务配置（占位实现）
    #[serde(default)]
    pub recommendation: RecommendationConfig,

    /// 摘要服务配置（占位实现）
    #[serde(default)]
    pub summarization: SummarizationConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            tts: TtsConfig::default(),
            storage: StorageConfig::default(),
            recommendation: RecommendationConfig::default(),
            summarization: SummarizationConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// TTS 引擎后端选择
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TtsBackend {
    /// 外部 VieNeu 推理 sidecar（HTTP）
    Vieneu,
    /// 本地确定性 fake 引擎（开发/测试用）
    Fake,
}

/// TTS 引擎配置
#[derive(Debug, Clone, Deserialize)]
pub struct TtsConfig {
    /// 引擎后端
    #[serde(default = "default_tts_backend")]
    pub backend: TtsBackend,

    /// 预训练模型仓库标识
    #[serde(default = "default_model_repo")]
    pub model_repo: String,

    /// VieNeu sidecar 基础 URL
    #[serde(default = "default_engine_url")]
    pub engine_url: String,

    /// 单次合成超时时间（秒）
    #[serde(default = "default_tts_timeout")]
    pub timeout_secs: u64,

    /// 默认预置音色
    #[serde(default = "default_voice")]
    pub default_voice: String,
}

fn default_tts_backend() -> TtsBackend {
    TtsBackend::Vieneu
}

fn default_model_repo() -> String {
    "pnnbao-ump/VieNeu-TTS-0.3B-q8-gguf".to_string()
}

fn default_engine_url() -> String {
    "http://localhost:8001".to_string()
}

fn default_tts_timeout() -> u64 {
    120
}

fn default_voice() -> String {
    "Doan".to_string()
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            backend: default_tts_backend(),
            model_repo: default_model_repo(),
            engine_url: default_engine_url(),
            timeout_secs: default_tts_timeout(),
            default_voice: default_voice(),
        }
    }
}

/// 存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// 生成音频的输出目录
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("outputs/tts")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

/// 推荐服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationConfig {
    /// 未指定 limit 时的默认条数
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// limit 上限
    #[serde(default = "default_max_limit")]
    pub max_limit: u32,
}

fn default_limit() -> u32 {
    10
}

fn default_max_limit() -> u32 {
    100
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

/// 摘要服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct SummarizationConfig {
    /// 未指定 max_length 时的默认摘要长度（字符）
    #[serde(default = "default_max_length")]
    pub default_max_length: u32,
}

fn default_max_length() -> u32 {
    150
}

impl Default for SummarizationConfig {
    fn default() -> Self {
        Self {
            default_max_length: default_max_length(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.tts.backend, TtsBackend::Vieneu);
        assert_eq!(config.tts.model_repo, "pnnbao-ump/VieNeu-TTS-0.3B-q8-gguf");
        assert_eq!(config.tts.default_voice, "Doan");
        assert_eq!(config.storage.output_dir, PathBuf::from("outputs/tts"));
        assert_eq!(config.recommendation.default_limit, 10);
        assert_eq!(config.summarization.default_max_length, 150);
    }

    #[test]
    fn test_server_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_backend_deserialize() {
        #[derive(Deserialize)]
        struct Wrapper {
            backend: TtsBackend,
        }

        let w: Wrapper = serde_json::from_str(r#"{"backend":"fake"}"#).unwrap();
        assert_eq!(w.backend, TtsBackend::Fake);

        let w: Wrapper = serde_json::from_str(r#"{"backend":"vieneu"}"#).unwrap();
        assert_eq!(w.backend, TtsBackend::Vieneu);
    }
}
