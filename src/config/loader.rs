//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `INTELLINEWS_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `INTELLINEWS_SERVER__HOST=127.0.0.1`
/// - `INTELLINEWS_SERVER__PORT=8080`
/// - `INTELLINEWS_TTS__ENGINE_URL=http://vieneu:8001`
/// - `INTELLINEWS_STORAGE__OUTPUT_DIR=/data/tts`
///
/// # 返回
/// - `Ok(AppConfig)` - 成功加载的配置
/// - `Err(ConfigError)` - 加载失败
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 首先设置默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8000)?
        .set_default("tts.backend", "vieneu")?
        .set_default("tts.model_repo", "pnnbao-ump/VieNeu-TTS-0.3B-q8-gguf")?
        .set_default("tts.engine_url", "http://localhost:8001")?
        .set_default("tts.timeout_secs", 120)?
        .set_default("tts.default_voice", "Doan")?
        .set_default("storage.output_dir", "outputs/tts")?
        .set_default("recommendation.default_limit", 10)?
        .set_default("recommendation.max_limit", 100)?
        .set_default("summarization.default_max_length", 150)?
        .set_default("log.level", "info")?;

    // 2. 添加配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        // 搜索默认配置文件
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 添加环境变量（最高优先级）
    // 前缀: INTELLINEWS_
    // 层级分隔符: __ (双下划线)
    // 例如: INTELLINEWS_TTS__ENGINE_URL=http://vieneu:8001
    // 注意: 环境变量名会被转换为小写
    builder = builder.add_source(
        Environment::with_prefix("INTELLINEWS")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 构建配置
    let config = builder.build()?;

    // 5. 反序列化为 AppConfig
    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    // 6. 验证配置
    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    // 验证端口范围
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    // 验证模型仓库标识
    if config.tts.model_repo.is_empty() {
        return Err(ConfigError::ValidationError(
            "TTS model repo cannot be empty".to_string(),
        ));
    }

    // 验证引擎地址
    if config.tts.engine_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "TTS engine URL cannot be empty".to_string(),
        ));
    }

    // 验证合成超时
    if config.tts.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "TTS timeout cannot be 0".to_string(),
        ));
    }

    // 验证默认音色
    if config.tts.default_voice.is_empty() {
        return Err(ConfigError::ValidationError(
            "TTS default voice cannot be empty".to_string(),
        ));
    }

    // 验证输出目录
    if config.storage.output_dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Storage output dir cannot be empty".to_string(),
        ));
    }

    // 验证推荐条数范围
    if config.recommendation.default_limit == 0
        || config.recommendation.default_limit > config.recommendation.max_limit
    {
        return Err(ConfigError::ValidationError(format!(
            "Recommendation default limit must be in 1..={}",
            config.recommendation.max_limit
        )));
    }

    // 验证摘要长度
    if config.summarization.default_max_length == 0 {
        return Err(ConfigError::ValidationError(
            "Summarization default max length cannot be 0".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("TTS Backend: {:?}", config.tts.backend);
    tracing::info!("TTS Model Repo: {}", config.tts.model_repo);
    tracing::info!("TTS Engine URL: {}", config.tts.engine_url);
    tracing::info!("TTS Timeout: {}s", config.tts.timeout_secs);
    tracing::info!("TTS Default Voice: {}", config.tts.default_voice);
    tracing::info!("Output Directory: {:?}", config.storage.output_dir);
    tracing::info!("Recommendation Default Limit: {}", config.recommendation.default_limit);
    tracing::info!("Summarization Default Max Length: {}", config.summarization.default_max_length);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::TtsBackend;

    #[test]
    fn test_load_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.tts.backend, TtsBackend::Vieneu);
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_model_repo() {
        let mut config = AppConfig::default();
        config.tts.model_repo = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_timeout() {
        let mut config = AppConfig::default();
        config.tts.timeout_secs = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_limit_above_max() {
        let mut config = AppConfig::default();
        config.recommendation.default_limit = 500;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[server]
port = 9000

[tts]
backend = "fake"
default_voice = "Ly"
"#,
        )
        .unwrap();

        let config = load_config_from_path(Some(&path)).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.tts.backend, TtsBackend::Fake);
        assert_eq!(config.tts.default_voice, "Ly");
        // 未覆盖的键保持默认值
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.tts.timeout_secs, 120);
    }
}
