//! IntelliNews AI Service
//!
//! 新闻应用的 AI 编排入口:
//! - TTS: VieNeu-TTS 越南语语音合成
//! - Recommendation / Summarization: 占位接口，等待模型接入

use std::sync::Arc;

use intellinews_ai::application::{TtsEnginePort, TtsService};
use intellinews_ai::config::{load_config, print_config, TtsBackend};
use intellinews_ai::infrastructure::adapters::{
    FakeTtsEngine, FileAudioStore, PlaceholderRecommender, PlaceholderSummarizer, VieneuClient,
    VieneuClientConfig,
};
use intellinews_ai::infrastructure::http::{AppState, HttpServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},intellinews_ai={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("IntelliNews AI Service");
    print_config(&config);

    // 创建 TTS 引擎
    let engine: Arc<dyn TtsEnginePort> = match config.tts.backend {
        TtsBackend::Vieneu => {
            let client_config = VieneuClientConfig::new(config.tts.engine_url.clone())
                .with_timeout(config.tts.timeout_secs)
                .with_model_repo(config.tts.model_repo.clone());
            Arc::new(VieneuClient::new(client_config)?)
        }
        TtsBackend::Fake => Arc::new(FakeTtsEngine::with_defaults()),
    };

    // 启动探活仅提示，引擎可以晚于本服务上线
    if !engine.health_check().await {
        tracing::warn!(
            "TTS engine at {} is not reachable, synthesis will fail until it comes up",
            config.tts.engine_url
        );
    }

    // 创建音频产物存储
    let store = Arc::new(FileAudioStore::new(&config.storage.output_dir).await?);
    tracing::info!(
        "Audio output directory: {}",
        config.storage.output_dir.display()
    );

    // 装配应用服务与 HTTP 状态
    let tts_service = TtsService::new(engine, store, config.tts.clone());
    let state = AppState::new(
        config.clone(),
        tts_service,
        Arc::new(PlaceholderRecommender::new()),
        Arc::new(PlaceholderSummarizer::new()),
    );

    let server = HttpServer::new(config.server.clone(), state);

    // 启动服务器（带优雅关闭）
    server
        .serve(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
