//! Application State
//!
//! HTTP 层共享的应用状态：配置快照、TTS 应用服务、占位服务端口

use std::sync::Arc;

use crate::application::{RecommenderPort, SummarizerPort, TtsService};
use crate::config::AppConfig;

/// 应用状态
pub struct AppState {
    pub config: AppConfig,
    pub tts_service: TtsService,
    pub recommender: Arc<dyn RecommenderPort>,
    pub summarizer: Arc<dyn SummarizerPort>,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        config: AppConfig,
        tts_service: TtsService,
        recommender: Arc<dyn RecommenderPort>,
        summarizer: Arc<dyn SummarizerPort>,
    ) -> Self {
        Self {
            config,
            tts_service,
            recommender,
            summarizer,
        }
    }
}
