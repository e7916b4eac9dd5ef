//! Placeholder Adapter - 占位服务实现
//!
//! 推荐与摘要的响应形状已定稿，内部逻辑等待真实模型接入

mod recommender;
mod summarizer;

pub use recommender::PlaceholderRecommender;
pub use summarizer::PlaceholderSummarizer;
