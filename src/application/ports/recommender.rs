//! Recommender Port - 出站端口
//!
//! 新闻推荐的抽象接口。当前只有占位实现，
//! 接口按"给定用户返回有限条推荐"定义，等待真实模型接入。

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// 推荐条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedItem {
    /// 新闻标识
    pub id: String,
    /// 新闻标题
    pub title: String,
    /// 推荐分数，降序排列
    pub score: f64,
}

/// Recommender Port
#[async_trait]
pub trait RecommenderPort: Send + Sync {
    /// 为用户生成推荐列表
    ///
    /// 返回长度不超过 `limit` 的推荐条目，按分数降序
    async fn recommend(&self, user_id: &str, limit: u32) -> Vec<RecommendedItem>;
}
