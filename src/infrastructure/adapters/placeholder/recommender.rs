//! Placeholder Recommender - 占位推荐实现
//!
//! 实现 RecommenderPort trait。响应形状即最终形状，
//! 内部逻辑只是按 user_id 确定性轮转一张固定新闻表，
//! 等待真实推荐模型接入后替换。

use async_trait::async_trait;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::application::ports::{RecommendedItem, RecommenderPort};

/// 固定新闻标题表
const HEADLINES: &[(&str, &str)] = &[
    ("news-001", "Giá xăng trong nước giảm lần thứ ba liên tiếp"),
    ("news-002", "Hà Nội khánh thành tuyến metro Nhổn - ga Hà Nội"),
    ("news-003", "Đội tuyển Việt Nam giành vé dự vòng loại World Cup"),
    ("news-004", "Xuất khẩu nông sản đạt kỷ lục trong quý ba"),
    ("news-005", "TP.HCM thí điểm xe buýt điện trên năm tuyến mới"),
    ("news-006", "Du lịch Đà Nẵng phục hồi mạnh sau mùa mưa bão"),
    ("news-007", "Ngân hàng Nhà nước giữ nguyên lãi suất điều hành"),
    ("news-008", "Học sinh Việt Nam đoạt bốn huy chương vàng Olympic Toán"),
    ("news-009", "Công nghệ AI được ứng dụng trong chẩn đoán sớm ung thư"),
    ("news-010", "Miền Bắc đón không khí lạnh đầu mùa vào cuối tuần"),
];

/// 占位推荐服务
pub struct PlaceholderRecommender;

impl PlaceholderRecommender {
    pub fn new() -> Self {
        tracing::info!("Recommendation service initialized (placeholder)");
        Self
    }
}

impl Default for PlaceholderRecommender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecommenderPort for PlaceholderRecommender {
    async fn recommend(&self, user_id: &str, limit: u32) -> Vec<RecommendedItem> {
        // 按 user_id 轮转起点，分数按位置递减
        let mut hasher = DefaultHasher::new();
        user_id.hash(&mut hasher);
        let offset = (hasher.finish() % HEADLINES.len() as u64) as usize;

        let items: Vec<RecommendedItem> = HEADLINES
            .iter()
            .cycle()
            .skip(offset)
            .take(HEADLINES.len().min(limit as usize))
            .enumerate()
            .map(|(position, (id, title))| RecommendedItem {
                id: id.to_string(),
                title: title.to_string(),
                score: (95 - 4 * position as i64) as f64 / 100.0,
            })
            .collect();

        tracing::debug!(
            user_id = %user_id,
            limit = limit,
            returned = items.len(),
            "Placeholder recommendations generated"
        );

        items
    }
}
