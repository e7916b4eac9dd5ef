//! Placeholder Summarizer - 占位摘要实现
//!
//! 实现 SummarizerPort trait。响应形状即最终形状，
//! 内部逻辑是按字符预算的确定性截断（尽量在词边界断开），
//! 等待真实摘要模型接入后替换。

use async_trait::async_trait;

use crate::application::ports::{SummarizerPort, Summary};

const ELLIPSIS: &str = "...";

/// 占位摘要服务
pub struct PlaceholderSummarizer;

impl PlaceholderSummarizer {
    pub fn new() -> Self {
        tracing::info!("Summarization service initialized (placeholder)");
        Self
    }
}

impl Default for PlaceholderSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SummarizerPort for PlaceholderSummarizer {
    async fn summarize(&self, text: &str, max_length: u32) -> Summary {
        let original_chars = text.chars().count();
        let max = max_length as usize;

        if original_chars <= max {
            return Summary {
                text: text.to_string(),
                original_chars,
                summary_chars: original_chars,
            };
        }

        let summary = if max <= ELLIPSIS.len() {
            // 预算放不下省略号，硬截断
            text.chars().take(max).collect()
        } else {
            let budget = max - ELLIPSIS.len();
            let head: String = text.chars().take(budget).collect();
            // 预算内尽量在词边界断开；无空白（如连续长词）则按字符硬截
            let cut = match head.rfind(char::is_whitespace) {
                Some(pos) if pos > 0 => head[..pos].trim_end().to_string(),
                _ => head,
            };
            format!("{}{}", cut, ELLIPSIS)
        };

        let summary_chars = summary.chars().count();

        tracing::debug!(
            original_chars = original_chars,
            summary_chars = summary_chars,
            max_length = max_length,
            "Placeholder summary generated"
        );

        Summary {
            text: summary,
            original_chars,
            summary_chars,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_short_text_returned_verbatim() {
        let summarizer = PlaceholderSummarizer::new();

        let summary = summarizer.summarize("Tin ngắn.", 150).await;
        assert_eq!(summary.text, "Tin ngắn.");
        assert_eq!(summary.original_chars, 9);
        assert_eq!(summary.summary_chars, 9);
    }

    #[tokio::test]
    async fn test_long_text_truncated_within_budget() {
        let summarizer = PlaceholderSummarizer::new();

        let text = "Sáng nay tại Hà Nội, lễ khai mạc kỳ họp Quốc hội đã diễn ra \
                    với sự tham dự của đông đảo đại biểu từ khắp các tỉnh thành trên cả nước.";
        let summary = summarizer.summarize(text, 50).await;

        assert!(summary.summary_chars <= 50);
        assert!(summary.text.ends_with(ELLIPSIS));
        assert_eq!(summary.original_chars, text.chars().count());
    }

    #[tokio::test]
    async fn test_unbroken_text_hard_truncated() {
        let summarizer = PlaceholderSummarizer::new();

        let text = "a".repeat(1000);
        let summary = summarizer.summarize(&text, 150).await;

        assert_eq!(summary.original_chars, 1000);
        assert_eq!(summary.summary_chars, 150);
        assert_eq!(summary.text, format!("{}{}", "a".repeat(147), ELLIPSIS));
    }

    #[tokio::test]
    async fn test_truncation_prefers_word_boundary() {
        let summarizer = PlaceholderSummarizer::new();

        let text = "Bản tin sáng nay có nhiều thông tin đáng chú ý";
        let summary = summarizer.summarize(text, 20).await;

        assert_eq!(summary.text, "Bản tin sáng nay...");
        assert!(summary.summary_chars <= 20);
    }

    #[tokio::test]
    async fn test_lengths_count_unicode_scalars() {
        let summarizer = PlaceholderSummarizer::new();

        // 每个越南语字符可能占多个字节，长度必须按字符计
        let text = "ềềềềề";
        let summary = summarizer.summarize(text, 150).await;
        assert_eq!(summary.original_chars, 5);
        assert_eq!(summary.summary_chars, 5);
    }

    #[tokio::test]
    async fn test_tiny_budget_without_ellipsis() {
        let summarizer = PlaceholderSummarizer::new();

        let summary = summarizer.summarize("xin chào các bạn", 2).await;
        assert_eq!(summary.text, "xi");
        assert_eq!(summary.summary_chars, 2);
    }
}
