//! Summarizer Port - 出站端口
//!
//! 新闻摘要的抽象接口。当前只有占位实现（确定性截断），
//! 等待真实摘要模型接入。

use async_trait::async_trait;

/// 摘要结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// 摘要文本
    pub text: String,
    /// 原文字符数
    pub original_chars: usize,
    /// 摘要字符数
    pub summary_chars: usize,
}

/// Summarizer Port
#[async_trait]
pub trait SummarizerPort: Send + Sync {
    /// 生成摘要
    ///
    /// 摘要字符数不超过 `max_length`
    async fn summarize(&self, text: &str, max_length: u32) -> Summary;
}
