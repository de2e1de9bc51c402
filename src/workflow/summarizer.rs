//! 总结器 - 将检索片段与原始查询归并为最终答案及来源元数据

use crate::llm::client::LLMClient;
use crate::types::{Passage, SourceRef};

/// 检索结果为空时的固定答案
pub const NO_RESULTS_ANSWER: &str = "No relevant information was found for your query.";
/// LLM总结失败时的固定答案
pub const SUMMARY_ERROR_ANSWER: &str = "An error occurred during summarization.";

const SUMMARIZER_SYSTEM_PROMPT: &str = r#"You are a helpful AI assistant who summarizes information only from the provided context.

**Your Task:**
1. Read all document chunks.
2. Combine the information to answer the query.
3. Keep the answer factual, concise (150-250 words), and well structured.

**Rules:**
- Do NOT use external knowledge.
- If the context is insufficient, explicitly say so."#;

/// 总结结果
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryOutcome {
    pub summary: String,
    pub metadata: Vec<SourceRef>,
}

/// 生成最终总结。片段为空时直接短路返回固定答案（不调用LLM）；
/// LLM调用失败时返回固定错误答案，但保留已构建的来源元数据。
pub async fn summarize(llm: &LLMClient, passages: &[Passage], query: &str) -> SummaryOutcome {
    if passages.is_empty() {
        return SummaryOutcome {
            summary: NO_RESULTS_ANSWER.to_string(),
            metadata: Vec::new(),
        };
    }

    let context = build_context(passages);
    let metadata = collect_sources(passages);

    let user_prompt = format!("**User Query:** {}\n\n**Context:**\n{}", query, context);

    match llm.prompt_powerful(SUMMARIZER_SYSTEM_PROMPT, &user_prompt).await {
        Ok(summary) => SummaryOutcome { summary, metadata },
        Err(e) => {
            eprintln!("⚠️ [summarizer] LLM总结失败，返回固定错误答案: {}", e);
            SummaryOutcome {
                summary: SUMMARY_ERROR_ANSWER.to_string(),
                metadata,
            }
        }
    }
}

/// 将片段按位置编号拼接为单个上下文块
pub fn build_context(passages: &[Passage]) -> String {
    passages
        .iter()
        .enumerate()
        .map(|(i, passage)| format!("Document {}:\n{}", i + 1, passage.content))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// 按来源名称去重构建元数据，保留首次出现顺序
pub fn collect_sources(passages: &[Passage]) -> Vec<SourceRef> {
    let mut seen = std::collections::HashSet::new();
    let mut sources = Vec::new();

    for passage in passages {
        if seen.insert(passage.file_name.clone()) {
            sources.push(SourceRef {
                chunk_id: passage.chunk_id.clone(),
                file_name: passage.file_name.clone(),
                file_path: passage.file_path.clone(),
            });
        }
    }

    sources
}
