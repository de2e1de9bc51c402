//! 工作流引擎 - START → CLASSIFIED → RETRIEVED → SUMMARIZED 的顺序状态机

use anyhow::Result;

use crate::config::Config;
use crate::types::{Passage, QueryCategory, RagResponse, SourceRef};
use crate::workflow::classifier;
use crate::workflow::context::PipelineContext;
use crate::workflow::retrieval::{DocumentRetriever, Retriever, WeatherRetriever};
use crate::workflow::summarizer;

/// 工作流状态兜底缺失总结时的固定答案
pub const NO_SUMMARY_SENTINEL: &str = "No summary found.";

/// 工作流状态 - 单次查询的全部中间产物。
/// 每个步骤消费上一状态并产出新状态，每个字段恰好被写入一次。
#[derive(Debug, Clone)]
pub struct WorkflowState {
    /// 原始查询，入口处写入后不再变更
    pub query: String,
    /// 分类器写入的查询类别
    pub category: Option<QueryCategory>,
    /// 仅当类别为外部数据且识别出城市时才有值
    pub city: Option<String>,
    /// 唯一一个检索策略产出的片段序列
    pub retrieved_passages: Option<Vec<Passage>>,
    /// 总结器产出的最终答案
    pub final_answer: Option<String>,
    /// 按来源去重的出处元数据
    pub source_metadata: Option<Vec<SourceRef>>,
}

impl WorkflowState {
    /// 以初始查询创建新状态（START）
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
            category: None,
            city: None,
            retrieved_passages: None,
            final_answer: None,
            source_metadata: None,
        }
    }

    /// 提取最终输出（SUMMARIZED为终态）
    pub fn into_response(self) -> RagResponse {
        RagResponse {
            summary: self
                .final_answer
                .unwrap_or_else(|| NO_SUMMARY_SENTINEL.to_string()),
            metadata: self.source_metadata.unwrap_or_default(),
        }
    }
}

/// 工作流引擎。每次run创建独立的状态实例，引擎自身无可变状态，
/// 可安全地并发处理多个查询。
pub struct WorkflowEngine {
    context: PipelineContext,
    document_retriever: DocumentRetriever,
    weather_retriever: WeatherRetriever,
}

impl WorkflowEngine {
    /// 创建新的工作流引擎
    pub fn new(context: PipelineContext) -> Self {
        let verbose = context.config.verbose;
        let document_retriever = DocumentRetriever::new(
            context.embedding_client.clone(),
            context.search_client.clone(),
            verbose,
        );
        let weather_retriever = WeatherRetriever::new(context.weather_client.clone(), verbose);

        Self {
            context,
            document_retriever,
            weather_retriever,
        }
    }

    /// 执行完整工作流。任何外部失败都在各步骤内降级消化，
    /// 最坏情况也会返回一个有效的降级结果，绝不向宿主抛出错误。
    pub async fn run(&self, query: &str) -> RagResponse {
        let state = WorkflowState::new(query);
        let state = self.classify_step(state).await;
        let state = self.retrieve_step(state).await;
        let state = self.summarize_step(state).await;
        state.into_response()
    }

    /// START → CLASSIFIED：写入category与city
    async fn classify_step(&self, state: WorkflowState) -> WorkflowState {
        if self.context.config.verbose {
            println!("🔹 [engine] 分类查询: '{}'", state.query);
        }

        let classification = classifier::classify(&self.context.llm_client, &state.query).await;

        if self.context.config.verbose {
            println!(
                "🔹 [engine] 分类结果: category={} city={:?}",
                classification.category, classification.city
            );
        }

        WorkflowState {
            category: Some(classification.category),
            city: classification.city,
            ..state
        }
    }

    /// CLASSIFIED → RETRIEVED：按类别选择唯一的检索策略，写入retrieved_passages。
    /// 检索失败降级为空片段序列，由总结器的空上下文分支兜底。
    async fn retrieve_step(&self, state: WorkflowState) -> WorkflowState {
        let category = state.category.unwrap_or_default();

        let retriever: &dyn Retriever = match category {
            QueryCategory::ExternalData => &self.weather_retriever,
            QueryCategory::Document => &self.document_retriever,
        };

        let passages = match retriever.retrieve(&state.query, state.city.as_deref()).await {
            Ok(passages) => passages,
            Err(e) => {
                eprintln!("⚠️ [engine] 检索失败，降级为空结果: {}", e);
                Vec::new()
            }
        };

        WorkflowState {
            retrieved_passages: Some(passages),
            ..state
        }
    }

    /// RETRIEVED → SUMMARIZED：写入final_answer与source_metadata
    async fn summarize_step(&self, state: WorkflowState) -> WorkflowState {
        let passages = state.retrieved_passages.clone().unwrap_or_default();

        if self.context.config.verbose {
            println!("🔹 [engine] 总结 {} 个片段", passages.len());
        }

        let outcome = summarizer::summarize(&self.context.llm_client, &passages, &state.query).await;

        WorkflowState {
            final_answer: Some(outcome.summary),
            source_metadata: Some(outcome.metadata),
            ..state
        }
    }
}

/// 启动一次查询工作流（宿主层入口）
pub async fn launch(config: &Config, query: &str) -> Result<RagResponse> {
    let context = PipelineContext::new(config.clone())?;
    let engine = WorkflowEngine::new(context);

    if config.verbose {
        println!("🚀 [launch] 开始执行查询工作流");
    }

    let response = engine.run(query).await;

    if config.verbose {
        println!("✅ [launch] 工作流执行完成");
    }

    Ok(response)
}
