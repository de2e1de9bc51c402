//! 检索调度 - 由分类结果选择唯一的检索策略

use async_trait::async_trait;
use thiserror::Error;

use crate::llm::embedding::EmbeddingError;
use crate::search::SearchError;
use crate::types::Passage;

pub mod document;
pub mod weather;

pub use document::DocumentRetriever;
pub use weather::WeatherRetriever;

/// 检索失败 - 引擎将其降级为空片段序列，不向宿主传播
#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("查询向量化失败: {0}")]
    Embedding(#[from] EmbeddingError),
    #[error("混合检索执行失败: {0}")]
    Search(#[from] SearchError),
}

/// 检索策略的统一契约。两种策略输出同构的Passage序列，
/// 因此总结器对检索来源无感知。
#[async_trait]
pub trait Retriever: Send + Sync {
    /// 执行检索。`city`仅被外部数据策略使用。
    async fn retrieve(&self, query: &str, city: Option<&str>)
    -> Result<Vec<Passage>, RetrievalError>;
}
