//! 文档检索策略 - 查询向量化后在文档索引上执行混合检索

use async_trait::async_trait;

use crate::llm::embedding::EmbeddingClient;
use crate::search::{SearchClient, SearchHit};
use crate::types::Passage;
use crate::workflow::retrieval::{RetrievalError, Retriever};

/// 最终返回的片段条数
const SEARCH_TOP: usize = 5;
/// 向量近邻候选池大小，与词法排序合并前的宽召回
const VECTOR_CANDIDATES: usize = 20;

/// 文档检索策略
pub struct DocumentRetriever {
    embedding_client: EmbeddingClient,
    search_client: SearchClient,
    verbose: bool,
}

impl DocumentRetriever {
    /// 创建新的文档检索策略
    pub fn new(
        embedding_client: EmbeddingClient,
        search_client: SearchClient,
        verbose: bool,
    ) -> Self {
        Self {
            embedding_client,
            search_client,
            verbose,
        }
    }
}

#[async_trait]
impl Retriever for DocumentRetriever {
    async fn retrieve(
        &self,
        query: &str,
        _city: Option<&str>,
    ) -> Result<Vec<Passage>, RetrievalError> {
        if self.verbose {
            println!("🔹 [document_retriever] 执行混合检索: '{}'", query);
        }

        let vector = self.embedding_client.embed(query).await?;

        let hits = self
            .search_client
            .hybrid_search(query, &vector, SEARCH_TOP, VECTOR_CANDIDATES)
            .await?;

        if self.verbose {
            println!("✅ [document_retriever] 检索到 {} 个片段", hits.len());
        }

        Ok(hits.into_iter().map(passage_from_hit).collect())
    }
}

/// 将索引命中映射为统一的Passage结构
pub fn passage_from_hit(hit: SearchHit) -> Passage {
    Passage {
        chunk_id: hit.chunk_id,
        file_name: hit.file_name,
        content: hit.chunk_text,
        file_path: hit.file_path,
    }
}
