//! 文档索引检索客户端 - 词法与向量混合检索的REST接口

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use thiserror::Error;

use crate::config::SearchConfig;

/// 检索类外部调用的超时时间
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// 检索失败 - 由文档检索分支按降级策略消化，不向上传播
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("检索服务返回异常状态 {status}: {body}")]
    Status { status: u16, body: String },
    #[error("请求检索服务失败: {0}")]
    Transport(#[from] reqwest::Error),
}

/// 索引命中结果，字段与索引schema一致
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub chunk_id: String,
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub chunk_text: String,
    #[serde(default)]
    pub file_path: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(rename = "value")]
    hits: Vec<SearchHit>,
}

/// 待入库的索引文档
#[derive(Debug, Clone, Serialize)]
pub struct IndexDocument {
    #[serde(rename = "@search.action")]
    pub action: String,
    pub chunk_id: String,
    pub file_name: String,
    pub file_path: String,
    pub chunk_index: usize,
    pub total_chunks: usize,
    pub chunk_text: String,
    pub chunk_size: usize,
    pub embedding: Vec<f32>,
}

/// 检索客户端
#[derive(Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    config: SearchConfig,
}

impl SearchClient {
    /// 创建新的检索客户端
    pub fn new(config: SearchConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http, config })
    }

    fn docs_url(&self, operation: &str) -> String {
        format!(
            "{}/indexes/{}/docs/{}?api-version={}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.index,
            operation,
            self.config.api_version
        )
    }

    /// 混合检索：词法匹配与向量近邻合并排序。
    /// `top`为最终返回条数，`k_nearest`为向量侧的候选池大小。
    pub async fn hybrid_search(
        &self,
        query_text: &str,
        vector: &[f32],
        top: usize,
        k_nearest: usize,
    ) -> Result<Vec<SearchHit>, SearchError> {
        let body = json!({
            "search": query_text,
            "top": top,
            "select": "chunk_id,file_name,chunk_text,file_path",
            "vectorQueries": [{
                "kind": "vector",
                "vector": vector,
                "k": k_nearest,
                "fields": "embedding",
            }],
        });

        let response = self
            .http
            .post(self.docs_url("search"))
            .header("api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Status { status, body });
        }

        let parsed: SearchResponse = response.json().await?;
        Ok(parsed.hits)
    }

    /// 批量上传索引文档（语料入库）
    pub async fn upload_documents(&self, documents: &[IndexDocument]) -> Result<(), SearchError> {
        let body = json!({ "value": documents });

        let response = self
            .http
            .post(self.docs_url("index"))
            .header("api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Status { status, body });
        }

        Ok(())
    }
}

impl IndexDocument {
    /// 以upload动作构造索引文档
    pub fn upload(
        chunk_id: String,
        file_name: String,
        file_path: String,
        chunk_index: usize,
        total_chunks: usize,
        chunk_text: String,
        embedding: Vec<f32>,
    ) -> Self {
        let chunk_size = chunk_text.len();
        Self {
            action: "upload".to_string(),
            chunk_id,
            file_name,
            file_path,
            chunk_index,
            total_chunks,
            chunk_text,
            chunk_size,
            embedding,
        }
    }
}
