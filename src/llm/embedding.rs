//! 查询向量化客户端 - OpenAI兼容的embeddings接口

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::config::EmbeddingConfig;

/// 检索类外部调用的超时时间
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// 向量化失败 - 由检索分支按降级策略消化，不向上传播
#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding服务返回异常状态 {status}: {body}")]
    Status { status: u16, body: String },
    #[error("请求embedding服务失败: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("embedding服务返回空结果")]
    Empty,
    #[error("embedding维度不匹配，期望 {expected} 实际 {actual}")]
    Dimension { expected: usize, actual: usize },
}

#[derive(Debug, Serialize)]
struct EmbeddingRequest {
    model: String,
    input: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

/// 向量化客户端
#[derive(Clone)]
pub struct EmbeddingClient {
    http: reqwest::Client,
    config: EmbeddingConfig,
}

impl EmbeddingClient {
    /// 创建新的向量化客户端
    pub fn new(config: EmbeddingConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http, config })
    }

    /// 将文本转换为固定维度的向量表示
    pub async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let url = format!(
            "{}/embeddings",
            self.config.api_base_url.trim_end_matches('/')
        );
        let request = EmbeddingRequest {
            model: self.config.model.clone(),
            input: vec![text.to_string()],
        };

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(EmbeddingError::Status { status, body });
        }

        let parsed: EmbeddingResponse = response.json().await?;
        let vector = parsed
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or(EmbeddingError::Empty)?;

        // 维度与索引的向量字段固定绑定
        if self.config.dimensions != 0 && vector.len() != self.config.dimensions {
            return Err(EmbeddingError::Dimension {
                expected: self.config.dimensions,
                actual: vector.len(),
            });
        }

        Ok(vector)
    }
}
