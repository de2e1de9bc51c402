use anyhow::Result;

use crate::{
    config::Config, llm::client::LLMClient, llm::embedding::EmbeddingClient, search::SearchClient,
    weather::WeatherClient,
};

/// 工作流上下文 - 聚合四个外部协作方的客户端。
/// 上下文内不存放任何跨查询的可变状态，可安全地在并发查询间共享。
#[derive(Clone)]
pub struct PipelineContext {
    /// LLM调用器，分类器与总结器共用
    pub llm_client: LLMClient,
    /// 查询向量化客户端
    pub embedding_client: EmbeddingClient,
    /// 文档索引检索客户端
    pub search_client: SearchClient,
    /// 天气数据客户端
    pub weather_client: WeatherClient,
    /// 配置
    pub config: Config,
}

impl PipelineContext {
    /// 创建新的工作流上下文
    pub fn new(config: Config) -> Result<Self> {
        let llm_client = LLMClient::new(config.clone())?;
        let embedding_client = EmbeddingClient::new(config.embedding.clone())?;
        let search_client = SearchClient::new(config.search.clone())?;
        let weather_client = WeatherClient::new(config.weather.clone())?;

        Ok(Self {
            llm_client,
            embedding_client,
            search_client,
            weather_client,
            config,
        })
    }
}
