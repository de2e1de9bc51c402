use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// RagPilot - 由Rust与AI驱动的检索增强问答引擎
#[derive(Parser, Debug)]
#[command(name = "RagPilot (ragpilot-rs)")]
#[command(
    about = "AI-based retrieval-augmented query answering engine. It classifies a natural-language query, routes it to hybrid document search or a live weather lookup, and summarizes the retrieved passages into a sourced answer."
)]
#[command(author = "Sopaco")]
#[command(version)]
pub struct Args {
    /// 需要回答的自然语言查询
    #[arg(short, long)]
    pub query: Option<String>,

    /// 语料目录路径（入库模式：切分、向量化并上传到文档索引）
    #[arg(long)]
    pub corpus: Option<PathBuf>,

    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 是否启用详细日志
    #[arg(short, long)]
    pub verbose: bool,

    /// LLM Provider (openai, moonshot, deepseek, mistral, openrouter, anthropic, gemini, ollama)
    #[arg(long)]
    pub llm_provider: Option<String>,

    /// LLM API基地址
    #[arg(long)]
    pub llm_api_base_url: Option<String>,

    /// LLM API KEY
    #[arg(long)]
    pub llm_api_key: Option<String>,

    /// 高能效模型，用于查询分类等常规推理任务
    #[arg(long)]
    pub model_efficient: Option<String>,

    /// 高质量模型，用于最终总结等复杂推理任务
    #[arg(long)]
    pub model_powerful: Option<String>,

    /// 最大tokens数
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// 温度参数
    #[arg(long)]
    pub temperature: Option<f64>,

    /// Embedding模型名称
    #[arg(long)]
    pub embedding_model: Option<String>,

    /// Embedding API基地址
    #[arg(long)]
    pub embedding_api_base_url: Option<String>,

    /// 向量维度
    #[arg(long)]
    pub embedding_dimensions: Option<usize>,

    /// 文档检索服务端点
    #[arg(long)]
    pub search_endpoint: Option<String>,

    /// 文档检索索引名称
    #[arg(long)]
    pub search_index: Option<String>,

    /// 文档检索服务API KEY
    #[arg(long)]
    pub search_api_key: Option<String>,

    /// 天气API基地址
    #[arg(long)]
    pub weather_api_base_url: Option<String>,

    /// 天气API KEY
    #[arg(long)]
    pub weather_api_key: Option<String>,
}

impl Args {
    /// 将CLI参数转换为配置
    pub fn into_config(self) -> Config {
        let mut config = if let Some(config_path) = &self.config {
            // 如果显式指定了配置文件路径，从该路径加载
            match Config::from_file(config_path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("⚠️ 加载配置文件失败，使用默认配置: {}", e);
                    Config::default()
                }
            }
        } else {
            Config::default()
        };

        // CLI参数覆盖配置文件
        if self.verbose {
            config.verbose = true;
        }

        if let Some(provider) = self.llm_provider {
            match provider.parse() {
                Ok(provider) => config.llm.provider = provider,
                Err(e) => eprintln!("⚠️ 无效的LLM Provider，保持原配置: {}", e),
            }
        }
        if let Some(api_base_url) = self.llm_api_base_url {
            config.llm.api_base_url = api_base_url;
        }
        if let Some(api_key) = self.llm_api_key {
            config.llm.api_key = api_key;
        }
        if let Some(model) = self.model_efficient {
            config.llm.model_efficient = model;
        }
        if let Some(model) = self.model_powerful {
            config.llm.model_powerful = model;
        }
        if let Some(max_tokens) = self.max_tokens {
            config.llm.max_tokens = max_tokens;
        }
        if let Some(temperature) = self.temperature {
            config.llm.temperature = temperature;
        }

        if let Some(model) = self.embedding_model {
            config.embedding.model = model;
        }
        if let Some(api_base_url) = self.embedding_api_base_url {
            config.embedding.api_base_url = api_base_url;
        }
        if let Some(dimensions) = self.embedding_dimensions {
            config.embedding.dimensions = dimensions;
        }

        if let Some(endpoint) = self.search_endpoint {
            config.search.endpoint = endpoint;
        }
        if let Some(index) = self.search_index {
            config.search.index = index;
        }
        if let Some(api_key) = self.search_api_key {
            config.search.api_key = api_key;
        }

        if let Some(api_base_url) = self.weather_api_base_url {
            config.weather.api_base_url = api_base_url;
        }
        if let Some(api_key) = self.weather_api_key {
            config.weather.api_key = api_key;
        }

        config
    }
}

// Include tests
#[cfg(test)]
mod tests;
