use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

/// LLM Provider类型
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub enum LLMProvider {
    #[serde(rename = "openai")]
    #[default]
    OpenAI,
    #[serde(rename = "moonshot")]
    Moonshot,
    #[serde(rename = "deepseek")]
    DeepSeek,
    #[serde(rename = "mistral")]
    Mistral,
    #[serde(rename = "openrouter")]
    OpenRouter,
    #[serde(rename = "anthropic")]
    Anthropic,
    #[serde(rename = "gemini")]
    Gemini,
    #[serde(rename = "ollama")]
    Ollama,
}

impl std::fmt::Display for LLMProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LLMProvider::OpenAI => write!(f, "openai"),
            LLMProvider::Moonshot => write!(f, "moonshot"),
            LLMProvider::DeepSeek => write!(f, "deepseek"),
            LLMProvider::Mistral => write!(f, "mistral"),
            LLMProvider::OpenRouter => write!(f, "openrouter"),
            LLMProvider::Anthropic => write!(f, "anthropic"),
            LLMProvider::Gemini => write!(f, "gemini"),
            LLMProvider::Ollama => write!(f, "ollama"),
        }
    }
}

impl std::str::FromStr for LLMProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(LLMProvider::OpenAI),
            "moonshot" => Ok(LLMProvider::Moonshot),
            "deepseek" => Ok(LLMProvider::DeepSeek),
            "mistral" => Ok(LLMProvider::Mistral),
            "openrouter" => Ok(LLMProvider::OpenRouter),
            "anthropic" => Ok(LLMProvider::Anthropic),
            "gemini" => Ok(LLMProvider::Gemini),
            "ollama" => Ok(LLMProvider::Ollama),
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }
}

/// 应用程序配置
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    /// LLM模型配置
    pub llm: LLMConfig,

    /// 查询向量化配置
    pub embedding: EmbeddingConfig,

    /// 文档索引检索配置
    pub search: SearchConfig,

    /// 天气数据提供方配置
    pub weather: WeatherConfig,

    /// 语料入库配置
    pub ingest: IngestConfig,

    /// 是否启用详细日志
    pub verbose: bool,
}

/// LLM模型配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LLMConfig {
    /// LLM Provider类型
    pub provider: LLMProvider,

    /// LLM API KEY
    pub api_key: String,

    /// LLM API基地址
    pub api_base_url: String,

    /// 高能效模型，用于查询分类等常规推理任务
    pub model_efficient: String,

    /// 高质量模型，用于最终总结等复杂推理任务
    pub model_powerful: String,

    /// 最大tokens
    pub max_tokens: u32,

    /// 温度
    pub temperature: f64,

    /// 单次调用超时时间（秒）
    pub timeout_seconds: u64,
}

/// 查询向量化配置（OpenAI兼容的embeddings接口）
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Embedding API基地址
    pub api_base_url: String,

    /// Embedding API KEY
    pub api_key: String,

    /// Embedding模型名称
    pub model: String,

    /// 向量维度，与文档索引的向量字段保持一致
    pub dimensions: usize,
}

/// 文档索引检索配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct SearchConfig {
    /// 检索服务端点
    pub endpoint: String,

    /// 检索服务API KEY
    pub api_key: String,

    /// 索引名称
    pub index: String,

    /// REST API版本
    pub api_version: String,
}

/// 天气数据提供方配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct WeatherConfig {
    /// 天气API基地址
    pub api_base_url: String,

    /// 天气API KEY
    pub api_key: String,

    /// 温度单位
    pub units: String,
}

/// 语料入库配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct IngestConfig {
    /// 只入库指定扩展名的文件
    pub included_extensions: Vec<String>,

    /// 单文件大小上限（字节）
    pub max_file_size: u64,
}

impl Config {
    /// 从文件加载配置
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let mut file =
            File::open(path).context(format!("Failed to open config file: {:?}", path))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            provider: LLMProvider::default(),
            api_key: std::env::var("RAGPILOT_LLM_API_KEY").unwrap_or_default(),
            api_base_url: String::from("https://api.openai.com/v1"),
            model_efficient: String::from("gpt-4o-mini"),
            model_powerful: String::from("gpt-4o"),
            max_tokens: 8192,
            temperature: 0.0,
            timeout_seconds: 30,
        }
    }
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::from("https://api.openai.com/v1"),
            api_key: std::env::var("RAGPILOT_EMBEDDING_API_KEY")
                .or_else(|_| std::env::var("RAGPILOT_LLM_API_KEY"))
                .unwrap_or_default(),
            model: String::from("text-embedding-3-small"),
            dimensions: 1536,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: std::env::var("RAGPILOT_SEARCH_ENDPOINT").unwrap_or_default(),
            api_key: std::env::var("RAGPILOT_SEARCH_API_KEY").unwrap_or_default(),
            index: String::from("documents"),
            api_version: String::from("2024-07-01"),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::from("http://api.openweathermap.org/data/2.5/weather"),
            api_key: std::env::var("RAGPILOT_WEATHER_API_KEY").unwrap_or_default(),
            units: String::from("metric"),
        }
    }
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            included_extensions: vec!["md".to_string(), "txt".to_string()],
            max_file_size: 1024 * 1024, // 1MB
        }
    }
}

// Include tests
#[cfg(test)]
mod tests;
