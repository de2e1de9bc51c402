#[cfg(test)]
mod tests {
    use crate::config::{
        Config, EmbeddingConfig, IngestConfig, LLMConfig, LLMProvider, SearchConfig, WeatherConfig,
    };
    use tempfile::TempDir;

    #[test]
    fn test_llm_provider_default() {
        let provider = LLMProvider::default();
        assert_eq!(provider, LLMProvider::OpenAI);
    }

    #[test]
    fn test_llm_provider_from_str() {
        assert_eq!(
            "openai".parse::<LLMProvider>().unwrap(),
            LLMProvider::OpenAI
        );
        assert_eq!(
            "moonshot".parse::<LLMProvider>().unwrap(),
            LLMProvider::Moonshot
        );
        assert_eq!(
            "deepseek".parse::<LLMProvider>().unwrap(),
            LLMProvider::DeepSeek
        );
        assert_eq!(
            "mistral".parse::<LLMProvider>().unwrap(),
            LLMProvider::Mistral
        );
        assert_eq!(
            "openrouter".parse::<LLMProvider>().unwrap(),
            LLMProvider::OpenRouter
        );
        assert_eq!(
            "anthropic".parse::<LLMProvider>().unwrap(),
            LLMProvider::Anthropic
        );
        assert_eq!(
            "gemini".parse::<LLMProvider>().unwrap(),
            LLMProvider::Gemini
        );
        assert_eq!(
            "ollama".parse::<LLMProvider>().unwrap(),
            LLMProvider::Ollama
        );

        assert!("invalid".parse::<LLMProvider>().is_err());
    }

    #[test]
    fn test_llm_provider_display() {
        assert_eq!(LLMProvider::OpenAI.to_string(), "openai");
        assert_eq!(LLMProvider::Moonshot.to_string(), "moonshot");
        assert_eq!(LLMProvider::DeepSeek.to_string(), "deepseek");
        assert_eq!(LLMProvider::Mistral.to_string(), "mistral");
        assert_eq!(LLMProvider::OpenRouter.to_string(), "openrouter");
        assert_eq!(LLMProvider::Anthropic.to_string(), "anthropic");
        assert_eq!(LLMProvider::Gemini.to_string(), "gemini");
        assert_eq!(LLMProvider::Ollama.to_string(), "ollama");
    }

    #[test]
    fn test_llm_config_default() {
        let config = LLMConfig::default();

        assert_eq!(config.provider, LLMProvider::OpenAI);
        // api_key may be empty if env var is not set
        assert!(!config.api_base_url.is_empty());
        assert!(!config.model_efficient.is_empty());
        assert!(!config.model_powerful.is_empty());
        assert_eq!(config.max_tokens, 8192);
        assert_eq!(config.temperature, 0.0);
        assert_eq!(config.timeout_seconds, 30);
    }

    #[test]
    fn test_embedding_config_default() {
        let config = EmbeddingConfig::default();

        assert!(!config.api_base_url.is_empty());
        assert_eq!(config.model, "text-embedding-3-small");
        assert_eq!(config.dimensions, 1536);
    }

    #[test]
    fn test_search_config_default() {
        let config = SearchConfig::default();

        assert_eq!(config.index, "documents");
        assert!(!config.api_version.is_empty());
    }

    #[test]
    fn test_weather_config_default() {
        let config = WeatherConfig::default();

        assert_eq!(
            config.api_base_url,
            "http://api.openweathermap.org/data/2.5/weather"
        );
        assert_eq!(config.units, "metric");
    }

    #[test]
    fn test_ingest_config_default() {
        let config = IngestConfig::default();

        assert_eq!(config.included_extensions, vec!["md", "txt"]);
        assert_eq!(config.max_file_size, 1024 * 1024);
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert!(!config.verbose);
        assert_eq!(config.llm.provider, LLMProvider::OpenAI);
    }

    #[test]
    fn test_config_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("ragpilot.toml");

        let content = r#"
verbose = true

[llm]
provider = "deepseek"
model_efficient = "deepseek-chat"
model_powerful = "deepseek-reasoner"
temperature = 0.2

[search]
endpoint = "https://search.example.net"
index = "reports"

[weather]
units = "imperial"
"#;
        std::fs::write(&config_path, content).unwrap();

        let config = Config::from_file(&config_path).unwrap();

        assert!(config.verbose);
        assert_eq!(config.llm.provider, LLMProvider::DeepSeek);
        assert_eq!(config.llm.model_efficient, "deepseek-chat");
        assert_eq!(config.llm.model_powerful, "deepseek-reasoner");
        assert_eq!(config.llm.temperature, 0.2);
        // 未出现在文件中的字段保持默认值
        assert_eq!(config.llm.timeout_seconds, 30);
        assert_eq!(config.search.endpoint, "https://search.example.net");
        assert_eq!(config.search.index, "reports");
        assert_eq!(config.weather.units, "imperial");
        assert_eq!(config.embedding.dimensions, 1536);
    }

    #[test]
    fn test_config_from_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("absent.toml");

        assert!(Config::from_file(&config_path).is_err());
    }
}
