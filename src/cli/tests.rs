#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use crate::config::LLMProvider;
    use clap::Parser;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_args_minimal() {
        let args = parse(&["ragpilot-rs", "--query", "summarize the report"]);

        assert_eq!(args.query.as_deref(), Some("summarize the report"));
        assert!(args.corpus.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_into_config_defaults() {
        let args = parse(&["ragpilot-rs"]);
        let config = args.into_config();

        assert!(!config.verbose);
        assert_eq!(config.llm.provider, LLMProvider::OpenAI);
        assert_eq!(config.search.index, "documents");
    }

    #[test]
    fn test_into_config_llm_overrides() {
        let args = parse(&[
            "ragpilot-rs",
            "--llm-provider",
            "moonshot",
            "--llm-api-base-url",
            "https://api.moonshot.cn/v1",
            "--llm-api-key",
            "sk-test",
            "--model-efficient",
            "moonshot-v1-8k",
            "--model-powerful",
            "moonshot-v1-128k",
            "--max-tokens",
            "4096",
            "--temperature",
            "0.3",
        ]);
        let config = args.into_config();

        assert_eq!(config.llm.provider, LLMProvider::Moonshot);
        assert_eq!(config.llm.api_base_url, "https://api.moonshot.cn/v1");
        assert_eq!(config.llm.api_key, "sk-test");
        assert_eq!(config.llm.model_efficient, "moonshot-v1-8k");
        assert_eq!(config.llm.model_powerful, "moonshot-v1-128k");
        assert_eq!(config.llm.max_tokens, 4096);
        assert_eq!(config.llm.temperature, 0.3);
    }

    #[test]
    fn test_into_config_invalid_provider_keeps_default() {
        let args = parse(&["ragpilot-rs", "--llm-provider", "not-a-provider"]);
        let config = args.into_config();

        assert_eq!(config.llm.provider, LLMProvider::OpenAI);
    }

    #[test]
    fn test_into_config_collaborator_overrides() {
        let args = parse(&[
            "ragpilot-rs",
            "--embedding-model",
            "text-embedding-3-large",
            "--embedding-dimensions",
            "3072",
            "--search-endpoint",
            "https://search.example.net",
            "--search-index",
            "quarterly-reports",
            "--search-api-key",
            "search-key",
            "--weather-api-base-url",
            "http://127.0.0.1:8089/weather",
            "--weather-api-key",
            "weather-key",
            "--verbose",
        ]);
        let config = args.into_config();

        assert_eq!(config.embedding.model, "text-embedding-3-large");
        assert_eq!(config.embedding.dimensions, 3072);
        assert_eq!(config.search.endpoint, "https://search.example.net");
        assert_eq!(config.search.index, "quarterly-reports");
        assert_eq!(config.search.api_key, "search-key");
        assert_eq!(config.weather.api_base_url, "http://127.0.0.1:8089/weather");
        assert_eq!(config.weather.api_key, "weather-key");
        assert!(config.verbose);
    }
}
