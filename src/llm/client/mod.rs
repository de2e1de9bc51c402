//! LLM客户端 - 提供统一的LLM服务接口

use anyhow::Result;
use std::time::Duration;

use crate::config::Config;

mod providers;

use providers::ProviderClient;

/// LLM客户端 - 单轮completion调用，带显式超时。
/// 工作流内不做重试，调用失败由各组件按降级策略消化。
#[derive(Clone)]
pub struct LLMClient {
    config: Config,
    client: ProviderClient,
}

impl LLMClient {
    /// 创建新的LLM客户端
    pub fn new(config: Config) -> Result<Self> {
        let client = ProviderClient::new(&config.llm)?;
        Ok(Self { client, config })
    }

    /// 常规推理任务（查询分类），使用高能效模型
    pub async fn prompt_efficient(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        self.prompt_with_model(&self.config.llm.model_efficient, system_prompt, user_prompt)
            .await
    }

    /// 复杂推理任务（答案总结），使用高质量模型
    pub async fn prompt_powerful(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        self.prompt_with_model(&self.config.llm.model_powerful, system_prompt, user_prompt)
            .await
    }

    async fn prompt_with_model(
        &self,
        model: &str,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String> {
        let agent = self
            .client
            .create_agent(model, system_prompt, &self.config.llm);

        let timeout = Duration::from_secs(self.config.llm.timeout_seconds);
        match tokio::time::timeout(timeout, agent.prompt(user_prompt)).await {
            Ok(result) => result,
            Err(_) => Err(anyhow::anyhow!(
                "调用模型服务超时（{}秒）",
                self.config.llm.timeout_seconds
            )),
        }
    }
}
