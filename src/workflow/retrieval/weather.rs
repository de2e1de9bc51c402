//! 天气检索策略 - 调用实时天气API并合成恰好一个检索片段

use async_trait::async_trait;
use uuid::Uuid;

use crate::types::Passage;
use crate::weather::{self, WeatherClient, WeatherError, WeatherObservation};
use crate::workflow::retrieval::{RetrievalError, Retriever};

/// 天气检索策略。无论成功还是失败都恰好产出一个片段，
/// 保证该分支的总结器永远有上下文可用。
pub struct WeatherRetriever {
    weather_client: WeatherClient,
    verbose: bool,
}

impl WeatherRetriever {
    /// 创建新的天气检索策略
    pub fn new(weather_client: WeatherClient, verbose: bool) -> Self {
        Self {
            weather_client,
            verbose,
        }
    }
}

#[async_trait]
impl Retriever for WeatherRetriever {
    async fn retrieve(
        &self,
        query: &str,
        city: Option<&str>,
    ) -> Result<Vec<Passage>, RetrievalError> {
        // 未识别出城市时仍以空实体发起调用，由提供方的错误响应
        // 转化为错误片段（与观测到的原始行为一致）
        let city = city.unwrap_or("");

        if self.verbose {
            println!("🌦️ [weather_retriever] 查询城市天气: '{}'", city);
        }

        let passage = match self.weather_client.fetch(city).await {
            Ok(observation) => render_report(query, city, &observation),
            Err(e) => {
                eprintln!("⚠️ [weather_retriever] 天气查询失败，合成错误片段: {}", e);
                render_error(&e)
            }
        };

        Ok(vec![passage])
    }
}

/// 将结构化天气观测渲染为可读的报告片段
pub fn render_report(query: &str, city: &str, observation: &WeatherObservation) -> Passage {
    let content = format!(
        "Weather report for {}:\n- Condition: {}\n- Temperature: {}°C\n- Humidity: {}%\n- User Query: {}",
        city, observation.condition, observation.temperature, observation.humidity, query
    );
    synthesize(content)
}

/// 将失败详情渲染为错误片段，与成功片段同构
pub fn render_error(error: &WeatherError) -> Passage {
    synthesize(error.to_string())
}

fn synthesize(content: String) -> Passage {
    Passage {
        chunk_id: Uuid::new_v4().to_string(),
        file_name: weather::PROVIDER_NAME.to_string(),
        content,
        file_path: String::new(),
    }
}
