//! 天气数据提供方客户端 - OpenWeatherMap风格的单实体查询接口

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::config::WeatherConfig;

/// 检索类外部调用的超时时间
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// 天气数据提供方的标识，作为该分支所有片段的来源名称
pub const PROVIDER_NAME: &str = "openweathermap";

/// 天气查询失败 - 由天气检索分支合成错误片段，不向上传播
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Error fetching weather: {body}")]
    Status { status: u16, body: String },
    #[error("Exception occurred: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Exception occurred: weather payload missing required fields")]
    MissingField,
}

/// 结构化的天气观测数据
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherObservation {
    pub condition: String,
    pub temperature: f64,
    pub humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwmResponse {
    weather: Vec<OwmCondition>,
    main: OwmMain,
}

#[derive(Debug, Deserialize)]
struct OwmCondition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    humidity: f64,
}

/// 天气客户端
#[derive(Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    config: WeatherConfig,
}

impl WeatherClient {
    /// 创建新的天气客户端
    pub fn new(config: WeatherConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http, config })
    }

    /// 查询指定城市的实时天气
    pub async fn fetch(&self, city: &str) -> Result<WeatherObservation, WeatherError> {
        let response = self
            .http
            .get(&self.config.api_base_url)
            .query(&[
                ("q", city),
                ("appid", self.config.api_key.as_str()),
                ("units", self.config.units.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(WeatherError::Status { status, body });
        }

        let parsed: OwmResponse = response.json().await?;
        let condition = parsed
            .weather
            .into_iter()
            .next()
            .map(|w| w.description)
            .ok_or(WeatherError::MissingField)?;

        Ok(WeatherObservation {
            condition,
            temperature: parsed.main.temp,
            humidity: parsed.main.humidity,
        })
    }
}
