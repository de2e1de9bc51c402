//! 查询分类器 - 将原始查询文本归类为文档检索或外部数据查询

use serde::Deserialize;

use crate::llm::client::LLMClient;
use crate::types::{ClassificationResult, QueryCategory};

const CLASSIFIER_SYSTEM_PROMPT: &str = r#"You are a strict classification assistant.
Your job is to read the user query and output a JSON object with:

- "data_type": either "weather" or "pdf"
- "city": extracted city name ONLY if data_type = "weather". Otherwise null.

Classification rules:
1. If the query asks about weather, temperature, climate, forecasts, rain, humidity, or conditions -> data_type = "weather".
2. If the query asks about information inside a PDF, document content, summarization, reading PDF pages -> data_type = "pdf".
3. City extraction rules (weather queries only):
   - Identify the city mentioned in the user query.
   - If multiple cities, choose the most likely main city.
   - If no city is mentioned -> "city": null.
4. Output must ONLY be a valid JSON object. Nothing else.

Examples:

User Query: "What's the weather in Mumbai?"
Output:
{"data_type": "weather", "city": "Mumbai"}

User Query: "Summarize the PDF for me"
Output:
{"data_type": "pdf", "city": null}

User Query: "Is it going to rain today?"
Output:
{"data_type": "weather", "city": null}"#;

/// LLM输出的原始分类载荷
#[derive(Debug, Deserialize)]
struct RawClassification {
    data_type: Option<String>,
    city: Option<String>,
}

/// 分类查询。任何失败（调用失败、JSON不合法、类别未知）都软降级为
/// 文档类别，绝不向调用方抛出错误。
pub async fn classify(llm: &LLMClient, query: &str) -> ClassificationResult {
    let user_prompt = format!("User Query: \"{}\"\nOutput:", query);

    let response = match llm.prompt_efficient(CLASSIFIER_SYSTEM_PROMPT, &user_prompt).await {
        Ok(response) => response,
        Err(e) => {
            eprintln!("⚠️ [classifier] 分类调用失败，降级为文档检索: {}", e);
            return ClassificationResult::default();
        }
    };

    parse_classification(&response)
}

/// 解析LLM返回的分类结果。去除代码围栏后做严格JSON解码，
/// 解析失败或类别未知时返回默认分类。
pub fn parse_classification(raw: &str) -> ClassificationResult {
    let cleaned = strip_code_fences(raw);

    let parsed: RawClassification = match serde_json::from_str(&cleaned) {
        Ok(parsed) => parsed,
        Err(_) => return ClassificationResult::default(),
    };

    match parsed.data_type.as_deref() {
        Some("weather") => ClassificationResult {
            category: QueryCategory::ExternalData,
            city: parsed.city.filter(|c| !c.trim().is_empty()),
        },
        Some("pdf") => ClassificationResult {
            category: QueryCategory::Document,
            city: None,
        },
        _ => ClassificationResult::default(),
    }
}

/// 去除markdown代码围栏标记
fn strip_code_fences(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("```") {
        trimmed
            .replace("```json", "")
            .replace("```", "")
            .trim()
            .to_string()
    } else {
        trimmed.to_string()
    }
}
