//! 工作流数据模型 - 查询分类与检索结果的统一结构

use serde::{Deserialize, Serialize};

/// 查询类别 - 分类器的路由决策
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryCategory {
    /// 文档检索（向量索引中的文档内容）
    #[serde(rename = "pdf")]
    #[default]
    Document,
    /// 外部数据查询（实时天气等单实体API）
    #[serde(rename = "weather")]
    ExternalData,
}

impl std::fmt::Display for QueryCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryCategory::Document => write!(f, "pdf"),
            QueryCategory::ExternalData => write!(f, "weather"),
        }
    }
}

/// 分类结果 - 仅在分类步骤内短暂存在
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    pub category: QueryCategory,
    /// 仅当category为ExternalData且查询中出现城市名时才有值
    pub city: Option<String>,
}

impl Default for ClassificationResult {
    fn default() -> Self {
        Self {
            category: QueryCategory::Document,
            city: None,
        }
    }
}

/// 检索片段 - 两种检索策略输出的统一结构。
/// 字段与文档索引的schema保持一致，天气分支也合成同样的结构，
/// 因此总结器只需要一种实现。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Passage {
    /// 单次检索内唯一的片段ID
    pub chunk_id: String,
    /// 来源名称（文件名或外部数据提供方标识）
    pub file_name: String,
    /// 片段正文
    pub content: String,
    /// 来源路径（外部数据分支为空字符串）
    pub file_path: String,
}

/// 答案来源 - 按来源名称去重后的出处记录
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceRef {
    pub chunk_id: String,
    pub file_name: String,
    pub file_path: String,
}

/// 工作流最终输出 - 返回给宿主层（CLI / API）的结果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RagResponse {
    pub summary: String,
    pub metadata: Vec<SourceRef>,
}
