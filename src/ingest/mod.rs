//! 语料入库 - 将语料目录切分、向量化并上传到文档索引

use anyhow::{Context, Result};
use std::path::Path;
use uuid::Uuid;
use walkdir::WalkDir;

use crate::search::IndexDocument;
use crate::workflow::context::PipelineContext;

/// 切分窗口大小（字符）
const CHUNK_SIZE: usize = 800;
/// 相邻切片的重叠长度（字符）
const CHUNK_OVERLAP: usize = 200;

/// 执行语料入库，返回上传的切片总数
pub async fn execute(context: &PipelineContext, corpus_path: &Path) -> Result<usize> {
    println!("📚 [ingest] 开始入库语料目录: {:?}", corpus_path);

    let mut total_chunks = 0;

    for entry in WalkDir::new(corpus_path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();

        if !has_included_extension(path, &context.config.ingest.included_extensions) {
            continue;
        }

        let metadata = entry
            .metadata()
            .context(format!("Failed to read metadata: {:?}", path))?;
        if metadata.len() > context.config.ingest.max_file_size {
            eprintln!("⚠️ [ingest] 文件超过大小上限，跳过: {:?}", path);
            continue;
        }

        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read corpus file: {:?}", path))?;
        if content.trim().is_empty() {
            eprintln!("⚠️ [ingest] 文件无可用文本，跳过: {:?}", path);
            continue;
        }

        let uploaded = ingest_file(context, path, &content).await?;
        total_chunks += uploaded;

        if context.config.verbose {
            println!("✅ [ingest] {:?} 上传 {} 个切片", path, uploaded);
        }
    }

    println!("🎉 [ingest] 入库完成，共上传 {} 个切片", total_chunks);
    Ok(total_chunks)
}

/// 单文件入库：切分、逐片向量化、批量上传
async fn ingest_file(context: &PipelineContext, path: &Path, content: &str) -> Result<usize> {
    let file_name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    let file_path = path.to_string_lossy().to_string();

    let chunks = chunk_text(content, CHUNK_SIZE, CHUNK_OVERLAP);
    let total_chunks = chunks.len();

    let mut documents = Vec::with_capacity(total_chunks);
    for (idx, chunk) in chunks.into_iter().enumerate() {
        let embedding = context
            .embedding_client
            .embed(&chunk)
            .await
            .context(format!("Failed to embed chunk {} of {:?}", idx + 1, path))?;

        documents.push(IndexDocument::upload(
            Uuid::new_v4().to_string(),
            file_name.clone(),
            file_path.clone(),
            idx + 1,
            total_chunks,
            chunk,
            embedding,
        ));
    }

    context
        .search_client
        .upload_documents(&documents)
        .await
        .context(format!("Failed to upload documents for {:?}", path))?;

    Ok(documents.len())
}

/// 以重叠滑动窗口切分文本（按字符计数，保证UTF-8安全）
pub fn chunk_text(text: &str, chunk_size: usize, overlap: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let step = chunk_size.saturating_sub(overlap).max(1);

    let mut chunks = Vec::new();
    let mut start = 0;
    while start < chars.len() {
        let end = (start + chunk_size).min(chars.len());
        chunks.push(chars[start..end].iter().collect());
        start += step;
    }

    chunks
}

fn has_included_extension(path: &Path, included: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            included.iter().any(|included| included.eq_ignore_ascii_case(&ext))
        })
        .unwrap_or(false)
}
