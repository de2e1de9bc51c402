use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod ingest;
mod llm;
mod search;
mod types;
mod weather;
mod workflow;

use crate::workflow::context::PipelineContext;
use crate::workflow::engine::launch;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Args::parse();
    let query = args.query.clone();
    let corpus = args.corpus.clone();
    let config = args.into_config();

    if let Some(corpus_path) = corpus {
        let context = PipelineContext::new(config)?;
        ingest::execute(&context, &corpus_path).await?;
        return Ok(());
    }

    match query {
        Some(query) => {
            let response = launch(&config, &query).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        None => Err(anyhow::anyhow!(
            "请通过 --query 提供查询，或通过 --corpus 指定入库语料目录"
        )),
    }
}
