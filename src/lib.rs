pub mod cli;
pub mod config;
pub mod ingest;
pub mod llm;
pub mod search;
pub mod types;
pub mod weather;
pub mod workflow;

// Re-export commonly used types
pub use config::Config;
pub use types::{Passage, QueryCategory, RagResponse, SourceRef};
pub use workflow::engine::launch;
