pub mod classifier;
pub mod context;
pub mod engine;
pub mod retrieval;
pub mod summarizer;
