pub mod client;
pub mod embedding;
