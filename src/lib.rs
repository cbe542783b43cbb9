pub mod config;
pub mod error;

// Similarity ranking core
pub mod ranker;

// HTTP surface
pub mod api;
pub mod web;

// Command-line interface
pub mod cli;

// Re-exports
pub use config::Settings;
pub use error::{Error, Result};
pub use ranker::{build_index, Index, QueryResult, RecipeDocument};
