// Command-line interface

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "recipe-recommender")]
#[command(about = "Recommend recipes from a list of ingredients", long_about = None)]
pub struct Cli {
    /// YAML recipe corpus (defaults to the built-in dataset)
    #[arg(long, env = "CORPUS_PATH", global = true)]
    pub corpus: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long, env = "HOST")]
        host: Option<String>,
    },

    /// Rank recipes against an ingredient list
    Recommend {
        /// Free-text ingredients, e.g. "garlic, chicken, butter"
        query: String,

        /// Number of recipes to return
        #[arg(short = 'k', long)]
        top_k: Option<usize>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the recipes in the corpus
    Corpus,
}
