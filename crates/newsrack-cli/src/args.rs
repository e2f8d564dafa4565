use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Parser)]
#[command(name = "newsrack")]
#[command(about = "Browse a category-paginated content feed with search and suggestions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// JSON file holding the item array the feed serves page by page
    #[arg(long, global = true)]
    pub feed: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Items per simulated page fetch
    #[arg(long, default_value = "20", global = true)]
    pub page_limit: usize,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the category view: buckets, initial reveals, pagination status
    Browse {
        /// Categories to expand to "show all" (repeatable)
        #[arg(long)]
        expand: Vec<String>,
    },

    /// Run a search query over the whole feed (flat results, highlighted)
    Search { query: String },

    /// Show autocomplete suggestions for a partial query
    Suggest { prefix: String },
}
