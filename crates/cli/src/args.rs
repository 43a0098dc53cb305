// Also compiled into build.rs for shell completions; keep it free of crate imports.

use std::path::PathBuf;

use clap::Parser;

/// Browse Russian Wikipedia articles paragraph by paragraph
#[derive(Parser, Debug)]
#[command(name = "wikiwalk")]
#[command(author = "Wikiwalk Contributors")]
#[command(version)]
#[command(about = "Browse Wikipedia articles from the terminal", long_about = None)]
pub struct Args {
    /// Search term for the first article; asked for when omitted
    #[arg(value_name = "QUERY")]
    pub query: Vec<String>,

    /// Open this article URL instead of searching
    #[arg(long, value_name = "URL", conflicts_with_all = ["query", "file"])]
    pub url: Option<String>,

    /// Read the first article from a saved HTML page
    #[arg(long, value_name = "FILE", conflicts_with = "query")]
    pub file: Option<String>,

    /// Print the extracted article as JSON and exit
    #[arg(long)]
    pub dump: bool,

    /// Output file for --dump (default: stdout)
    #[arg(short, long, value_name = "FILE", requires = "dump")]
    pub output: Option<PathBuf>,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    pub user_agent: Option<String>,

    /// Remove citation markers such as [1] from paragraph text
    #[arg(long)]
    pub strip_references: bool,

    /// Keep terminal scrollback instead of clearing between screens
    #[arg(long)]
    pub no_clear: bool,

    /// Site search terms and links are resolved against
    #[arg(long, value_name = "URL", default_value = "https://ru.wikipedia.org", hide = true)]
    pub base_url: String,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
