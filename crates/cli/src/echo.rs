//! Status lines on stderr. Menus own stdout.

use std::path::Path;

use owo_colors::OwoColorize;
use wikiwalk_core::{Article, ExtractConfig, FetchConfig};

use crate::VERSION;

pub fn print_banner() {
    eprintln!("\n{} {}", "Wikiwalk".bold().bright_blue(), format!("v{}", VERSION).dimmed());
    eprintln!("{}", "Read Wikipedia articles from the terminal\n".dimmed());
}

/// One line per setting that shapes fetching or extraction
pub fn print_settings(fetch: &FetchConfig, extract: &ExtractConfig) {
    let setting = |name: &str, value: &dyn std::fmt::Display| {
        eprintln!("  {} {}", format!("{:<18}", name).dimmed(), value.bright_white());
    };

    setting("site", &fetch.base_url.underline());
    setting("user agent", &fetch.user_agent);
    setting("internal links", &format!("up to {}", extract.internal_link_limit));
    setting("citation markers", &if extract.strip_references { "stripped" } else { "kept" });
    eprintln!();
}

/// Reports a JSON dump written to `path`
pub fn print_saved(path: &Path, article: &Article) {
    eprintln!(
        "{} {} {} {}",
        "✓".green(),
        article.title.bright_green().bold(),
        "→".dimmed(),
        path.display().bright_white()
    );
    eprintln!(
        "  {}",
        format!(
            "{} paragraphs, {} related, {} internal links",
            article.paragraphs.len(),
            article.related_links.len(),
            article.internal_links.len()
        )
        .dimmed()
    );
}
