use std::io::{self, IsTerminal};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wikiwalk_core::{DEFAULT_USER_AGENT, ExtractConfig, FetchConfig};

mod app;
mod args;
mod console;
mod echo;
mod loader;
mod navigator;
#[cfg(test)]
mod testing;

use app::{Options, Source};
use args::Args;
use console::Console;
use loader::HttpLoader;

const VERSION: &str = env!("CARGO_PKG_VERSION");

impl Args {
    fn source(&self) -> Option<Source> {
        if let Some(url) = &self.url {
            Some(Source::Url(url.clone()))
        } else if let Some(path) = &self.file {
            Some(Source::File(path.clone()))
        } else if !self.query.is_empty() {
            Some(Source::Search(self.query.join(" ")))
        } else {
            None
        }
    }
}

/// Logs go to stderr so they never mix with the menus on stdout.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "error" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("wikiwalk={level},wikiwalk_core={level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let fetch_config = FetchConfig {
        base_url: args.base_url.clone(),
        user_agent: args
            .user_agent
            .clone()
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
    };
    let extract_config =
        ExtractConfig { origin: args.base_url.clone(), strip_references: args.strip_references, ..Default::default() };

    if args.verbose {
        echo::print_banner();
        echo::print_settings(&fetch_config, &extract_config);
    }

    let loader = HttpLoader::new(fetch_config, extract_config).context("Failed to start HTTP runtime")?;

    let stdout = io::stdout();
    let clear_screen = !args.no_clear && !args.dump && stdout.is_terminal();
    let console = Console::new(io::stdin().lock(), stdout.lock(), clear_screen);
    let options = Options { dump: args.dump, output: args.output.clone() };

    app::run(console, loader, args.source(), &options)
}
