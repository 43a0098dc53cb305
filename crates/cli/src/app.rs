use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Context;
use owo_colors::OwoColorize;
use wikiwalk_core::{Article, Extraction, PageTarget, WikiError, fetch_file};

use crate::console::Console;
use crate::echo;
use crate::loader::PageLoader;
use crate::navigator::{Navigator, PAUSE_PROMPT};

const WELCOME: &str = "Консольный браузер Википедии";
const QUERY_PROMPT: &str = "Введите поисковый запрос: ";
const LOOKUP_FAILED: &str = "Не удалось получить страницу. Проверьте запрос и попробуйте снова.";
const EXIT_PROMPT: &str = "Нажмите Enter для выхода...";
const CONTENT_MISSING: &str = "Не удалось найти основной контент страницы.";

/// Where the first article comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Search(String),
    Url(String),
    File(String),
}

#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Print the article as JSON instead of opening the menu
    pub dump: bool,
    /// Write the JSON dump here instead of stdout
    pub output: Option<std::path::PathBuf>,
}

/// Loads the first article and hands it to the navigator.
///
/// With no `source` the user is asked for a search term. A failed first
/// lookup is reported and ends the program with an error; the menu is never
/// shown in that case.
pub fn run<R, W, L>(mut console: Console<R, W>, mut loader: L, source: Option<Source>, options: &Options) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
    L: PageLoader,
{
    let source = match source {
        Some(source) => source,
        None => match ask_query(&mut console)? {
            Some(query) => Source::Search(query),
            None => return Ok(()),
        },
    };

    let extraction = match load_initial(&mut loader, &source) {
        Ok(extraction) => extraction,
        Err(err) => {
            console.say(&describe_failure(&err).red().to_string())?;
            console.say(LOOKUP_FAILED)?;
            console.pause(EXIT_PROMPT)?;
            return Err(anyhow::Error::new(err).context("Failed to load the initial article"));
        }
    };

    if options.dump {
        return dump(&mut console, &extraction.article, options.output.as_deref());
    }

    if !extraction.content_found {
        console.say(CONTENT_MISSING)?;
        if !console.pause(PAUSE_PROMPT)? {
            return Ok(());
        }
    }

    let mut navigator = Navigator::new(console, loader);
    navigator.run(extraction.article)?;
    Ok(())
}

fn ask_query<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<Option<String>> {
    console.say(&WELCOME.bold().to_string())?;
    console.say("")?;
    console.prompt(QUERY_PROMPT)
}

fn load_initial<L: PageLoader>(loader: &mut L, source: &Source) -> wikiwalk_core::Result<Extraction> {
    match source {
        Source::Search(query) => loader.load(&PageTarget::search(query.as_str())),
        Source::Url(url) => loader.load(&PageTarget::url(url.as_str())),
        Source::File(path) => fetch_file(path).map(|html| loader.load_markup(&html)),
    }
}

fn describe_failure(err: &WikiError) -> String {
    match err {
        WikiError::HttpStatus { status } => format!("Ошибка при получении страницы: {}", status),
        WikiError::EmptyQuery => "Поисковый запрос пуст.".to_string(),
        other => format!("Произошла ошибка: {}", other),
    }
}

fn dump<R: BufRead, W: Write>(console: &mut Console<R, W>, article: &Article, output: Option<&Path>) -> anyhow::Result<()> {
    let json = article.to_json_string().context("Failed to serialize article")?;

    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            echo::print_saved(path, article);
        }
        None => console.say(&json)?,
    }

    Ok(())
}
