//! Interactive article menu.
//!
//! The four interactive screens (article menu, paragraph pager and the two
//! link pickers) share one transition function, [`step`], which maps the
//! current screen and one line of input to a [`Transition`]. Invalid input
//! always yields [`Transition::Stay`], so every screen re-prompts the same
//! way. The current [`Article`] is owned by [`Navigator::run`] and replaced
//! only when a followed link loads successfully.

use std::io::{self, BufRead, Write};

use owo_colors::OwoColorize;
use wikiwalk_core::{Article, LinkRef, PageTarget};

use crate::console::Console;
use crate::loader::PageLoader;

pub const PAUSE_PROMPT: &str = "Нажмите Enter для продолжения...";
const FAREWELL: &str = "Выход из программы...";
const BACK_TO_MENU: &str = "Вернуться к меню статьи";

/// Which screen is on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    /// Zero-based index of the paragraph shown.
    Pager { cursor: usize },
    Related,
    Internal,
}

/// Message shown before re-prompting on the same screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    InvalidChoice,
    NotANumber,
    NoParagraphs,
    NoRelatedLinks,
    NoInternalLinks,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Self::InvalidChoice => "Некорректный ввод.",
            Self::NotANumber => "Пожалуйста, введите число.",
            Self::NoParagraphs => "В статье нет параграфов.",
            Self::NoRelatedLinks => "Связанные страницы не найдены.",
            Self::NoInternalLinks => "Внутренние ссылки не найдены.",
        }
    }
}

/// Outcome of one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Stay(Notice),
    Goto(Screen),
    Follow(String),
    Quit,
}

/// Index after `cursor`, wrapping to the first paragraph.
pub fn next_paragraph(cursor: usize, total: usize) -> usize {
    if total == 0 { 0 } else { (cursor + 1) % total }
}

/// Index before `cursor`, wrapping to the last paragraph.
pub fn previous_paragraph(cursor: usize, total: usize) -> usize {
    if total == 0 { 0 } else { (cursor + total - 1) % total }
}

/// Decides what one line of input does on `screen`.
///
/// Menu and pager choices must match exactly, so `" 1 "` is rejected. Picker
/// numbers tolerate surrounding whitespace.
pub fn step(article: &Article, screen: Screen, input: &str) -> Transition {
    match screen {
        Screen::Menu => match input {
            "1" if article.has_paragraphs() => Transition::Goto(Screen::Pager { cursor: 0 }),
            "1" => Transition::Stay(Notice::NoParagraphs),
            "2" if article.related_links.is_empty() => Transition::Stay(Notice::NoRelatedLinks),
            "2" => Transition::Goto(Screen::Related),
            "3" if article.internal_links.is_empty() => Transition::Stay(Notice::NoInternalLinks),
            "3" => Transition::Goto(Screen::Internal),
            "4" => Transition::Quit,
            _ => Transition::Stay(Notice::InvalidChoice),
        },
        Screen::Pager { cursor } => {
            let total = article.paragraphs.len();
            match input {
                "1" => Transition::Goto(Screen::Pager { cursor: next_paragraph(cursor, total) }),
                "2" => Transition::Goto(Screen::Pager { cursor: previous_paragraph(cursor, total) }),
                "3" => Transition::Goto(Screen::Menu),
                _ => Transition::Stay(Notice::InvalidChoice),
            }
        }
        Screen::Related => pick(&article.related_links, input.trim()),
        Screen::Internal => pick(&article.internal_links, input.trim()),
    }
}

/// Links are numbered from 1; `len + 1` returns to the menu.
fn pick(links: &[LinkRef], input: &str) -> Transition {
    let Ok(choice) = input.parse::<i64>() else {
        return Transition::Stay(Notice::NotANumber);
    };

    match usize::try_from(choice) {
        Ok(n) if (1..=links.len()).contains(&n) => Transition::Follow(links[n - 1].url.clone()),
        Ok(n) if n == links.len() + 1 => Transition::Goto(Screen::Menu),
        _ => Transition::Stay(Notice::InvalidChoice),
    }
}

/// Draws `screen` for `article`, ending with the input prompt.
pub fn render<W: Write>(out: &mut W, article: &Article, screen: Screen) -> io::Result<()> {
    match screen {
        Screen::Menu => {
            writeln!(out, "{}\n", format!("Статья: {}", article.title).bold())?;
            writeln!(out, "Количество параграфов: {}", article.paragraphs.len())?;
            writeln!(out, "Количество связанных страниц: {}", article.related_links.len())?;
            writeln!(out, "Количество внутренних ссылок: {}", article.internal_links.len())?;
            writeln!(out, "\n{}", "Действия:".cyan())?;
            writeln!(out, "1. Листать параграфы текущей статьи")?;
            writeln!(out, "2. Перейти на одну из связанных страниц")?;
            writeln!(out, "3. Перейти на одну из внутренних страниц")?;
            writeln!(out, "4. Выйти из программы")?;
            write!(out, "\nВыберите действие (1-4): ")
        }
        Screen::Pager { cursor } => {
            let total = article.paragraphs.len();
            let text = article.paragraphs.get(cursor).map(String::as_str).unwrap_or_default();
            writeln!(
                out,
                "{}\n",
                format!("Статья: {} | Параграф {} из {}", article.title, cursor + 1, total).bold()
            )?;
            writeln!(out, "{}", text)?;
            writeln!(out, "\n{}", "Действия:".cyan())?;
            writeln!(out, "1. Следующий параграф")?;
            writeln!(out, "2. Предыдущий параграф")?;
            writeln!(out, "3. {}", BACK_TO_MENU)?;
            write!(out, "\nВыберите действие (1-3): ")
        }
        Screen::Related => render_links(out, "Связанные страницы:", &article.related_links),
        Screen::Internal => render_links(out, "Внутренние ссылки:", &article.internal_links),
    }
}

fn render_links<W: Write>(out: &mut W, heading: &str, links: &[LinkRef]) -> io::Result<()> {
    writeln!(out, "{}\n", heading.bold())?;
    for (i, link) in links.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, link.title)?;
    }
    let back = links.len() + 1;
    writeln!(out, "{}. {}", back, BACK_TO_MENU)?;
    write!(out, "\nВыберите страницу (1-{}): ", back)
}

/// Runs the menu loop over one console and page loader.
pub struct Navigator<R, W, L> {
    console: Console<R, W>,
    loader: L,
}

impl<R: BufRead, W: Write, L: PageLoader> Navigator<R, W, L> {
    pub fn new(console: Console<R, W>, loader: L) -> Self {
        Self { console, loader }
    }

    /// Shows `article` and handles input until the user quits or input ends.
    ///
    /// Returns the article that was on display at exit.
    pub fn run(&mut self, article: Article) -> io::Result<Article> {
        let mut article = article;
        let mut screen = Screen::Menu;

        loop {
            self.console.clear()?;
            render(self.console.output(), &article, screen)?;

            let Some(line) = self.console.read_line()? else {
                tracing::debug!("input closed, leaving navigator");
                return Ok(article);
            };

            match step(&article, screen, &line) {
                Transition::Stay(notice) => {
                    self.console.say("")?;
                    self.console.say(notice.message())?;
                    if !self.console.pause(PAUSE_PROMPT)? {
                        return Ok(article);
                    }
                }
                Transition::Goto(next) => screen = next,
                Transition::Follow(url) => {
                    article = self.follow(article, &url);
                    screen = Screen::Menu;
                }
                Transition::Quit => {
                    self.console.say(FAREWELL)?;
                    return Ok(article);
                }
            }
        }
    }

    /// Loads `url`; on failure the current article is kept and the user sees
    /// no message, only the log records it.
    fn follow(&mut self, current: Article, url: &str) -> Article {
        match self.loader.load(&PageTarget::url(url)) {
            Ok(extraction) => {
                tracing::debug!(%url, title = %extraction.article.title, "followed link");
                extraction.article
            }
            Err(err) => {
                tracing::warn!(%url, error = %err, "could not open linked article, staying on current page");
                current
            }
        }
    }
}
