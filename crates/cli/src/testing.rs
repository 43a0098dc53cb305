//! Scripted consoles and canned pages for navigator tests.

use std::collections::HashMap;
use std::io::Cursor;

use wikiwalk_core::{
    Article, ExtractConfig, Extraction, FetchConfig, LinkRef, PageTarget, Result, WikiError, parse_article,
};

use crate::console::Console;
use crate::loader::PageLoader;
use crate::navigator::Navigator;

/// Drives a navigator over `input` and returns the final article and
/// everything written to the screen.
pub fn navigate(input: &str, loader: &mut StubLoader, article: Article) -> (Article, String) {
    let mut out = Vec::new();
    let console = Console::new(Cursor::new(input.as_bytes().to_vec()), &mut out, false);
    let last = Navigator::new(console, loader).run(article).unwrap();
    (last, String::from_utf8(out).unwrap())
}

pub fn links(prefix: &str, count: usize) -> Vec<LinkRef> {
    (0..count)
        .map(|i| LinkRef::new(format!("{} {}", prefix, i), format!("https://ru.wikipedia.org/wiki/{}_{}", prefix, i)))
        .collect()
}

pub fn article(title: &str, paragraphs: usize, related: usize, internal: usize) -> Article {
    Article {
        title: title.to_string(),
        paragraphs: (0..paragraphs).map(|i| format!("Paragraph {}", i)).collect(),
        related_links: links("Related", related),
        internal_links: links("Internal", internal),
    }
}

/// Serves articles from memory; unknown targets answer 404 and malformed
/// targets fail the way the real fetcher does.
#[derive(Default)]
pub struct StubLoader {
    pages: HashMap<String, Article>,
    pub requests: Vec<String>,
}

impl StubLoader {
    pub fn with_page(mut self, url: &str, article: Article) -> Self {
        self.pages.insert(url.to_string(), article);
        self
    }
}

impl PageLoader for StubLoader {
    fn load(&mut self, target: &PageTarget) -> Result<Extraction> {
        target.resolve(&FetchConfig::default())?;

        let key = match target {
            PageTarget::Search(query) => format!("search:{}", query),
            PageTarget::Url(url) => url.clone(),
        };
        self.requests.push(key.clone());

        self.pages
            .get(&key)
            .cloned()
            .map(|article| Extraction { article, content_found: true })
            .ok_or(WikiError::HttpStatus { status: 404 })
    }

    fn load_markup(&self, html: &str) -> Extraction {
        parse_article(html, &ExtractConfig::default())
    }
}
