use std::sync::LazyLock;

use regex::Regex;

use crate::article::{Article, UNKNOWN_TITLE};
use crate::fetch::DEFAULT_BASE_URL;
use crate::links::{LinkRef, absolute_url, dedup_links, is_article_path, is_internal_target};
use crate::parse::{Document, Element};

/// Page heading
const TITLE_SELECTOR: &str = "h1#firstHeading";

/// Container holding the rendered article body
const CONTENT_SELECTOR: &str = "div.mw-parser-output";

/// Disambiguation and "see also" boxes
const HATNOTE_SELECTOR: &str = "div.hatnote, div.navigation-not-searchable";

const LINK_SELECTOR: &str = "a[href]";

/// Citation markers left in paragraph text by footnote superscripts
static CITATION_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(?:\d{1,4}|[a-zа-я]|источник не указан[^\]]*|нет в источнике|уточнить|неавторитетный источник)\]")
        .unwrap()
});

/// Configuration for article extraction
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Scheme and host prepended to site-relative links
    pub origin: String,
    /// Maximum number of unique internal links to keep
    pub internal_link_limit: usize,
    /// Remove citation markers such as `[1]` from paragraph text
    pub strip_references: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self { origin: DEFAULT_BASE_URL.to_string(), internal_link_limit: 20, strip_references: false }
    }
}

/// The result of article extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// The extracted article
    pub article: Article,
    /// False when the main content container was missing from the page
    pub content_found: bool,
}

/// Extract the article record from a parsed page.
///
/// Every step tolerates missing structure: without a heading the title falls
/// back to [`UNKNOWN_TITLE`], and without a content container the paragraph
/// and internal link lists stay empty while `content_found` is false.
pub fn extract_article(doc: &Document, config: &ExtractConfig) -> Extraction {
    let title = extract_title(doc);
    let related_links = extract_related_links(doc, config);

    let Some(container) = doc.select_first(CONTENT_SELECTOR).ok().flatten() else {
        tracing::debug!(%title, "main content container not found");
        let article = Article { related_links, ..Article::empty(title) };
        return Extraction { article, content_found: false };
    };

    let paragraph_elements = select_paragraphs(&container);
    let internal_links = extract_internal_links(&paragraph_elements, config);
    let paragraphs = paragraph_elements
        .iter()
        .map(|p| paragraph_text(p, config))
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>();

    tracing::debug!(
        %title,
        paragraphs = paragraphs.len(),
        related = related_links.len(),
        internal = internal_links.len(),
        "article extracted"
    );

    Extraction { article: Article { title, paragraphs, related_links, internal_links }, content_found: true }
}

/// Parse markup and extract the article in one step
pub fn parse_article(html: &str, config: &ExtractConfig) -> Extraction {
    let doc = Document::parse(html);
    extract_article(&doc, config)
}

fn extract_title(doc: &Document) -> String {
    doc.select_first(TITLE_SELECTOR)
        .ok()
        .flatten()
        .map(|h1| h1.text().trim().to_string())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| UNKNOWN_TITLE.to_string())
}

/// Direct `<p>` children of the container, or every nested `<p>` when there
/// are none. Blank paragraphs are skipped either way.
fn select_paragraphs<'a>(container: &Element<'a>) -> Vec<Element<'a>> {
    let direct: Vec<_> = container
        .children_named("p")
        .into_iter()
        .filter(|p| !p.text().trim().is_empty())
        .collect();

    if !direct.is_empty() {
        return direct;
    }

    container
        .select("p")
        .unwrap_or_default()
        .into_iter()
        .filter(|p| !p.text().trim().is_empty())
        .collect()
}

fn paragraph_text(paragraph: &Element<'_>, config: &ExtractConfig) -> String {
    let text = paragraph.text();
    if config.strip_references {
        CITATION_MARKER.replace_all(&text, "").trim().to_string()
    } else {
        text.trim().to_string()
    }
}

fn extract_related_links(doc: &Document, config: &ExtractConfig) -> Vec<LinkRef> {
    let mut links = Vec::new();

    for hatnote in doc.select(HATNOTE_SELECTOR).unwrap_or_default() {
        for link in hatnote.select(LINK_SELECTOR).unwrap_or_default() {
            if let Some(href) = link.attr("href").filter(|href| is_article_path(href)) {
                links.push(LinkRef::new(link.text().trim(), absolute_url(&config.origin, href)));
            }
        }
    }

    links
}

fn extract_internal_links(paragraphs: &[Element<'_>], config: &ExtractConfig) -> Vec<LinkRef> {
    let candidates = paragraphs
        .iter()
        .flat_map(|p| p.select(LINK_SELECTOR).unwrap_or_default())
        .filter_map(|link| {
            let href = link.attr("href")?;
            let title = link.text().trim().to_string();
            (is_internal_target(href) && !title.is_empty())
                .then(|| LinkRef::new(title, absolute_url(&config.origin, href)))
        });

    dedup_links(candidates, config.internal_link_limit)
}
