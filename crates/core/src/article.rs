//! Article record produced by extraction.
//!
//! An [`Article`] is built once per fetched page and never modified; moving
//! to another page produces a new one.

use serde::Serialize;

use crate::Result;
use crate::links::LinkRef;

/// Title used when the page has no recognizable heading.
pub const UNKNOWN_TITLE: &str = "Неизвестная статья";

/// The normalized content of one article page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    /// Page heading, or [`UNKNOWN_TITLE`].
    pub title: String,

    /// Non-blank paragraph texts in document order.
    pub paragraphs: Vec<String>,

    /// Links found in hatnote and disambiguation boxes.
    pub related_links: Vec<LinkRef>,

    /// Unique body links to other articles, capped.
    pub internal_links: Vec<LinkRef>,
}

impl Article {
    /// An article with the given title and no content.
    pub fn empty(title: impl Into<String>) -> Self {
        Self { title: title.into(), paragraphs: Vec::new(), related_links: Vec::new(), internal_links: Vec::new() }
    }

    /// Whether there is anything to page through.
    pub fn has_paragraphs(&self) -> bool {
        !self.paragraphs.is_empty()
    }

    /// Gets the article as structured JSON.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Gets the article as pretty-printed JSON text.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Article {
        Article {
            title: "Кот".to_string(),
            paragraphs: vec!["Первый.".to_string(), "Второй.".to_string()],
            related_links: vec![LinkRef::new("Кот (значения)", "https://ru.wikipedia.org/wiki/Кот_(значения)")],
            internal_links: vec![LinkRef::new("Кошка", "https://ru.wikipedia.org/wiki/Кошка")],
        }
    }

    #[test]
    fn test_empty_article() {
        let article = Article::empty(UNKNOWN_TITLE);
        assert_eq!(article.title, UNKNOWN_TITLE);
        assert!(!article.has_paragraphs());
        assert!(article.related_links.is_empty());
        assert!(article.internal_links.is_empty());
    }

    #[test]
    fn test_article_to_json() {
        let json = sample().to_json().unwrap();

        assert_eq!(json["title"], "Кот");
        assert_eq!(json["paragraphs"].as_array().unwrap().len(), 2);
        assert_eq!(json["related_links"][0]["title"], "Кот (значения)");
        assert_eq!(json["internal_links"][0]["url"], "https://ru.wikipedia.org/wiki/Кошка");
    }

    #[test]
    fn test_article_to_json_string() {
        let text = sample().to_json_string().unwrap();
        assert!(text.contains("\"title\": \"Кот\""));
    }
}
