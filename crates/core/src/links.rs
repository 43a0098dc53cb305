//! Link classification.
//!
//! Wiki paths are classified with small string predicates so every rule can
//! be checked on its own: a link is an article link when its path starts with
//! `/wiki/`, and it is namespace-qualified (`File:`, `Category:`, ...) when the
//! path contains a colon.

use std::collections::HashSet;

use serde::Serialize;

/// Path prefix of the article namespace.
pub const ARTICLE_PREFIX: &str = "/wiki/";

/// Separator between a namespace and a page name, as in `Category:Cats`.
pub const NAMESPACE_SEPARATOR: char = ':';

/// A titled link to another article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkRef {
    /// Visible link text.
    pub title: String,
    /// Absolute URL of the target page.
    pub url: String,
}

impl LinkRef {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self { title: title.into(), url: url.into() }
    }
}

/// Whether `href` points into the article namespace.
pub fn is_article_path(href: &str) -> bool {
    href.starts_with(ARTICLE_PREFIX)
}

/// Whether `href` carries a namespace qualifier.
pub fn is_namespaced(href: &str) -> bool {
    href.contains(NAMESPACE_SEPARATOR)
}

/// Whether `href` is acceptable as an in-body link to a plain article.
pub fn is_internal_target(href: &str) -> bool {
    is_article_path(href) && !is_namespaced(href)
}

/// Joins a site-relative `href` onto `origin` (e.g. `https://ru.wikipedia.org`).
pub fn absolute_url(origin: &str, href: &str) -> String {
    format!("{}{}", origin.trim_end_matches('/'), href)
}

/// Drops links whose URL was already seen, keeping the first occurrence, and
/// stops after `limit` survivors.
pub fn dedup_links<I>(links: I, limit: usize) -> Vec<LinkRef>
where
    I: IntoIterator<Item = LinkRef>,
{
    let mut seen = HashSet::new();
    links
        .into_iter()
        .filter(|link| seen.insert(link.url.clone()))
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/wiki/Кот", true)]
    #[case("/wiki/Category:Кошки", true)]
    #[case("/w/index.php?title=Кот&action=edit", false)]
    #[case("https://en.wikipedia.org/wiki/Cat", false)]
    #[case("#cite_note-1", false)]
    #[case("", false)]
    fn test_is_article_path(#[case] href: &str, #[case] expected: bool) {
        assert_eq!(is_article_path(href), expected);
    }

    #[rstest]
    #[case("/wiki/Файл:Cat.jpg", true)]
    #[case("/wiki/Категория:Кошки", true)]
    #[case("/wiki/Category:X", true)]
    #[case("/wiki/Help:Contents", true)]
    #[case("/wiki/Кот", false)]
    #[case("/wiki/Felis_catus", false)]
    fn test_is_namespaced(#[case] href: &str, #[case] expected: bool) {
        assert_eq!(is_namespaced(href), expected);
    }

    #[rstest]
    #[case("/wiki/Кошка", true)]
    #[case("/wiki/Category:X", false)]
    #[case("/wiki/Файл:Cat.jpg", false)]
    #[case("/w/index.php?title=Кот", false)]
    fn test_is_internal_target(#[case] href: &str, #[case] expected: bool) {
        assert_eq!(is_internal_target(href), expected);
    }

    #[test]
    fn test_absolute_url() {
        assert_eq!(
            absolute_url("https://ru.wikipedia.org", "/wiki/Кот"),
            "https://ru.wikipedia.org/wiki/Кот"
        );
        assert_eq!(
            absolute_url("http://127.0.0.1:9000/", "/wiki/Кот"),
            "http://127.0.0.1:9000/wiki/Кот"
        );
    }

    #[test]
    fn test_dedup_preserves_first_seen_order() {
        let links = vec![
            LinkRef::new("Хищные", "https://ru.wikipedia.org/wiki/Хищные"),
            LinkRef::new("Кошачьи", "https://ru.wikipedia.org/wiki/Кошачьи"),
            LinkRef::new("хищник", "https://ru.wikipedia.org/wiki/Хищные"),
            LinkRef::new("Млекопитающие", "https://ru.wikipedia.org/wiki/Млекопитающие"),
        ];

        let unique = dedup_links(links, 20);

        let titles: Vec<_> = unique.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, ["Хищные", "Кошачьи", "Млекопитающие"]);
    }

    #[test]
    fn test_dedup_caps_after_dedup() {
        let links = (0..50).flat_map(|i| {
            let url = format!("https://ru.wikipedia.org/wiki/Page_{}", i);
            [LinkRef::new("a", url.clone()), LinkRef::new("b", url)]
        });

        let unique = dedup_links(links, 20);

        assert_eq!(unique.len(), 20);
        assert_eq!(unique[0].url, "https://ru.wikipedia.org/wiki/Page_0");
        assert_eq!(unique[19].url, "https://ru.wikipedia.org/wiki/Page_19");
        assert!(unique.iter().all(|l| l.title == "a"));
    }

    #[test]
    fn test_dedup_empty() {
        assert!(dedup_links(Vec::new(), 20).is_empty());
    }
}
