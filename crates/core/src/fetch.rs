//! Article page fetching.
//!
//! A page is addressed either by a search term, which is turned into a
//! canonical `/wiki/` path under the configured language domain, or by an
//! absolute URL taken from a previously extracted link. Saved pages can also
//! be read from disk.

use std::fs;
use std::path::PathBuf;

use url::Url;

use crate::{Result, WikiError};

/// Language domain every search term is resolved against.
pub const DEFAULT_BASE_URL: &str = "https://ru.wikipedia.org";

/// Desktop browser identification; the site rejects some default client identifiers.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

/// HTTP client configuration for fetching article pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Scheme and host search terms are resolved against.
    pub base_url: String,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string(), user_agent: DEFAULT_USER_AGENT.to_string() }
    }
}

/// What to fetch: a search term or a full URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageTarget {
    /// Free-form search term, e.g. `"Кот"` or `"Солнечная система"`.
    Search(String),
    /// Absolute URL, used verbatim.
    Url(String),
}

impl PageTarget {
    pub fn search(query: impl Into<String>) -> Self {
        Self::Search(query.into())
    }

    pub fn url(url: impl Into<String>) -> Self {
        Self::Url(url.into())
    }

    /// Builds the URL this target points to.
    ///
    /// Search terms are trimmed and have spaces replaced with underscores
    /// before being appended to `{base_url}/wiki/`. Non-ASCII characters are
    /// percent-encoded by the URL parser.
    ///
    /// # Errors
    ///
    /// Returns [`WikiError::EmptyQuery`] for a blank search term and
    /// [`WikiError::InvalidUrl`] when the result is not an absolute URL.
    pub fn resolve(&self, config: &FetchConfig) -> Result<Url> {
        let raw = match self {
            Self::Search(query) => {
                let query = query.trim();
                if query.is_empty() {
                    return Err(WikiError::EmptyQuery);
                }
                format!("{}/wiki/{}", config.base_url.trim_end_matches('/'), query.replace(' ', "_"))
            }
            Self::Url(url) => url.clone(),
        };

        Url::parse(&raw).map_err(|e| WikiError::InvalidUrl(format!("{}: {}", raw, e)))
    }
}

/// Fetches the markup of an article page.
///
/// Performs a single GET request with the configured User-Agent. Only a
/// `200 OK` response counts as success; there are no retries and no timeout
/// beyond the transport default.
#[cfg(feature = "fetch")]
pub async fn fetch_page(target: &PageTarget, config: &FetchConfig) -> Result<String> {
    use reqwest::{Client, StatusCode};

    let url = target.resolve(config)?;
    tracing::debug!(%url, "fetching article page");

    let client = Client::builder().build()?;

    let response = client
        .get(url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .send()
        .await?;

    let status = response.status();
    if status != StatusCode::OK {
        tracing::debug!(status = status.as_u16(), "article page rejected");
        return Err(WikiError::HttpStatus { status: status.as_u16() });
    }

    let content = response.text().await?;
    tracing::debug!(bytes = content.len(), "article page received");

    Ok(content)
}

/// Reads a saved article page from a local file.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(WikiError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(WikiError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_config_default() {
        let config = FetchConfig::default();
        assert_eq!(config.base_url, "https://ru.wikipedia.org");
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_search_replaces_spaces() {
        let url = PageTarget::search("Rust language").resolve(&FetchConfig::default()).unwrap();
        assert_eq!(url.as_str(), "https://ru.wikipedia.org/wiki/Rust_language");
    }

    #[test]
    fn test_search_trims_and_encodes() {
        let url = PageTarget::search("  Кот ").resolve(&FetchConfig::default()).unwrap();
        assert_eq!(url.as_str(), "https://ru.wikipedia.org/wiki/%D0%9A%D0%BE%D1%82");
    }

    #[test]
    fn test_search_respects_base_url() {
        let config = FetchConfig { base_url: "http://127.0.0.1:8080/".to_string(), ..Default::default() };
        let url = PageTarget::search("Кошка домашняя").resolve(&config).unwrap();
        assert!(url.as_str().starts_with("http://127.0.0.1:8080/wiki/"));
        assert!(!url.as_str().contains(' '));
    }

    #[test]
    fn test_empty_search_rejected() {
        let result = PageTarget::search("   ").resolve(&FetchConfig::default());
        assert!(matches!(result, Err(WikiError::EmptyQuery)));
    }

    #[test]
    fn test_url_used_verbatim() {
        let url = PageTarget::url("https://ru.wikipedia.org/wiki/Felis")
            .resolve(&FetchConfig::default())
            .unwrap();
        assert_eq!(url.as_str(), "https://ru.wikipedia.org/wiki/Felis");
    }

    #[test]
    fn test_invalid_url_rejected() {
        let result = PageTarget::url("not-a-url").resolve(&FetchConfig::default());
        assert!(matches!(result, Err(WikiError::InvalidUrl(_))));
    }

    #[cfg(feature = "fetch")]
    #[test]
    fn test_fetch_url_invalid() {
        let config = FetchConfig::default();
        let result = tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(fetch_page(&PageTarget::url("not-a-url"), &config));

        assert!(matches!(result, Err(WikiError::InvalidUrl(_))));
    }

    #[test]
    fn test_fetch_file_not_found() {
        let result = fetch_file("/nonexistent/path/file.html");
        assert!(matches!(result, Err(WikiError::FileNotFound(_))));
    }
}
