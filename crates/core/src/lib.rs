pub mod article;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod links;
pub mod parse;

pub use article::{Article, UNKNOWN_TITLE};
pub use error::{Result, WikiError};
pub use extract::{ExtractConfig, Extraction, extract_article, parse_article};
#[cfg(feature = "fetch")]
pub use fetch::fetch_page;
pub use fetch::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT, FetchConfig, PageTarget, fetch_file};
pub use links::LinkRef;
pub use parse::Document;
