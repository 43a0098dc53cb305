use tokio::runtime::{Builder, Runtime};
use wikiwalk_core::{ExtractConfig, Extraction, FetchConfig, PageTarget, Result, fetch_page, parse_article};

/// Source of article pages for the navigator.
pub trait PageLoader {
    /// Fetches the page `target` points to and extracts it.
    fn load(&mut self, target: &PageTarget) -> Result<Extraction>;

    /// Extracts a page whose markup is already at hand.
    fn load_markup(&self, html: &str) -> Extraction;
}

impl<L: PageLoader + ?Sized> PageLoader for &mut L {
    fn load(&mut self, target: &PageTarget) -> Result<Extraction> {
        (**self).load(target)
    }

    fn load_markup(&self, html: &str) -> Extraction {
        (**self).load_markup(html)
    }
}

/// Loads pages over HTTP, one blocking request at a time.
pub struct HttpLoader {
    runtime: Runtime,
    fetch: FetchConfig,
    extract: ExtractConfig,
}

impl HttpLoader {
    pub fn new(fetch: FetchConfig, extract: ExtractConfig) -> std::io::Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self { runtime, fetch, extract })
    }
}

impl PageLoader for HttpLoader {
    fn load(&mut self, target: &PageTarget) -> Result<Extraction> {
        let html = self.runtime.block_on(fetch_page(target, &self.fetch))?;
        Ok(parse_article(&html, &self.extract))
    }

    fn load_markup(&self, html: &str) -> Extraction {
        parse_article(html, &self.extract)
    }
}
