use folio_core_pages_contracts::PageFeatureService;
use folio_models::page::{NavEntry, Page, PageKey};

mod content;

/// Serves the static site content. The payloads are built per request;
/// they are small enough that caching them is not worth the plumbing.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageFeatureServiceImpl;

impl PageFeatureService for PageFeatureServiceImpl {
    fn resolve(&self, requested: Option<&str>) -> PageKey {
        PageKey::resolve(requested)
    }

    fn page(&self, key: PageKey) -> Page {
        content::page(key)
    }

    fn nav(&self) -> Vec<NavEntry> {
        content::nav()
    }
}
