use folio_models::page::{NavEntry, Page, PageKey};

pub trait PageFeatureService: Send + Sync + 'static {
    /// Maps an external page identifier to a known key; absent, empty and
    /// unknown values fall back to the default page.
    fn resolve(&self, requested: Option<&str>) -> PageKey;

    /// Returns the content payload of the page behind `key`.
    fn page(&self, key: PageKey) -> Page;

    /// Returns the navigation entries in display order.
    fn nav(&self) -> Vec<NavEntry>;
}
