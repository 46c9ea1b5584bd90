//! Where the categories view gets its data from.
//!
//! Views pull a [`CategoryFeed`] out of the Dioxus context. Platforms (or
//! tests) may provide one; otherwise the view falls back to the HTTP client
//! pointed at the default service address.

use std::fmt;
use std::rc::Rc;

use api::{ApiConfig, ApiError, CategoriesClient, Listing};
use futures::future::LocalBoxFuture;

/// A request that settles with whatever JSON the service answered. The view
/// never inspects the body, so any parseable response counts as settled.
pub trait CategorySource {
    fn fetch_listing(&self) -> LocalBoxFuture<'_, Result<Listing, ApiError>>;
}

impl CategorySource for CategoriesClient {
    fn fetch_listing(&self) -> LocalBoxFuture<'_, Result<Listing, ApiError>> {
        Box::pin(CategoriesClient::fetch_listing(self))
    }
}

/// Shared handle to a [`CategorySource`], cheap to clone into async tasks.
#[derive(Clone)]
pub struct CategoryFeed(Rc<dyn CategorySource>);

impl CategoryFeed {
    pub fn new(source: impl CategorySource + 'static) -> Self {
        Self(Rc::new(source))
    }

    pub async fn fetch_listing(&self) -> Result<Listing, ApiError> {
        self.0.fetch_listing().await
    }
}

impl Default for CategoryFeed {
    fn default() -> Self {
        Self::new(CategoriesClient::new(ApiConfig::default()))
    }
}

impl PartialEq for CategoryFeed {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for CategoryFeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CategoryFeed").finish_non_exhaustive()
    }
}
