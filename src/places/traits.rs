use crate::error::Result;
use crate::models::SearchResult;
use crate::places::types::SearchParams;
use async_trait::async_trait;

/// Common trait for nearby-search providers
#[async_trait]
pub trait PlaceSearch: Send + Sync {
    /// Run one search and return the filtered page of results
    async fn search(&self, params: &SearchParams) -> Result<SearchResult>;

    /// Get the name of the upstream provider
    fn provider_name(&self) -> &'static str;
}
