use crate::config::Config;
use crate::error::{PlacesError, Result};
use crate::models::SearchResult;
use crate::places::traits::PlaceSearch;
use crate::places::types::SearchParams;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, info, warn};
use url::Url;

/// Photo width requested when the caller has no preference
pub const DEFAULT_PHOTO_MAX_WIDTH: u32 = 400;

/// Google Places nearby-search client
#[derive(Clone)]
pub struct GooglePlacesClient {
    client: Client,
    config: Config,
}

impl GooglePlacesClient {
    /// Create a new client with its own HTTP connection pool
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("places-scout/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_client(config, client))
    }

    /// Create a client on top of an existing HTTP client. Timeouts, proxies
    /// and the like are whatever that client was built with.
    pub fn with_client(config: Config, client: Client) -> Self {
        Self { client, config }
    }

    fn api_key(&self) -> Result<&str> {
        self.config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| PlacesError::Configuration("Google Places API key is not set".to_string()))
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let base = self.config.base_url.trim_end_matches('/');
        Url::parse(&format!("{}/{}", base, path)).map_err(|e| {
            PlacesError::Configuration(format!("invalid base URL {:?}: {}", self.config.base_url, e))
        })
    }

    /// Build the nearby-search request URL.
    ///
    /// A page token request carries only `pagetoken` and `key`; location,
    /// radius and type are ignored in that case.
    pub fn search_url(&self, params: &SearchParams) -> Result<Url> {
        let key = self.api_key()?;
        let mut url = self.endpoint("nearbysearch/json")?;

        match params.page_token.as_deref() {
            Some(token) => {
                url.query_pairs_mut()
                    .append_pair("pagetoken", token)
                    .append_pair("key", key);
            }
            None => {
                // Upstream documents the comma in `location` unescaped
                url.set_query(Some(&format!(
                    "location={},{}",
                    params.latitude, params.longitude
                )));
                url.query_pairs_mut()
                    .append_pair("radius", &params.radius.to_string())
                    .append_pair("type", &params.place_type)
                    .append_pair("key", key);
            }
        }

        Ok(url)
    }

    /// Search for places near a location and apply the price and rating
    /// filters from `params` to the returned page.
    pub async fn search_nearby(&self, params: &SearchParams) -> Result<SearchResult> {
        let url = self.search_url(params)?;

        if params.page_token.is_some() {
            info!("Fetching next page of nearby places");
        } else {
            info!(
                "Searching {} within {}m of {},{}",
                params.place_type, params.radius, params.latitude, params.longitude
            );
        }

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Google Places returned HTTP status: {}", status);
        }

        let body = response.text().await?;
        debug!("Downloaded {} bytes of JSON", body.len());

        let parsed = parse_search_response(&body)?;
        let upstream_count = parsed.results.len();

        let results = params.apply_filters(parsed.results);
        debug!(
            "Kept {} of {} places after filtering",
            results.len(),
            upstream_count
        );

        Ok(SearchResult {
            results,
            status: parsed.status,
            next_page_token: parsed.next_page_token,
        })
    }

    /// URL that resolves to the image behind a photo reference. No request
    /// is made here.
    pub fn photo_url(&self, photo_reference: &str, max_width: u32) -> Result<String> {
        let key = self.api_key()?;
        let mut url = self.endpoint("photo")?;

        url.query_pairs_mut()
            .append_pair("maxwidth", &max_width.to_string())
            .append_pair("photoreference", photo_reference)
            .append_pair("key", key);

        Ok(url.into())
    }
}

fn parse_search_response(body: &str) -> Result<SearchResult> {
    serde_json::from_str(body).map_err(|e| {
        error!(
            "Error parsing Google Places API response: {} (body: {})",
            e, body
        );
        PlacesError::ResponseFormat
    })
}

#[async_trait]
impl PlaceSearch for GooglePlacesClient {
    async fn search(&self, params: &SearchParams) -> Result<SearchResult> {
        self.search_nearby(params).await
    }

    fn provider_name(&self) -> &'static str {
        "Google Places"
    }
}
