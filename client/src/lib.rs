//! Client for the statdex Pokemon stats service.
//!
//! Every call is validated locally, passed through a per-endpoint sliding
//! window, sent with fixed JSON headers, and has its response HTML-escaped
//! before decoding. Autocomplete and chart math run locally against a
//! [`Catalog`] snapshot.
//!
//! ```ignore
//! let client = StatdexClient::new(ClientConfig::from_env());
//! let catalog = client.load_catalog().await?;
//!
//! for hit in catalog.suggest("char") {
//!     println!("{} ({})", hit.entry.name, hit.score);
//! }
//!
//! let battle = client.battle_advanced("charizard", "blastoise").await?;
//! println!("{}", battle.battle_result.result);
//! ```

mod catalog;
mod config;
mod error;
mod gateway;
mod rate_limit;
mod sequence;
mod transport;

#[cfg(test)]
mod testing;

use std::sync::Arc;

use serde_json::Value;

pub use statdex_protocol::{
    AdvancedBattle, ApiRequest, BattleReport, CatalogEntry, Endpoint, LimitInput, RankedEntry,
    Rankings, RankingCriteria, SimilarMatch, StatBlock, ValidationError,
};

pub use catalog::Catalog;
pub use config::{BASE_URL_ENV, ClientConfig, DEFAULT_BASE_URL, RateLimitPolicy, TIMEOUT_ENV};
pub use error::{ApiError, Throttle};
pub use gateway::{DEFAULT_HEADERS, SecureGateway};
pub use rate_limit::RateLimiter;
pub use sequence::{RequestSequence, Ticket};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Transport};

use statdex_protocol::{BattleVerdict, CatalogPage, SimilarResults};

/// Size of the catalog fetched for autocomplete
pub const CATALOG_SIZE: u32 = 1000;

/// Main statdex client.
///
/// Each method validates its arguments, builds the request and delegates to
/// the [`SecureGateway`]; none of them retry.
pub struct StatdexClient<T = HttpTransport> {
    gateway: SecureGateway<T>,
}

impl StatdexClient<HttpTransport> {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, HttpTransport::new())
    }

    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }
}

impl<T: Transport> StatdexClient<T> {
    /// Client with its own rate limiter built from `config.rate_limit`
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        let limiter = Arc::new(RateLimiter::new(config.rate_limit));
        Self::with_limiter(config, limiter, transport)
    }

    /// Client sharing an existing rate limiter
    pub fn with_limiter(config: ClientConfig, limiter: Arc<RateLimiter>, transport: T) -> Self {
        Self {
            gateway: SecureGateway::new(config, limiter, transport),
        }
    }

    pub fn gateway(&self) -> &SecureGateway<T> {
        &self.gateway
    }

    /// Pokemon whose base stats are closest to `stats` ("HP,Atk,Def,SpA,SpD,Spe")
    pub async fn search_similar(&self, stats: &str) -> Result<Vec<SimilarMatch>, ApiError> {
        let request = ApiRequest::search_similar(stats)?;
        let page: SimilarResults = self.gateway.request_as(&request).await?;
        Ok(page.results)
    }

    /// Stat-only battle between two stat strings
    pub async fn simulate_battle(&self, stats_a: &str, stats_b: &str) -> Result<String, ApiError> {
        let request = ApiRequest::simulate_battle(stats_a, stats_b)?;
        let verdict: BattleVerdict = self.gateway.request_as(&request).await?;
        Ok(verdict.result)
    }

    pub async fn search_by_name<'a>(
        &self,
        name: &str,
        limit: impl Into<LimitInput<'a>>,
    ) -> Result<Vec<CatalogEntry>, ApiError> {
        let request = ApiRequest::search_by_name(name, limit)?;
        let page: CatalogPage = self.gateway.request_as(&request).await?;
        Ok(page.results)
    }

    pub async fn all_pokemon<'a>(
        &self,
        limit: impl Into<LimitInput<'a>>,
    ) -> Result<Vec<CatalogEntry>, ApiError> {
        let request = ApiRequest::catalog(limit)?;
        let page: CatalogPage = self.gateway.request_as(&request).await?;
        Ok(page.results)
    }

    pub async fn top_pokemon<'a>(
        &self,
        criteria: RankingCriteria,
        limit: impl Into<LimitInput<'a>>,
    ) -> Result<Rankings, ApiError> {
        let request = ApiRequest::top_pokemon(criteria, limit)?;
        self.gateway.request_as(&request).await
    }

    /// Turn-based battle between two Pokemon looked up by name
    pub async fn battle_advanced(
        &self,
        name_a: &str,
        name_b: &str,
    ) -> Result<AdvancedBattle, ApiError> {
        let request = ApiRequest::battle_advanced(name_a, name_b)?;
        self.gateway.request_as(&request).await
    }

    pub async fn search_moves<'a>(
        &self,
        query: &str,
        limit: impl Into<LimitInput<'a>>,
    ) -> Result<Value, ApiError> {
        let request = ApiRequest::search_moves(query, limit)?;
        self.gateway.request(&request).await
    }

    pub async fn move_details(&self, name: &str) -> Result<Value, ApiError> {
        let request = ApiRequest::move_details(name)?;
        self.gateway.request(&request).await
    }

    /// Fetch the catalog snapshot used for autocomplete
    pub async fn load_catalog(&self) -> Result<Catalog, ApiError> {
        let entries = self.all_pokemon(CATALOG_SIZE).await?;
        tracing::info!(entries = entries.len(), "Catalog loaded");
        Ok(Catalog::new(entries))
    }
}
