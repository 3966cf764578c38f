use std::sync::Arc;

use reqwest::Url;
use serde::de::DeserializeOwned;
use serde_json::Value;
use statdex_protocol::{ApiRequest, sanitize};

use crate::config::ClientConfig;
use crate::error::{ApiError, Throttle};
use crate::rate_limit::RateLimiter;
use crate::transport::{HttpRequest, Transport};

/// Headers attached to every request unless the caller already set them
pub const DEFAULT_HEADERS: [(&str, &str); 3] = [
    ("Content-Type", "application/json"),
    ("Accept", "application/json"),
    ("X-Requested-With", "XMLHttpRequest"),
];

/// Single exit point for outbound calls.
///
/// Each request is rate-limited by endpoint path, sent with the default
/// headers, classified by status, parsed as JSON, and HTML-escaped before it
/// is returned.
pub struct SecureGateway<T> {
    config: ClientConfig,
    limiter: Arc<RateLimiter>,
    transport: T,
}

impl<T: Transport> SecureGateway<T> {
    pub fn new(config: ClientConfig, limiter: Arc<RateLimiter>, transport: T) -> Self {
        Self {
            config,
            limiter,
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn limiter(&self) -> &Arc<RateLimiter> {
        &self.limiter
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send `request` and return the sanitized JSON body
    pub async fn request(&self, request: &ApiRequest) -> Result<Value, ApiError> {
        self.request_with_headers(request, &[]).await
    }

    /// Like [`request`](Self::request), with caller headers that take precedence over the defaults
    pub async fn request_with_headers(
        &self,
        request: &ApiRequest,
        headers: &[(&str, &str)],
    ) -> Result<Value, ApiError> {
        let path = request.endpoint().path();

        let url = self.url_for(request)?;

        if !self.limiter.check_and_record(path) {
            tracing::warn!(endpoint = path, "Request blocked by client rate limit");
            return Err(ApiError::RateLimited(Throttle::Local));
        }

        tracing::debug!(endpoint = path, url = %url, "Sending request");

        let outbound = HttpRequest {
            url,
            headers: merge_headers(headers),
        };

        let response =
            match tokio::time::timeout(self.config.request_timeout, self.transport.send(outbound))
                .await
            {
                Ok(result) => result.inspect_err(|e| {
                    tracing::warn!(endpoint = path, error = %e, "Request failed before a response");
                })?,
                Err(_) => {
                    tracing::warn!(
                        endpoint = path,
                        timeout = ?self.config.request_timeout,
                        "Request abandoned after timeout"
                    );
                    return Err(ApiError::Transport(format!(
                        "request to {} timed out after {:?}",
                        path, self.config.request_timeout
                    )));
                }
            };

        if !response.is_success() {
            tracing::warn!(
                endpoint = path,
                status = response.status,
                "Request returned error status"
            );
            return Err(ApiError::from_status(response.status));
        }

        let body: Value = serde_json::from_slice(&response.body).map_err(ApiError::InvalidJson)?;
        Ok(sanitize(&body))
    }

    /// Send `request` and decode the sanitized body into `R`
    pub async fn request_as<R: DeserializeOwned>(&self, request: &ApiRequest) -> Result<R, ApiError> {
        let value = self.request(request).await?;
        serde_json::from_value(value).map_err(ApiError::UnexpectedShape)
    }

    fn url_for(&self, request: &ApiRequest) -> Result<Url, ApiError> {
        let raw = format!("{}{}", self.config.base_url, request.endpoint().path());
        let mut url = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{raw}: {e}")))?;

        if !request.params().is_empty() {
            url.query_pairs_mut()
                .extend_pairs(request.params().iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }
}

/// Caller headers first, then any default header the caller did not set
fn merge_headers(caller: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut headers: Vec<(String, String)> = caller
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    for (name, value) in DEFAULT_HEADERS {
        if !caller.iter().any(|(k, _)| k.eq_ignore_ascii_case(name)) {
            headers.push((name.to_string(), value.to_string()));
        }
    }
    headers
}
