use std::env;
use std::time::Duration;

/// Service used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

pub const BASE_URL_ENV: &str = "STATDEX_API_BASE_URL";
pub const TIMEOUT_ENV: &str = "STATDEX_TIMEOUT_SECS";

/// Client-side sliding-window limit, applied per endpoint path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitPolicy {
    pub window: Duration,
    pub capacity: usize,
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        Self {
            window: Duration::from_secs(60),
            capacity: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Service root without a trailing slash
    pub base_url: String,
    /// Requests still pending after this long are abandoned
    pub request_timeout: Duration,
    pub rate_limit: RateLimitPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(30),
            rate_limit: RateLimitPolicy::default(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            ..Self::default()
        }
    }

    /// Read `STATDEX_API_BASE_URL` and `STATDEX_TIMEOUT_SECS`, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = match lookup(BASE_URL_ENV) {
            Some(url) if !url.trim().is_empty() => Self::new(&url),
            _ => Self::default(),
        };

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.request_timeout = Duration::from_secs(secs),
                _ => tracing::warn!(value = %raw, "Ignoring invalid {}", TIMEOUT_ENV),
            }
        }

        config
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_rate_limit(mut self, policy: RateLimitPolicy) -> Self {
        self.rate_limit = policy;
        self
    }
}

/// Trim whitespace and trailing slashes so paths can be appended directly
fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.rate_limit.capacity, 30);
        assert_eq!(config.rate_limit.window, Duration::from_secs(60));
    }

    #[test]
    fn test_trailing_slash_removed() {
        assert_eq!(
            ClientConfig::new("https://api.example.test/").base_url,
            "https://api.example.test"
        );
        assert_eq!(
            ClientConfig::new(" https://api.example.test// ").base_url,
            "https://api.example.test"
        );
    }

    #[test]
    fn test_builders() {
        let config = ClientConfig::new("http://x.test")
            .with_timeout(Duration::from_secs(2))
            .with_rate_limit(RateLimitPolicy {
                window: Duration::from_secs(1),
                capacity: 3,
            });
        assert_eq!(config.request_timeout, Duration::from_secs(2));
        assert_eq!(config.rate_limit.capacity, 3);
    }

    #[test]
    fn test_lookup_base_url() {
        let config = ClientConfig::from_lookup(lookup(&[(BASE_URL_ENV, "https://dex.test/api/")]));
        assert_eq!(config.base_url, "https://dex.test/api");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_lookup_unset_or_blank_uses_defaults() {
        assert_eq!(ClientConfig::from_lookup(lookup(&[])).base_url, DEFAULT_BASE_URL);
        assert_eq!(
            ClientConfig::from_lookup(lookup(&[(BASE_URL_ENV, "   ")])).base_url,
            DEFAULT_BASE_URL
        );
    }

    #[test]
    fn test_lookup_timeout() {
        let config = ClientConfig::from_lookup(lookup(&[(TIMEOUT_ENV, " 5 ")]));
        assert_eq!(config.request_timeout, Duration::from_secs(5));

        for bad in ["0", "-3", "soon", ""] {
            let config = ClientConfig::from_lookup(lookup(&[(TIMEOUT_ENV, bad)]));
            assert_eq!(config.request_timeout, Duration::from_secs(30), "value {bad:?}");
        }
    }

    #[test]
    fn test_from_env_reads_process_environment() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        // SAFETY: every test touching the process environment holds ENV_LOCK
        unsafe {
            env::set_var(BASE_URL_ENV, "http://env.test/");
            env::set_var(TIMEOUT_ENV, "0");
        }
        let config = ClientConfig::from_env();
        unsafe {
            env::remove_var(BASE_URL_ENV);
            env::remove_var(TIMEOUT_ENV);
        }

        assert_eq!(config.base_url, "http://env.test");
        assert_eq!(config.request_timeout, Duration::from_secs(30));

        let config = ClientConfig::from_env();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
