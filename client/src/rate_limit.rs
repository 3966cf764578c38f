use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, PoisonError};
use std::time::Instant;

use crate::config::RateLimitPolicy;

/// Sliding-window request counter keyed by endpoint path.
///
/// One instance per client session, shared through an `Arc`. Timestamps
/// older than the window are dropped lazily on each check; there is no
/// background sweep. A rejected call records nothing.
#[derive(Debug)]
pub struct RateLimiter {
    policy: RateLimitPolicy,
    windows: Mutex<HashMap<String, VecDeque<Instant>>>,
}

impl RateLimiter {
    pub fn new(policy: RateLimitPolicy) -> Self {
        Self {
            policy,
            windows: Mutex::new(HashMap::new()),
        }
    }

    pub fn policy(&self) -> RateLimitPolicy {
        self.policy
    }

    /// Returns `true` and records the call if `endpoint` is under its limit
    pub fn check_and_record(&self, endpoint: &str) -> bool {
        self.check_and_record_at(endpoint, Instant::now())
    }

    /// Same as [`check_and_record`](Self::check_and_record) with an explicit clock reading
    pub fn check_and_record_at(&self, endpoint: &str, now: Instant) -> bool {
        let mut windows = self.windows.lock().unwrap_or_else(PoisonError::into_inner);
        let window = windows.entry(endpoint.to_string()).or_default();

        // Keep only t > now - window
        while let Some(&oldest) = window.front() {
            if now.saturating_duration_since(oldest) >= self.policy.window {
                window.pop_front();
            } else {
                break;
            }
        }

        if window.len() >= self.policy.capacity {
            tracing::debug!(
                endpoint,
                recorded = window.len(),
                capacity = self.policy.capacity,
                "Rate limit reached"
            );
            return false;
        }

        window.push_back(now);
        true
    }

    /// Number of calls currently recorded for `endpoint`, including expired ones not yet pruned
    pub fn recorded(&self, endpoint: &str) -> usize {
        self.windows
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(endpoint)
            .map_or(0, VecDeque::len)
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(RateLimitPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn test_thirty_allowed_then_rejected() {
        let limiter = RateLimiter::default();
        let start = Instant::now();

        for i in 0..30 {
            let now = start + Duration::from_millis(i * 100);
            assert!(limiter.check_and_record_at("x", now), "call {i}");
        }
        assert!(!limiter.check_and_record_at("x", start + Duration::from_secs(5)));
        assert_eq!(limiter.recorded("x"), 30);
    }

    #[test]
    fn test_window_slides() {
        let limiter = RateLimiter::default();
        let start = Instant::now();

        for _ in 0..30 {
            assert!(limiter.check_and_record_at("x", start));
        }
        assert!(!limiter.check_and_record_at("x", start + Duration::from_secs(59)));
        assert!(limiter.check_and_record_at("x", start + Duration::from_millis(60_001)));
        // The 30 old entries were pruned, only the new one remains
        assert_eq!(limiter.recorded("x"), 1);
    }

    #[test]
    fn test_entry_exactly_window_old_expires() {
        let limiter = RateLimiter::new(RateLimitPolicy {
            window: Duration::from_secs(10),
            capacity: 1,
        });
        let start = Instant::now();

        assert!(limiter.check_and_record_at("x", start));
        assert!(!limiter.check_and_record_at("x", start + Duration::from_millis(9_999)));
        assert!(limiter.check_and_record_at("x", start + Duration::from_secs(10)));
    }

    #[test]
    fn test_rejected_calls_are_not_recorded() {
        let limiter = RateLimiter::new(RateLimitPolicy {
            window: Duration::from_secs(60),
            capacity: 2,
        });
        let start = Instant::now();

        assert!(limiter.check_and_record_at("x", start));
        assert!(limiter.check_and_record_at("x", start + Duration::from_secs(30)));
        for s in 31..60 {
            assert!(!limiter.check_and_record_at("x", start + Duration::from_secs(s)));
        }
        assert_eq!(limiter.recorded("x"), 2);

        // First call expires at 60s, freeing exactly one slot
        assert!(limiter.check_and_record_at("x", start + Duration::from_secs(60)));
        assert!(!limiter.check_and_record_at("x", start + Duration::from_secs(61)));
    }

    #[test]
    fn test_endpoints_are_independent() {
        let limiter = RateLimiter::new(RateLimitPolicy {
            window: Duration::from_secs(60),
            capacity: 1,
        });
        let now = Instant::now();

        assert!(limiter.check_and_record_at("/search_by_name/", now));
        assert!(!limiter.check_and_record_at("/search_by_name/", now));
        assert!(limiter.check_and_record_at("/pokemon/", now));
        assert_eq!(limiter.recorded("/battle_advanced/"), 0);
    }

    #[test]
    fn test_shared_across_threads() {
        let limiter = Arc::new(RateLimiter::default());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let limiter = Arc::clone(&limiter);
                std::thread::spawn(move || {
                    (0..10).filter(|_| limiter.check_and_record("x")).count()
                })
            })
            .collect();

        let allowed: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(allowed, 30);
    }
}
