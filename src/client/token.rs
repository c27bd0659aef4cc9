use std::time::{Duration, Instant};

/// How long a token from `auth/get_token` is reused before fetching a new one.
pub const TOKEN_TTL: Duration = Duration::from_secs(500);

/// Source of the current time for token expiry.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A token is fresh while its age does not exceed [`TOKEN_TTL`].
pub(crate) fn is_fresh(acquired_at: Instant, now: Instant) -> bool {
    now.saturating_duration_since(acquired_at) <= TOKEN_TTL
}

#[derive(Debug, Clone)]
struct CachedToken {
    value: String,
    acquired_at: Instant,
}

/// Single cached token. Not synchronized: the client owning it needs `&mut`
/// access to refresh it.
#[derive(Debug, Clone, Default)]
pub(crate) struct TokenCache {
    entry: Option<CachedToken>,
}

impl TokenCache {
    /// Return the cached token if it is still fresh, dropping it otherwise.
    pub(crate) fn get(&mut self, now: Instant) -> Option<&str> {
        if self
            .entry
            .as_ref()
            .is_some_and(|entry| !is_fresh(entry.acquired_at, now))
        {
            self.entry = None;
        }
        self.entry.as_ref().map(|entry| entry.value.as_str())
    }

    pub(crate) fn store(&mut self, value: String, acquired_at: Instant) {
        self.entry = Some(CachedToken { value, acquired_at });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freshness_boundary_is_inclusive() {
        let start = Instant::now();
        assert!(is_fresh(start, start));
        assert!(is_fresh(start, start + TOKEN_TTL));
        assert!(!is_fresh(start, start + TOKEN_TTL + Duration::from_millis(1)));
    }

    #[test]
    fn clock_going_backwards_counts_as_fresh() {
        let later = Instant::now() + Duration::from_secs(10);
        assert!(is_fresh(later, later - Duration::from_secs(5)));
    }

    #[test]
    fn cache_returns_fresh_and_evicts_stale() {
        let start = Instant::now();
        let mut cache = TokenCache::default();
        assert_eq!(cache.get(start), None);

        cache.store("tok".to_owned(), start);
        assert_eq!(cache.get(start + Duration::from_secs(499)), Some("tok"));
        assert_eq!(cache.get(start + Duration::from_secs(501)), None);
        // Eviction is permanent even if asked again with an earlier time.
        assert_eq!(cache.get(start), None);
    }
}
