use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Duration, Utc};

/// How long fetched categories are served without going back to the source.
pub const CATEGORY_CACHE_TTL: Duration = Duration::minutes(5);

/// Source of the current time for cache freshness checks.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Move the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[derive(Debug)]
struct Entry<T> {
    value: T,
    stored_at: DateTime<Utc>,
}

/// Single-slot cache whose value expires `ttl` after it was stored.
///
/// The slot sits behind a mutex so one instance can be shared between
/// actix workers. The lock is never held across an await point.
#[derive(Debug)]
pub struct TtlCache<T, C = SystemClock> {
    entry: Mutex<Option<Entry<T>>>,
    ttl: Duration,
    clock: C,
}

impl<T: Clone> TtlCache<T, SystemClock> {
    /// Cache backed by the wall clock.
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, SystemClock)
    }
}

impl<T: Clone, C: Clock> TtlCache<T, C> {
    pub fn with_clock(ttl: Duration, clock: C) -> Self {
        Self {
            entry: Mutex::new(None),
            ttl,
            clock,
        }
    }

    /// The stored value if it is younger than the TTL.
    pub fn get(&self) -> Option<T> {
        let entry = self.entry.lock().unwrap_or_else(PoisonError::into_inner);
        let now = self.clock.now();
        entry
            .as_ref()
            .filter(|entry| now - entry.stored_at < self.ttl)
            .map(|entry| entry.value.clone())
    }

    /// Store `value`, stamped with the current time.
    pub fn set(&self, value: T) {
        let stored_at = self.clock.now();
        let mut entry = self.entry.lock().unwrap_or_else(PoisonError::into_inner);
        *entry = Some(Entry { value, stored_at });
    }

    /// Drop the stored value. Safe to call on an empty cache.
    pub fn clear(&self) {
        let mut entry = self.entry.lock().unwrap_or_else(PoisonError::into_inner);
        *entry = None;
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
