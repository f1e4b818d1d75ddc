//! Cache Module - Freshness Cache
//!
//! Giữ đúng một snapshot (record set + thời điểm fetch).
//! Snapshot còn "tươi" (< 60s) thì trả ngay, không I/O.
//!
//! # Failure Strategy
//! A failed refresh never touches the existing snapshot: stale data stays
//! available. Overlapping loads are not deduplicated; the last one to finish
//! owns the slot.

pub mod clock;
#[cfg(test)]
mod tests;

pub use clock::{Clock, SystemClock};

use std::sync::Arc;

use parking_lot::RwLock;

use crate::constants::FRESHNESS_WINDOW_MS;
use crate::logic::loader::{LoadError, RecordLoader};
use crate::logic::records::RecordSet;

/// Last successful load
#[derive(Debug, Clone)]
pub struct CachedSnapshot {
    pub records: RecordSet,
    /// Epoch ms at which the fetch was started
    pub fetched_at: i64,
}

impl CachedSnapshot {
    pub fn age_ms(&self, now: i64) -> i64 {
        now - self.fetched_at
    }
}

/// Time-windowed memoization over a `RecordLoader`
pub struct FreshnessCache<L, C = SystemClock> {
    loader: L,
    clock: C,
    window_ms: i64,
    snapshot: RwLock<Option<CachedSnapshot>>,
}

impl<L: RecordLoader> FreshnessCache<L, SystemClock> {
    pub fn new(loader: L) -> Self {
        Self::with_clock(loader, SystemClock)
    }
}

impl<L: RecordLoader, C: Clock> FreshnessCache<L, C> {
    pub fn with_clock(loader: L, clock: C) -> Self {
        Self {
            loader,
            clock,
            window_ms: FRESHNESS_WINDOW_MS,
            snapshot: RwLock::new(None),
        }
    }

    /// Override the freshness window (ms)
    pub fn with_window(mut self, window_ms: i64) -> Self {
        self.window_ms = window_ms;
        self
    }

    /// Cached records when fresh and not forced, otherwise a new load.
    pub async fn get_records(&self, force_refresh: bool) -> Result<RecordSet, LoadError> {
        let now = self.clock.now_millis();

        if !force_refresh {
            if let Some(records) = self.fresh_records(now) {
                log::debug!("Cache hit: {} records", records.len());
                return Ok(records);
            }
        }

        log::debug!("Cache miss (force_refresh = {}), loading", force_refresh);
        let records: RecordSet = Arc::new(self.loader.load().await?);

        *self.snapshot.write() = Some(CachedSnapshot {
            records: Arc::clone(&records),
            fetched_at: now,
        });
        log::info!("Cache snapshot replaced: {} records", records.len());

        Ok(records)
    }

    /// Current snapshot, fresh or not
    pub fn snapshot(&self) -> Option<CachedSnapshot> {
        self.snapshot.read().clone()
    }

    pub fn is_fresh(&self) -> bool {
        self.fresh_records(self.clock.now_millis()).is_some()
    }

    fn fresh_records(&self, now: i64) -> Option<RecordSet> {
        self.snapshot
            .read()
            .as_ref()
            .filter(|s| s.age_ms(now) < self.window_ms)
            .map(|s| Arc::clone(&s.records))
    }
}
