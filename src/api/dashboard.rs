//! Dashboard Session
//!
//! State của một màn hình dashboard: cache, filter hiện tại, record set cuối
//! cùng tải thành công và lỗi gần nhất.
//!
//! - Loading chỉ hiển thị khi chưa có dữ liệu.
//! - Refresh lỗi: giữ nguyên dữ liệu cũ, chỉ set error.
//! - Refresh thành công: thay toàn bộ record set, xoá error.

use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::RwLock;

use super::views::{AlertRow, DeepDiveView, InsightsView, KpiView, LeadershipView, ViewState};
use crate::logic::cache::{Clock, FreshnessCache, SystemClock};
use crate::logic::filter::{apply_filters, derive_filter_options, FilterOptions, FilterState};
use crate::logic::loader::{DatasetLoader, LoadError, LoaderConfig, RecordLoader};
use crate::logic::metrics;
use crate::logic::records::{RecordSet, UserBehaviorRecord};

/// Counts a running load; released on drop so a cancelled load still ends.
struct InFlightGuard<'a>(&'a AtomicUsize);

impl<'a> InFlightGuard<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

pub struct DashboardSession<L, C = SystemClock> {
    cache: FreshnessCache<L, C>,
    filters: RwLock<FilterState>,
    records: RwLock<Option<RecordSet>>,
    error: RwLock<Option<String>>,
    in_flight: AtomicUsize,
}

impl DashboardSession<DatasetLoader, SystemClock> {
    pub fn new(config: LoaderConfig) -> Self {
        Self::with_cache(FreshnessCache::new(DatasetLoader::new(config)))
    }
}

impl<L: RecordLoader, C: Clock> DashboardSession<L, C> {
    pub fn with_cache(cache: FreshnessCache<L, C>) -> Self {
        Self {
            cache,
            filters: RwLock::new(FilterState::default()),
            records: RwLock::new(None),
            error: RwLock::new(None),
            in_flight: AtomicUsize::new(0),
        }
    }

    // ========================================================================
    // LOADING
    // ========================================================================

    /// Load honoring the freshness window
    pub async fn load(&self) -> Result<(), LoadError> {
        self.fetch(false).await
    }

    /// User-initiated refresh, bypasses the cache
    pub async fn refresh(&self) -> Result<(), LoadError> {
        self.fetch(true).await
    }

    async fn fetch(&self, force_refresh: bool) -> Result<(), LoadError> {
        let result = {
            let _guard = InFlightGuard::enter(&self.in_flight);
            self.cache.get_records(force_refresh).await
        };

        match result {
            Ok(records) => {
                *self.records.write() = Some(records);
                *self.error.write() = None;
                Ok(())
            }
            Err(e) => {
                log::warn!("Dashboard load failed, keeping previous data: {}", e.cause());
                *self.error.write() = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// True only while a load runs and nothing has been loaded yet
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0 && self.records.read().is_none()
    }

    pub fn error(&self) -> Option<String> {
        self.error.read().clone()
    }

    pub fn view_state(&self) -> ViewState {
        let has_data = self.records.read().is_some();
        if self.is_loading() {
            return ViewState::Loading;
        }
        match (has_data, self.error()) {
            (true, error) => ViewState::Ready { error },
            (false, Some(message)) => ViewState::Failed { message },
            (false, None) => ViewState::Idle,
        }
    }

    // ========================================================================
    // FILTERS
    // ========================================================================

    pub fn set_filters(&self, state: FilterState) {
        *self.filters.write() = state;
    }

    pub fn filters(&self) -> FilterState {
        self.filters.read().clone()
    }

    /// Full (unfiltered) record set, if any
    pub fn records(&self) -> Option<RecordSet> {
        self.records.read().clone()
    }

    /// Working subset under the current filters
    pub fn filtered(&self) -> Vec<UserBehaviorRecord> {
        match self.records() {
            Some(records) => apply_filters(&records, &self.filters()),
            None => Vec::new(),
        }
    }

    /// Selector choices from the full set
    pub fn options(&self) -> FilterOptions {
        match self.records() {
            Some(records) => derive_filter_options(&records),
            None => FilterOptions::default(),
        }
    }

    // ========================================================================
    // VIEWS
    // ========================================================================

    pub fn kpis(&self) -> KpiView {
        KpiView::from(&metrics::kpi_summary(&self.filtered()))
    }

    pub fn deep_dive(&self) -> DeepDiveView {
        DeepDiveView::build(&self.filtered())
    }

    pub fn leadership(&self) -> LeadershipView {
        LeadershipView::build(&self.filtered())
    }

    pub fn insights(&self) -> InsightsView {
        InsightsView::build(&self.filtered())
    }

    pub fn alerts(&self) -> Vec<AlertRow> {
        metrics::churn_risk_subset(&self.filtered())
            .iter()
            .map(AlertRow::from)
            .collect()
    }
}
