//! API Module - Facade for display sinks
//!
//! Rendering (charts, tables, cards) nằm ngoài crate; layer này chỉ cung cấp
//! state và giá trị đã tính sẵn.

pub mod dashboard;
pub mod views;

pub use dashboard::DashboardSession;
pub use views::{
    to_json, AlertRow, DeepDiveView, HourView, InsightsView, KpiView, LeadershipView, ViewState,
};
