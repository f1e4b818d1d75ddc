//! Records Module - Behavior Dataset Model & TSV Parser
//!
//! # Architecture
//! - `types.rs`: `UserBehaviorRecord`, `ParseReport`, column names
//! - `parser.rs`: header-driven TSV parsing with silent row skipping
//!
//! # Failure Strategy
//! Bad rows are dropped, bad fields fall back to 0/false/"".
//! Parsing itself never fails.

pub mod types;
pub mod parser;
#[cfg(test)]
mod tests;

pub use types::{segment_tier, ParseReport, RecordSet, UserBehaviorRecord};
pub use parser::{parse_records, parse_records_with_report};
