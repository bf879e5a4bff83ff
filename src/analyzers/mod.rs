//! Grouping and pivoting of cleaned package records.
//!
//! Per-year count tables by month, week and day, the cross-year daily
//! comparison, and the per-day carrier breakdown.

pub mod aggregate;
pub mod carrier;
pub mod merge;
pub mod types;
pub mod utility;
