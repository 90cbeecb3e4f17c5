//! Aggregation and descriptive statistics
//!
//! Turns the generated records into the counts, percentages and score
//! statistics shared by the console report, the chart and the dashboard.

pub mod stats;
pub mod summary;

pub use summary::{
    AnalysisSummary, DepartmentPerformance, FrequencyEntry, FrequencyTable, ScoreStats,
};
