//! empviz generates a seeded synthetic employee dataset, summarizes it, and
//! renders a four-panel PNG chart and a self-contained HTML dashboard.

pub mod analysis;
pub mod config;
pub mod core;
pub mod dataset;
pub mod reporting;
pub mod ui;

pub use analysis::AnalysisSummary;
pub use config::Config;
pub use core::{Department, EmpvizError, Employee, Region, Result};
pub use dataset::Dataset;
