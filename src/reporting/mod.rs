//! Chart rendering and reporting
//!
//! This module handles the static PNG chart, HTML dashboard generation,
//! and structured logging for the application.

pub mod chart;
pub mod dashboard;
pub mod logging;

// Re-export commonly used items
pub use chart::ChartRenderer;
pub use dashboard::{DashboardData, HtmlDashboard};
