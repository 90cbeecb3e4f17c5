//! Core types and foundational components
//!
//! This module contains the employee record types, error handling,
//! and constants used throughout the application.

pub mod constants;
pub mod error;
pub mod types;

// Re-export commonly used items for convenience
pub use error::{EmpvizError, Result};
pub use types::{Department, Employee, Region};
