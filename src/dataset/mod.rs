//! Synthetic dataset generation
//!
//! Produces the seeded, fixed-size table of employee records that every
//! later stage reads from.

pub mod generator;

pub use generator::Dataset;
