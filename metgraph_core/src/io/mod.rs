//! Module for loading data providers from snapshot files
pub mod json;
