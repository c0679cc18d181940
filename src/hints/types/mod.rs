//! Foundational data structures, error types, and configuration.

pub mod config;
pub mod error;
pub mod models;
