//! Core hint board modules.
//!
//! # Module Organization
//!
//! - [`types`]: errors, data model and configuration
//! - [`format`]: CSV parsing and grouping
//! - [`render`]: card construction and display surfaces
//! - [`reveal`]: the gated reveal of the hidden group
//! - [`source`]: loading and decoding the CSV source
//! - [`board`]: the top-level load routine

pub mod board;
pub mod format;
pub mod render;
pub mod reveal;
pub mod source;
pub mod types;

pub use board::{load_and_render, GroupingMode, HintBoard};
pub use types::error::{HintsError, Result};
