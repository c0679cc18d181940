//! Text parsing layer: raw CSV text to rows, rows to puzzle groups.
//!
//! ```text
//! raw text ──csv::parse()──▶ Vec<Row> ──grouping::group()──▶ Vec<Group>
//!                                                   │
//!                                    grouping::split() ──▶ visible / hidden
//! ```

pub mod csv;
pub mod grouping;
