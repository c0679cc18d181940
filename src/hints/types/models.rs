//! Core data structures shared by the parser, grouping engine and renderer.
//!
//! All of these are derived values: they are rebuilt from the source text on
//! every load and never mutated afterwards.

use serde::Deserialize;

/// One parsed CSV row. Arity is not enforced.
pub type Row = Vec<String>;

/// A single staged hint for a puzzle.
///
/// Only constructed when all three values are non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintRecord {
    pub puzzle_id: String,
    pub stage: String,
    pub text: String,
}

/// All hint records sharing one puzzle identifier, in row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub title: String,
    pub hints: Vec<HintRecord>,
}

/// The three header columns the grouping engine looks up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    Puzzle,
    Stage,
    Text,
}

impl std::fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ColumnRole::Puzzle => write!(f, "puzzle"),
            ColumnRole::Stage => write!(f, "hint stage"),
            ColumnRole::Text => write!(f, "hint text"),
        }
    }
}

/// How a section body is emitted by a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyFormat {
    /// Literal text; always escaped.
    #[default]
    Text,
    /// Trusted markup, emitted as-is by surfaces that understand it.
    Markup,
}

/// One collapsible item inside a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSection {
    pub label: String,
    /// Fixed lead-in shown before the body (the answer prefix), never markup.
    pub prefix: Option<String>,
    pub body: String,
    pub format: BodyFormat,
}

/// Display-ready card for one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayCard {
    pub title: String,
    pub badge: String,
    pub hints: Vec<CardSection>,
    pub answer: Option<CardSection>,
    /// Lowercased title and hint texts joined by single spaces.
    pub search_text: String,
}

/// In-place messages that replace the content region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    LoadFailed,
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Locked,
    Revealed,
}
