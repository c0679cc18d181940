//! # hint-cards
//!
//! Turns a CSV of staged puzzle hints into collapsible cards, with one
//! puzzle held back until its title is clicked enough times.
//!
//! ```no_run
//! use hint_cards::{load_and_render, Config, GroupingMode, HtmlPage};
//!
//! let config = Config::default();
//! let mut page = HtmlPage::new(config.page.clone());
//! let source = config.source.clone();
//! if let Some(mut board) = load_and_render(&source, config, GroupingMode::Lenient, &mut page)? {
//!     for _ in 0..5 {
//!         board.trigger(&mut page)?;
//!     }
//! }
//! println!("{}", page.to_document());
//! # Ok::<(), hint_cards::HintsError>(())
//! ```
pub mod hints;

// Re-export the main types for convenience
pub use hints::{
    load_and_render,
    GroupingMode,
    HintBoard,
    HintsError,
    Result,
    format::{csv::parse, grouping::{group, group_strict, split, HeaderIndex}},
    render::{CardRenderer, HtmlPage, Surface, TextSurface},
    reveal::{GestureDetector, RevealController},
    types::{
        config::Config,
        models::{
            BodyFormat,
            CardSection,
            ColumnRole,
            DisplayCard,
            Group,
            HintRecord,
            MessageKind,
            RevealState,
            Row,
        },
    },
};
