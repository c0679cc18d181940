//! The top-level load routine: source → groups → cards on a surface.

use std::path::Path;
use std::time::Instant;

use log::{error, info};

use super::format::{csv, grouping};
use super::render::{CardRenderer, Surface};
use super::reveal::{GestureDetector, RevealController};
use super::source;
use super::types::config::Config;
use super::types::error::Result;
use super::types::models::{Group, MessageKind, RevealState};

/// How missing header columns are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupingMode {
    /// Missing columns are logged and produce no groups.
    #[default]
    Lenient,
    /// Missing columns are an error.
    Strict,
}

/// A loaded dataset: the visible groups plus the gated hidden group.
#[derive(Debug, Clone)]
pub struct HintBoard {
    config: Config,
    renderer: CardRenderer,
    visible: Vec<Group>,
    controller: RevealController,
}

impl HintBoard {
    /// Build a board from already grouped data.
    pub fn from_groups(groups: Vec<Group>, config: Config) -> Self {
        let split = grouping::split(groups, config.hidden_title.as_deref());
        let detector = GestureDetector::new(config.reveal.threshold, config.reveal.reset_on_idle());
        let controller = RevealController::new(split.hidden, detector, config.messages.revealed.clone());
        info!(
            "Board ready: {} visible groups, hidden group {}",
            split.visible.len(),
            if controller.is_armed() { "present" } else { "absent" }
        );
        Self {
            renderer: CardRenderer::from_config(&config),
            config,
            visible: split.visible,
            controller,
        }
    }

    /// Parse and group CSV text.
    pub fn from_text(text: &str, config: Config, mode: GroupingMode) -> Result<Self> {
        let rows = csv::parse(text);
        let groups = match mode {
            GroupingMode::Lenient => grouping::group(&rows, &config.columns),
            GroupingMode::Strict => grouping::group_strict(&rows, &config.columns)?,
        };
        Ok(Self::from_groups(groups, config))
    }

    /// Load, decode, parse and group the source at `path`.
    pub fn open(path: impl AsRef<Path>, config: Config, mode: GroupingMode) -> Result<Self> {
        let text = source::load(path)?;
        Self::from_text(&text, config, mode)
    }

    pub fn visible(&self) -> &[Group] {
        &self.visible
    }

    pub fn hidden(&self) -> Option<&Group> {
        self.controller.hidden()
    }

    pub fn reveal_state(&self) -> RevealState {
        self.controller.state()
    }

    /// Replace the content region with the visible cards, or with the
    /// empty message when there are none.
    pub fn render_into<S: Surface>(&self, surface: &mut S) -> Result<()> {
        surface.clear()?;
        if self.visible.is_empty() {
            return surface.show_message(MessageKind::Empty, &self.config.messages.empty);
        }
        for group in &self.visible {
            surface.append_card(&self.renderer.render(group))?;
        }
        Ok(())
    }

    /// One trigger event on the title element.
    pub fn trigger<S: Surface>(&mut self, surface: &mut S) -> Result<RevealState> {
        self.trigger_at(surface, Instant::now())
    }

    pub fn trigger_at<S: Surface>(&mut self, surface: &mut S, at: Instant) -> Result<RevealState> {
        self.controller.trigger_at(surface, &self.renderer, at)
    }
}

/// Load the source and render it, converting every load error into the
/// failure message on `surface`.
///
/// Returns `Ok(None)` when loading failed; the content region then holds
/// only the failure message. `Err` is reserved for the surface itself
/// failing.
pub fn load_and_render<S: Surface>(
    path: impl AsRef<Path>,
    config: Config,
    mode: GroupingMode,
    surface: &mut S,
) -> Result<Option<HintBoard>> {
    let failure = config.messages.load_failed.clone();
    match HintBoard::open(path, config, mode) {
        Ok(board) => {
            board.render_into(surface)?;
            Ok(Some(board))
        }
        Err(e) => {
            error!("Failed to load hints: {}", e);
            surface.clear()?;
            surface.show_message(MessageKind::LoadFailed, &failure)?;
            Ok(None)
        }
    }
}
