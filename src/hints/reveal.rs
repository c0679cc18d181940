//! Click-count gated reveal of the hidden group.
//!
//! [`GestureDetector`] counts trigger events and fires once when the
//! threshold is reached. [`RevealController`] owns the hidden group and, on
//! firing, appends its card and shows the one-time notice.

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::hints::types::error::Result;
use crate::hints::types::models::{Group, RevealState};
use crate::hints::render::{CardRenderer, Surface};

/// Counts repeated trigger events up to a threshold.
#[derive(Debug, Clone)]
pub struct GestureDetector {
    threshold: u32,
    reset_on_idle: Option<Duration>,
    count: u32,
    last_event: Option<Instant>,
    fired: bool,
}

impl GestureDetector {
    /// A threshold of zero behaves like one.
    pub fn new(threshold: u32, reset_on_idle: Option<Duration>) -> Self {
        Self {
            threshold: threshold.max(1),
            reset_on_idle,
            count: 0,
            last_event: None,
            fired: false,
        }
    }

    /// Record an event. Returns `true` exactly once: on the event that
    /// reaches the threshold. Later events are ignored.
    pub fn register(&mut self, at: Instant) -> bool {
        if self.fired {
            return false;
        }
        if let (Some(idle), Some(last)) = (self.reset_on_idle, self.last_event) {
            if at.saturating_duration_since(last) > idle {
                self.count = 0;
            }
        }
        self.last_event = Some(at);
        self.count += 1;
        if self.count < self.threshold {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

/// Two-state machine: `Locked` until the detector fires, then `Revealed`.
#[derive(Debug, Clone)]
pub struct RevealController {
    hidden: Option<Group>,
    detector: GestureDetector,
    notice: String,
    state: RevealState,
    /// The detector fired but the card or notice has not reached the surface.
    pending: bool,
    card_shown: bool,
}

impl RevealController {
    /// Without a hidden group the controller is disarmed and every trigger
    /// is a no-op.
    pub fn new(hidden: Option<Group>, detector: GestureDetector, notice: impl Into<String>) -> Self {
        Self {
            hidden,
            detector,
            notice: notice.into(),
            state: RevealState::Locked,
            pending: false,
            card_shown: false,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_armed(&self) -> bool {
        self.hidden.is_some()
    }

    pub fn hidden(&self) -> Option<&Group> {
        self.hidden.as_ref()
    }

    pub fn trigger<S: Surface>(&mut self, surface: &mut S, renderer: &CardRenderer) -> Result<RevealState> {
        self.trigger_at(surface, renderer, Instant::now())
    }

    /// Handle one trigger event that happened at `at`.
    ///
    /// The state only becomes `Revealed` once the card and the notice have
    /// both reached the surface. If either fails, the next trigger retries
    /// the missing part without appending the card twice.
    pub fn trigger_at<S: Surface>(
        &mut self,
        surface: &mut S,
        renderer: &CardRenderer,
        at: Instant,
    ) -> Result<RevealState> {
        if self.state == RevealState::Revealed {
            return Ok(self.state);
        }
        let Some(hidden) = &self.hidden else {
            return Ok(self.state);
        };
        if !self.pending {
            if !self.detector.register(at) {
                debug!("Reveal trigger {}/{}", self.detector.count(), self.detector.threshold);
                return Ok(self.state);
            }
            self.pending = true;
            info!("Revealing hidden group {:?}", hidden.title);
        }

        if !self.card_shown {
            surface.append_card(&renderer.render(hidden))?;
            self.card_shown = true;
        }
        surface.notify(&self.notice)?;
        self.pending = false;
        self.state = RevealState::Revealed;
        Ok(self.state)
    }
}
