//! The display seam between the core and whatever shows the cards.

use crate::hints::types::error::Result;
use crate::hints::types::models::{DisplayCard, MessageKind};

/// A display with a pre-existing title/trigger element and content region.
///
/// The core only clears and appends to the content region; it never creates
/// the roots themselves.
pub trait Surface {
    /// Remove everything from the content region.
    fn clear(&mut self) -> Result<()>;

    /// Append one card to the content region.
    fn append_card(&mut self, card: &DisplayCard) -> Result<()>;

    /// Append an in-place status message to the content region.
    fn show_message(&mut self, kind: MessageKind, text: &str) -> Result<()>;

    /// Show a one-off acknowledgement outside the content region.
    fn notify(&mut self, text: &str) -> Result<()>;
}
