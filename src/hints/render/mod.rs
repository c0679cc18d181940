//! Presentation layer: groups become [`DisplayCard`](crate::hints::types::models::DisplayCard)s,
//! and surfaces turn cards and messages into output.
//!
//! - [`card`]: pure group → card construction
//! - [`surface`]: the operations the core performs on a display
//! - [`html`]: a static HTML page surface
//! - [`text`]: a terminal surface

pub mod card;
pub mod html;
pub mod surface;
pub mod text;

pub use card::CardRenderer;
pub use html::HtmlPage;
pub use surface::Surface;
pub use text::TextSurface;
