//! Toonstrip composes four-panel cartoon strips from upstream-generated
//! dialogue and illustrations.
//!
//! The core is a pure, synchronous layout engine over a two-method pixel
//! metrics contract ([`FontFace`]): measure a string's rendered width and
//! height, and from that wrap dialogue to a panel's pixel budget, stack
//! variable-height text blocks under fixed-size decorated panels, and
//! assemble the final image.
//!
//! # Pipeline overview
//!
//! 1. **Load**: [`CartoonStrip`] from the upstream JSON wire format
//! 2. **Fetch**: [`fetch_strip_images`] resolves each panel's illustration
//! 3. **Compose**: [`compose_strip`] lays out title, panels, and text into
//!    one raster image, handed back to the caller for saving
//!
//! Composition does no I/O of its own: it is a function of
//! (strip data, fetched images, fonts) -> image, so the whole layout engine
//! tests against a deterministic fake font.
#![forbid(unsafe_code)]

pub mod compose;
pub mod error;
pub mod fetch;
pub mod font;
pub mod model;
pub mod panel;
pub mod text;
pub mod wrap;

pub use compose::{compose_strip, StripStyle};
pub use error::{ToonstripError, ToonstripResult};
pub use fetch::{fetch_panel_image, fetch_strip_images};
pub use font::{FontFace, FontSet, TtfFont, FONT_SIZE, TITLE_FONT_SIZE};
pub use model::{CartoonStrip, CartoonStripCell, SpeechBubble, NARRATOR_PERSON, PANEL_COUNT};
pub use panel::decorate_panel;
pub use text::{render_text_block, render_title};
pub use wrap::wrap_text;
