//! Event-stream to HTML rendering.
//!
//! This module turns an ordered stream of document-structure events into
//! HTML bytes. The design separates the byte-level transforms from the
//! state machine that drives them:
//!
//! - [`escape`]: table-driven HTML entity escaping
//! - [`slug`]: URL-fragment slug generation for heading anchors
//! - [`render`]: the event renderer and the top-level entry points
//!
//! ## Design Notes
//!
//! Rendering is strictly streaming: every event is translated to output
//! bytes before the next one is looked at, and nothing is ever read back
//! out of the buffer (the one self-copy, duplicating a heading slug into
//! the anchor's `href`, goes through the buffer's own ranged append).
//! Special contexts are carried as renderer state rather than as a stack:
//!
//! - **Image alt text**: a nesting counter suppresses span markup while an
//!   image's `alt` attribute is open, so nested formatting degrades to its
//!   concatenated plain text
//! - **Heading anchors**: a one-shot flag set at heading entry routes the
//!   next text run through the slug encoder before its normal rendering

mod escape;
mod render;
mod slug;

pub use escape::escape_html_into;
pub use render::{HtmlRenderer, render_events, render_html};
pub use slug::{append_slug, slugify};
