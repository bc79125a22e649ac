//! # mdstream
//!
//! A streaming renderer that turns Markdown document-structure events into
//! well-formed HTML bytes.
//!
//! The crate does not parse Markdown. A structure producer — any type
//! implementing [`StructureProducer`] — tokenizes the input and pushes
//! block, span, and text events into an [`EventSink`]; the bundled
//! [`HtmlRenderer`] consumes them synchronously, escaping text, rendering
//! structured attributes, and slugging heading text for anchor links as it
//! goes.
//!
//! ## Features
//!
//! - Exact, byte-oriented HTML entity escaping over raw input bytes
//! - Structured attribute values mixing escaped text, verbatim character
//!   references, and NUL replacement
//! - Unicode-aware (Latin-1 repertoire) heading slugs for `#fragment`
//!   anchors, behind [`Options::HEADING_ANCHORS`]
//! - Image alt text that degrades nested markup to plain text
//! - Tables, lists, task items, math, wikilinks, spoilers, underline
//!
//! ## Quick Start
//!
//! ```
//! use mdstream::{html::render_events, Block, Event, Options, Span, TextKind};
//!
//! let events = [
//!     Event::EnterBlock(Block::Document),
//!     Event::EnterBlock(Block::Paragraph),
//!     Event::Text(TextKind::Normal, b"a < b, "),
//!     Event::EnterSpan(Span::Emphasis),
//!     Event::Text(TextKind::Normal, b"clearly"),
//!     Event::LeaveSpan(Span::Emphasis),
//!     Event::LeaveBlock(Block::Paragraph),
//!     Event::LeaveBlock(Block::Document),
//! ];
//!
//! let html = render_events(events, Options::empty());
//! assert_eq!(html, b"a &lt; b, <em>clearly</em>");
//! ```
//!
//! Hosts that drive a real parser use [`render_html`], which runs the
//! producer over one complete input and returns the accumulated bytes,
//! propagating the producer's status code on failure.

pub mod buffer;
pub mod error;
pub mod event;
pub mod html;

pub use buffer::OutputBuf;
pub use error::{Error, ErrorSlot, Result};
pub use event::{
    Alignment, AttrPart, Attribute, Block, Event, EventSink, Options, Span, StructureProducer,
    TextKind,
};
pub use html::{HtmlRenderer, render_html};
