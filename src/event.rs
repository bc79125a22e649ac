//! The document-structure event model.
//!
//! A document arrives as an ordered stream of events: block open/close,
//! span open/close, and text runs. Events are well-nested — every enter is
//! matched by exactly one later leave of the same kind — and one stream
//! describes one complete document. The stream is produced by an external
//! collaborator (a Markdown parser) and consumed through the [`EventSink`]
//! listener interface.

use bitflags::bitflags;

use crate::error::Result;

bitflags! {
    /// Parsing and rendering options.
    ///
    /// Most flags enable syntax extensions and are passed through to the
    /// structure producer uninterpreted. The renderer itself reads only
    /// [`HEADING_ANCHORS`](Options::HEADING_ANCHORS).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Options: u32 {
        /// Parse GFM tables.
        const TABLES = 1 << 0;
        /// Parse GFM task-list items.
        const TASK_LISTS = 1 << 1;
        /// Parse `~~strikethrough~~` spans.
        const STRIKETHROUGH = 1 << 2;
        /// Parse `[[wikilink]]` spans.
        const WIKILINKS = 1 << 3;
        /// Parse `$math$` and `$$display math$$` spans.
        const LATEX_MATH = 1 << 4;
        /// Parse underline spans instead of treating `_` as emphasis.
        const UNDERLINE = 1 << 5;
        /// Parse `||spoiler||` spans.
        const SPOILERS = 1 << 6;
        /// Recognize bare URLs and e-mail addresses as links.
        const PERMISSIVE_AUTOLINKS = 1 << 7;
        /// Treat raw HTML as literal text instead of passing it through.
        const NO_HTML = 1 << 8;
        /// Emit an invisible `<a>` anchor ahead of each heading's text.
        const HEADING_ANCHORS = 1 << 9;
    }
}

/// One typed fragment of a composite attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrPart<'a> {
    /// Raw text; escaped when rendered.
    Normal(&'a [u8]),
    /// A pre-resolved character reference, emitted verbatim.
    Entity(&'a [u8]),
    /// A literal NUL, rendered as U+FFFD.
    NullChar,
}

/// A structured attribute value such as a link href or an image title.
///
/// Producers decompose attribute text into typed parts so that character
/// references survive rendering verbatim while surrounding text is still
/// escaped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attribute<'a> {
    pub parts: Vec<AttrPart<'a>>,
}

impl<'a> Attribute<'a> {
    /// An attribute with no parts.
    pub fn new() -> Self {
        Self::default()
    }

    /// An attribute made of a single run of plain text.
    pub fn plain(text: &'a [u8]) -> Self {
        Self {
            parts: vec![AttrPart::Normal(text)],
        }
    }

    /// Append a part.
    pub fn push(&mut self, part: AttrPart<'a>) {
        self.parts.push(part);
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl<'a> From<&'a str> for Attribute<'a> {
    fn from(text: &'a str) -> Self {
        Attribute::plain(text.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for Attribute<'a> {
    fn from(text: &'a [u8]) -> Self {
        Attribute::plain(text)
    }
}

/// Table column alignment, from the delimiter row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// No alignment given.
    #[default]
    None,
    Left,
    Center,
    Right,
}

/// A block-level element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    /// The document root.
    Document,
    /// A paragraph. Rendered transparently, without `<p>` tags.
    Paragraph,
    /// A blockquote.
    Blockquote,
    /// A heading, level 1-6.
    Heading { level: u8 },
    /// A fenced or indented code block, with the fence's info string as
    /// the language when present.
    CodeBlock { lang: Option<Attribute<'a>> },
    /// A raw HTML block; its content arrives as [`TextKind::Html`] runs.
    HtmlBlock,
    /// An unordered list.
    UnorderedList,
    /// An ordered list and its start number.
    OrderedList { start: u32 },
    /// A list item. `task` is `Some(checked)` for task-list items.
    ListItem { task: Option<bool> },
    /// A thematic break.
    ThematicBreak,
    /// A table.
    Table,
    /// The header section of a table.
    TableHead,
    /// The body section of a table.
    TableBody,
    /// A table row.
    TableRow,
    /// A table cell; `header` selects `<th>` over `<td>`.
    TableCell { header: bool, align: Alignment },
}

/// An inline element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span<'a> {
    /// Emphasized text.
    Emphasis,
    /// Strongly emphasized text.
    Strong,
    /// Inline code.
    Code,
    /// Struck-through text.
    Strikethrough,
    /// Underlined text.
    Underline,
    /// Spoiler text, hidden until revealed.
    Spoiler,
    /// An inline or display math element.
    Math { display: bool },
    /// A link with destination and optional title.
    Link {
        href: Attribute<'a>,
        title: Option<Attribute<'a>>,
    },
    /// An image; nested spans degrade to plain text inside its `alt`.
    Image {
        src: Attribute<'a>,
        title: Option<Attribute<'a>>,
    },
    /// A wikilink and its target page.
    Wikilink { target: Attribute<'a> },
}

/// The subtype of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    /// Ordinary text; escaped when rendered.
    Normal,
    /// A literal NUL byte, rendered as U+FFFD.
    NullChar,
    /// A soft line break.
    SoftBreak,
    /// A hard line break.
    LineBreak,
    /// Raw HTML passed through verbatim.
    Html,
    /// A resolved character reference, emitted verbatim.
    Entity,
}

/// One event of a document-structure stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<'a> {
    /// Start of a block element.
    EnterBlock(Block<'a>),
    /// End of a block element.
    LeaveBlock(Block<'a>),
    /// Start of an inline element.
    EnterSpan(Span<'a>),
    /// End of an inline element.
    LeaveSpan(Span<'a>),
    /// A run of text.
    Text(TextKind, &'a [u8]),
}

impl<'a> Event<'a> {
    /// Deliver this event to a sink.
    pub fn dispatch(&self, sink: &mut dyn EventSink) {
        match self {
            Event::EnterBlock(block) => sink.enter_block(block),
            Event::LeaveBlock(block) => sink.leave_block(block),
            Event::EnterSpan(span) => sink.enter_span(span),
            Event::LeaveSpan(span) => sink.leave_span(span),
            Event::Text(kind, text) => sink.text(*kind, text),
        }
    }
}

/// Listener interface driven by a structure producer.
///
/// The producer calls these methods in document order. Implementations
/// must tolerate any well-nested sequence; they are never handed an enter
/// without its matching leave. Methods are infallible — a renderer either
/// keeps up or aborts on resource exhaustion, and a producer that cannot
/// continue reports that through its own return value instead.
pub trait EventSink {
    fn enter_block(&mut self, block: &Block<'_>);
    fn leave_block(&mut self, block: &Block<'_>);
    fn enter_span(&mut self, span: &Span<'_>);
    fn leave_span(&mut self, span: &Span<'_>);
    fn text(&mut self, kind: TextKind, text: &[u8]);
}

/// The external document-structure producer.
///
/// One call tokenizes and parses one complete input and pushes the
/// resulting event stream into `sink`, synchronously. On failure the
/// producer returns [`Error::Producer`](crate::Error::Producer) with its
/// own nonzero status code; whatever the sink received before the failure
/// is left as-is.
pub trait StructureProducer {
    fn produce(
        &mut self,
        input: &[u8],
        options: Options,
        sink: &mut dyn EventSink,
    ) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_plain() {
        let attr = Attribute::plain(b"https://example.com");
        assert_eq!(attr.parts, vec![AttrPart::Normal(b"https://example.com")]);
        assert!(!attr.is_empty());
    }

    #[test]
    fn test_attribute_from_str() {
        let attr = Attribute::from("title text");
        assert_eq!(attr.parts.len(), 1);
    }

    #[test]
    fn test_options_passthrough_bits_are_distinct() {
        let all = Options::all();
        assert_eq!(all.bits().count_ones(), 10);
        assert!(all.contains(Options::HEADING_ANCHORS));
    }
}
