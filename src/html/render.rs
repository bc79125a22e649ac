//! The streaming HTML renderer.
//!
//! [`HtmlRenderer`] consumes a document-structure event stream through the
//! [`EventSink`] interface and appends HTML to its output buffer as each
//! event arrives. Block and span boundaries map to literal markup; text
//! runs are routed through escaping, and the first text run of a heading
//! additionally feeds the anchor slug when anchors are enabled.

use std::fmt::Write;

use tracing::debug;

use crate::buffer::OutputBuf;
use crate::error::Result;
use crate::event::{
    Alignment, AttrPart, Attribute, Block, Event, EventSink, Options, Span, StructureProducer,
    TextKind,
};

use super::escape::escape_html_into;
use super::slug::append_slug;

/// UTF-8 encoding of U+FFFD, substituted for literal NUL bytes.
const REPLACEMENT: &[u8] = "\u{FFFD}".as_bytes();

const HEADING_OPEN: [&[u8]; 6] = [b"<h1>", b"<h2>", b"<h3>", b"<h4>", b"<h5>", b"<h6>"];
const HEADING_CLOSE: [&[u8]; 6] = [
    b"</h1>\n",
    b"</h2>\n",
    b"</h3>\n",
    b"</h4>\n",
    b"</h5>\n",
    b"</h6>\n",
];

/// Streaming HTML renderer over one output buffer.
///
/// One renderer serves one render invocation: it exclusively owns its
/// buffer and its state (the image-nesting depth and the pending heading
/// anchor) for the duration of the stream, then yields the buffer whole
/// via [`into_output`](Self::into_output).
///
/// # Examples
///
/// ```
/// use mdstream::{EventSink, HtmlRenderer, Options, Span, TextKind};
///
/// let mut renderer = HtmlRenderer::new(Options::empty());
/// renderer.enter_span(&Span::Emphasis);
/// renderer.text(TextKind::Normal, b"hi");
/// renderer.leave_span(&Span::Emphasis);
/// assert_eq!(renderer.output(), b"<em>hi</em>");
/// ```
pub struct HtmlRenderer {
    out: OutputBuf,
    options: Options,
    /// Depth of image spans; positive while rendering alt text.
    img_nest: u32,
    /// Set on heading enter, consumed by the next text event.
    pending_anchor: bool,
}

impl HtmlRenderer {
    /// A renderer with a fresh buffer.
    pub fn new(options: Options) -> Self {
        Self::with_buffer(OutputBuf::new(), options)
    }

    /// A renderer appending to a caller-supplied buffer.
    pub fn with_buffer(out: OutputBuf, options: Options) -> Self {
        Self {
            out,
            options,
            img_nest: 0,
            pending_anchor: false,
        }
    }

    /// Bytes rendered so far.
    pub fn output(&self) -> &[u8] {
        self.out.as_bytes()
    }

    /// Finish and hand the buffer to the caller.
    pub fn into_output(self) -> OutputBuf {
        self.out
    }

    /// Deliver one event.
    pub fn push(&mut self, event: &Event<'_>) {
        event.dispatch(self);
    }

    fn literal(&mut self, markup: &[u8]) {
        self.out.extend_from_slice(markup);
    }

    /// Render a structured attribute value into a quoted position.
    fn attribute(&mut self, attr: &Attribute<'_>) {
        for part in &attr.parts {
            match *part {
                AttrPart::Normal(text) => escape_html_into(&mut self.out, text),
                AttrPart::Entity(text) => self.out.extend_from_slice(text),
                AttrPart::NullChar => self.out.extend_from_slice(REPLACEMENT),
            }
        }
    }

    fn open_heading(&mut self, level: u8) {
        let idx = usize::from(level.clamp(1, 6)) - 1;
        self.literal(HEADING_OPEN[idx]);
        if self.options.contains(Options::HEADING_ANCHORS) {
            self.pending_anchor = true;
        }
    }

    fn open_code_block(&mut self, lang: Option<&Attribute<'_>>) {
        self.literal(b"<pre><code");
        if let Some(lang) = lang {
            self.literal(b" class=\"language-");
            self.attribute(lang);
            self.out.push(b'"');
        }
        self.out.push(b'>');
    }

    fn open_ordered_list(&mut self, start: u32) {
        if start == 1 {
            self.literal(b"<ol>\n");
        } else {
            self.literal(b"<ol start=\"");
            write!(self.out, "{start}").unwrap();
            self.literal(b"\">\n");
        }
    }

    fn open_list_item(&mut self, task: Option<bool>) {
        match task {
            None => self.literal(b"<li>"),
            Some(checked) => {
                self.literal(b"<li class=\"task-list-item\"><input type=\"checkbox\" disabled");
                if checked {
                    self.literal(b" checked");
                }
                self.out.push(b'>');
            }
        }
    }

    fn open_table_cell(&mut self, header: bool, align: Alignment) {
        self.literal(if header { b"<th" } else { b"<td" });
        match align {
            Alignment::Left => self.literal(b" align=\"left\">"),
            Alignment::Center => self.literal(b" align=\"center\">"),
            Alignment::Right => self.literal(b" align=\"right\">"),
            Alignment::None => self.out.push(b'>'),
        }
    }

    fn open_link(&mut self, href: &Attribute<'_>, title: Option<&Attribute<'_>>) {
        self.literal(b"<a href=\"");
        self.attribute(href);
        if let Some(title) = title {
            self.literal(b"\" title=\"");
            self.attribute(title);
        }
        self.literal(b"\">");
    }

    fn open_image(&mut self, src: &Attribute<'_>) {
        self.literal(b"<img src=\"");
        self.attribute(src);
        self.literal(b"\" alt=\"");
    }

    fn close_image(&mut self, title: Option<&Attribute<'_>>) {
        if let Some(title) = title {
            self.literal(b"\" title=\"");
            self.attribute(title);
        }
        self.literal(b"\">");
    }

    fn open_wikilink(&mut self, target: &Attribute<'_>) {
        self.literal(b"<x-wikilink data-target=\"");
        self.attribute(target);
        self.literal(b"\">");
    }

    /// Emit the invisible anchor ahead of a heading's first text run. The
    /// slug appears twice (id and href); the second copy is duplicated out
    /// of the buffer instead of being recomputed.
    fn heading_anchor(&mut self, text: &[u8]) {
        self.literal(b"<a id=\"");
        let start = self.out.len();
        let len = append_slug(&mut self.out, text);
        self.literal(b"\" class=\"anchor\" aria-hidden=\"true\" href=\"#");
        if len > 0 {
            self.out.extend_from_within(start..start + len);
        }
        self.literal(b"\"></a>");
    }
}

impl EventSink for HtmlRenderer {
    fn enter_block(&mut self, block: &Block<'_>) {
        match block {
            Block::Document | Block::Paragraph | Block::HtmlBlock => {}
            Block::Blockquote => self.literal(b"<blockquote>"),
            Block::Heading { level } => self.open_heading(*level),
            Block::CodeBlock { lang } => self.open_code_block(lang.as_ref()),
            Block::UnorderedList => self.literal(b"<ul>\n"),
            Block::OrderedList { start } => self.open_ordered_list(*start),
            Block::ListItem { task } => self.open_list_item(*task),
            Block::ThematicBreak => self.literal(b"<hr>\n"),
            Block::Table => self.literal(b"<table>\n"),
            Block::TableHead => self.literal(b"<thead>\n"),
            Block::TableBody => self.literal(b"<tbody>\n"),
            Block::TableRow => self.literal(b"<tr>\n"),
            Block::TableCell { header, align } => self.open_table_cell(*header, *align),
        }
    }

    fn leave_block(&mut self, block: &Block<'_>) {
        match block {
            Block::Document | Block::Paragraph | Block::HtmlBlock | Block::ThematicBreak => {}
            Block::Blockquote => self.literal(b"</blockquote>"),
            Block::Heading { level } => {
                self.literal(HEADING_CLOSE[usize::from((*level).clamp(1, 6)) - 1]);
            }
            Block::CodeBlock { .. } => self.literal(b"</code></pre>"),
            Block::UnorderedList => self.literal(b"</ul>\n"),
            Block::OrderedList { .. } => self.literal(b"</ol>\n"),
            Block::ListItem { .. } => self.literal(b"</li>\n"),
            Block::Table => self.literal(b"</table>\n"),
            Block::TableHead => self.literal(b"</thead>\n"),
            Block::TableBody => self.literal(b"</tbody>\n"),
            Block::TableRow => self.literal(b"</tr>\n"),
            Block::TableCell { header, .. } => {
                self.literal(if *header { b"</th>\n" } else { b"</td>\n" });
            }
        }
    }

    fn enter_span(&mut self, span: &Span<'_>) {
        if let Span::Image { src, .. } = span {
            if self.img_nest == 0 {
                self.open_image(src);
            }
            self.img_nest += 1;
            return;
        }
        if self.img_nest > 0 {
            // Inside an image's alt text: markup degrades to plain text.
            return;
        }

        match span {
            Span::Emphasis => self.literal(b"<em>"),
            Span::Strong => self.literal(b"<b>"),
            Span::Code => self.literal(b"<code>"),
            Span::Strikethrough => self.literal(b"<del>"),
            Span::Underline => self.literal(b"<u>"),
            Span::Spoiler => self.literal(b"<span class=\"md-spoiler\">"),
            Span::Math { display: false } => self.literal(b"<x-equation>"),
            Span::Math { display: true } => self.literal(b"<x-equation type=\"display\">"),
            Span::Link { href, title } => self.open_link(href, title.as_ref()),
            Span::Wikilink { target } => self.open_wikilink(target),
            Span::Image { .. } => unreachable!(),
        }
    }

    fn leave_span(&mut self, span: &Span<'_>) {
        if let Span::Image { title, .. } = span {
            if self.img_nest == 1 {
                self.close_image(title.as_ref());
            }
            self.img_nest = self.img_nest.saturating_sub(1);
            return;
        }
        if self.img_nest > 0 {
            return;
        }

        match span {
            Span::Emphasis => self.literal(b"</em>"),
            Span::Strong => self.literal(b"</b>"),
            Span::Code => self.literal(b"</code>"),
            Span::Strikethrough => self.literal(b"</del>"),
            Span::Underline => self.literal(b"</u>"),
            Span::Spoiler => self.literal(b"</span>"),
            Span::Math { .. } => self.literal(b"</x-equation>"),
            Span::Link { .. } => self.literal(b"</a>"),
            Span::Wikilink { .. } => self.literal(b"</x-wikilink>"),
            Span::Image { .. } => unreachable!(),
        }
    }

    fn text(&mut self, kind: TextKind, text: &[u8]) {
        if self.pending_anchor {
            self.pending_anchor = false;
            if !matches!(
                kind,
                TextKind::NullChar | TextKind::LineBreak | TextKind::SoftBreak
            ) {
                self.heading_anchor(text);
            }
        }

        match kind {
            TextKind::NullChar => self.literal(REPLACEMENT),
            TextKind::LineBreak => {
                let markup: &[u8] = if self.img_nest == 0 { b"<br>\n" } else { b" " };
                self.literal(markup);
            }
            TextKind::SoftBreak => {
                let markup: &[u8] = if self.img_nest == 0 { b"\n" } else { b" " };
                self.literal(markup);
            }
            TextKind::Html | TextKind::Entity => self.literal(text),
            TextKind::Normal => escape_html_into(&mut self.out, text),
        }
    }
}

/// Render one complete document by running `producer` over `input`.
///
/// The producer pushes its event stream into a fresh renderer; on success
/// the accumulated bytes are returned whole. On failure the producer's
/// status propagates unchanged and the partial output is dropped with the
/// renderer.
pub fn render_html<P: StructureProducer>(
    producer: &mut P,
    input: &[u8],
    options: Options,
) -> Result<Vec<u8>> {
    debug!(input_len = input.len(), ?options, "rendering document");
    let mut renderer = HtmlRenderer::new(options);
    producer.produce(input, options, &mut renderer)?;
    let output = renderer.into_output().into_vec();
    debug!(output_len = output.len(), "document rendered");
    Ok(output)
}

/// Render an in-memory event stream.
///
/// # Examples
///
/// ```
/// use mdstream::{html::render_events, Block, Event, Options, Span, TextKind};
///
/// let events = [
///     Event::EnterBlock(Block::Paragraph),
///     Event::EnterSpan(Span::Strong),
///     Event::Text(TextKind::Normal, b"loud"),
///     Event::LeaveSpan(Span::Strong),
///     Event::LeaveBlock(Block::Paragraph),
/// ];
/// assert_eq!(render_events(events, Options::empty()), b"<b>loud</b>");
/// ```
pub fn render_events<'a, I>(events: I, options: Options) -> Vec<u8>
where
    I: IntoIterator<Item = Event<'a>>,
{
    let mut renderer = HtmlRenderer::new(options);
    for event in events {
        event.dispatch(&mut renderer);
    }
    renderer.into_output().into_vec()
}
