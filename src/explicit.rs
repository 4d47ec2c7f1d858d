//! Recognizer for explicit markup blocks.
//!
//! [`try_parse_explicit_markup`] either consumes one construct starting at
//! the current line, appending its element, or declines without touching
//! the cursor so the next block parser can try.

use log::{debug, trace};

use crate::{
    element::{BasicElement, DirectiveElement, Element, ElementKind, ElementList, LineRange},
    patterns::{Classification, MarkupKind, classify},
    source::{Slice, SliceOptions, Source},
};

/// Parser-wide state carried through recognizers unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseContext {
    pub nesting_level: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseResult {
    /// A construct was consumed and the cursor moved past it.
    Success,
    /// The current line does not open explicit markup; nothing changed.
    NoMatch,
}

/// Try to consume an explicit markup construct at the current line.
///
/// Lines opening with the `..` marker always succeed: constructs no
/// dedicated pattern recognises become comments.
pub fn try_parse_explicit_markup(
    source: &mut Source,
    parent: &mut ElementList,
    context: &ParseContext,
) -> ParseResult {
    let Some(line) = source.current_line() else {
        trace!("explicit markup: end of input");
        return ParseResult::NoMatch;
    };
    let line_number = line.line_number();
    let Some(classification) = classify(line.content()) else {
        trace!("explicit markup: line {line_number} has no marker");
        return ParseResult::NoMatch;
    };

    match classification {
        Classification::Markup {
            kind,
            label,
            first_indent,
        } => {
            debug!(
                "explicit markup: {kind:?} `{label}` at line {line_number} (nesting {})",
                context.nesting_level
            );
            extract_markup(source, parent, kind, label, first_indent);
        }
        Classification::Comment { first_indent } => {
            parse_comment(source, parent, first_indent);
        }
    }
    ParseResult::Success
}

fn extract_markup(
    source: &mut Source,
    parent: &mut ElementList,
    kind: MarkupKind,
    label: String,
    first_indent: usize,
) {
    let Some((slice, range)) = take_block(source, first_indent, kind.slice_options()) else {
        return;
    };
    let body = slice.body();
    let element = match kind.element_kind() {
        Some(kind) => Element::Basic(BasicElement {
            kind,
            range,
            label: Some(label),
            body,
        }),
        None => Element::Directive(DirectiveElement {
            name: label,
            range,
            body,
        }),
    };
    parent.push(element);
}

/// Decide between an empty comment and a comment block.
///
/// A marker with nothing after it, followed by a blank line, is an empty
/// comment of one line; the blank line stays unconsumed. Anything else is
/// a comment block running while indentation allows, minus trailing blank
/// lines.
fn parse_comment(source: &mut Source, parent: &mut ElementList, first_indent: usize) {
    let Some(line) = source.current_line() else {
        return;
    };
    let line_number = line.line_number();
    let next_is_blank = source.peek(1).is_some_and(|next| next.is_blank());
    let rest_is_blank = source
        .indent_strip(first_indent)
        .is_some_and(|rest| rest.is_blank());

    if next_is_blank && rest_is_blank {
        debug!("explicit markup: empty comment at line {line_number}");
        parent.push(comment(LineRange::single(line_number), Vec::new()));
        source.advance(1);
        return;
    }

    let opts = SliceOptions {
        strip_bottom: true,
        advance: true,
        ..SliceOptions::default()
    };
    if let Some((slice, range)) = take_block(source, first_indent, opts) {
        debug!("explicit markup: comment block at lines {range}");
        parent.push(comment(range, slice.body()));
    }
}

fn comment(range: LineRange, body: Vec<String>) -> Element {
    Element::Basic(BasicElement {
        kind: ElementKind::Comment,
        range,
        label: None,
        body,
    })
}

/// Slice a block and report its range, or `None` for an empty slice.
///
/// The cursor still moves past whatever the slice consumed.
fn take_block(
    source: &mut Source,
    first_indent: usize,
    opts: SliceOptions,
) -> Option<(Slice, LineRange)> {
    debug_assert!(
        source.current_line().is_some(),
        "block extraction requires a current line"
    );
    let slice = source.slice(first_indent, opts);
    let range = slice.range()?;
    Some((slice, range))
}
