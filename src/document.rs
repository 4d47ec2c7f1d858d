//! Whole-document scanning.
//!
//! Runs the explicit markup recognizer over every line of a document. Lines
//! it declines are skipped; they belong to block types this crate does not
//! model.

use log::trace;

use crate::{
    element::ElementList,
    explicit::{ParseContext, ParseResult, try_parse_explicit_markup},
    line::DEFAULT_TAB_WIDTH,
    source::Source,
};

/// Options for building a [`Source`] and [`ParseContext`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    pub tab_width: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}

impl ScanConfig {
    #[must_use]
    pub fn context(self) -> ParseContext {
        ParseContext::default()
    }
}

/// Collect every explicit markup construct from the cursor onwards.
#[must_use]
pub fn scan_document(source: &mut Source, context: &ParseContext) -> ElementList {
    let mut elements = ElementList::new();
    while !source.is_exhausted() {
        if try_parse_explicit_markup(source, &mut elements, context) == ParseResult::NoMatch {
            trace!("skipping line {}", source.position() + 1);
            source.advance(1);
        }
    }
    elements
}

/// Scan `text` with the given configuration.
///
/// # Examples
///
/// ```
/// use rstscan::{ScanConfig, scan_text};
///
/// let elements = scan_text(".. note:: Hi\n\nText.\n", &ScanConfig::default());
/// assert_eq!(elements.len(), 1);
/// assert_eq!(elements.as_slice()[0].label(), Some("note"));
/// ```
#[must_use]
pub fn scan_text(text: &str, config: &ScanConfig) -> ElementList {
    let mut source = Source::from_text_with_tab_width(text, config.tab_width);
    scan_document(&mut source, &config.context())
}
