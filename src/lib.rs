//! Recognizer for reStructuredText explicit markup.
//!
//! The crate finds footnotes, citations, hyperlink targets, substitution
//! definitions, directives and comments in a document and records the line
//! range of each. [`try_parse_explicit_markup`] is the block-parser entry
//! point; [`scan_text`] and [`scan_file`] run it over a whole document.

#[macro_use]
mod macros;

pub mod document;
pub mod element;
pub mod error;
pub mod explicit;
pub mod io;
pub mod line;
pub mod patterns;
pub mod source;

pub use document::{ScanConfig, scan_document, scan_text};
pub use element::{BasicElement, DirectiveElement, Element, ElementKind, ElementList, LineRange};
pub use error::ScanError;
pub use explicit::{ParseContext, ParseResult, try_parse_explicit_markup};
pub use io::scan_file;
pub use line::Line;
pub use patterns::{Classification, MarkupKind, classify};
pub use source::{Slice, SliceOptions, Source};
