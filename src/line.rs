//! Physical lines of a reStructuredText document.
//!
//! A [`Line`] is an immutable view of one line of input. Views derived by
//! stripping columns keep the line number of the line they came from.

/// Default tab stop used by reStructuredText.
pub const DEFAULT_TAB_WIDTH: usize = 8;

/// One physical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    content: String,
    line_number: usize,
    is_blank: bool,
}

impl Line {
    /// Build a line from already tab-expanded text.
    #[must_use]
    pub fn new(content: impl Into<String>, line_number: usize) -> Self {
        let content = content.into();
        let is_blank = content.trim().is_empty();
        Self {
            content,
            line_number,
            is_blank,
        }
    }

    /// Build a line from raw text, expanding tabs to `tab_width` stops.
    #[must_use]
    pub fn from_raw(raw: &str, line_number: usize, tab_width: usize) -> Self {
        Self::new(expand_tabs(raw, tab_width), line_number)
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// 1-based position in the source.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.is_blank
    }

    /// Number of leading whitespace characters.
    ///
    /// For a blank line this is the width of its whitespace, so an empty
    /// line has indentation zero.
    #[must_use]
    pub fn indent(&self) -> usize {
        self.content
            .chars()
            .take_while(|c| c.is_whitespace())
            .count()
    }

    /// Return a view with the first `n` columns removed.
    ///
    /// Lines shorter than `n` become empty.
    #[must_use]
    pub fn strip_columns(&self, n: usize) -> Self {
        let offset = self
            .content
            .char_indices()
            .nth(n)
            .map_or(self.content.len(), |(idx, _)| idx);
        Self::new(&self.content[offset..], self.line_number)
    }
}

/// Expand tab characters to the next multiple of `tab_width`.
#[must_use]
pub fn expand_tabs(raw: &str, tab_width: usize) -> String {
    if !raw.contains('\t') {
        return raw.to_string();
    }
    let tab_width = tab_width.max(1);
    let mut out = String::with_capacity(raw.len() + tab_width);
    let mut column = 0;
    for ch in raw.chars() {
        if ch == '\t' {
            let pad = tab_width - column % tab_width;
            out.extend(std::iter::repeat_n(' ', pad));
            column += pad;
        } else {
            out.push(ch);
            column += 1;
        }
    }
    out
}
