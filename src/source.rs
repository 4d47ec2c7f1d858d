//! Forward-only cursor over the lines of a document.
//!
//! [`Source`] owns the materialised lines and a position. Recognizers read
//! through [`Source::current_line`], [`Source::peek`] and
//! [`Source::slice`] and move forward only after accepting input, so a
//! declined match leaves the cursor where it was.

use crate::{
    element::LineRange,
    line::{DEFAULT_TAB_WIDTH, Line},
};

/// Policy for [`Source::slice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "each flag is an independent slicing policy"
)]
pub struct SliceOptions {
    /// Stop at the first blank line even if it is indented enough.
    pub until_blank: bool,
    /// Remove `first_indent` columns from continuation lines.
    pub strip_indent: bool,
    /// Also strip the top line when `strip_indent` is set.
    pub strip_top: bool,
    /// Drop trailing blank lines from the reported lines.
    pub strip_bottom: bool,
    /// Move the cursor past every consumed line.
    pub advance: bool,
}

impl Default for SliceOptions {
    fn default() -> Self {
        Self {
            until_blank: false,
            strip_indent: true,
            strip_top: true,
            strip_bottom: false,
            advance: false,
        }
    }
}

/// A contiguous run of lines taken by [`Source::slice`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slice {
    lines: Vec<Line>,
    consumed: usize,
}

impl Slice {
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Physical lines taken from the source, including trailing blank
    /// lines dropped by `strip_bottom`.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn first_line(&self) -> Option<&Line> {
        self.lines.first()
    }

    #[must_use]
    pub fn last_line(&self) -> Option<&Line> {
        self.lines.last()
    }

    /// Span from the first to the last reported line.
    #[must_use]
    pub fn range(&self) -> Option<LineRange> {
        let first = self.first_line()?;
        let last = self.last_line()?;
        Some(LineRange::new(first.line_number(), last.line_number()))
    }

    #[must_use]
    pub fn body(&self) -> Vec<String> {
        self.lines.iter().map(|l| l.content().to_string()).collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Source {
    lines: Vec<Line>,
    pos: usize,
}

impl Source {
    #[must_use]
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines, pos: 0 }
    }

    /// Split `text` into lines, expanding tabs to the default stop.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::from_text_with_tab_width(text, DEFAULT_TAB_WIDTH)
    }

    #[must_use]
    pub fn from_text_with_tab_width(text: &str, tab_width: usize) -> Self {
        let lines = text
            .lines()
            .enumerate()
            .map(|(idx, raw)| Line::from_raw(raw, idx + 1, tab_width))
            .collect();
        Self::new(lines)
    }

    /// Zero-based index of the current line.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Total number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.lines.len()
    }

    #[must_use]
    pub fn current_line(&self) -> Option<&Line> {
        self.lines.get(self.pos)
    }

    /// Line at `offset` from the cursor without moving it.
    #[must_use]
    pub fn peek(&self, offset: isize) -> Option<&Line> {
        let idx = self.pos.checked_add_signed(offset)?;
        self.lines.get(idx)
    }

    /// The current line with its first `n` columns removed.
    #[must_use]
    pub fn indent_strip(&self, n: usize) -> Option<Line> {
        self.current_line().map(|line| line.strip_columns(n))
    }

    /// Move the cursor forward by `n` lines, stopping at the end.
    pub fn advance(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.lines.len());
    }

    /// Take the current line and the lines following it that are indented
    /// by at least `first_indent` columns.
    ///
    /// The current line always belongs to the slice. A following line ends
    /// the slice when its indentation is below `first_indent`; blank lines
    /// count by the width of their whitespace. With
    /// [`SliceOptions::until_blank`] any blank line ends it.
    pub fn slice(&mut self, first_indent: usize, opts: SliceOptions) -> Slice {
        let Some(top) = self.current_line() else {
            return Slice::default();
        };

        let mut lines = Vec::new();
        lines.push(if opts.strip_indent && opts.strip_top {
            top.strip_columns(first_indent)
        } else {
            top.clone()
        });

        for line in &self.lines[self.pos + 1..] {
            if line.is_blank() && opts.until_blank {
                break;
            }
            if line.indent() < first_indent {
                break;
            }
            lines.push(if opts.strip_indent {
                line.strip_columns(first_indent)
            } else {
                line.clone()
            });
        }

        let consumed = lines.len();
        if opts.strip_bottom {
            let keep = lines
                .iter()
                .rposition(|l| !l.is_blank())
                .map_or(1, |idx| idx + 1);
            lines.truncate(keep);
        }
        if opts.advance {
            self.advance(consumed);
        }
        Slice { lines, consumed }
    }
}
