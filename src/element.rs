//! Typed records for recognised explicit markup constructs.

use std::fmt;

use serde::Serialize;

/// Inclusive span of physical lines, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "line range {start}-{end} is inverted");
        Self { start, end }
    }

    #[must_use]
    pub fn single(line_number: usize) -> Self {
        Self::new(line_number, line_number)
    }

    /// Number of lines covered; never zero.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.end - self.start + 1
    }

    #[must_use]
    pub fn contains(&self, line_number: usize) -> bool {
        (self.start..=self.end).contains(&line_number)
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Footnote,
    Citation,
    LinkTarget,
    SubstitutionDef,
    Comment,
}

impl ElementKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Footnote => "footnote",
            Self::Citation => "citation",
            Self::LinkTarget => "link_target",
            Self::SubstitutionDef => "substitution_def",
            Self::Comment => "comment",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A footnote, citation, hyperlink target, substitution definition or
/// comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BasicElement {
    pub kind: ElementKind,
    pub range: LineRange,
    /// Identifier captured from the marker; `None` for comments.
    pub label: Option<String>,
    /// Captured lines after the kind's indentation policy was applied.
    pub body: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectiveElement {
    /// Directive type, e.g. `note` or `image`.
    pub name: String,
    pub range: LineRange,
    pub body: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    Basic(BasicElement),
    Directive(DirectiveElement),
}

impl Element {
    #[must_use]
    pub fn range(&self) -> LineRange {
        match self {
            Self::Basic(el) => el.range,
            Self::Directive(el) => el.range,
        }
    }

    /// Kind name as used in listings: the [`ElementKind`] name or
    /// `directive`.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Basic(el) => el.kind.as_str(),
            Self::Directive(_) => "directive",
        }
    }

    /// Label of a basic element or name of a directive.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Basic(el) => el.label.as_deref(),
            Self::Directive(el) => Some(el.name.as_str()),
        }
    }

    #[must_use]
    pub fn body(&self) -> &[String] {
        match self {
            Self::Basic(el) => &el.body,
            Self::Directive(el) => &el.body,
        }
    }
}

/// Append-only, insertion-ordered sequence of elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ElementList {
    elements: Vec<Element>,
}

impl ElementList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Element] {
        &self.elements
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Element> {
        self.elements
    }
}

impl IntoIterator for ElementList {
    type Item = Element;
    type IntoIter = std::vec::IntoIter<Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a ElementList {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
