//! Recognition patterns for explicit markup.
//!
//! Every construct opens with `..` followed by a space (or the end of the
//! line). [`EXPLICIT_MARKUP_INIT_RE`] decides whether a line opens one at
//! all; [`RULES`] then names the construct. The rules are tried in order
//! and the first match wins, so the permissive directive pattern comes
//! last.

use std::sync::LazyLock;

use regex::Regex;

use crate::{element::ElementKind, source::SliceOptions};

pub static EXPLICIT_MARKUP_INIT_RE: LazyLock<Regex> = lazy_regex!(
    r"^ *\.\.(?: |$)",
    "explicit markup init pattern should compile",
);

/// `.. [1]`, `.. [#]`, `.. [#label]` and `.. [*]`.
pub static FOOTNOTE_RE: LazyLock<Regex> = lazy_regex!(
    r"^ *\.\. +\[(?P<label>[0-9]+|#(?:[A-Za-z0-9]+(?:[-_.][A-Za-z0-9]+)*)?|\*)\](?: |$)",
    "footnote pattern should compile",
);

/// `.. [CITE2024]`: a reference name with at least one non-digit.
pub static CITATION_RE: LazyLock<Regex> = lazy_regex!(
    r"^ *\.\. +\[(?P<label>[0-9]*[A-Za-z][A-Za-z0-9_.-]*|[0-9]+[-_.][A-Za-z0-9_.-]*)\](?: |$)",
    "citation pattern should compile",
);

/// `.. _name:`, ``.. _`quoted name`:`` and the anonymous `.. __:`.
pub static LINK_TARGET_RE: LazyLock<Regex> = lazy_regex!(
    r"^ *\.\. +_(?P<label>_|`(?:[^`\\]|\\.)+`|(?:[^:`\\]|\\.)+):(?: |$)",
    "hyperlink target pattern should compile",
);

/// `.. |name|`; the name is not validated here.
pub static SUBSTITUTION_DEF_RE: LazyLock<Regex> = lazy_regex!(
    r"^ *\.\. +\|(?P<label>[^|]*)\|(?: |$)",
    "substitution definition pattern should compile",
);

/// `.. name::`
pub static DIRECTIVE_RE: LazyLock<Regex> = lazy_regex!(
    r"^ *\.\. +(?P<label>[A-Za-z0-9]+(?:[-_.+:][A-Za-z0-9]+)*)::(?: |$)",
    "directive pattern should compile",
);

/// Constructs with a dedicated pattern; comments are what remains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkupKind {
    Footnote,
    Citation,
    LinkTarget,
    SubstitutionDef,
    Directive,
}

impl MarkupKind {
    /// Element kind recorded for the construct; `None` for directives,
    /// which get a [`crate::element::DirectiveElement`].
    #[must_use]
    pub fn element_kind(self) -> Option<ElementKind> {
        match self {
            Self::Footnote => Some(ElementKind::Footnote),
            Self::Citation => Some(ElementKind::Citation),
            Self::LinkTarget => Some(ElementKind::LinkTarget),
            Self::SubstitutionDef => Some(ElementKind::SubstitutionDef),
            Self::Directive => None,
        }
    }

    /// How the construct's lines are sliced from the source.
    #[must_use]
    pub fn slice_options(self) -> SliceOptions {
        let advancing = SliceOptions {
            advance: true,
            ..SliceOptions::default()
        };
        match self {
            Self::Footnote | Self::Citation => advancing,
            Self::LinkTarget => SliceOptions {
                until_blank: true,
                ..advancing
            },
            Self::SubstitutionDef | Self::Directive => SliceOptions {
                strip_indent: false,
                strip_top: false,
                ..advancing
            },
        }
    }
}

pub struct MarkupRule {
    pub kind: MarkupKind,
    pub pattern: &'static LazyLock<Regex>,
}

/// Dispatch table in priority order.
pub static RULES: [MarkupRule; 5] = [
    MarkupRule {
        kind: MarkupKind::Footnote,
        pattern: &FOOTNOTE_RE,
    },
    MarkupRule {
        kind: MarkupKind::Citation,
        pattern: &CITATION_RE,
    },
    MarkupRule {
        kind: MarkupKind::LinkTarget,
        pattern: &LINK_TARGET_RE,
    },
    MarkupRule {
        kind: MarkupKind::SubstitutionDef,
        pattern: &SUBSTITUTION_DEF_RE,
    },
    MarkupRule {
        kind: MarkupKind::Directive,
        pattern: &DIRECTIVE_RE,
    },
];

/// Outcome of matching one line against the dispatch table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// A rule matched. `label` is the captured identifier (the directive
    /// name for directives).
    Markup {
        kind: MarkupKind,
        label: String,
        first_indent: usize,
    },
    /// The marker is present but no rule matched.
    Comment { first_indent: usize },
}

impl Classification {
    /// Column at which the construct's body is aligned.
    #[must_use]
    pub fn first_indent(&self) -> usize {
        match self {
            Self::Markup { first_indent, .. } | Self::Comment { first_indent } => *first_indent,
        }
    }
}

/// Classify a line's content; `None` when it does not open explicit markup.
#[must_use]
pub fn classify(content: &str) -> Option<Classification> {
    let first_indent = EXPLICIT_MARKUP_INIT_RE.find(content)?.end();
    let classification = RULES
        .iter()
        .find_map(|rule| {
            rule.pattern.captures(content).map(|caps| Classification::Markup {
                kind: rule.kind,
                label: caps
                    .name("label")
                    .map_or_else(String::new, |m| m.as_str().to_string()),
                first_indent,
            })
        })
        .unwrap_or(Classification::Comment { first_indent });
    Some(classification)
}
