//! Utility helpers shared across integration tests.

use rstscan::{Element, ElementList, ParseContext, ParseResult, Source, try_parse_explicit_markup};

/// Join line literals into a newline-terminated document.
macro_rules! rst {
    ($($line:expr),* $(,)?) => {{
        let mut text = String::new();
        $(
            text.push_str($line);
            text.push('\n');
        )*
        text
    }};
}

/// Outcome of one recognizer call on a fresh source.
pub struct Attempt {
    pub result: ParseResult,
    pub elements: ElementList,
    pub source: Source,
}

/// Run the recognizer once at the start of `text`.
pub fn attempt(text: &str) -> Attempt {
    let mut source = Source::from_text(text);
    let mut elements = ElementList::new();
    let result = try_parse_explicit_markup(&mut source, &mut elements, &ParseContext::default());
    Attempt {
        result,
        elements,
        source,
    }
}

/// Return the single element of `list`, failing otherwise.
pub fn single(list: &ElementList) -> &Element {
    assert_eq!(list.len(), 1, "expected one element, got {list:?}");
    &list.as_slice()[0]
}

/// Render `kind range label` lines for snapshot comparisons.
pub fn listing(list: &ElementList) -> String {
    list.iter()
        .map(|e| match e.label() {
            Some(label) => format!("{} {} {label}", e.range(), e.kind_name()),
            None => format!("{} {}", e.range(), e.kind_name()),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
