//! Helper macros used across the crate.

/// Lazily compile a [`Regex`] with a custom panic message.
///
/// The pattern literals in this crate are fixed, so a compile failure is a
/// programming error caught by the first test touching the pattern.
///
/// # Examples
///
/// ```
/// use std::sync::LazyLock;
///
/// use regex::Regex;
/// static MARKER: LazyLock<Regex> = rstscan::lazy_regex!(r"^ *\.\.", "marker");
/// assert!(MARKER.is_match(".. note::"));
/// ```
#[macro_export]
macro_rules! lazy_regex {
    ($pattern:expr, $msg:expr $(,)?) => {
        LazyLock::new(|| Regex::new($pattern).expect($msg))
    };
}
