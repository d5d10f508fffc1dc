/// Compile a literal regex once and hand out a `&'static Regex`.
///
/// Only for fixed helper patterns; the composed date grammar lives in
/// `src/patterns.rs`.
#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}
