//! Pluralization helpers for log lines.

/// `"s"` unless the count is exactly one.
#[inline]
pub const fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Count followed by the noun, e.g. `"3 questions"` or `"1 wiki page"`.
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{count} {noun}{}", plural_s(count))
}
