//! Anchor ids and HTML escaping.

use unicode_normalization::UnicodeNormalization;

/// Anchor id for a heading or card: lower-cased, decomposed so accents fall
/// away with every other character outside `[a-z0-9 _-]`, whitespace runs
/// turned into a single `-`.
#[must_use]
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let kept: String = lowered
        .nfd()
        .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | '_' | '-') || c.is_whitespace())
        .collect();

    let mut out = String::with_capacity(kept.len());
    for word in kept.split_whitespace() {
        if !out.is_empty() {
            out.push('-');
        }
        out.push_str(word);
    }
    collapse_dashes(&out)
}

fn collapse_dashes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '-' && out.ends_with('-') {
            continue;
        }
        out.push(c);
    }
    out
}

/// Escape `&`, `"`, `<`, `>` and `'` for text and attribute positions.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
