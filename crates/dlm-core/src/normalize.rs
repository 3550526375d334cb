//! Canonical normalization of free-text payload values.
//!
//! Analytics payloads carry user-facing labels ("Camiseta Básica / Azul")
//! that downstream reports group on. [`normalize`] folds them into a stable
//! slug (`camiseta-basica-azul`) so that the same label always lands in the
//! same bucket. Absolute URLs are only case-folded, never slugified.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static ABSOLUTE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?|ftp)://[^\s/$.?#].[^\s]*$").expect("absolute url pattern compiles")
});

/// Normalize a free-text value.
///
/// Steps, in order:
/// 1. empty input yields an empty string
/// 2. NFD decomposition, combining diacritical marks (U+0300..=U+036F)
///    stripped, surrounding whitespace trimmed, lower-cased
/// 3. `http`, `https` and `ftp` URLs are returned as-is after step 2
/// 4. otherwise whitespace, `_` and `/` become `-`, every character outside
///    `[a-z0-9-:]` is dropped, and dashes are collapsed and trimmed
///
/// The function is total and idempotent.
#[must_use]
pub fn normalize(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let stripped: String = input.nfd().filter(|c| !is_diacritical_mark(*c)).collect();
    let cleaned = stripped.trim().to_lowercase();

    if is_absolute_url(&cleaned) {
        return cleaned;
    }

    slugify(&cleaned)
}

/// Whether `value` looks like an absolute `http`, `https` or `ftp` URL.
///
/// Matching is case-sensitive on the scheme; callers lower-case first.
#[must_use]
pub fn is_absolute_url(value: &str) -> bool {
    ABSOLUTE_URL.is_match(value)
}

const fn is_diacritical_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036f}')
}

fn slugify(cleaned: &str) -> String {
    let mut out = String::with_capacity(cleaned.len());
    let mut pending_dash = false;

    for c in cleaned.chars() {
        match c {
            '-' | '_' | '/' => pending_dash = true,
            c if c.is_whitespace() => pending_dash = true,
            'a'..='z' | '0'..='9' | ':' => {
                if pending_dash && !out.is_empty() {
                    out.push('-');
                }
                pending_dash = false;
                out.push(c);
            }
            _ => {}
        }
    }

    out
}
