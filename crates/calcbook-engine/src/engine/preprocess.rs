//! Expression preprocessing.
//!
//! Before anything else happens to a line we strip its comment, map
//! alternate operator glyphs onto the grammar's operators, and insert
//! explicit multiplication at juxtapositions (`2pi` → `2*pi`). Text
//! headed for the equation solver only gets the power substitution so
//! the rewriting cannot corrupt a `solve(...)` call.

use regex::Regex;
use std::sync::OnceLock;

use super::parser;

fn solve_call_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)solve\s*\(").unwrap())
}

/// Whether the text contains a `solve(...)` invocation (case-insensitive).
pub fn is_solver_call(text: &str) -> bool {
    solve_call_re().is_match(text)
}

/// Drop the first `#` and everything after it.
pub fn strip_comment(text: &str) -> &str {
    match text.find('#') {
        Some(idx) => &text[..idx],
        None => text,
    }
}

fn replace_glyphs(expr: &str) -> String {
    expr.replace('^', "**").replace('×', "*").replace('÷', "/")
}

/// Function names containing digits would be torn apart by the
/// letter-digit rule, so their calls are swapped for digit-free aliases
/// around the juxtaposition pass.
const PROTECTED_CALLS: &[(&str, &str)] = &[
    ("log10(", "logtenQQ("),
    ("log2(", "logtwoQQ("),
    ("atan2(", "atantwoQQ("),
];

fn insert_implicit_multiplication(expr: &str) -> String {
    static DIGIT_LETTER: OnceLock<Regex> = OnceLock::new();
    static LETTER_DIGIT: OnceLock<Regex> = OnceLock::new();
    static PAREN_DIGIT: OnceLock<Regex> = OnceLock::new();
    static DIGIT_PAREN: OnceLock<Regex> = OnceLock::new();

    let mut text = expr.to_string();
    for (original, alias) in PROTECTED_CALLS {
        text = text.replace(original, alias);
    }

    // Fixed sequence; each substitution consumes its match once, so a
    // later rule cannot re-trigger an earlier one.
    let text = DIGIT_LETTER
        .get_or_init(|| Regex::new(r"(\d)([A-Za-z])").unwrap())
        .replace_all(&text, "${1}*${2}")
        .to_string();
    let text = LETTER_DIGIT
        .get_or_init(|| Regex::new(r"([A-Za-z])(\d)").unwrap())
        .replace_all(&text, "${1}*${2}")
        .to_string();
    let text = PAREN_DIGIT
        .get_or_init(|| Regex::new(r"\)(\d)").unwrap())
        .replace_all(&text, ")*${1}")
        .to_string();
    let mut text = DIGIT_PAREN
        .get_or_init(|| Regex::new(r"(\d)\(").unwrap())
        .replace_all(&text, "${1}*(")
        .to_string();

    for (original, alias) in PROTECTED_CALLS {
        text = text.replace(alias, original);
    }
    text
}

/// Normalize raw line text into grammar-ready form. Returns an empty
/// string for blank and comment-only lines.
pub fn normalize(raw: &str) -> String {
    let expr = strip_comment(raw).trim();
    if expr.is_empty() {
        return String::new();
    }
    if is_solver_call(expr) {
        // Only the power substitution; juxtaposition rewriting must not
        // turn `solve(` into `solve*(`.
        return expr.replace('^', "**");
    }
    insert_implicit_multiplication(&replace_glyphs(expr))
}

/// Whether the normalized text is a well-formed expression. Evaluability
/// is not required, only syntax.
pub fn is_valid(raw: &str) -> bool {
    let normalized = normalize(raw);
    normalized.is_empty() || parser::parse(&normalized).is_ok()
}
