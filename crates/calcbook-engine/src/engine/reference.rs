//! Line-reference resolution.
//!
//! References address previously stored results by position:
//! `@L` (whole result), `@L.S` (solution `S`), `@L.V.S` (variable `V`,
//! solution `S` of an equation system). Resolution substitutes literal
//! numeric text, in a single pass; substituted text is never re-scanned,
//! so references cannot expand indirectly.

use regex::Regex;
use std::sync::OnceLock;

use super::error::EvalError;
use super::value::{Value, format_value};

/// A parsed reference address. Re-parsed on every evaluation, never
/// persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineRef {
    pub line: usize,
    /// Solution index (`@L.S`, or the trailing index of `@L.V.S`).
    pub solution: Option<usize>,
    /// Variable index; present only in the three-part form.
    pub variable: Option<usize>,
}

/// Read access used during resolution. The result store implements this
/// with whatever visibility limit the current pass requires; `None`
/// means the address has no usable numeric result.
pub trait ResultSource {
    fn numeric_result(&self, reference: &LineRef) -> Option<Value>;
}

fn line_ref_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"@(\d+)(?:\.(\d+))?(?:\.(\d+))?").unwrap())
}

fn capture_index(caps: &regex::Captures<'_>, group: usize) -> Option<usize> {
    caps.get(group).and_then(|m| m.as_str().parse().ok())
}

fn reference_from(caps: &regex::Captures<'_>) -> Option<LineRef> {
    let line = capture_index(caps, 1)?;
    let first = capture_index(caps, 2);
    let second = capture_index(caps, 3);
    Some(match (first, second) {
        // @L.V.S: variable index first, then solution index.
        (Some(variable), Some(solution)) => LineRef {
            line,
            solution: Some(solution),
            variable: Some(variable),
        },
        (Some(solution), None) => LineRef {
            line,
            solution: Some(solution),
            variable: None,
        },
        _ => LineRef {
            line,
            solution: None,
            variable: None,
        },
    })
}

/// Substitute every `@` token with the literal text of its stored
/// result. Complex values are parenthesized so sign and imaginary unit
/// bind correctly in the surrounding expression.
pub fn resolve_references(expr: &str, source: &dyn ResultSource) -> Result<String, EvalError> {
    let mut out = String::with_capacity(expr.len());
    let mut last = 0;
    for caps in line_ref_re().captures_iter(expr) {
        let whole = caps.get(0).expect("capture 0 always present");
        let reference = reference_from(&caps).ok_or_else(|| {
            EvalError::Reference(format!("malformed reference '{}'", whole.as_str()))
        })?;
        let value = source.numeric_result(&reference).ok_or_else(|| {
            EvalError::Reference(format!("line {} has no usable result", reference.line))
        })?;
        out.push_str(&expr[last..whole.start()]);
        match value {
            Value::Real(_) => out.push_str(&format_value(&value)),
            Value::Complex(_) => {
                out.push('(');
                out.push_str(&format_value(&value));
                out.push(')');
            }
        }
        last = whole.end();
    }
    out.push_str(&expr[last..]);
    Ok(out)
}
