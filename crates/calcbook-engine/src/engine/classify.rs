//! Line classification.
//!
//! Order matters: the system shape is checked before plain equations
//! because a system's defining line also contains `=`.

use regex::Regex;
use std::sync::OnceLock;

use super::error::EvalError;
use super::preprocess;

/// What a line of (comment-stripped) text is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Empty,
    Numeric,
    Equation,
    EquationSystem,
}

fn is_system_shape(expr: &str) -> bool {
    if !expr.contains(':') || !expr.contains(',') {
        return false;
    }
    let Some((var_part, eq_part)) = expr.split_once(':') else {
        return false;
    };
    var_part.contains(',') && eq_part.contains('=')
}

/// Total classification: every string maps to exactly one kind.
pub fn classify(expr: &str) -> LineKind {
    let expr = expr.trim();
    if expr.is_empty() {
        return LineKind::Empty;
    }
    if is_system_shape(expr) {
        return LineKind::EquationSystem;
    }
    if expr.contains('=') || preprocess::is_solver_call(expr) {
        return LineKind::Equation;
    }
    LineKind::Numeric
}

/// Split a system line `x,y:x+y=5,x-y=1` into its declared variables and
/// `(lhs, rhs)` equation pairs.
pub fn parse_system(expr: &str) -> Result<(Vec<String>, Vec<(String, String)>), EvalError> {
    let (var_part, eq_part) = expr.split_once(':').ok_or_else(|| {
        EvalError::Unsupported("equation system is missing the ':' separator".to_string())
    })?;

    let variables: Vec<String> = var_part.split(',').map(|v| v.trim().to_string()).collect();
    if variables.iter().any(String::is_empty) {
        return Err(EvalError::Unsupported(
            "empty variable name in system header".to_string(),
        ));
    }

    let mut equations = Vec::new();
    for eq in eq_part.split(',') {
        let eq = eq.trim();
        let (lhs, rhs) = eq.split_once('=').ok_or_else(|| {
            EvalError::Unsupported(format!("equation '{}' is missing '='", eq))
        })?;
        equations.push((lhs.trim().to_string(), rhs.trim().to_string()));
    }
    Ok((variables, equations))
}

/// Parse the literal `solve(expression, variable)` input form.
pub fn parse_solve_call(expr: &str) -> Result<(String, String), EvalError> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"(?i)^\s*solve\s*\(([^,]+),\s*([^)]+)\)\s*$").unwrap()
    });
    let caps = re.captures(expr).ok_or_else(|| {
        EvalError::Unsupported(format!("unrecognized solve(...) call: {}", expr.trim()))
    })?;
    let variable = caps[2].trim().to_string();
    let valid_name = variable
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && variable.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid_name || crate::functions::is_function(&variable) {
        return Err(EvalError::Unsupported(format!(
            "invalid solve variable: {}",
            variable
        )));
    }
    Ok((caps[1].trim().to_string(), variable))
}
