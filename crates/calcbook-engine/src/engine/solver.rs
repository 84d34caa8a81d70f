//! Equation-solving backend contract and solution formatting.
//!
//! The engine does not care how equations are solved, only that a
//! backend honors this contract. Solution order is whatever the backend
//! returns; the formatting layer never re-sorts it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ast::Expr;
use super::error::EvalError;
use super::value::{Value, format_value};

/// One solved value: numeric, or the verbatim text of a solution that
/// keeps free symbols.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SolvedValue {
    Num(Value),
    Symbolic(String),
}

impl SolvedValue {
    pub fn as_value(&self) -> Option<Value> {
        match self {
            SolvedValue::Num(v) => Some(*v),
            SolvedValue::Symbolic(_) => None,
        }
    }
}

impl fmt::Display for SolvedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolvedValue::Num(v) => write!(f, "{}", format_value(v)),
            SolvedValue::Symbolic(text) => write!(f, "{}", text),
        }
    }
}

/// Result of solving an equation system. Assignments are aligned with
/// the declared variable order.
#[derive(Clone, Debug, PartialEq)]
pub enum SolveOutcome {
    NoSolution,
    Single(Vec<SolvedValue>),
    Many(Vec<Vec<SolvedValue>>),
}

/// Capability-gated solving backend. Absence of a backend is a
/// first-class `CapabilityError` at the call site, never a crash.
pub trait SolverBackend {
    /// Roots of `expr = 0` in `variable`, in backend order.
    fn solve_single(&self, expr: &Expr, variable: &str) -> Result<Vec<SolvedValue>, EvalError>;

    /// Solve a system of `lhs = rhs` equations for the declared
    /// variables.
    fn solve_system(
        &self,
        variables: &[String],
        equations: &[(Expr, Expr)],
    ) -> Result<SolveOutcome, EvalError>;
}

/// Format single-equation solutions: `no solution`, `x = v`, or
/// `x[0] = v0, x[1] = v1, ...`.
pub fn format_solutions(variable: &str, values: &[SolvedValue]) -> String {
    match values {
        [] => "no solution".to_string(),
        [only] => format!("{} = {}", variable, only),
        many => many
            .iter()
            .enumerate()
            .map(|(i, v)| format!("{}[{}] = {}", variable, i, v))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// Regroup a solve outcome by variable, preserving declaration order.
/// `NoSolution` becomes an empty table.
pub fn collect_by_variable(
    variables: &[String],
    outcome: &SolveOutcome,
) -> Vec<(String, Vec<SolvedValue>)> {
    let assignments: Vec<&Vec<SolvedValue>> = match outcome {
        SolveOutcome::NoSolution => return Vec::new(),
        SolveOutcome::Single(assignment) => vec![assignment],
        SolveOutcome::Many(assignments) => assignments.iter().collect(),
    };
    variables
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let values = assignments
                .iter()
                .filter_map(|assignment| assignment.get(idx).cloned())
                .collect();
            (name.clone(), values)
        })
        .collect()
}

/// Format an equation-system result from its per-variable table:
/// `x = 3; y = 2`, or indexed segments when a variable has several
/// values across assignments.
pub fn format_variable_solutions(table: &[(String, Vec<SolvedValue>)]) -> String {
    if table.is_empty() || table.iter().all(|(_, values)| values.is_empty()) {
        return "no solution".to_string();
    }
    table
        .iter()
        .map(|(name, values)| format_solutions(name, values))
        .collect::<Vec<_>>()
        .join("; ")
}
