//! Calculation engine API.
//!
//! This module provides the expression pipeline for the notebook:
//!
//! - [`Value`], [`format_value`] - Canonical numeric results and display
//! - [`normalize`], [`strip_comment`] - Raw line text preprocessing
//! - [`LineRef`], [`resolve_references`] - `@` line-reference substitution
//! - [`LineKind`], [`classify`] - Empty/Numeric/Equation/EquationSystem
//! - [`parse`], [`Expr`] - Grammar-limited expression trees
//! - [`evaluate`], [`evaluate_text`] - Whitelist-only evaluation
//! - [`SolverBackend`], [`AlgebraBackend`] - Capability-gated solving

mod algebra;
mod ast;
mod classify;
mod error;
mod eval;
mod lexer;
mod parser;
mod preprocess;
mod reference;
mod solver;
mod value;

pub use algebra::AlgebraBackend;
pub use ast::{BinaryOp, Expr, UnaryOp};
pub use classify::{LineKind, classify, parse_solve_call, parse_system};
pub use error::EvalError;
pub use eval::{evaluate, evaluate_text, fold_constants};
pub use parser::parse;
pub use preprocess::{is_solver_call, is_valid, normalize, strip_comment};
pub use reference::{LineRef, ResultSource, resolve_references};
pub use solver::{
    SolveOutcome, SolvedValue, SolverBackend, collect_by_variable, format_solutions,
    format_variable_solutions,
};
pub use value::{INT_EPS, Value, format_real, format_value};
