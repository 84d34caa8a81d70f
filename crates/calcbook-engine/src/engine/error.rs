//! Evaluator-level error kinds.
//!
//! Every variant is caught at the line boundary and converted into an
//! `Error`-content result entry; none of these escape a document pass.

use thiserror::Error;

/// Errors raised while evaluating a single line.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Malformed expression text.
    #[error("syntax error: {0}")]
    Syntax(String),

    /// Missing or out-of-range `@` address, or a self/forward reference.
    #[error("reference error: {0}")]
    Reference(String),

    /// Division by zero, invalid function domain, and friends.
    #[error("domain error: {0}")]
    Domain(String),

    /// The symbolic solver backend is not available.
    #[error("equation solving requires an algebra backend, which is not available")]
    Capability,

    /// Unrecognized equation-system or solver-call shape.
    #[error("unsupported expression: {0}")]
    Unsupported(String),
}
