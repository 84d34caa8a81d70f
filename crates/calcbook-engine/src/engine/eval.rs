//! Whitelist-only evaluation of expression trees.

use super::ast::{BinaryOp, Expr, UnaryOp};
use super::error::EvalError;
use super::parser;
use super::value::Value;
use crate::functions;

/// Evaluate a tree with no free variables. Unknown identifiers are a
/// syntax error, like a name lookup failure in the original namespace.
pub fn evaluate(expr: &Expr) -> Result<Value, EvalError> {
    match expr {
        Expr::Num(n) => Ok(Value::Real(*n)),
        Expr::Imag(n) => Ok(Value::Complex(num_complex::Complex64::new(0.0, *n))),
        Expr::Var(name) => functions::constant(name).ok_or_else(|| {
            EvalError::Syntax(format!("unknown function or variable: {}", name))
        }),
        Expr::Unary(UnaryOp::Neg, inner) => Ok(evaluate(inner)?.neg()),
        Expr::Binary(op, lhs, rhs) => {
            let a = evaluate(lhs)?;
            let b = evaluate(rhs)?;
            match op {
                BinaryOp::Add => Ok(a.add(b)),
                BinaryOp::Sub => Ok(a.sub(b)),
                BinaryOp::Mul => Ok(a.mul(b)),
                BinaryOp::Div => a.div(b),
                BinaryOp::Rem => a.rem(b),
                BinaryOp::Pow => a.pow(b),
            }
        }
        Expr::Call(name, args) => {
            let values = args.iter().map(evaluate).collect::<Result<Vec<_>, _>>()?;
            functions::call(name, &values)
        }
    }
}

/// Parse and evaluate normalized, reference-free text.
pub fn evaluate_text(text: &str) -> Result<Value, EvalError> {
    evaluate(&parser::parse(text)?)
}

/// Replace every fully numeric real subtree with its literal value.
/// Used to tidy symbolic solutions before display.
pub fn fold_constants(expr: &Expr) -> Expr {
    if let Ok(Value::Real(n)) = evaluate(expr) {
        if n.is_finite() {
            return if n < 0.0 { Expr::neg(Expr::Num(-n)) } else { Expr::Num(n) };
        }
    }
    match expr {
        Expr::Unary(op, inner) => Expr::Unary(*op, Box::new(fold_constants(inner))),
        Expr::Binary(op, lhs, rhs) => Expr::Binary(
            *op,
            Box::new(fold_constants(lhs)),
            Box::new(fold_constants(rhs)),
        ),
        Expr::Call(name, args) => {
            Expr::Call(name.clone(), args.iter().map(fold_constants).collect())
        }
        other => other.clone(),
    }
}
