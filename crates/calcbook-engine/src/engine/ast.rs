//! Expression trees.
//!
//! The AST is shared by the numeric evaluator and the solver backend:
//! the evaluator rejects free variables, the solver treats them as
//! unknowns. `Display` renders a tree back to parseable text, which is
//! how symbolic solutions reach the result store.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Num(f64),
    Imag(f64),
    Var(String),
    Unary(UnaryOp, Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
    Call(String, Vec<Expr>),
}

impl Expr {
    pub fn neg(inner: Expr) -> Expr {
        Expr::Unary(UnaryOp::Neg, Box::new(inner))
    }

    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
        Expr::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    /// Whether the tree mentions `var` as a variable (function names do
    /// not count).
    pub fn references(&self, var: &str) -> bool {
        match self {
            Expr::Num(_) | Expr::Imag(_) => false,
            Expr::Var(name) => name == var,
            Expr::Unary(_, inner) => inner.references(var),
            Expr::Binary(_, lhs, rhs) => lhs.references(var) || rhs.references(var),
            Expr::Call(_, args) => args.iter().any(|a| a.references(var)),
        }
    }

    /// Free variables in first-seen order, skipping the constant names
    /// (`pi`, `e`, `tau`, `j`) the evaluator resolves itself.
    pub fn free_variables(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_free(&mut out);
        out
    }

    fn collect_free(&self, out: &mut Vec<String>) {
        match self {
            Expr::Num(_) | Expr::Imag(_) => {}
            Expr::Var(name) => {
                if crate::functions::constant(name).is_none() && !out.iter().any(|v| v == name) {
                    out.push(name.clone());
                }
            }
            Expr::Unary(_, inner) => inner.collect_free(out),
            Expr::Binary(_, lhs, rhs) => {
                lhs.collect_free(out);
                rhs.collect_free(out);
            }
            Expr::Call(_, args) => {
                for arg in args {
                    arg.collect_free(out);
                }
            }
        }
    }

    /// Replace every occurrence of `var` with `replacement`.
    pub fn substitute(&self, var: &str, replacement: &Expr) -> Expr {
        match self {
            Expr::Num(_) | Expr::Imag(_) => self.clone(),
            Expr::Var(name) => {
                if name == var {
                    replacement.clone()
                } else {
                    self.clone()
                }
            }
            Expr::Unary(op, inner) => Expr::Unary(*op, Box::new(inner.substitute(var, replacement))),
            Expr::Binary(op, lhs, rhs) => Expr::Binary(
                *op,
                Box::new(lhs.substitute(var, replacement)),
                Box::new(rhs.substitute(var, replacement)),
            ),
            Expr::Call(name, args) => Expr::Call(
                name.clone(),
                args.iter().map(|a| a.substitute(var, replacement)).collect(),
            ),
        }
    }
}

impl BinaryOp {
    fn precedence(self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => 1,
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::Rem => 2,
            BinaryOp::Pow => 4,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => " + ",
            BinaryOp::Sub => " - ",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Pow => "**",
        }
    }
}

fn fmt_prec(expr: &Expr, parent: u8, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match expr {
        Expr::Num(n) => {
            if *n < 0.0 && parent > 1 {
                write!(f, "({})", super::value::format_real(*n))
            } else {
                write!(f, "{}", super::value::format_real(*n))
            }
        }
        Expr::Imag(n) => write!(f, "{}j", super::value::format_real(*n)),
        Expr::Var(name) => write!(f, "{}", name),
        Expr::Unary(UnaryOp::Neg, inner) => {
            let needs_paren = parent > 1;
            if needs_paren {
                write!(f, "(-")?;
            } else {
                write!(f, "-")?;
            }
            fmt_prec(inner, 3, f)?;
            if needs_paren {
                write!(f, ")")?;
            }
            Ok(())
        }
        Expr::Binary(op, lhs, rhs) => {
            let prec = op.precedence();
            let needs_paren = prec < parent;
            if needs_paren {
                write!(f, "(")?;
            }
            fmt_prec(lhs, prec, f)?;
            write!(f, "{}", op.symbol())?;
            // Right operand of a left-associative operator needs one
            // extra level; power is right-associative.
            let rhs_parent = if *op == BinaryOp::Pow { prec } else { prec + 1 };
            fmt_prec(rhs, rhs_parent, f)?;
            if needs_paren {
                write!(f, ")")?;
            }
            Ok(())
        }
        Expr::Call(name, args) => {
            write!(f, "{}(", name)?;
            for (i, arg) in args.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                fmt_prec(arg, 0, f)?;
            }
            write!(f, ")")
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_prec(self, 0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::parser::parse;

    #[test]
    fn test_display_round_trips_precedence() {
        let expr = parse("(1 + 2)*3 - 4/5").unwrap();
        assert_eq!(expr.to_string(), "(1 + 2)*3 - 4/5");
    }

    #[test]
    fn test_free_variables_first_seen_order() {
        let expr = parse("y + x*y + z").unwrap();
        assert_eq!(expr.free_variables(), vec!["y", "x", "z"]);
    }

    #[test]
    fn test_free_variables_skip_constants() {
        let expr = parse("pi*r**2").unwrap();
        assert_eq!(expr.free_variables(), vec!["r"]);
    }

    #[test]
    fn test_substitute() {
        let expr = parse("x*x + 1").unwrap();
        let rep = parse("y - 2").unwrap();
        let subbed = expr.substitute("x", &rep);
        assert_eq!(subbed.to_string(), "(y - 2)*(y - 2) + 1");
    }
}
