//! Built-in function and constant whitelist.
//!
//! The evaluator can only call what is enumerated here; there is no
//! general code-execution path. Real-valued functions reject complex
//! arguments, matching the behavior of a real-only math library.

use num_complex::Complex64;

use crate::engine::{EvalError, INT_EPS, Value};

/// Every callable name. The digit-bearing ones (`log2`, `log10`,
/// `atan2`) also appear in the preprocessor's protected-call table so
/// juxtaposition rewriting cannot tear them apart.
pub const FUNCTION_NAMES: &[&str] = &[
    "abs", "round", "min", "max", "pow", "sin", "cos", "tan", "asin", "acos", "atan", "atan2",
    "sinh", "cosh", "tanh", "asinh", "acosh", "atanh", "exp", "log", "log10", "log2", "sqrt",
    "ceil", "floor", "trunc", "factorial", "gcd", "degrees", "radians", "complex",
];

pub fn is_function(name: &str) -> bool {
    FUNCTION_NAMES.contains(&name)
}

/// Named constants usable as bare identifiers.
pub fn constant(name: &str) -> Option<Value> {
    match name {
        "pi" => Some(Value::Real(std::f64::consts::PI)),
        "e" => Some(Value::Real(std::f64::consts::E)),
        "tau" => Some(Value::Real(std::f64::consts::TAU)),
        "j" => Some(Value::Complex(Complex64::new(0.0, 1.0))),
        _ => None,
    }
}

fn real_arg(name: &str, value: &Value) -> Result<f64, EvalError> {
    match value {
        Value::Real(n) => Ok(*n),
        Value::Complex(_) => Err(EvalError::Domain(format!(
            "{} is not defined for complex numbers",
            name
        ))),
    }
}

fn integer_arg(name: &str, value: &Value) -> Result<i64, EvalError> {
    let n = real_arg(name, value)?;
    let rounded = n.round();
    if (n - rounded).abs() < INT_EPS && rounded.abs() < 1e15 {
        Ok(rounded as i64)
    } else {
        Err(EvalError::Domain(format!("{} requires an integer argument", name)))
    }
}

fn arity(name: &str, args: &[Value], expected: usize) -> Result<(), EvalError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(EvalError::Syntax(format!(
            "{} takes {} argument{}, got {}",
            name,
            expected,
            if expected == 1 { "" } else { "s" },
            args.len()
        )))
    }
}

fn unary_real(
    name: &str,
    args: &[Value],
    f: impl Fn(f64) -> Result<f64, EvalError>,
) -> Result<Value, EvalError> {
    arity(name, args, 1)?;
    Ok(Value::Real(f(real_arg(name, &args[0])?)?))
}

/// Invoke a whitelisted function. Unknown names are a syntax error.
pub fn call(name: &str, args: &[Value]) -> Result<Value, EvalError> {
    match name {
        "abs" => {
            arity(name, args, 1)?;
            Ok(match args[0] {
                Value::Real(n) => Value::Real(n.abs()),
                Value::Complex(z) => Value::Real(z.norm()),
            })
        }
        "round" => unary_real(name, args, |n| Ok(n.round())),
        "ceil" => unary_real(name, args, |n| Ok(n.ceil())),
        "floor" => unary_real(name, args, |n| Ok(n.floor())),
        "trunc" => unary_real(name, args, |n| Ok(n.trunc())),
        "degrees" => unary_real(name, args, |n| Ok(n.to_degrees())),
        "radians" => unary_real(name, args, |n| Ok(n.to_radians())),
        "exp" => unary_real(name, args, |n| Ok(n.exp())),
        "sin" => unary_real(name, args, |n| Ok(n.sin())),
        "cos" => unary_real(name, args, |n| Ok(n.cos())),
        "tan" => unary_real(name, args, |n| Ok(n.tan())),
        "sinh" => unary_real(name, args, |n| Ok(n.sinh())),
        "cosh" => unary_real(name, args, |n| Ok(n.cosh())),
        "tanh" => unary_real(name, args, |n| Ok(n.tanh())),
        "asinh" => unary_real(name, args, |n| Ok(n.asinh())),
        "atan" => unary_real(name, args, |n| Ok(n.atan())),
        "asin" => unary_real(name, args, |n| {
            if (-1.0..=1.0).contains(&n) {
                Ok(n.asin())
            } else {
                Err(EvalError::Domain("asin argument must be in [-1, 1]".to_string()))
            }
        }),
        "acos" => unary_real(name, args, |n| {
            if (-1.0..=1.0).contains(&n) {
                Ok(n.acos())
            } else {
                Err(EvalError::Domain("acos argument must be in [-1, 1]".to_string()))
            }
        }),
        "acosh" => unary_real(name, args, |n| {
            if n >= 1.0 {
                Ok(n.acosh())
            } else {
                Err(EvalError::Domain("acosh argument must be >= 1".to_string()))
            }
        }),
        "atanh" => unary_real(name, args, |n| {
            if n > -1.0 && n < 1.0 {
                Ok(n.atanh())
            } else {
                Err(EvalError::Domain("atanh argument must be in (-1, 1)".to_string()))
            }
        }),
        "sqrt" => unary_real(name, args, |n| {
            if n >= 0.0 {
                Ok(n.sqrt())
            } else {
                Err(EvalError::Domain("sqrt of a negative number".to_string()))
            }
        }),
        "log10" => unary_real(name, args, |n| {
            if n > 0.0 {
                Ok(n.log10())
            } else {
                Err(EvalError::Domain("log10 argument must be positive".to_string()))
            }
        }),
        "log2" => unary_real(name, args, |n| {
            if n > 0.0 {
                Ok(n.log2())
            } else {
                Err(EvalError::Domain("log2 argument must be positive".to_string()))
            }
        }),
        "log" => {
            // log(x) is the natural log; log(x, base) is also accepted.
            if args.len() != 1 && args.len() != 2 {
                return Err(EvalError::Syntax(format!(
                    "log takes 1 or 2 arguments, got {}",
                    args.len()
                )));
            }
            let x = real_arg(name, &args[0])?;
            if x <= 0.0 {
                return Err(EvalError::Domain("log argument must be positive".to_string()));
            }
            if args.len() == 2 {
                let base = real_arg(name, &args[1])?;
                if base <= 0.0 || base == 1.0 {
                    return Err(EvalError::Domain("invalid log base".to_string()));
                }
                Ok(Value::Real(x.log(base)))
            } else {
                Ok(Value::Real(x.ln()))
            }
        }
        "atan2" => {
            arity(name, args, 2)?;
            let y = real_arg(name, &args[0])?;
            let x = real_arg(name, &args[1])?;
            Ok(Value::Real(y.atan2(x)))
        }
        "pow" => {
            arity(name, args, 2)?;
            args[0].pow(args[1])
        }
        "min" | "max" => {
            if args.is_empty() {
                return Err(EvalError::Syntax(format!("{} needs at least one argument", name)));
            }
            let mut best = real_arg(name, &args[0])?;
            for arg in &args[1..] {
                let n = real_arg(name, arg)?;
                best = if name == "min" { best.min(n) } else { best.max(n) };
            }
            Ok(Value::Real(best))
        }
        "factorial" => {
            arity(name, args, 1)?;
            let n = integer_arg(name, &args[0])?;
            if !(0..=170).contains(&n) {
                return Err(EvalError::Domain(
                    "factorial argument must be in 0..=170".to_string(),
                ));
            }
            let mut acc = 1.0f64;
            for k in 2..=n {
                acc *= k as f64;
            }
            Ok(Value::Real(acc))
        }
        "gcd" => {
            arity(name, args, 2)?;
            let mut a = integer_arg(name, &args[0])?.unsigned_abs();
            let mut b = integer_arg(name, &args[1])?.unsigned_abs();
            while b != 0 {
                let t = b;
                b = a % b;
                a = t;
            }
            Ok(Value::Real(a as f64))
        }
        "complex" => {
            arity(name, args, 2)?;
            let re = real_arg(name, &args[0])?;
            let im = real_arg(name, &args[1])?;
            Ok(Value::Complex(Complex64::new(re, im)).normalized())
        }
        _ => Err(EvalError::Syntax(format!("unknown function or variable: {}", name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitelist_rejects_unknown_name() {
        assert!(matches!(call("system", &[]), Err(EvalError::Syntax(_))));
    }

    #[test]
    fn test_sqrt_negative_is_domain_error() {
        let err = call("sqrt", &[Value::Real(-1.0)]).unwrap_err();
        assert!(matches!(err, EvalError::Domain(_)));
    }

    #[test]
    fn test_log_with_base() {
        assert_eq!(call("log", &[Value::Real(8.0), Value::Real(2.0)]).unwrap(), Value::Real(3.0));
    }

    #[test]
    fn test_factorial() {
        assert_eq!(call("factorial", &[Value::Real(5.0)]).unwrap(), Value::Real(120.0));
        assert!(call("factorial", &[Value::Real(2.5)]).is_err());
    }

    #[test]
    fn test_gcd() {
        assert_eq!(call("gcd", &[Value::Real(12.0), Value::Real(18.0)]).unwrap(), Value::Real(6.0));
    }

    #[test]
    fn test_abs_of_complex_is_modulus() {
        let z = Value::Complex(num_complex::Complex64::new(3.0, 4.0));
        assert_eq!(call("abs", &[z]).unwrap(), Value::Real(5.0));
    }

    #[test]
    fn test_real_only_function_rejects_complex() {
        let z = Value::Complex(num_complex::Complex64::new(0.0, 1.0));
        assert!(matches!(call("sin", &[z]), Err(EvalError::Domain(_))));
    }
}
