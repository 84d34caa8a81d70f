//! Canonical numeric values and their display formatting.
//!
//! A `Value` is the scalar outcome of evaluating a line: a real or a
//! complex number. Formatting follows the round-trip contract: whatever
//! `format_value` produces must re-parse as an operand when a later line
//! substitutes it through an `@` reference.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::EvalError;

/// Tolerance for treating a float as an integer when formatting.
pub const INT_EPS: f64 = 1e-10;

/// A canonical scalar result.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Real(f64),
    Complex(Complex64),
}

impl Value {
    pub fn as_complex(self) -> Complex64 {
        match self {
            Value::Real(n) => Complex64::new(n, 0.0),
            Value::Complex(z) => z,
        }
    }

    /// Collapse a complex value with zero imaginary part back to a real.
    pub fn normalized(self) -> Value {
        match self {
            Value::Complex(z) if z.im == 0.0 => Value::Real(z.re),
            other => other,
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            Value::Real(n) => n == 0.0,
            Value::Complex(z) => z.re == 0.0 && z.im == 0.0,
        }
    }

    pub fn add(self, rhs: Value) -> Value {
        match (self, rhs) {
            (Value::Real(a), Value::Real(b)) => Value::Real(a + b),
            (a, b) => Value::Complex(a.as_complex() + b.as_complex()).normalized(),
        }
    }

    pub fn sub(self, rhs: Value) -> Value {
        match (self, rhs) {
            (Value::Real(a), Value::Real(b)) => Value::Real(a - b),
            (a, b) => Value::Complex(a.as_complex() - b.as_complex()).normalized(),
        }
    }

    pub fn mul(self, rhs: Value) -> Value {
        match (self, rhs) {
            (Value::Real(a), Value::Real(b)) => Value::Real(a * b),
            (a, b) => Value::Complex(a.as_complex() * b.as_complex()).normalized(),
        }
    }

    pub fn div(self, rhs: Value) -> Result<Value, EvalError> {
        if rhs.is_zero() {
            return Err(EvalError::Domain("division by zero".to_string()));
        }
        Ok(match (self, rhs) {
            (Value::Real(a), Value::Real(b)) => Value::Real(a / b),
            (a, b) => Value::Complex(a.as_complex() / b.as_complex()).normalized(),
        })
    }

    pub fn rem(self, rhs: Value) -> Result<Value, EvalError> {
        match (self, rhs) {
            (Value::Real(a), Value::Real(b)) => {
                if b == 0.0 {
                    Err(EvalError::Domain("modulo by zero".to_string()))
                } else {
                    // Python-style remainder: result takes the sign of the
                    // divisor and stays congruent to the dividend.
                    let r = ((a % b) + b) % b;
                    Ok(Value::Real(if r == 0.0 { 0.0 } else { r }))
                }
            }
            _ => Err(EvalError::Domain(
                "modulo is not defined for complex numbers".to_string(),
            )),
        }
    }

    pub fn neg(self) -> Value {
        match self {
            Value::Real(n) => Value::Real(-n),
            Value::Complex(z) => Value::Complex(-z),
        }
    }

    pub fn pow(self, rhs: Value) -> Result<Value, EvalError> {
        match (self, rhs) {
            (Value::Real(a), Value::Real(b)) => {
                if a == 0.0 && b < 0.0 {
                    return Err(EvalError::Domain(
                        "zero cannot be raised to a negative power".to_string(),
                    ));
                }
                // Negative base with a fractional exponent promotes to complex.
                if a < 0.0 && b.fract() != 0.0 {
                    return Ok(Value::Complex(Complex64::new(a, 0.0).powc(Complex64::new(b, 0.0)))
                        .normalized());
                }
                Ok(Value::Real(a.powf(b)))
            }
            (a, b) => {
                let base = a.as_complex();
                if base.re == 0.0 && base.im == 0.0 {
                    return Err(EvalError::Domain(
                        "zero cannot be raised to a complex power".to_string(),
                    ));
                }
                Ok(Value::Complex(base.powc(b.as_complex())).normalized())
            }
        }
    }
}

/// Round to the given number of significant digits.
fn round_significant(n: f64, digits: i32) -> f64 {
    if n == 0.0 || !n.is_finite() {
        return n;
    }
    let exponent = n.abs().log10().floor() as i32;
    let shift = digits - 1 - exponent;
    if !(-300..=300).contains(&shift) {
        return n;
    }
    let factor = 10f64.powi(shift);
    (n * factor).round() / factor
}

/// Format a real number: integer text when within `INT_EPS` of an
/// integer, otherwise 10 significant digits.
pub fn format_real(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let rounded = n.round();
    if (n - rounded).abs() < INT_EPS && rounded.abs() < 1e15 {
        return format!("{}", rounded as i64);
    }
    format!("{}", round_significant(n, 10))
}

fn format_complex(z: Complex64) -> String {
    if z.im == 0.0 {
        return format_real(z.re);
    }
    if z.re == 0.0 {
        return if z.im == 1.0 {
            "j".to_string()
        } else if z.im == -1.0 {
            "-j".to_string()
        } else {
            format!("{}j", format_real(z.im))
        };
    }
    let sign = if z.im >= 0.0 { '+' } else { '-' };
    let imag = z.im.abs();
    if imag == 1.0 {
        format!("{}{}j", format_real(z.re), sign)
    } else {
        format!("{}{}{}j", format_real(z.re), sign, format_real(imag))
    }
}

/// Canonical text form of a value.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Real(n) => format_real(*n),
        Value::Complex(z) => format_complex(*z),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_value(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_real_integer_coercion() {
        assert_eq!(format_real(5.0), "5");
        assert_eq!(format_real(5.0 + 1e-12), "5");
        assert_eq!(format_real(-3.0), "-3");
    }

    #[test]
    fn test_format_real_significant_digits() {
        assert_eq!(format_real(1.0 / 3.0), "0.3333333333");
        assert_eq!(format_real(2.5), "2.5");
    }

    #[test]
    fn test_format_complex_forms() {
        assert_eq!(format_value(&Value::Complex(Complex64::new(0.0, 1.0))), "j");
        assert_eq!(format_value(&Value::Complex(Complex64::new(0.0, -1.0))), "-j");
        assert_eq!(format_value(&Value::Complex(Complex64::new(0.0, 2.0))), "2j");
        assert_eq!(format_value(&Value::Complex(Complex64::new(3.0, 2.0))), "3+2j");
        assert_eq!(format_value(&Value::Complex(Complex64::new(3.0, -1.0))), "3-j");
        assert_eq!(format_value(&Value::Complex(Complex64::new(3.0, 0.0))), "3");
    }

    #[test]
    fn test_remainder_takes_divisor_sign() {
        let rem = |a: f64, b: f64| Value::Real(a).rem(Value::Real(b)).unwrap();
        assert_eq!(rem(7.0, 3.0), Value::Real(1.0));
        assert_eq!(rem(-7.0, 3.0), Value::Real(2.0));
        assert_eq!(rem(7.0, -3.0), Value::Real(-2.0));
        assert_eq!(rem(-7.0, -3.0), Value::Real(-1.0));
        // Exact multiples stay plain zero for any divisor sign.
        assert_eq!(rem(6.0, -3.0), Value::Real(0.0));
    }

    #[test]
    fn test_remainder_is_congruent_to_dividend() {
        for (a, b) in [(7.0, -3.0), (-7.0, -3.0), (-7.0, 3.0), (7.5, -2.0)] {
            let Value::Real(r) = Value::Real(a).rem(Value::Real(b)).unwrap() else {
                panic!("expected real remainder");
            };
            assert!(((a - r) / b).fract().abs() < 1e-12, "{} % {} gave {}", a, b, r);
            assert!(r == 0.0 || r.signum() == b.signum());
        }
    }

    #[test]
    fn test_division_by_zero_is_domain_error() {
        let err = Value::Real(1.0).div(Value::Real(0.0)).unwrap_err();
        assert!(matches!(err, EvalError::Domain(_)));
    }

    #[test]
    fn test_negative_base_fractional_exponent_promotes_to_complex() {
        let v = Value::Real(-8.0).pow(Value::Real(1.0 / 3.0)).unwrap();
        match v {
            Value::Complex(z) => assert!(z.im.abs() > 1.0),
            Value::Real(_) => panic!("expected complex result"),
        }
    }

    #[test]
    fn test_complex_arithmetic_normalizes_to_real() {
        let a = Value::Complex(Complex64::new(0.0, 2.0));
        let b = Value::Complex(Complex64::new(0.0, 3.0));
        assert_eq!(a.mul(b), Value::Real(-6.0));
    }
}
