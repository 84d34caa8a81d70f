//! Built-in algebra backend.
//!
//! Covers the equation shapes the document format actually produces:
//! univariate polynomials (closed forms through degree two, iteration
//! above), square linear systems, a linear-plus-polynomial pair of two
//! unknowns, and single equations that stay linear in the unknown but
//! carry other symbols (those yield symbolic solutions). Everything
//! else is reported as unsupported rather than guessed at.

use num_complex::Complex64;

use super::ast::{BinaryOp, Expr, UnaryOp};
use super::error::EvalError;
use super::eval;
use super::solver::{SolveOutcome, SolvedValue, SolverBackend};
use super::value::Value;

/// Coefficients smaller than this are treated as zero.
const COEFF_EPS: f64 = 1e-12;
/// Imaginary parts smaller than this are snapped to the real axis.
const ROOT_SNAP: f64 = 1e-8;

#[derive(Debug, Default)]
pub struct AlgebraBackend;

impl AlgebraBackend {
    pub fn new() -> Self {
        AlgebraBackend
    }
}

impl SolverBackend for AlgebraBackend {
    fn solve_single(&self, expr: &Expr, variable: &str) -> Result<Vec<SolvedValue>, EvalError> {
        if let Some(coeffs) = polynomial_coefficients(expr, variable) {
            return Ok(roots_of(&coeffs).into_iter().map(root_value).collect());
        }
        if let Some(solution) = symbolic_linear_solution(expr, variable)? {
            return Ok(solution);
        }
        Err(EvalError::Unsupported(format!(
            "cannot solve '{}' for {}",
            expr, variable
        )))
    }

    fn solve_system(
        &self,
        variables: &[String],
        equations: &[(Expr, Expr)],
    ) -> Result<SolveOutcome, EvalError> {
        if variables.is_empty() || equations.is_empty() {
            return Err(EvalError::Unsupported(
                "equation system needs at least one variable and one equation".to_string(),
            ));
        }
        let residuals: Vec<Expr> = equations
            .iter()
            .map(|(lhs, rhs)| Expr::binary(BinaryOp::Sub, lhs.clone(), rhs.clone()))
            .collect();
        let linear: Vec<Option<(Vec<f64>, f64)>> = residuals
            .iter()
            .map(|r| linear_coeffs(r, variables))
            .collect();

        if linear.iter().all(Option::is_some) {
            if equations.len() != variables.len() {
                return Err(EvalError::Unsupported(
                    "linear system is not square".to_string(),
                ));
            }
            let rows = linear
                .into_iter()
                .map(|entry| {
                    let (mut coeffs, constant) = entry.expect("all entries checked above");
                    // coeffs . x + constant = 0, so the rhs is -constant.
                    coeffs.push(-constant);
                    coeffs
                })
                .collect();
            return match gaussian_elimination(rows) {
                LinearSolution::Unique(values) => Ok(SolveOutcome::Single(
                    values
                        .into_iter()
                        .map(|v| SolvedValue::Num(Value::Real(v)))
                        .collect(),
                )),
                LinearSolution::Inconsistent => Ok(SolveOutcome::NoSolution),
                LinearSolution::Underdetermined => Err(EvalError::Unsupported(
                    "linear system is underdetermined".to_string(),
                )),
            };
        }

        if variables.len() == 2 && equations.len() == 2 {
            if let Some(idx) = linear.iter().position(Option::is_some) {
                let lin = linear[idx].clone().expect("position found above");
                return solve_two_by_substitution(variables, &residuals, idx, lin);
            }
        }

        Err(EvalError::Unsupported(
            "cannot solve this equation system".to_string(),
        ))
    }
}

fn root_value(z: Complex64) -> SolvedValue {
    if z.im == 0.0 {
        SolvedValue::Num(Value::Real(z.re))
    } else {
        SolvedValue::Num(Value::Complex(z))
    }
}

/// Ascending coefficients of `expr` as a polynomial in `var`, or `None`
/// when the expression is not polynomial (or mixes in other symbols).
fn polynomial_coefficients(expr: &Expr, var: &str) -> Option<Vec<f64>> {
    if !expr.references(var) {
        return match eval::evaluate(expr) {
            Ok(Value::Real(n)) if n.is_finite() => Some(vec![n]),
            _ => None,
        };
    }
    match expr {
        Expr::Var(name) if name == var => Some(vec![0.0, 1.0]),
        Expr::Unary(UnaryOp::Neg, inner) => {
            let coeffs = polynomial_coefficients(inner, var)?;
            Some(coeffs.into_iter().map(|c| -c).collect())
        }
        Expr::Binary(op, lhs, rhs) => match op {
            BinaryOp::Add | BinaryOp::Sub => {
                let a = polynomial_coefficients(lhs, var)?;
                let b = polynomial_coefficients(rhs, var)?;
                let mut out = vec![0.0; a.len().max(b.len())];
                for (i, c) in a.iter().enumerate() {
                    out[i] += c;
                }
                let sign = if *op == BinaryOp::Add { 1.0 } else { -1.0 };
                for (i, c) in b.iter().enumerate() {
                    out[i] += sign * c;
                }
                Some(out)
            }
            BinaryOp::Mul => {
                let a = polynomial_coefficients(lhs, var)?;
                let b = polynomial_coefficients(rhs, var)?;
                Some(convolve(&a, &b))
            }
            BinaryOp::Div => {
                if rhs.references(var) {
                    return None;
                }
                let a = polynomial_coefficients(lhs, var)?;
                match eval::evaluate(rhs) {
                    Ok(Value::Real(k)) if k != 0.0 && k.is_finite() => {
                        Some(a.into_iter().map(|c| c / k).collect())
                    }
                    _ => None,
                }
            }
            BinaryOp::Pow => {
                let exponent = match eval::evaluate(rhs) {
                    Ok(Value::Real(n)) if n >= 0.0 && n.fract() == 0.0 && n <= 16.0 => n as u32,
                    _ => return None,
                };
                let base = polynomial_coefficients(lhs, var)?;
                let mut out = vec![1.0];
                for _ in 0..exponent {
                    out = convolve(&out, &base);
                }
                Some(out)
            }
            BinaryOp::Rem => None,
        },
        _ => None,
    }
}

fn convolve(a: &[f64], b: &[f64]) -> Vec<f64> {
    let mut out = vec![0.0; a.len() + b.len() - 1];
    for (i, x) in a.iter().enumerate() {
        for (j, y) in b.iter().enumerate() {
            out[i + j] += x * y;
        }
    }
    out
}

/// Roots of the polynomial with the given ascending coefficients,
/// snapped to the real axis when close and sorted by real then
/// imaginary part.
fn roots_of(coeffs: &[f64]) -> Vec<Complex64> {
    let mut coeffs = coeffs.to_vec();
    while coeffs.len() > 1 && coeffs.last().is_some_and(|c| c.abs() < COEFF_EPS) {
        coeffs.pop();
    }
    let mut roots = match coeffs.len() {
        0 | 1 => Vec::new(),
        2 => vec![Complex64::new(-coeffs[0] / coeffs[1], 0.0)],
        3 => quadratic_roots(coeffs[2], coeffs[1], coeffs[0]),
        _ => durand_kerner(&coeffs),
    };
    for root in &mut roots {
        if root.im.abs() < ROOT_SNAP {
            *root = Complex64::new(root.re, 0.0);
        }
    }
    roots.sort_by(|a, b| a.re.total_cmp(&b.re).then(a.im.total_cmp(&b.im)));
    roots
}

fn quadratic_roots(a: f64, b: f64, c: f64) -> Vec<Complex64> {
    let disc = b * b - 4.0 * a * c;
    if disc >= 0.0 {
        let sq = disc.sqrt();
        vec![
            Complex64::new((-b - sq) / (2.0 * a), 0.0),
            Complex64::new((-b + sq) / (2.0 * a), 0.0),
        ]
    } else {
        let sq = (-disc).sqrt();
        vec![
            Complex64::new(-b / (2.0 * a), -sq / (2.0 * a).abs()),
            Complex64::new(-b / (2.0 * a), sq / (2.0 * a).abs()),
        ]
    }
}

/// Simultaneous root iteration on the monic polynomial. The seed points
/// are powers of 0.4+0.9j, which is not a root of unity.
fn durand_kerner(coeffs: &[f64]) -> Vec<Complex64> {
    let degree = coeffs.len() - 1;
    let lead = coeffs[degree];
    let monic: Vec<Complex64> = coeffs.iter().map(|c| Complex64::new(c / lead, 0.0)).collect();
    let eval_at = |x: Complex64| {
        let mut acc = Complex64::new(0.0, 0.0);
        for &c in monic.iter().rev() {
            acc = acc * x + c;
        }
        acc
    };

    let seed = Complex64::new(0.4, 0.9);
    let mut roots: Vec<Complex64> = (0..degree).map(|k| seed.powu(k as u32 + 1)).collect();
    for _ in 0..200 {
        let mut largest_step = 0.0f64;
        for k in 0..degree {
            let mut denom = Complex64::new(1.0, 0.0);
            for j in 0..degree {
                if j != k {
                    denom *= roots[k] - roots[j];
                }
            }
            if denom.norm() == 0.0 {
                continue;
            }
            let step = eval_at(roots[k]) / denom;
            roots[k] -= step;
            largest_step = largest_step.max(step.norm());
        }
        if largest_step < 1e-12 {
            break;
        }
    }
    roots
}

/// Coefficients and constant term of `expr` when it is linear over
/// `vars`: returns `(c, k)` with `expr = c . vars + k`.
fn linear_coeffs(expr: &Expr, vars: &[String]) -> Option<(Vec<f64>, f64)> {
    if !vars.iter().any(|v| expr.references(v)) {
        return match eval::evaluate(expr) {
            Ok(Value::Real(n)) if n.is_finite() => Some((vec![0.0; vars.len()], n)),
            _ => None,
        };
    }
    match expr {
        Expr::Var(name) => {
            let idx = vars.iter().position(|v| v == name)?;
            let mut coeffs = vec![0.0; vars.len()];
            coeffs[idx] = 1.0;
            Some((coeffs, 0.0))
        }
        Expr::Unary(UnaryOp::Neg, inner) => {
            let (coeffs, k) = linear_coeffs(inner, vars)?;
            Some((coeffs.into_iter().map(|c| -c).collect(), -k))
        }
        Expr::Binary(op, lhs, rhs) => match op {
            BinaryOp::Add | BinaryOp::Sub => {
                let (mut a, ka) = linear_coeffs(lhs, vars)?;
                let (b, kb) = linear_coeffs(rhs, vars)?;
                let sign = if *op == BinaryOp::Add { 1.0 } else { -1.0 };
                for (x, y) in a.iter_mut().zip(&b) {
                    *x += sign * y;
                }
                Some((a, ka + sign * kb))
            }
            BinaryOp::Mul => {
                let (a, ka) = linear_coeffs(lhs, vars)?;
                let (b, kb) = linear_coeffs(rhs, vars)?;
                let a_const = a.iter().all(|c| c.abs() < COEFF_EPS);
                let b_const = b.iter().all(|c| c.abs() < COEFF_EPS);
                if a_const {
                    Some((b.into_iter().map(|c| c * ka).collect(), ka * kb))
                } else if b_const {
                    Some((a.into_iter().map(|c| c * kb).collect(), ka * kb))
                } else {
                    None
                }
            }
            BinaryOp::Div => {
                let (b, kb) = linear_coeffs(rhs, vars)?;
                if !b.iter().all(|c| c.abs() < COEFF_EPS) || kb == 0.0 {
                    return None;
                }
                let (a, ka) = linear_coeffs(lhs, vars)?;
                Some((a.into_iter().map(|c| c / kb).collect(), ka / kb))
            }
            BinaryOp::Pow | BinaryOp::Rem => None,
        },
        _ => None,
    }
}

enum LinearSolution {
    Unique(Vec<f64>),
    Inconsistent,
    Underdetermined,
}

/// Forward elimination with partial pivoting, then back-substitution.
/// Each row is `n` coefficients followed by the right-hand side.
fn gaussian_elimination(mut rows: Vec<Vec<f64>>) -> LinearSolution {
    let n = rows.len();
    for col in 0..n {
        let pivot = (col..n).max_by(|&a, &b| rows[a][col].abs().total_cmp(&rows[b][col].abs()));
        let Some(pivot) = pivot else {
            return LinearSolution::Underdetermined;
        };
        if rows[pivot][col].abs() < COEFF_EPS {
            // No pivot in this column; the system is singular. Whether it
            // is inconsistent or underdetermined shows in the zero rows.
            for row in &rows {
                if row[..n].iter().all(|c| c.abs() < COEFF_EPS) && row[n].abs() > COEFF_EPS {
                    return LinearSolution::Inconsistent;
                }
            }
            return LinearSolution::Underdetermined;
        }
        rows.swap(col, pivot);
        for r in col + 1..n {
            let factor = rows[r][col] / rows[col][col];
            for c in col..=n {
                rows[r][c] -= factor * rows[col][c];
            }
        }
    }

    let mut values = vec![0.0; n];
    for row in (0..n).rev() {
        let mut rhs = rows[row][n];
        for col in row + 1..n {
            rhs -= rows[row][col] * values[col];
        }
        values[row] = rhs / rows[row][row];
    }
    LinearSolution::Unique(values)
}

/// Two unknowns, two equations, at least one of them linear: isolate a
/// variable from the linear equation, substitute into the other, and
/// back-substitute each root.
fn solve_two_by_substitution(
    variables: &[String],
    residuals: &[Expr],
    linear_idx: usize,
    linear: (Vec<f64>, f64),
) -> Result<SolveOutcome, EvalError> {
    let (coeffs, constant) = linear;
    let Some(iso) = coeffs.iter().position(|c| c.abs() > COEFF_EPS) else {
        // The "linear" equation mentions no variable at all: either it
        // is plainly false, or it adds nothing and the system is short
        // one equation.
        return if constant.abs() > COEFF_EPS {
            Ok(SolveOutcome::NoSolution)
        } else {
            Err(EvalError::Unsupported(
                "equation system is underdetermined".to_string(),
            ))
        };
    };
    let other = 1 - iso;
    let other_idx = 1 - linear_idx;
    let a_iso = coeffs[iso];
    let a_other = coeffs[other];

    // iso_var = (-constant - a_other*other_var) / a_iso
    let replacement = Expr::binary(
        BinaryOp::Div,
        Expr::binary(
            BinaryOp::Sub,
            Expr::Num(-constant),
            Expr::binary(
                BinaryOp::Mul,
                Expr::Num(a_other),
                Expr::Var(variables[other].clone()),
            ),
        ),
        Expr::Num(a_iso),
    );
    let substituted = residuals[other_idx].substitute(&variables[iso], &replacement);
    let poly = polynomial_coefficients(&substituted, &variables[other]).ok_or_else(|| {
        EvalError::Unsupported("cannot solve this equation system".to_string())
    })?;
    let roots = roots_of(&poly);
    if roots.is_empty() {
        return Ok(SolveOutcome::NoSolution);
    }

    let mut assignments = Vec::with_capacity(roots.len());
    for root in roots {
        let iso_val =
            (Complex64::new(-constant, 0.0) - Complex64::new(a_other, 0.0) * root) / a_iso;
        let mut assignment = vec![SolvedValue::Num(Value::Real(0.0)); 2];
        assignment[iso] = root_value(iso_val);
        assignment[other] = root_value(root);
        assignments.push(assignment);
    }
    Ok(if assignments.len() == 1 {
        SolveOutcome::Single(assignments.remove(0))
    } else {
        SolveOutcome::Many(assignments)
    })
}

/// Single equation, linear in the unknown but carrying other symbols.
/// Returns `None` when the expression is not linear in the unknown.
fn symbolic_linear_solution(
    expr: &Expr,
    variable: &str,
) -> Result<Option<Vec<SolvedValue>>, EvalError> {
    let Some((a, b)) = linear_decompose(expr, variable) else {
        return Ok(None);
    };
    let a = eval::fold_constants(&a);
    let a_numeric = match eval::evaluate(&a) {
        Ok(Value::Real(n)) => Some(n),
        _ => None,
    };
    let solution = match a_numeric {
        Some(n) if n == 0.0 => return Ok(Some(Vec::new())),
        Some(n) if n == 1.0 => negated(&b),
        Some(n) if n == -1.0 => b,
        _ => Expr::binary(BinaryOp::Div, negated(&b), a),
    };
    let solution = eval::fold_constants(&solution);
    if solution.free_variables().is_empty() {
        let value = eval::evaluate(&solution)?;
        Ok(Some(vec![SolvedValue::Num(value)]))
    } else {
        Ok(Some(vec![SolvedValue::Symbolic(solution.to_string())]))
    }
}

/// Decompose `expr` as `a*var + b` with `Expr` coefficients. `a` and `b`
/// may mention other symbols; `None` when the shape is not linear.
fn linear_decompose(expr: &Expr, var: &str) -> Option<(Expr, Expr)> {
    if !expr.references(var) {
        return Some((Expr::Num(0.0), expr.clone()));
    }
    match expr {
        Expr::Var(name) if name == var => Some((Expr::Num(1.0), Expr::Num(0.0))),
        Expr::Unary(UnaryOp::Neg, inner) => {
            let (a, b) = linear_decompose(inner, var)?;
            Some((negated(&a), negated(&b)))
        }
        Expr::Binary(BinaryOp::Add, lhs, rhs) => {
            let (a1, b1) = linear_decompose(lhs, var)?;
            let (a2, b2) = linear_decompose(rhs, var)?;
            Some((add_expr(a1, a2), add_expr(b1, b2)))
        }
        Expr::Binary(BinaryOp::Sub, lhs, rhs) => {
            let (a1, b1) = linear_decompose(lhs, var)?;
            let (a2, b2) = linear_decompose(rhs, var)?;
            Some((sub_expr(a1, a2), sub_expr(b1, b2)))
        }
        Expr::Binary(BinaryOp::Mul, lhs, rhs) => {
            if !lhs.references(var) {
                let (a, b) = linear_decompose(rhs, var)?;
                Some((mul_expr(lhs, a), mul_expr(lhs, b)))
            } else if !rhs.references(var) {
                let (a, b) = linear_decompose(lhs, var)?;
                Some((mul_expr(rhs, a), mul_expr(rhs, b)))
            } else {
                None
            }
        }
        Expr::Binary(BinaryOp::Div, lhs, rhs) => {
            if rhs.references(var) {
                return None;
            }
            let (a, b) = linear_decompose(lhs, var)?;
            Some((div_expr(a, rhs), div_expr(b, rhs)))
        }
        _ => None,
    }
}

fn is_zero_literal(expr: &Expr) -> bool {
    matches!(expr, Expr::Num(n) if *n == 0.0)
}

fn add_expr(lhs: Expr, rhs: Expr) -> Expr {
    if is_zero_literal(&lhs) {
        rhs
    } else if is_zero_literal(&rhs) {
        lhs
    } else {
        Expr::binary(BinaryOp::Add, lhs, rhs)
    }
}

fn sub_expr(lhs: Expr, rhs: Expr) -> Expr {
    if is_zero_literal(&rhs) {
        lhs
    } else if is_zero_literal(&lhs) {
        negated(&rhs)
    } else {
        Expr::binary(BinaryOp::Sub, lhs, rhs)
    }
}

fn mul_expr(factor: &Expr, expr: Expr) -> Expr {
    if is_zero_literal(&expr) || is_zero_literal(factor) {
        Expr::Num(0.0)
    } else if matches!(factor, Expr::Num(n) if *n == 1.0) {
        expr
    } else if matches!(expr, Expr::Num(n) if n == 1.0) {
        factor.clone()
    } else {
        Expr::binary(BinaryOp::Mul, factor.clone(), expr)
    }
}

fn div_expr(expr: Expr, divisor: &Expr) -> Expr {
    if is_zero_literal(&expr) {
        Expr::Num(0.0)
    } else if matches!(divisor, Expr::Num(n) if *n == 1.0) {
        expr
    } else {
        Expr::binary(BinaryOp::Div, expr, divisor.clone())
    }
}

/// `-expr`, with subtraction flipped instead of wrapped.
fn negated(expr: &Expr) -> Expr {
    match expr {
        Expr::Num(n) => Expr::Num(-n),
        Expr::Unary(UnaryOp::Neg, inner) => (**inner).clone(),
        Expr::Binary(BinaryOp::Sub, lhs, rhs) => {
            sub_expr((**rhs).clone(), (**lhs).clone())
        }
        other => Expr::neg(other.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::parser::parse;
    use crate::engine::solver::{collect_by_variable, format_solutions, format_variable_solutions};

    fn backend() -> AlgebraBackend {
        AlgebraBackend::new()
    }

    fn solve_text(expr: &str, var: &str) -> Result<Vec<SolvedValue>, EvalError> {
        backend().solve_single(&parse(expr).unwrap(), var)
    }

    fn solve_system_text(vars: &[&str], eqs: &[(&str, &str)]) -> Result<SolveOutcome, EvalError> {
        let variables: Vec<String> = vars.iter().map(|v| v.to_string()).collect();
        let equations: Vec<(Expr, Expr)> = eqs
            .iter()
            .map(|(l, r)| (parse(l).unwrap(), parse(r).unwrap()))
            .collect();
        backend().solve_system(&variables, &equations)
    }

    #[test]
    fn test_linear_equation() {
        let sols = solve_text("2*x - 8", "x").unwrap();
        assert_eq!(format_solutions("x", &sols), "x = 4");
    }

    #[test]
    fn test_quadratic_two_real_roots() {
        let sols = solve_text("x**2 - 5*x + 6", "x").unwrap();
        assert_eq!(format_solutions("x", &sols), "x[0] = 2, x[1] = 3");
    }

    #[test]
    fn test_quadratic_complex_pair() {
        let sols = solve_text("x**2 + 1", "x").unwrap();
        assert_eq!(format_solutions("x", &sols), "x[0] = -j, x[1] = j");
    }

    #[test]
    fn test_cubic_by_iteration() {
        let sols = solve_text("x**3 - 6*x**2 + 11*x - 6", "x").unwrap();
        assert_eq!(format_solutions("x", &sols), "x[0] = 1, x[1] = 2, x[2] = 3");
    }

    #[test]
    fn test_constant_equation_has_no_roots() {
        let sols = solve_text("3", "x").unwrap();
        assert_eq!(format_solutions("x", &sols), "no solution");
    }

    #[test]
    fn test_symbolic_linear_solution() {
        let sols = solve_text("x + y - 5", "x").unwrap();
        assert_eq!(format_solutions("x", &sols), "x = 5 - y");
    }

    #[test]
    fn test_symbolic_solution_with_coefficient() {
        let sols = solve_text("y*x - 6", "x").unwrap();
        assert_eq!(format_solutions("x", &sols), "x = 6/y");
    }

    #[test]
    fn test_nonlinear_in_other_symbols_is_unsupported() {
        assert!(matches!(
            solve_text("sin(x) - 1", "x"),
            Err(EvalError::Unsupported(_))
        ));
    }

    #[test]
    fn test_linear_system() {
        let vars = ["x", "y"];
        let outcome = solve_system_text(&vars, &[("x+y", "5"), ("x-y", "1")]).unwrap();
        let names: Vec<String> = vars.iter().map(|v| v.to_string()).collect();
        let table = collect_by_variable(&names, &outcome);
        assert_eq!(format_variable_solutions(&table), "x = 3; y = 2");
    }

    #[test]
    fn test_inconsistent_linear_system() {
        let outcome = solve_system_text(&["x", "y"], &[("x+y", "1"), ("x+y", "2")]).unwrap();
        assert_eq!(outcome, SolveOutcome::NoSolution);
    }

    #[test]
    fn test_underdetermined_system_is_unsupported() {
        let err = solve_system_text(&["x", "y"], &[("x+y", "1"), ("2*x+2*y", "2")]).unwrap_err();
        assert!(matches!(err, EvalError::Unsupported(_)));
    }

    #[test]
    fn test_linear_plus_polynomial_system() {
        let vars = ["x", "y"];
        let outcome = solve_system_text(&vars, &[("x+y", "5"), ("x*y", "6")]).unwrap();
        let names: Vec<String> = vars.iter().map(|v| v.to_string()).collect();
        let table = collect_by_variable(&names, &outcome);
        assert_eq!(
            format_variable_solutions(&table),
            "x[0] = 3, x[1] = 2; y[0] = 2, y[1] = 3"
        );
    }

    #[test]
    fn test_roots_are_sorted() {
        let roots = roots_of(&[6.0, -5.0, 1.0]);
        assert_eq!(roots[0], Complex64::new(2.0, 0.0));
        assert_eq!(roots[1], Complex64::new(3.0, 0.0));
    }

    #[test]
    fn test_polynomial_extraction_handles_division() {
        let expr = parse("(x**2 - 4)/2").unwrap();
        assert_eq!(polynomial_coefficients(&expr, "x"), Some(vec![-2.0, 0.0, 0.5]));
    }
}
