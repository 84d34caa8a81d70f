//! Recursive-descent parser for the expression grammar.
//!
//! Precedence, lowest to highest: `+ -`, `* / %`, unary `-`, `**`
//! (right-associative, exponent may itself be signed, so `-2**2` is
//! `-(2**2)` and `2**-3` parses).

use super::ast::{BinaryOp, Expr};
use super::error::EvalError;
use super::lexer::{Token, tokenize};

pub fn parse(input: &str) -> Result<Expr, EvalError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(EvalError::Syntax("empty expression".to_string()));
    }
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.expression()?;
    if parser.pos != parser.tokens.len() {
        return Err(EvalError::Syntax(format!(
            "unexpected trailing input near token {}",
            parser.pos + 1
        )));
    }
    Ok(expr)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, token: Token, what: &str) -> Result<(), EvalError> {
        if self.peek() == Some(&token) {
            self.pos += 1;
            Ok(())
        } else {
            Err(EvalError::Syntax(format!("expected {}", what)))
        }
    }

    fn expression(&mut self) -> Result<Expr, EvalError> {
        let mut lhs = self.term()?;
        loop {
            let op = match self.peek() {
                Some(Token::Plus) => BinaryOp::Add,
                Some(Token::Minus) => BinaryOp::Sub,
                _ => break,
            };
            self.pos += 1;
            let rhs = self.term()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn term(&mut self) -> Result<Expr, EvalError> {
        let mut lhs = self.unary()?;
        loop {
            let op = match self.peek() {
                Some(Token::Star) => BinaryOp::Mul,
                Some(Token::Slash) => BinaryOp::Div,
                Some(Token::Percent) => BinaryOp::Rem,
                _ => break,
            };
            self.pos += 1;
            let rhs = self.unary()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<Expr, EvalError> {
        match self.peek() {
            Some(Token::Minus) => {
                self.pos += 1;
                Ok(Expr::neg(self.unary()?))
            }
            Some(Token::Plus) => {
                self.pos += 1;
                self.unary()
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<Expr, EvalError> {
        let base = self.atom()?;
        if self.peek() == Some(&Token::Power) {
            self.pos += 1;
            // Right-associative; the exponent may carry a sign.
            let exponent = self.unary()?;
            return Ok(Expr::binary(BinaryOp::Pow, base, exponent));
        }
        Ok(base)
    }

    fn atom(&mut self) -> Result<Expr, EvalError> {
        match self.advance() {
            Some(Token::Number(n)) => Ok(Expr::Num(n)),
            Some(Token::Imaginary(n)) => Ok(Expr::Imag(n)),
            Some(Token::Ident(name)) => {
                if self.peek() == Some(&Token::LParen) {
                    self.pos += 1;
                    let args = self.arguments()?;
                    self.expect(Token::RParen, "')' after function arguments")?;
                    Ok(Expr::Call(name, args))
                } else {
                    Ok(Expr::Var(name))
                }
            }
            Some(Token::LParen) => {
                let expr = self.expression()?;
                self.expect(Token::RParen, "')'")?;
                Ok(expr)
            }
            Some(other) => Err(EvalError::Syntax(format!("unexpected token {:?}", other))),
            None => Err(EvalError::Syntax("unexpected end of expression".to_string())),
        }
    }

    fn arguments(&mut self) -> Result<Vec<Expr>, EvalError> {
        let mut args = Vec::new();
        if self.peek() == Some(&Token::RParen) {
            return Ok(args);
        }
        loop {
            args.push(self.expression()?);
            if self.peek() == Some(&Token::Comma) {
                self.pos += 1;
            } else {
                return Ok(args);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ast::UnaryOp;

    #[test]
    fn test_precedence() {
        let expr = parse("2 + 3*4").unwrap();
        assert_eq!(expr.to_string(), "2 + 3*4");
    }

    #[test]
    fn test_power_binds_tighter_than_unary_minus() {
        let expr = parse("-2**2").unwrap();
        assert!(matches!(expr, Expr::Unary(UnaryOp::Neg, _)));
    }

    #[test]
    fn test_power_right_associative() {
        let expr = parse("2**3**2").unwrap();
        assert_eq!(expr.to_string(), "2**3**2");
        // 2**(3**2), not (2**3)**2
        if let Expr::Binary(BinaryOp::Pow, _, rhs) = expr {
            assert!(matches!(*rhs, Expr::Binary(BinaryOp::Pow, _, _)));
        } else {
            panic!("expected power at the root");
        }
    }

    #[test]
    fn test_signed_exponent() {
        assert!(parse("2**-3").is_ok());
    }

    #[test]
    fn test_function_call() {
        let expr = parse("atan2(1, 2)").unwrap();
        assert!(matches!(expr, Expr::Call(ref name, ref args) if name == "atan2" && args.len() == 2));
    }

    #[test]
    fn test_double_minus_from_substitution() {
        // "1--5" appears when a reference resolves to a negative number.
        let expr = parse("1--5").unwrap();
        assert_eq!(expr.to_string(), "1 - (-5)");
    }

    #[test]
    fn test_rejects_trailing_garbage() {
        assert!(matches!(parse("1 2"), Err(EvalError::Syntax(_))));
        assert!(matches!(parse("(1"), Err(EvalError::Syntax(_))));
    }
}
