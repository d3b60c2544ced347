//! Exact parser for learner-entered numbers.
//!
//! Accepts integers, decimals and fractions (`5`, `-6.66`, `20/3`) as well as
//! small arithmetic expressions built from `+ - * /`, parentheses and unary
//! signs (`(1 + 2)/3`, `-2 * 4/3`). Everything is evaluated in exact,
//! unbounded rational arithmetic so that `20/3` stays `20/3` instead of
//! `6.666...`, and a long decimal such as `1.6666666666666666667` is compared
//! digit for digit.
//!
//! Grammar:
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('+' | '-') unary | primary
//! primary := number | '(' expr ')'
//! number  := digits ['.' digits] | '.' digits
//! ```

use log::debug;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use crate::errors::{ LabError, LabResult };
use crate::models::rational::Rational;

/// Limit on unary/parenthesis nesting
const MAX_DEPTH: usize = 64;

/// Parse `input` as an exact number or arithmetic expression of any size
pub fn parse_exact(input: &str) -> LabResult<BigRational> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(LabError::Parse("empty input".to_string()));
    }
    let mut parser = ExpressionParser::new(trimmed);
    let value = parser.expr()?;
    parser.skip_whitespace();
    if let Some(c) = parser.peek() {
        return Err(LabError::Parse(format!("unexpected '{}' at position {}", c, parser.pos + 1)));
    }
    debug!("Parsed {:?} as {}", trimmed, value);
    Ok(value)
}

/// Like `parse_exact`, for values that must fit a `Rational`
pub fn parse_number(input: &str) -> LabResult<Rational> {
    let value = parse_exact(input)?;
    Rational::from_big(&value).ok_or_else(|| LabError::Overflow(input.trim().to_string()))
}

struct ExpressionParser {
    chars: Vec<char>,
    pos: usize,
    depth: usize,
}

impl ExpressionParser {
    fn new(input: &str) -> Self {
        ExpressionParser { chars: input.chars().collect(), pos: 0, depth: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    /// Next non-whitespace character, consumed only if it is one of `ops`
    fn eat_operator(&mut self, ops: &[char]) -> Option<char> {
        self.skip_whitespace();
        let c = self.peek().filter(|c| ops.contains(c))?;
        self.pos += 1;
        Some(c)
    }

    fn expr(&mut self) -> LabResult<BigRational> {
        let mut value = self.term()?;
        while let Some(op) = self.eat_operator(&['+', '-']) {
            let rhs = self.term()?;
            value = if op == '+' { value + rhs } else { value - rhs };
        }
        Ok(value)
    }

    fn term(&mut self) -> LabResult<BigRational> {
        let mut value = self.unary()?;
        while let Some(op) = self.eat_operator(&['*', '/']) {
            let rhs = self.unary()?;
            if op == '*' {
                value = value * rhs;
            } else {
                if rhs.is_zero() {
                    return Err(LabError::Parse("division by zero".to_string()));
                }
                value = value / rhs;
            }
        }
        Ok(value)
    }

    fn unary(&mut self) -> LabResult<BigRational> {
        match self.eat_operator(&['+', '-']) {
            Some('-') => Ok(-self.nested(Self::unary)?),
            Some(_) => self.nested(Self::unary),
            None => self.primary(),
        }
    }

    fn primary(&mut self) -> LabResult<BigRational> {
        self.skip_whitespace();
        match self.peek() {
            Some('(') => {
                self.pos += 1;
                let value = self.nested(Self::expr)?;
                if self.eat_operator(&[')']).is_none() {
                    return Err(LabError::Parse("missing closing parenthesis".to_string()));
                }
                Ok(value)
            }
            Some(c) if c.is_ascii_digit() || c == '.' => self.number(),
            Some(c) => Err(LabError::Parse(format!("unexpected '{}' at position {}", c, self.pos + 1))),
            None => Err(LabError::Parse("unexpected end of input".to_string())),
        }
    }

    fn nested(&mut self, rule: fn(&mut Self) -> LabResult<BigRational>) -> LabResult<BigRational> {
        if self.depth >= MAX_DEPTH {
            return Err(LabError::Parse("expression is nested too deeply".to_string()));
        }
        self.depth += 1;
        let value = rule(self);
        self.depth -= 1;
        value
    }

    fn number(&mut self) -> LabResult<BigRational> {
        let start = self.pos;
        let mut digits = String::new();
        let mut fraction_digits = 0usize;
        let mut seen_point = false;

        while let Some(c) = self.peek() {
            if c == '.' {
                if seen_point {
                    return Err(LabError::Parse(format!("unexpected '.' at position {}", self.pos + 1)));
                }
                seen_point = true;
            } else if c.is_ascii_digit() {
                digits.push(c);
                if seen_point {
                    fraction_digits += 1;
                }
            } else {
                break;
            }
            self.pos += 1;
        }

        if digits.is_empty() {
            return Err(LabError::Parse(format!("'{}' is not a number", self.slice(start))));
        }
        let numer: BigInt = digits
            .parse()
            .map_err(|_| LabError::Parse(format!("'{}' is not a number", self.slice(start))))?;
        let denom = num_traits::pow(BigInt::from(10), fraction_digits);
        Ok(BigRational::new(numer, denom))
    }

    fn slice(&self, start: usize) -> String {
        self.chars[start..self.pos.max(start)].iter().collect()
    }
}
