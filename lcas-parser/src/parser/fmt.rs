//! Infix formatting of expression trees.
//!
//! The output is meant to be read back by the parser. Sums and differences are always wrapped in
//! parentheses; products, quotients and powers never are. This is enough to round-trip any tree
//! built from parsed input, because `*`, `/` and `^` bind tighter than `+` and `-`.

use std::fmt::{Display, Formatter, Result};
use super::ast::Expr;

/// The number of decimal places non-integral numbers are rounded to.
pub const DECIMAL_PLACES: usize = 4;

/// Formats a number literal.
///
/// Integral values are written without a fractional part (and `-0` is written as `0`). Other
/// values are rounded to [`DECIMAL_PLACES`] places and written without trailing zeros; if the
/// rounding produced an integral value, it is written with a trailing `.0` so that, for example,
/// `2.99999` is written as `3.0`.
///
/// Rounding works on the exact binary value, so `2.00025`, which is stored as slightly less than
/// that, rounds down to `2.0002`.
pub fn fmt_number(f: &mut Formatter, n: f64) -> Result {
    if !n.is_finite() {
        write!(f, "{}", n)
    } else if n.fract() == 0.0 {
        if n == 0.0 {
            write!(f, "0")
        } else {
            write!(f, "{}", n)
        }
    } else {
        let rounded = format!("{:.*}", DECIMAL_PLACES, n);
        let trimmed = rounded.trim_end_matches('0');
        match trimmed.strip_suffix('.') {
            Some(integral) => write!(f, "{}.0", integral),
            None => write!(f, "{}", trimmed),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Self::Number(n) => fmt_number(f, *n),
            Self::Constant(c) => write!(f, "{}", c),
            Self::Variable(v) => write!(f, "{}", v),
            Self::Binary { op, lhs, rhs } if op.is_term() => write!(f, "({}{}{})", lhs, op, rhs),
            Self::Binary { op, lhs, rhs } => write!(f, "{}{}{}", lhs, op, rhs),
            Self::Call { name, arg } => write!(f, "{}({})", name, arg),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::{consts::Constant, parser::Parser};

    fn num(n: f64) -> String {
        Expr::Number(n).to_string()
    }

    #[test]
    fn integers() {
        assert_eq!(num(2.0), "2");
        assert_eq!(num(-17.0), "-17");
        assert_eq!(num(-0.0), "0");
        assert_eq!(num(1e21), "1000000000000000000000");
    }

    #[test]
    fn decimals() {
        assert_eq!(num(0.5), "0.5");
        assert_eq!(num(1.0 / 3.0), "0.3333");
        assert_eq!(num(-2.71828), "-2.7183");
        assert_eq!(num(2.99999), "3.0");
        assert_eq!(num(-0.00001), "-0.0");
    }

    #[test]
    fn decimals_round_binary_value() {
        assert_eq!(num(2.00025), "2.0002");
        assert_eq!(num(1.00005), "1.0001");
        assert_eq!(num(0.00015), "0.0001");
    }

    #[test]
    fn constants() {
        assert_eq!(Expr::Constant(Constant::Pi).to_string(), "pi");
        assert_eq!(Expr::Constant(Constant::E).to_string(), "e");

        // a plain number with the same value is still a number
        assert_eq!(num(crate::consts::PI), "3.1416");
    }

    #[test]
    fn fmt_display() {
        let expr = Parser::new("3x + 6").unwrap().parse().unwrap();
        assert_eq!(expr.to_string(), "(3*x+6)");
    }

    #[test]
    fn fmt_display_2() {
        let expr = Parser::new("sin(x)^2 / (1 - y) * 2").unwrap().parse().unwrap();
        assert_eq!(expr.to_string(), "sin(x)^2/(1-y)*2");
    }

    #[test]
    fn reparse() {
        let expr = Parser::new("(a + b) * c ^ (d - 1)").unwrap().parse().unwrap();
        let reparsed = Parser::new(&expr.to_string()).unwrap().parse().unwrap();
        assert_eq!(expr, reparsed);
    }
}
