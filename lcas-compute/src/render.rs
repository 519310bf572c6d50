//! Turning a final expression into the line of text shown to the user.

use lcas_error::Error;
use lcas_parser::parser::ast::Expr;
use log::debug;
use crate::error::NonFiniteValue;

/// Renders the given expression as text.
///
/// This is the [`Display`](std::fmt::Display) output of the expression with the parentheses
/// around a top-level sum or difference removed. Only a pair that encloses the whole text is
/// removed, so `(x+1)*(x+2)` is kept as is rather than becoming `x+1)*(x+2`. Fails if the
/// expression contains a number that is infinite or NaN.
pub fn render(expr: &Expr) -> Result<String, Error> {
    if !expr.is_finite() {
        return Err(Error::new(Vec::new(), NonFiniteValue));
    }

    let text = expr.to_string();
    let output = strip_outer_parens(&text).to_string();
    debug!("rendered {}", output);
    Ok(output)
}

/// Removes one pair of parentheses from the ends of the given text, but only if the opening
/// parenthesis is closed by the final character. `(x+1)*(x-1)` is returned unchanged.
pub fn strip_outer_parens(text: &str) -> &str {
    let Some(inner) = text.strip_prefix('(').and_then(|s| s.strip_suffix(')')) else {
        return text;
    };

    let mut depth = 0usize;
    for c in inner.chars() {
        match c {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                // the first parenthesis closes early
                None => return text,
            },
            _ => (),
        }
    }

    inner
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use lcas_parser::parser::Parser;

    fn parse(source: &str) -> Expr {
        Parser::new(source).unwrap().parse().unwrap()
    }

    #[test]
    fn strips_top_level_sum() {
        assert_eq!(render(&parse("x + 1")).unwrap(), "x+1");
        assert_eq!(render(&parse("(x - 1) - 2")).unwrap(), "(x-1)-2");
    }

    #[test]
    fn keeps_other_parens() {
        assert_eq!(render(&parse("(x + 1) * (x - 1)")).unwrap(), "(x+1)*(x-1)");
        assert_eq!(render(&parse("(x + 1) * (x + 2)")).unwrap(), "(x+1)*(x+2)");
        assert_eq!(render(&parse("sin(x + 1)")).unwrap(), "sin((x+1))");
    }

    #[test]
    fn strip_outer_parens_balanced() {
        assert_eq!(strip_outer_parens("(a)"), "a");
        assert_eq!(strip_outer_parens("((a))"), "(a)");
        assert_eq!(strip_outer_parens("(a)+(b)"), "(a)+(b)");
        assert_eq!(strip_outer_parens("()"), "");
        assert_eq!(strip_outer_parens("("), "(");
        assert_eq!(strip_outer_parens("a"), "a");
    }

    #[test]
    fn non_finite() {
        assert!(render(&Expr::Number(f64::INFINITY)).is_err());
        assert!(render(&(Expr::Variable('x') * Expr::Number(f64::NAN))).is_err());
    }

    #[test]
    fn numbers() {
        assert_eq!(render(&Expr::Number(-0.0)).unwrap(), "0");
        assert_eq!(render(&Expr::Number(2.5)).unwrap(), "2.5");
    }
}
