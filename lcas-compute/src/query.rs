//! Splitting a line of user input into the expression to work on and what to do with it.

use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The prefix that selects [`Mode::Expand`].
const EXPAND_PREFIX: &str = "expand(";

/// What the pipeline does with the parsed expression before simplifying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Mode {
    /// Differentiate the expression with respect to the query variable.
    Differentiate,

    /// Only simplify the expression.
    Expand,
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Differentiate => write!(f, "differentiate"),
            Self::Expand => write!(f, "expand"),
        }
    }
}

/// One line of user input, split into its parts.
///
/// The accepted forms are:
///
/// - `EXPR`, differentiated with respect to the default variable. A `'` is dropped, so `x^2'` is
///   the same as `x^2`.
/// - `EXPR, VAR` or `diff(EXPR, VAR)`, differentiated with respect to `VAR`.
/// - `expand(EXPR)`, simplified without differentiating.
///
/// Input is lowercased first, so `SIN(X)` and `sin(x)` are the same query.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Query {
    /// The expression text, not yet normalized.
    pub expr: String,

    /// What to do with the expression.
    pub mode: Mode,

    /// The name of the variable to differentiate with respect to.
    ///
    /// Variables in the expression are single letters, so a longer name matches none of them.
    pub var: String,
}

impl Query {
    /// Splits the given input, using `x` as the default variable.
    pub fn parse(input: &str) -> Self {
        Self::parse_with_default(input, 'x')
    }

    /// Splits the given input, using `default_var` if the input does not name a variable.
    pub fn parse_with_default(input: &str, default_var: char) -> Self {
        let raw = input.trim().to_lowercase();
        let mode = if raw.starts_with(EXPAND_PREFIX) {
            Mode::Expand
        } else {
            Mode::Differentiate
        };

        let mut var = default_var.to_string();
        let expr = if raw.contains(',') {
            // anything after a second comma is ignored
            let mut parts = raw.split(',');
            let expr = parts.next().unwrap_or_default().replace("diff(", "");
            let named = parts.next().unwrap_or_default().replace(')', "");
            let named = named.trim();
            if !named.is_empty() {
                var = named.to_string();
            }
            expr.trim().to_string()
        } else if mode == Mode::Expand {
            raw[EXPAND_PREFIX.len()..].trim_end_matches(')').to_string()
        } else {
            raw.replace('\'', "")
        };

        Self { expr, mode, var }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn query(expr: &str, mode: Mode, var: &str) -> Query {
        Query {
            expr: expr.to_string(),
            mode,
            var: var.to_string(),
        }
    }

    #[test]
    fn bare_expression() {
        assert_eq!(Query::parse("  x^2 + 1 "), query("x^2 + 1", Mode::Differentiate, "x"));
    }

    #[test]
    fn lowercased() {
        assert_eq!(Query::parse("SIN(X)"), query("sin(x)", Mode::Differentiate, "x"));
    }

    #[test]
    fn prime_dropped() {
        assert_eq!(Query::parse("x^3'"), query("x^3", Mode::Differentiate, "x"));
    }

    #[test]
    fn named_variable() {
        assert_eq!(Query::parse("x^2, y"), query("x^2", Mode::Differentiate, "y"));
        assert_eq!(Query::parse("diff(y^2, y)"), query("y^2", Mode::Differentiate, "y"));
        assert_eq!(Query::parse("diff(y^2, y ) "), query("y^2", Mode::Differentiate, "y"));
    }

    #[test]
    fn empty_variable_keeps_default() {
        assert_eq!(Query::parse("x^2,"), query("x^2", Mode::Differentiate, "x"));
        assert_eq!(Query::parse("diff(x^2, )"), query("x^2", Mode::Differentiate, "x"));
    }

    #[test]
    fn extra_parts_ignored() {
        assert_eq!(Query::parse("x*y, y, z"), query("x*y", Mode::Differentiate, "y"));
    }

    #[test]
    fn diff_without_comma_kept() {
        // only the comma form strips `diff(`
        assert_eq!(Query::parse("diff(x^2)"), query("diff(x^2)", Mode::Differentiate, "x"));
    }

    #[test]
    fn expand() {
        assert_eq!(Query::parse("expand(x + 0)"), query("x + 0", Mode::Expand, "x"));
        assert_eq!(Query::parse("Expand(sin(x))"), query("sin(x", Mode::Expand, "x"));
        assert_eq!(Query::parse("expand("), query("", Mode::Expand, "x"));
    }

    #[test]
    fn expand_with_comma() {
        assert_eq!(Query::parse("expand(x, y)"), query("expand(x", Mode::Expand, "y"));
    }

    #[test]
    fn default_variable() {
        assert_eq!(Query::parse_with_default("t^2", 't'), query("t^2", Mode::Differentiate, "t"));
        assert_eq!(Query::parse_with_default("t^2, x", 't'), query("t^2", Mode::Differentiate, "x"));
    }
}
