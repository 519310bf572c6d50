use ariadne::Fmt;
use lcas_attrs::ErrorKind;
use lcas_error::EXPR;

/// A run of digits and decimal points that is not a valid number, such as `1.2.3`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid number",
    labels = [format!("`{}` is not a number", lexeme)],
    help = format!("a number can contain {}", "at most one decimal point".fg(EXPR)),
)]
pub struct InvalidNumber {
    /// The lexeme that could not be read as a number.
    pub lexeme: String,
}

/// The expression is nested more deeply than the engine supports.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expression is nested too deeply",
    labels = ["this expression"],
    help = format!("expressions can be nested at most {} levels deep", max_depth),
)]
pub struct NestingTooDeep {
    /// The maximum supported depth.
    pub max_depth: usize,
}
