//! Errors raised after parsing.

use lcas_attrs::ErrorKind;

/// A number in the result is infinite or not a number, which happens when constant folding
/// overflows.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "the result contains a number that is too large to display",
    labels = ["in this expression"],
    help = "constant folding overflowed while simplifying",
)]
pub struct NonFiniteValue;
