//! Symbolic differentiation, simplification and rendering for `lcas`.
//!
//! The entry point is [`evaluate`], which takes one line of user input and returns one line of
//! output: the rendered result, or the sentinel [`SYNTAX_ERROR`].
//!
//! ```
//! use lcas_compute::evaluate;
//!
//! // a bare expression is differentiated with respect to `x`
//! assert_eq!(evaluate("x^2"), "2*x^1");
//! assert_eq!(evaluate("sin(x)"), "cos(x)");
//!
//! // the variable can be named after a comma
//! assert_eq!(evaluate("x^2, y"), "0");
//!
//! // `expand(...)` only simplifies
//! assert_eq!(evaluate("expand(x + 0)"), "x");
//! ```
//!
//! Every stage is a pure function, so [`evaluate`] can be called from any number of threads at
//! once.

pub mod error;
pub mod eval;
pub mod query;
pub mod render;
pub mod symbolic;

pub use eval::{evaluate, evaluate_with, try_evaluate, EvalOptions, EvalOptionsBuilder, SYNTAX_ERROR};
pub use query::{Mode, Query};
