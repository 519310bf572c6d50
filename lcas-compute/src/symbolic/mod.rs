//! Symbolic manipulation of expression trees.
//!
//! Both operations here work on the [`Expr`](lcas_parser::parser::ast::Expr) tree produced by
//! the parser and return a new tree; the input is never modified.
//!
//! - [`derivative()`] applies the differentiation rules syntactically, producing a larger and
//!   unsimplified tree.
//! - [`simplify()`] performs one bottom-up pass of constant folding and identity rewriting.
//!   Callers that want more than one pass use [`simplify_passes`].
//!
//! ```
//! use lcas_compute::symbolic::{derivative, simplify_passes};
//! use lcas_parser::parser::Parser;
//!
//! let expr = Parser::new("x^3").unwrap().parse().unwrap();
//! let diffed = derivative(&expr, "x");
//! assert_eq!(diffed.to_string(), "3*x^2*1");
//!
//! let simplified = simplify_passes(&diffed, 4, &mut ());
//! assert_eq!(simplified.to_string(), "3*x^2");
//! ```

pub mod derivative;
pub mod simplify;
pub mod step_collector;

pub use derivative::derivative;
pub use simplify::{simplify, simplify_passes, simplify_with_steps, DEFAULT_PASSES};
pub use step_collector::StepCollector;
