//! Tokenizer and parser for the expression language understood by `lcas`.
//!
//! Input text is first normalized (see [`tokenizer::normalize`]), then scanned into a flat
//! sequence of [`Token`](tokenizer::Token)s, which the [`Parser`](parser::Parser) turns into an
//! [`Expr`](parser::ast::Expr) tree.
//!
//! ```
//! use lcas_parser::parser::{ast::Expr, Parser};
//!
//! let mut parser = Parser::new("5 * x^2").unwrap();
//! let expr = parser.parse().unwrap();
//!
//! assert_eq!(expr, Expr::Number(5.0) * Expr::pow(Expr::Variable('x'), Expr::Number(2.0)));
//! assert_eq!(expr.to_string(), "5*x^2");
//! ```

pub mod consts;
pub mod parser;
pub mod tokenizer;
