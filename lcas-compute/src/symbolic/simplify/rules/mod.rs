//! Rewriting rules applied by the simplifier.
//!
//! Each rule looks at the already-simplified operands of one binary operation and returns
//! [`Some`] with the replacement node if it applies. Only `+` and `*` have rules; `-`, `/` and
//! `^` are left as they are, even when both operands are numbers.

pub mod add;
pub mod multiply;

use crate::symbolic::step_collector::StepCollector;
use lcas_parser::parser::ast::{BinOpKind, Expr};
use super::step::Step;

/// Applies the first matching rule for the operation `lhs op rhs`.
pub fn all(
    op: BinOpKind,
    lhs: &Expr,
    rhs: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr> {
    match op {
        BinOpKind::Add => add::all(lhs, rhs, step_collector),
        BinOpKind::Mul => multiply::all(lhs, rhs, step_collector),
        BinOpKind::Sub | BinOpKind::Div | BinOpKind::Exp => None,
    }
}
