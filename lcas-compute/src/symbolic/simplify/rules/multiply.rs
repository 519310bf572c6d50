//! Simplification rules for expressions involving multiplication.

use crate::symbolic::{simplify::step::Step, step_collector::StepCollector};
use lcas_parser::parser::ast::Expr;

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if lhs.is_number(0.0) || rhs.is_number(0.0) {
        step_collector.push(Step::MultiplyZero);
        Some(Expr::Number(0.0))
    } else {
        None
    }
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = if lhs.is_number(1.0) {
        rhs.clone()
    } else if rhs.is_number(1.0) {
        lhs.clone()
    } else {
        return None;
    };

    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// `2*3 = 6`, where either operand may also be a named constant
pub fn fold_mul(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let product = lhs.as_number()? * rhs.as_number()?;
    step_collector.push(Step::FoldMul);
    Some(Expr::Number(product))
}

/// Applies all multiplication rules, identities first (see [`super::add::all`]).
pub fn all(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    multiply_zero(lhs, rhs, step_collector)
        .or_else(|| multiply_one(lhs, rhs, step_collector))
        .or_else(|| fold_mul(lhs, rhs, step_collector))
}
