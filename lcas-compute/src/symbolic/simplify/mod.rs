//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, which performs a single bottom-up pass over
//! an expression: the children of a node are simplified first, then the rewriting rules in
//! [`rules`] are tried on the node itself. A rule only ever returns one of its already-simplified
//! operands or a new number, so a node never needs to be revisited within a pass.
//!
//! The evaluation pipeline still runs a **fixed** number of passes with [`simplify_passes`]
//! rather than iterating until nothing changes, and the pass count is configurable.

pub mod rules;
pub mod step;

use log::trace;
use lcas_parser::parser::ast::Expr;
use step::Step;
use super::step_collector::StepCollector;

/// The number of passes the evaluation pipeline runs by default.
pub const DEFAULT_PASSES: usize = 4;

/// Base implementation of one simplification pass.
fn inner_simplify(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    match expr {
        Expr::Number(_) | Expr::Constant(_) | Expr::Variable(_) => expr.clone(),
        Expr::Call { name, arg } => Expr::call(name.clone(), inner_simplify(arg, step_collector)),
        Expr::Binary { op, lhs, rhs } => {
            let lhs = inner_simplify(lhs, step_collector);
            let rhs = inner_simplify(rhs, step_collector);
            rules::all(*op, &lhs, &rhs, step_collector)
                .unwrap_or_else(|| Expr::binary(*op, lhs, rhs))
        },
    }
}

/// Performs one simplification pass over the given expression.
pub fn simplify(expr: &Expr) -> Expr {
    inner_simplify(expr, &mut ())
}

/// Performs one simplification pass over the given expression. The steps taken by the
/// simplifier are also collected and returned, in the order they were applied.
pub fn simplify_with_steps(expr: &Expr) -> (Expr, Vec<Step>) {
    let mut steps = Vec::new();
    let expr = inner_simplify(expr, &mut steps);
    (expr, steps)
}

/// Performs exactly `passes` simplification passes over the given expression, reporting every
/// step to the given collector.
pub fn simplify_passes(
    expr: &Expr,
    passes: usize,
    step_collector: &mut dyn StepCollector<Step>,
) -> Expr {
    let mut expr = expr.clone();
    for pass in 1..=passes {
        expr = inner_simplify(&expr, step_collector);
        trace!("after simplification pass {}: {}", pass, expr);
    }
    expr
}
