//! Rule-based symbolic differentiation.
//!
//! Rules are applied by matching on the shape of the tree; nothing is evaluated numerically and
//! no simplification happens here. Every variable other than the one being differentiated with
//! respect to is treated as a constant, so the result is a partial derivative.
//!
//! Differentiation never fails. Shapes without a rule, such as calls to unknown functions,
//! differentiate to `0`.

pub mod function;

use lcas_parser::parser::ast::{BinOpKind, Expr};

/// Returns true if the variable `v` is the variable named `var`.
fn is_var(v: char, var: &str) -> bool {
    let mut chars = var.chars();
    chars.next() == Some(v) && chars.next().is_none()
}

/// Produces the derivative of the given expression with respect to the variable named `var`.
///
/// A name that is not a single letter never matches a variable, so differentiating with respect
/// to it produces `0` everywhere.
pub fn derivative(f: &Expr, var: &str) -> Expr {
    match f {
        Expr::Number(_) | Expr::Constant(_) => Expr::Number(0.0),
        Expr::Variable(v) => {
            if is_var(*v, var) {
                Expr::Number(1.0)
            } else {
                Expr::Number(0.0)
            }
        },
        Expr::Binary { op, lhs, rhs } => binary(f, *op, lhs, rhs, var),
        Expr::Call { name, arg } => function::derivative(name, arg, var),
    }
}

/// Differentiates the binary operation `f = lhs op rhs`.
fn binary(f: &Expr, op: BinOpKind, lhs: &Expr, rhs: &Expr, var: &str) -> Expr {
    match op {
        BinOpKind::Add => derivative(lhs, var) + derivative(rhs, var),
        BinOpKind::Sub => derivative(lhs, var) - derivative(rhs, var),

        // (uv)' = u*v' + u'*v
        BinOpKind::Mul => {
            lhs.clone() * derivative(rhs, var) + derivative(lhs, var) * rhs.clone()
        },

        // (u/v)' = (u'*v - u*v') / v^2
        BinOpKind::Div => {
            (derivative(lhs, var) * rhs.clone() - lhs.clone() * derivative(rhs, var))
                / Expr::pow(rhs.clone(), Expr::Number(2.0))
        },

        BinOpKind::Exp => match rhs.as_number() {
            // power rule: (u^k)' = k * (u^(k-1) * u')
            Some(k) => rhs.clone() * (
                Expr::pow(lhs.clone(), Expr::Number(k - 1.0)) * derivative(lhs, var)
            ),

            // (a^u)' = a^u * ln(a), which is only the whole derivative when the base is constant
            // and the exponent's derivative is 1
            // NOTE: the u' factor and the term from a variable base are not produced
            None => f.clone() * Expr::call("ln", lhs.clone()),
        },
    }
}
