//! Simplification rules for expressions involving addition.

use crate::symbolic::{simplify::step::Step, step_collector::StepCollector};
use lcas_parser::parser::ast::Expr;

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = if lhs.is_number(0.0) {
        rhs.clone()
    } else if rhs.is_number(0.0) {
        lhs.clone()
    } else {
        return None;
    };

    step_collector.push(Step::AddZero);
    Some(opt)
}

/// `2+3 = 5`, where either operand may also be a named constant
pub fn fold_add(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let sum = lhs.as_number()? + rhs.as_number()?;
    step_collector.push(Step::FoldAdd);
    Some(Expr::Number(sum))
}

/// Applies all addition rules.
///
/// Identities are tried before folding, so `pi+0` stays `pi`.
pub fn all(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    add_zero(lhs, rhs, step_collector)
        .or_else(|| fold_add(lhs, rhs, step_collector))
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use pretty_assertions::assert_eq;
    use super::*;
    use lcas_parser::consts::Constant;

    #[test]
    fn zero_on_either_side() {
        let x = Expr::Variable('x');
        let zero = Expr::Number(0.0);
        let mut steps = Vec::new();

        assert_eq!(all(&zero, &x, &mut steps), Some(x.clone()));
        assert_eq!(all(&x, &zero, &mut steps), Some(x.clone()));
        assert_eq!(steps, vec![Step::AddZero, Step::AddZero]);
    }

    #[test]
    fn fold() {
        let mut steps = Vec::new();
        assert_eq!(all(&Expr::Number(2.0), &Expr::Number(3.5), &mut steps), Some(Expr::Number(5.5)));
        assert_eq!(steps, vec![Step::FoldAdd]);
    }

    #[test]
    fn fold_constant() {
        let Some(Expr::Number(n)) = all(&Expr::Constant(Constant::Pi), &Expr::Number(1.0), &mut ()) else {
            panic!("expected a number");
        };
        assert_float_absolute_eq!(n, 4.1415926535, 1e-12);
    }

    #[test]
    fn constant_plus_zero_stays_constant() {
        let pi = Expr::Constant(Constant::Pi);
        assert_eq!(all(&pi, &Expr::Number(0.0), &mut ()), Some(pi));
    }

    #[test]
    fn no_rule() {
        let x = Expr::Variable('x');
        assert_eq!(all(&x, &Expr::Number(1.0), &mut ()), None);
        assert_eq!(all(&x, &x, &mut ()), None);
    }
}
