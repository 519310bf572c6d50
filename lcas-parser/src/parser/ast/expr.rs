use crate::consts::Constant;
use super::op::BinOpKind;
use std::ops::{Add, Div, Mul, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node of an expression tree.
///
/// Each node owns its children; trees are never shared or cyclic.
///
/// # Equality
///
/// The [`PartialEq`] implementation is **structural**: two nodes are equal if they have the same
/// shape, the same operators and names, and equal numbers. There is no notion of mathematical
/// equality, so `x + 1` and `1 + x` are different, and a [`Expr::Number`] carrying the value of
/// [`crate::consts::PI`] is not equal to [`Expr::Constant`] with [`Constant::Pi`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A number literal, such as `2` or `0.5`.
    Number(f64),

    /// A named constant, `pi` or `e`.
    Constant(Constant),

    /// A single-letter variable, such as `x`.
    Variable(char),

    /// A binary operation, such as `x + 1`.
    Binary {
        op: BinOpKind,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },

    /// A function applied to one argument, such as `sin(x)`.
    ///
    /// Calls to names the engine does not know, such as `foo(x)`, use this same variant.
    Call {
        name: String,
        arg: Box<Expr>,
    },
}

impl Expr {
    /// Creates a binary operation node.
    pub fn binary(op: BinOpKind, lhs: Expr, rhs: Expr) -> Self {
        Self::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// Creates the node `base^exp`.
    pub fn pow(base: Expr, exp: Expr) -> Self {
        Self::binary(BinOpKind::Exp, base, exp)
    }

    /// Creates a call to the function with the given name.
    pub fn call(name: impl Into<String>, arg: Expr) -> Self {
        Self::Call {
            name: name.into(),
            arg: Box::new(arg),
        }
    }

    /// Returns the numeric value of the node if it is a number literal or a named constant.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Constant(c) => Some(c.value()),
            _ => None,
        }
    }

    /// Returns true if the node is the number literal with exactly the given value.
    ///
    /// Named constants never match, even if their value does.
    pub fn is_number(&self, value: f64) -> bool {
        matches!(self, Self::Number(n) if *n == value)
    }

    /// Returns the depth of the tree rooted at this node. A leaf has depth 1.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(self, 1)];
        while let Some((expr, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            match expr {
                Self::Number(_) | Self::Constant(_) | Self::Variable(_) => (),
                Self::Binary { lhs, rhs, .. } => {
                    stack.push((lhs, depth + 1));
                    stack.push((rhs, depth + 1));
                },
                Self::Call { arg, .. } => stack.push((arg, depth + 1)),
            }
        }
        max_depth
    }

    /// Returns true if every number literal in the tree is finite.
    pub fn is_finite(&self) -> bool {
        let mut stack = vec![self];
        while let Some(expr) = stack.pop() {
            match expr {
                Self::Number(n) if !n.is_finite() => return false,
                Self::Number(_) | Self::Constant(_) | Self::Variable(_) => (),
                Self::Binary { lhs, rhs, .. } => {
                    stack.push(lhs);
                    stack.push(rhs);
                },
                Self::Call { arg, .. } => stack.push(arg),
            }
        }
        true
    }
}

/// Builds the node `lhs + rhs`. No simplification is performed.
impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::binary(BinOpKind::Add, self, rhs)
    }
}

/// Builds the node `lhs - rhs`. No simplification is performed.
impl Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Self) -> Self::Output {
        Expr::binary(BinOpKind::Sub, self, rhs)
    }
}

/// Builds the node `lhs * rhs`. No simplification is performed.
impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::binary(BinOpKind::Mul, self, rhs)
    }
}

/// Builds the node `lhs / rhs`. No simplification is performed.
impl Div for Expr {
    type Output = Expr;

    fn div(self, rhs: Self) -> Self::Output {
        Expr::binary(BinOpKind::Div, self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operators_build_nodes() {
        let expr = Expr::Number(1.0) + Expr::Variable('x');
        assert_eq!(expr, Expr::Binary {
            op: BinOpKind::Add,
            lhs: Box::new(Expr::Number(1.0)),
            rhs: Box::new(Expr::Variable('x')),
        });
    }

    #[test]
    fn constants_are_numeric() {
        assert_eq!(Expr::Constant(Constant::E).as_number(), Some(crate::consts::E));
        assert!(!Expr::Constant(Constant::Pi).is_number(crate::consts::PI));
        assert_eq!(Expr::Variable('x').as_number(), None);
    }

    #[test]
    fn depth() {
        let x = || Expr::Variable('x');
        assert_eq!(x().depth(), 1);
        assert_eq!(Expr::call("sin", x() * (x() + x())).depth(), 4);
    }

    #[test]
    fn finite() {
        assert!((Expr::Number(1.0) / Expr::Number(0.0)).is_finite());
        assert!(!Expr::call("ln", Expr::Number(f64::INFINITY)).is_finite());
        assert!(!Expr::Number(f64::NAN).is_finite());
    }
}
