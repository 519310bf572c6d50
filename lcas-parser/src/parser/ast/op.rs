use crate::tokenizer::Operator;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The binary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
    Exp,
}

impl BinOpKind {
    /// Returns the binary operation written with the given operator token, if there is one.
    pub fn from_operator(op: Operator) -> Option<Self> {
        match op {
            Operator::Add => Some(Self::Add),
            Operator::Sub => Some(Self::Sub),
            Operator::Mul => Some(Self::Mul),
            Operator::Div => Some(Self::Div),
            Operator::Exp => Some(Self::Exp),
            Operator::OpenParen | Operator::CloseParen | Operator::Comma => None,
        }
    }

    /// Returns the character the operation is written as.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Exp => '^',
        }
    }

    /// Returns true if the operation separates terms (`+` and `-`).
    pub fn is_term(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }
}

impl fmt::Display for BinOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
