use crate::consts::Constant;
use logos::Logos;
use std::fmt;

/// The different kinds of lexemes recognized by the scanner.
///
/// These are the raw lexical classes; [`Token`] is the classified form handed to the parser.
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    #[regex(r"[0-9][0-9.]*")]
    Number,

    #[regex(r"\p{Alphabetic}+")]
    Letters,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("^")]
    Exp,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token(",")]
    Comma,

    #[regex(r".", priority = 0)]
    Symbol,
}

impl TokenKind {
    /// Returns the operator this kind of lexeme represents, if any.
    pub fn operator(self) -> Option<Operator> {
        match self {
            Self::Add => Some(Operator::Add),
            Self::Sub => Some(Operator::Sub),
            Self::Mul => Some(Operator::Mul),
            Self::Div => Some(Operator::Div),
            Self::Exp => Some(Operator::Exp),
            Self::OpenParen => Some(Operator::OpenParen),
            Self::CloseParen => Some(Operator::CloseParen),
            Self::Comma => Some(Operator::Comma),
            Self::Number | Self::Letters | Self::Symbol => None,
        }
    }
}

/// A single-character operator or punctuation token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Exp,
    OpenParen,
    CloseParen,
    Comma,
}

impl Operator {
    /// Returns the character this operator is written as.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Exp => '^',
            Self::OpenParen => '(',
            Self::CloseParen => ')',
            Self::Comma => ',',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A token produced by the tokenizer.
///
/// Tokens do not remember where they came from in the source.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A number literal, such as `2` or `0.5`.
    Number(f64),

    /// A named constant, `pi` or `e`.
    Constant(Constant),

    /// A single-letter variable, such as `x`.
    Variable(char),

    /// A multi-letter name. Any such name is treated as a function, whether or not the engine
    /// knows how to differentiate it.
    Function(String),

    /// One of `+ - * / ^ ( ) ,`.
    Operator(Operator),
}

impl Token {
    /// Returns the operator carried by this token, if it is one.
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Self::Operator(op) => Some(*op),
            _ => None,
        }
    }

    /// Returns true if the token is a number or a named constant.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Number(_) | Self::Constant(_))
    }
}
