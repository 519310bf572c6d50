pub mod ast;
pub mod error;
pub mod fmt;

use ast::{BinOpKind, Expr};
use error::{kind, Error};
use log::{debug, trace};
use super::tokenizer::{tokenize, Operator, Token};

/// The maximum depth of the tree the parser produces.
///
/// Differentiating, simplifying and formatting all recurse once per level of the tree.
pub const MAX_DEPTH: usize = 1000;

/// The maximum number of nesting levels the parser accepts. Each parenthesized group, function
/// argument and `^` exponent is one level.
pub const MAX_NESTING: usize = 500;

/// An operator-precedence parser for the expression language.
///
/// The grammar, from lowest to highest precedence:
///
/// ```text
/// expr  := term (('+'|'-') term)*
/// term  := power (('*'|'/') power)*
/// power := atom ('^' power)?
/// atom  := NUMBER
///        | NUMBER VARIABLE
///        | VARIABLE
///        | FUNCTION '(' expr ')'
///        | '(' expr ')'
/// ```
///
/// The parser is deliberately lenient. Closing parentheses are consumed only if present, any
/// token that cannot start an atom is read as the number `0`, and so is the end of the input.
/// Tokens remaining after the top-level expression are ignored. The only failures are input
/// nested more than [`MAX_NESTING`] levels deep, and a tree deeper than [`MAX_DEPTH`].
#[derive(Debug, Clone)]
pub struct Parser {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// The number of parenthesized groups and exponents currently being parsed.
    depth: usize,
}

impl Parser {
    /// Create a new parser for the given source, which is normalized and tokenized first.
    pub fn new(source: &str) -> Result<Self, Error> {
        Ok(Self::from_tokens(tokenize(source)?))
    }

    /// Create a new parser over an existing token sequence.
    pub fn from_tokens(tokens: impl Into<Box<[Token]>>) -> Self {
        Self {
            tokens: tokens.into(),
            cursor: 0,
            depth: 0,
        }
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    /// Returns the next token to be parsed, then advances the cursor. Returns [`None`] if there
    /// are no more tokens.
    pub fn next_token(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(token)
    }

    /// Returns the tokens that have not been consumed yet.
    pub fn remaining(&self) -> &[Token] {
        self.tokens.get(self.cursor..).unwrap_or_default()
    }

    /// Returns the operator at the cursor, if the current token is one.
    fn current_operator(&self) -> Option<Operator> {
        self.current_token().and_then(Token::operator)
    }

    /// Advances past the current token if it is the given operator.
    fn eat_operator(&mut self, op: Operator) -> bool {
        if self.current_operator() == Some(op) {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Returns the binary operation at the cursor if it is one of the given operations, advancing
    /// past it.
    fn eat_binary_op(&mut self, ops: &[BinOpKind]) -> Option<BinOpKind> {
        let op = self.current_operator().and_then(BinOpKind::from_operator)?;
        if ops.contains(&op) {
            self.cursor += 1;
            Some(op)
        } else {
            None
        }
    }

    /// Runs `f` one nesting level deeper, failing if that exceeds [`MAX_NESTING`].
    fn nested<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Self) -> Result<T, Error>,
    {
        if self.depth >= MAX_NESTING {
            return Err(Error::new(Vec::new(), kind::NestingTooDeep { max_depth: MAX_NESTING }));
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Parses one expression from the token stream. Tokens after the expression are left
    /// unconsumed and ignored.
    pub fn parse(&mut self) -> Result<Expr, Error> {
        let expr = self.parse_expr()?;
        if expr.depth() > MAX_DEPTH {
            return Err(Error::new(Vec::new(), kind::NestingTooDeep { max_depth: MAX_DEPTH }));
        }

        if !self.remaining().is_empty() {
            trace!("ignoring trailing tokens {:?}", self.remaining());
        }
        debug!("parsed {}", expr);
        Ok(expr)
    }

    /// `expr := term (('+'|'-') term)*`
    fn parse_expr(&mut self) -> Result<Expr, Error> {
        let mut lhs = self.parse_term()?;
        while let Some(op) = self.eat_binary_op(&[BinOpKind::Add, BinOpKind::Sub]) {
            let rhs = self.parse_term()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    /// `term := power (('*'|'/') power)*`
    fn parse_term(&mut self) -> Result<Expr, Error> {
        let mut lhs = self.parse_power()?;
        while let Some(op) = self.eat_binary_op(&[BinOpKind::Mul, BinOpKind::Div]) {
            let rhs = self.parse_power()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    /// `power := atom ('^' power)?`, which makes `^` right-associative.
    fn parse_power(&mut self) -> Result<Expr, Error> {
        let base = self.parse_atom()?;
        if self.eat_operator(Operator::Exp) {
            let exp = self.nested(Self::parse_power)?;
            Ok(Expr::pow(base, exp))
        } else {
            Ok(base)
        }
    }

    /// Parses a number, variable, function call, or parenthesized expression.
    fn parse_atom(&mut self) -> Result<Expr, Error> {
        let Some(token) = self.next_token() else {
            return Ok(Expr::Number(0.0));
        };

        match token {
            Token::Function(name) => {
                // the token after the name stands in for the opening parenthesis, whatever it is
                self.next_token();
                let arg = self.nested(Self::parse_expr)?;
                self.eat_operator(Operator::CloseParen);
                Ok(Expr::call(name, arg))
            },
            Token::Operator(Operator::OpenParen) => {
                let expr = self.nested(Self::parse_expr)?;
                self.eat_operator(Operator::CloseParen);
                Ok(expr)
            },
            Token::Number(n) => Ok(self.implicit_mult(Expr::Number(n))),
            Token::Constant(c) => Ok(self.implicit_mult(Expr::Constant(c))),
            Token::Variable(var) => Ok(Expr::Variable(var)),
            Token::Operator(_) => Ok(Expr::Number(0.0)),
        }
    }

    /// Multiplies a numeric atom by the variable directly after it, if there is one, so `5x` is
    /// read as `5*x`. No other adjacency is treated as multiplication.
    fn implicit_mult(&mut self, value: Expr) -> Expr {
        if let Some(&Token::Variable(var)) = self.current_token() {
            self.cursor += 1;
            value * Expr::Variable(var)
        } else {
            value
        }
    }
}
