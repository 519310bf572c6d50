pub mod token;

use crate::{
    consts::{Constant, PI_MARKER},
    parser::error::{kind, Error},
};
use log::trace;
use logos::{Lexer, Logos};
use std::ops::Range;
pub use token::{Operator, Token, TokenKind};

/// Rewrites the input into the form the scanner expects.
///
/// The rewrites are applied in this order:
///
/// 1. all whitespace is removed
/// 2. `**` becomes `^`
/// 3. `e^` becomes `exp(`, so `e^x` is read as the call `exp(x)`
/// 4. `'` becomes `,x`
/// 5. `pi` and `PI` become the reserved letter [`PI_MARKER`]
pub fn normalize(input: &str) -> String {
    let marker = PI_MARKER.to_string();
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .replace("**", "^")
        .replace("e^", "exp(")
        .replace('\'', ",x")
        .replace("pi", &marker)
        .replace("PI", &marker)
}

/// Returns an iterator over the lexeme kinds produced by the scanner.
pub fn lex(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Normalizes the input with [`normalize`], then scans it into tokens.
pub fn tokenize(input: &str) -> Result<Box<[Token]>, Error> {
    tokenize_normalized(&normalize(input))
}

/// Scans already-normalized text into an owned array of tokens.
///
/// Characters that do not belong to any token are dropped without raising an error. The only
/// failure is a digit run that is not a valid number, such as `1.2.3`; its error points at the
/// run in the given text.
pub fn tokenize_normalized(source: &str) -> Result<Box<[Token]>, Error> {
    let mut lexer = lex(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        // characters the scanner does not recognize are dropped
        let Ok(kind) = result else {
            continue;
        };

        let token = match kind {
            TokenKind::Number => Token::Number(parse_number(lexer.slice(), lexer.span())?),
            TokenKind::Letters => classify_letters(lexer.slice()),
            TokenKind::Symbol => continue,
            other => match other.operator() {
                Some(op) => Token::Operator(op),
                None => continue,
            },
        };
        tokens.push(token);
    }

    trace!("scanned `{}` into {:?}", source, tokens);
    Ok(tokens.into_boxed_slice())
}

/// Parses the lexeme of a digit run.
fn parse_number(lexeme: &str, span: Range<usize>) -> Result<f64, Error> {
    lexeme.parse::<f64>().map_err(|_| {
        Error::new(vec![span], kind::InvalidNumber { lexeme: lexeme.to_owned() })
    })
}

/// Classifies a run of letters by its length alone; there is no registry of known names.
fn classify_letters(lexeme: &str) -> Token {
    let mut chars = lexeme.chars();
    match (chars.next(), chars.next()) {
        (Some(PI_MARKER), None) => Token::Constant(Constant::Pi),
        (Some('e'), None) => Token::Constant(Constant::E),
        (Some(letter), None) => Token::Variable(letter),
        _ => Token::Function(lexeme.to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Compares the tokens produced by the tokenizer to the expected tokens.
    fn compare_tokens<const N: usize>(input: &str, expected: [Token; N]) {
        let tokens = tokenize(input).unwrap();
        assert_eq!(&*tokens, &expected[..]);
    }

    #[test]
    fn normalize_rewrites() {
        assert_eq!(normalize(" x ** 2 "), "x^2");
        assert_eq!(normalize("e^x"), "exp(x");
        assert_eq!(normalize("x^2'"), "x^2,x");
        assert_eq!(normalize("2pi + PI"), "2π+π");
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 + 2",
            [
                Token::Number(1.0),
                Token::Operator(Operator::Add),
                Token::Number(2.0),
            ],
        );
    }

    #[test]
    fn letters_by_length() {
        compare_tokens(
            "sin(x)*foo",
            [
                Token::Function("sin".to_string()),
                Token::Operator(Operator::OpenParen),
                Token::Variable('x'),
                Token::Operator(Operator::CloseParen),
                Token::Operator(Operator::Mul),
                Token::Function("foo".to_string()),
            ],
        );
    }

    #[test]
    fn unicode_letters() {
        compare_tokens(
            "α^2*λx",
            [
                Token::Variable('α'),
                Token::Operator(Operator::Exp),
                Token::Number(2.0),
                Token::Operator(Operator::Mul),
                Token::Function("λx".to_string()),
            ],
        );
    }

    #[test]
    fn constants() {
        compare_tokens(
            "pi*e",
            [
                Token::Constant(Constant::Pi),
                Token::Operator(Operator::Mul),
                Token::Constant(Constant::E),
            ],
        );
    }

    #[test]
    fn e_inside_name_is_not_constant() {
        compare_tokens("exp", [Token::Function("exp".to_string())]);
    }

    #[test]
    fn exp_shorthand() {
        compare_tokens(
            "e^(2x)",
            [
                Token::Function("exp".to_string()),
                Token::Operator(Operator::OpenParen),
                Token::Operator(Operator::OpenParen),
                Token::Number(2.0),
                Token::Variable('x'),
                Token::Operator(Operator::CloseParen),
            ],
        );
    }

    #[test]
    fn decimal_and_implicit_mult() {
        compare_tokens(
            "0.5x",
            [
                Token::Number(0.5),
                Token::Variable('x'),
            ],
        );
    }

    #[test]
    fn unknown_characters_dropped() {
        compare_tokens(
            "3 $ x # ; 1",
            [
                Token::Number(3.0),
                Token::Variable('x'),
                Token::Number(1.0),
            ],
        );
    }

    #[test]
    fn derivative_shorthand() {
        compare_tokens(
            "y'",
            [
                Token::Variable('y'),
                Token::Operator(Operator::Comma),
                Token::Variable('x'),
            ],
        );
    }

    #[test]
    fn empty_input() {
        compare_tokens("   ", []);
    }

    #[test]
    fn two_decimal_points() {
        let err = tokenize("x + 1.2.3").unwrap_err();
        assert_eq!(err.spans, vec![2..7]);
    }
}
