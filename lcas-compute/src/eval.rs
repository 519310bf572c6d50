//! The full pipeline, from a line of user input to a line of output.

use lcas_error::Error;
use lcas_parser::{parser::{ast::Expr, Parser}, tokenizer::{normalize, tokenize_normalized}};
use log::debug;
use crate::{
    query::{Mode, Query},
    render::render,
    symbolic::{derivative, simplify::step::Step, simplify_passes, DEFAULT_PASSES},
};

/// The output of [`evaluate`] for input that could not be processed.
pub const SYNTAX_ERROR: &str = "Syntax Error";

/// Options that control how input is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalOptions {
    /// The number of simplification passes to run on the result.
    ///
    /// The default is [`DEFAULT_PASSES`].
    pub passes: usize,

    /// The variable to differentiate with respect to when the input does not name one.
    ///
    /// The default is `x`.
    pub default_var: char,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self {
            passes: DEFAULT_PASSES,
            default_var: 'x',
        }
    }
}

impl EvalOptions {
    /// Wraps the given [`EvalOptions`] into a builder for further customization.
    pub fn into_builder(self) -> EvalOptionsBuilder {
        EvalOptionsBuilder(self)
    }
}

/// Helper struct to build an [`EvalOptions`] struct.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EvalOptionsBuilder(EvalOptions);

impl EvalOptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of simplification passes. See [`EvalOptions::passes`].
    pub fn passes(mut self, passes: usize) -> Self {
        self.0.passes = passes;
        self
    }

    /// Sets the default variable. See [`EvalOptions::default_var`].
    pub fn default_var(mut self, default_var: char) -> Self {
        self.0.default_var = default_var;
        self
    }

    /// Builds the [`EvalOptions`] struct.
    pub fn build(self) -> EvalOptions {
        self.0
    }
}

/// The result of successfully evaluating one line of input.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The query the input was split into.
    pub query: Query,

    /// The final expression, after differentiating and simplifying.
    pub expr: Expr,

    /// The rendered output.
    pub output: String,

    /// The simplification steps taken, over all passes, in the order they were applied.
    pub steps: Vec<Step>,
}

/// An error that occurred while evaluating one line of input.
#[derive(Debug)]
pub struct Failure {
    /// The normalized expression text that the error's spans refer to.
    pub source: String,

    /// The error itself.
    pub error: Error,
}

impl Failure {
    /// Writes a report for this failure to stderr.
    pub fn report_to_stderr(&self) {
        self.error.report_to_stderr("input", &self.source);
    }

    /// Renders a report for this failure into a [`String`].
    pub fn report_to_string(&self) -> String {
        self.error.report_to_string("input", &self.source)
    }
}

/// Evaluates one line of input, returning the final expression along with the intermediate
/// results.
pub fn try_evaluate(input: &str, options: &EvalOptions) -> Result<Evaluation, Failure> {
    let query = Query::parse_with_default(input, options.default_var);
    debug!("{} `{}` with respect to `{}`", query.mode, query.expr, query.var);

    let source = normalize(&query.expr);
    let fail = |error: Error| Failure { source: source.clone(), error };

    let tokens = tokenize_normalized(&source).map_err(fail)?;
    let tree = Parser::from_tokens(tokens).parse().map_err(fail)?;

    let tree = match query.mode {
        Mode::Differentiate => {
            let derived = derivative(&tree, &query.var);
            debug!("derivative: {}", derived);
            derived
        },
        Mode::Expand => tree,
    };

    let mut steps = Vec::new();
    let expr = simplify_passes(&tree, options.passes, &mut steps);
    let output = render(&expr).map_err(fail)?;

    Ok(Evaluation { query, expr, output, steps })
}

/// Evaluates one line of input with the given options, returning the rendered result or
/// [`SYNTAX_ERROR`].
pub fn evaluate_with(input: &str, options: &EvalOptions) -> String {
    match try_evaluate(input, options) {
        Ok(evaluation) => evaluation.output,
        Err(failure) => {
            debug!("evaluation failed: {:?}", failure.error.kind);
            SYNTAX_ERROR.to_string()
        },
    }
}

/// Evaluates one line of input with the default options, returning the rendered result or
/// [`SYNTAX_ERROR`].
///
/// See the [crate-level documentation](crate) for the accepted input forms.
pub fn evaluate(input: &str) -> String {
    evaluate_with(input, &EvalOptions::default())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn power_rule() {
        assert_eq!(evaluate("x^2"), "2*x^1");
        assert_eq!(evaluate("x^3'"), "3*x^2");
    }

    #[test]
    fn other_variable() {
        assert_eq!(evaluate("x^2,y"), "0");
        assert_eq!(evaluate("diff(y^2, y)"), "2*y^1");
        assert_eq!(evaluate("diff(x^2,x)"), "2*x^1");
        assert_eq!(evaluate("diff(y^2, y )"), "2*y^1");
        assert_eq!(evaluate("α^2,α"), "2*α^1");
    }

    #[test]
    fn functions() {
        assert_eq!(evaluate("sin(x)"), "cos(x)");
        assert_eq!(evaluate("cos(x)"), "-1*sin(x)");
        assert_eq!(evaluate("e^x"), "exp(x)");
    }

    #[test]
    fn sums() {
        assert_eq!(evaluate("x^2 + 3x"), "2*x^1+3");
        assert_eq!(evaluate("5 + 2"), "0");
    }

    #[test]
    fn expand() {
        assert_eq!(evaluate("expand(x+0)"), "x");
        assert_eq!(evaluate("expand(2 * 3 + x)"), "6+x");
        assert_eq!(evaluate("expand(pi + 0)"), "pi");
        assert_eq!(evaluate("expand(1 * 2.5)"), "2.5");
    }

    #[test]
    fn uppercase() {
        assert_eq!(evaluate("X^2"), "2*x^1");
        assert_eq!(evaluate("SIN(X)"), "cos(x)");
    }

    #[test]
    fn diff_without_comma() {
        // `diff` is read as an unknown function, which differentiates to 0
        assert_eq!(evaluate("diff(x^2)"), "0");
    }

    #[test]
    fn syntax_errors() {
        assert_eq!(evaluate("1.2.3"), SYNTAX_ERROR);

        let deep = format!("{}x{}", "(".repeat(600), ")".repeat(600));
        assert_eq!(evaluate(&deep), SYNTAX_ERROR);

        let big = "9".repeat(200);
        assert_eq!(evaluate(&format!("expand({big} * {big})")), SYNTAX_ERROR);
    }

    #[test]
    fn deep_input() {
        assert_eq!(evaluate(&vec!["x"; 300].join("+")), "300");
        assert_eq!(evaluate(&vec!["x"; 600].join("+")), "600");

        let nested = format!("{}x{}", "(".repeat(200), ")".repeat(200));
        assert_eq!(evaluate(&nested), "1");
    }

    #[test]
    fn failure_source_is_normalized() {
        let failure = try_evaluate("expand(1 + 1.2.3)", &EvalOptions::default()).unwrap_err();
        assert_eq!(failure.source, "1+1.2.3");
        assert_eq!(failure.error.spans, vec![2..7]);
    }

    #[test]
    fn fifth_pass_is_stable() {
        let four = EvalOptions::default();
        let five = four.into_builder().passes(5).build();
        for input in ["x^2", "x^2,y", "sin(x)", "expand(x+0)"] {
            assert_eq!(evaluate_with(input, &four), evaluate_with(input, &five));
        }
    }

    #[test]
    fn options() {
        let options = EvalOptionsBuilder::new().default_var('t').build();
        assert_eq!(evaluate_with("t^2", &options), "2*t^1");
        assert_eq!(evaluate_with("x^2", &options), "0");

        let options = EvalOptionsBuilder::new().passes(0).build();
        assert_eq!(evaluate_with("sin(x)", &options), "cos(x)*1");
    }

    #[test]
    fn steps_collected() {
        let evaluation = try_evaluate("expand(x * 1 + 0)", &EvalOptions::default()).unwrap();
        assert_eq!(evaluation.query.mode, Mode::Expand);
        assert_eq!(evaluation.expr, Expr::Variable('x'));
        assert_eq!(evaluation.steps, vec![Step::MultiplyOne, Step::AddZero]);
    }
}
