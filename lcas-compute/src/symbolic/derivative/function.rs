//! Derivatives of function calls, using the chain rule.

use lcas_parser::parser::ast::Expr;
use levenshtein::levenshtein;
use log::warn;

/// The functions the differentiator has rules for.
pub const KNOWN_FUNCTIONS: [&str; 8] = ["ln", "exp", "sqrt", "sin", "cos", "tan", "cot", "atan"];

/// Returns true if the differentiator has a rule for the function with the given name.
pub fn is_known(name: &str) -> bool {
    KNOWN_FUNCTIONS.contains(&name)
}

/// Returns all known functions with a name similar to the given name.
pub fn similar_functions(name: &str) -> Vec<&'static str> {
    KNOWN_FUNCTIONS
        .iter()
        .copied()
        .filter(|known| levenshtein(known, name) < 2)
        .collect()
}

/// Produces the derivative of `name(arg)` with respect to the variable named `var`.
///
/// Unknown functions differentiate to `0`.
pub fn derivative(name: &str, arg: &Expr, var: &str) -> Expr {
    let u = || arg.clone();
    let du = || super::derivative(arg, var);

    match name {
        // ln(u)' = (1/u) * u'
        "ln" => Expr::Number(1.0) / u() * du(),
        "exp" => Expr::call("exp", u()) * du(),
        "sqrt" => du() / (Expr::Number(2.0) * Expr::call("sqrt", u())),
        "sin" => Expr::call("cos", u()) * du(),
        "cos" => Expr::Number(-1.0) * Expr::call("sin", u()) * du(),
        "tan" => du() / Expr::pow(Expr::call("cos", u()), Expr::Number(2.0)),
        "cot" => Expr::Number(-1.0) * du() / Expr::pow(Expr::call("sin", u()), Expr::Number(2.0)),
        "atan" => du() / (Expr::Number(1.0) + Expr::pow(u(), Expr::Number(2.0))),
        _ => {
            let similar = similar_functions(name);
            if similar.is_empty() {
                warn!("no derivative rule for `{}`, using 0", name);
            } else {
                warn!("no derivative rule for `{}`, using 0 (did you mean `{}`?)", name, similar.join("`, `"));
            }
            Expr::Number(0.0)
        },
    }
}
