use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The approximation of `pi` used by the engine.
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.1415926535;

/// The approximation of Euler's number used by the engine.
#[allow(clippy::approx_constant)]
pub const E: f64 = 2.7182818284;

/// The reserved letter that `pi` and `PI` are rewritten to during normalization.
pub const PI_MARKER: char = 'π';

/// A named mathematical constant.
///
/// Constants behave like number literals carrying [`PI`] / [`E`] everywhere except when
/// formatted, where they print their name instead of the digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Constant {
    /// `pi`
    Pi,

    /// `e`
    E,
}

impl Constant {
    /// Returns the numeric value of the constant.
    pub fn value(self) -> f64 {
        match self {
            Self::Pi => PI,
            Self::E => E,
        }
    }

    /// Returns the name the constant is printed as.
    pub fn name(self) -> &'static str {
        match self {
            Self::Pi => "pi",
            Self::E => "e",
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
