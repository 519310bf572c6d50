use lcas_compute::{EvalOptions, EvalOptionsBuilder};
use simplelog::LevelFilter;
use std::{fmt::{self, Display, Formatter}, path::PathBuf, str::FromStr};

/// The environment variable that sets the log level.
pub const LOG_ENV: &str = "LCAS_LOG";

/// Command-line arguments of the shell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    /// File to read input lines from instead of running interactively.
    pub file: Option<PathBuf>,

    /// Log at debug level and report why input failed.
    pub verbose: bool,

    /// Number of simplification passes, if not the default.
    pub passes: Option<usize>,
}

/// Problems with the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    /// A flag that needs a value was last.
    MissingValue(&'static str),

    /// The value of `--passes` is not a non-negative integer.
    InvalidPasses(String),

    /// A flag that is not recognized.
    UnknownFlag(String),

    /// More than one file was given.
    ExtraArgument(String),
}

impl Display for ArgsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingValue(flag) => write!(f, "`{}` needs a value", flag),
            Self::InvalidPasses(value) => write!(f, "invalid pass count `{}`", value),
            Self::UnknownFlag(flag) => write!(f, "unknown flag `{}`", flag),
            Self::ExtraArgument(arg) => write!(f, "unexpected argument `{}`", arg),
        }
    }
}

impl std::error::Error for ArgsError {}

impl Args {
    /// Parses the arguments that follow the program name.
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-v" | "--verbose" => parsed.verbose = true,
                "--passes" => {
                    let value = args.next().ok_or(ArgsError::MissingValue("--passes"))?;
                    let passes = value.parse().map_err(|_| ArgsError::InvalidPasses(value))?;
                    parsed.passes = Some(passes);
                },
                _ if arg.starts_with('-') && arg != "-" => {
                    return Err(ArgsError::UnknownFlag(arg));
                },
                _ if parsed.file.is_some() => return Err(ArgsError::ExtraArgument(arg)),
                _ => parsed.file = Some(PathBuf::from(arg)),
            }
        }

        Ok(parsed)
    }

    /// Returns the evaluation options selected by the arguments.
    pub fn options(&self) -> EvalOptions {
        let builder = EvalOptionsBuilder::new();
        match self.passes {
            Some(passes) => builder.passes(passes).build(),
            None => builder.build(),
        }
    }

    /// Returns the log level, given the value of [`LOG_ENV`]. An unrecognized value is ignored.
    pub fn log_level(&self, env: Option<&str>) -> LevelFilter {
        if let Some(level) = env.and_then(|value| LevelFilter::from_str(value.trim()).ok()) {
            return level;
        }

        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, ArgsError> {
        Args::parse(args.iter().map(|arg| arg.to_string()))
    }

    #[test]
    fn no_args() {
        assert_eq!(parse(&[]).unwrap(), Args::default());
        assert_eq!(parse(&[]).unwrap().options(), EvalOptions::default());
    }

    #[test]
    fn all_args() {
        let args = parse(&["-v", "input.txt", "--passes", "2"]).unwrap();
        assert_eq!(args, Args {
            file: Some(PathBuf::from("input.txt")),
            verbose: true,
            passes: Some(2),
        });
        assert_eq!(args.options().passes, 2);
    }

    #[test]
    fn bad_args() {
        assert_eq!(parse(&["--passes"]), Err(ArgsError::MissingValue("--passes")));
        assert_eq!(parse(&["--passes", "two"]), Err(ArgsError::InvalidPasses("two".to_string())));
        assert_eq!(parse(&["--quiet"]), Err(ArgsError::UnknownFlag("--quiet".to_string())));
        assert_eq!(parse(&["a", "b"]), Err(ArgsError::ExtraArgument("b".to_string())));
    }

    #[test]
    fn log_level() {
        let quiet = Args::default();
        let verbose = parse(&["--verbose"]).unwrap();
        assert_eq!(quiet.log_level(None), LevelFilter::Warn);
        assert_eq!(verbose.log_level(None), LevelFilter::Debug);
        assert_eq!(verbose.log_level(Some("off")), LevelFilter::Off);
        assert_eq!(quiet.log_level(Some("TRACE")), LevelFilter::Trace);
        assert_eq!(quiet.log_level(Some("loud")), LevelFilter::Warn);
    }
}
