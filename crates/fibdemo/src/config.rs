//! Application configuration from CLI flags.

use std::ffi::OsString;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;

/// Compare Binet's golden-ratio formula with naive recursion for a Fibonacci number.
///
/// Try a small index such as 5, then a larger one such as 30, and watch the
/// recursive time and call count explode while the golden ratio stays flat.
#[derive(Parser, Debug)]
#[command(name = "fib", version, about)]
pub struct AppConfig {
    /// Index of the Fibonacci number to compute.
    #[arg(value_name = "NUMBER", allow_negative_numbers = true)]
    pub number: Option<String>,

    /// Method to run: golden, recursive, or all.
    #[arg(short, long, default_value = "all")]
    pub method: String,

    /// Show predicted call counts and exactness notes.
    #[arg(short, long)]
    pub verbose: bool,

    /// Print results as JSON.
    #[arg(long)]
    pub json: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// What the command line asks for.
#[derive(Debug)]
pub enum Mode {
    /// No index, or more than one: print usage.
    Usage,
    /// Print a completion script.
    Completion(clap_complete::Shell),
    /// Compute with the given configuration; `number` is always set.
    Compute(AppConfig),
}

impl Mode {
    /// Parse the process arguments.
    pub fn from_env() -> Result<Self, clap::Error> {
        Self::from_args(std::env::args_os())
    }

    /// Parse an explicit argument list (first item is the program name).
    ///
    /// Help, version, and malformed option values are returned as errors for
    /// the caller to `exit()` with; a surplus argument selects [`Mode::Usage`].
    /// A lone dash-led token that is not an option (`fib -abc`) is the index.
    pub fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let config = match AppConfig::try_parse_from(args.iter().cloned()) {
            Ok(config) => config,
            Err(e) if e.kind() == ErrorKind::UnknownArgument => {
                match reparse_as_index(&args, &e) {
                    Some(config) => config,
                    None => return Ok(Self::Usage),
                }
            }
            Err(e) => return Err(e),
        };

        Ok(match (config.completion, config.number.is_some()) {
            (Some(shell), _) => Self::Completion(shell),
            (None, false) => Self::Usage,
            (None, true) => Self::Compute(config),
        })
    }
}

/// Retry with the unknown dash-led token moved behind `--`, so clap takes it
/// as the positional index. Any further error means a surplus argument.
fn reparse_as_index(args: &[OsString], err: &clap::Error) -> Option<AppConfig> {
    let Some(ContextValue::String(unknown)) = err.get(ContextKind::InvalidArg) else {
        return None;
    };
    if !unknown.starts_with('-') {
        return None;
    }

    // Clap names only the first bad flag of a short cluster: `-a` for `-abc`
    let pos = args
        .iter()
        .skip(1)
        .position(|a| a.to_str().is_some_and(|s| s.starts_with(unknown.as_str())))?
        + 1;

    let mut reordered: Vec<OsString> = args
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != pos)
        .map(|(_, a)| a.clone())
        .collect();
    reordered.push("--".into());
    reordered.push(args[pos].clone());
    AppConfig::try_parse_from(reordered).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mode(args: &[&str]) -> Mode {
        Mode::from_args(std::iter::once("fib").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_arguments_is_usage() {
        assert!(matches!(mode(&[]), Mode::Usage));
    }

    #[test]
    fn two_arguments_is_usage() {
        assert!(matches!(mode(&["3", "5"]), Mode::Usage));
    }

    #[test]
    fn one_argument_computes() {
        match mode(&["10"]) {
            Mode::Compute(config) => {
                assert_eq!(config.number.as_deref(), Some("10"));
                assert_eq!(config.method, "all");
                assert!(!config.verbose);
                assert!(!config.json);
            }
            other => panic!("expected Compute, got {other:?}"),
        }
    }

    #[test]
    fn negative_number_is_a_value() {
        match mode(&["-5"]) {
            Mode::Compute(config) => assert_eq!(config.number.as_deref(), Some("-5")),
            other => panic!("expected Compute, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_is_still_an_index() {
        assert!(matches!(mode(&["abc"]), Mode::Compute(_)));
    }

    #[test]
    fn dash_led_text_is_an_index() {
        match mode(&["-abc"]) {
            Mode::Compute(config) => assert_eq!(config.number.as_deref(), Some("-abc")),
            other => panic!("expected Compute, got {other:?}"),
        }
        match mode(&["--nope"]) {
            Mode::Compute(config) => assert_eq!(config.number.as_deref(), Some("--nope")),
            other => panic!("expected Compute, got {other:?}"),
        }
    }

    #[test]
    fn dash_led_text_keeps_flags() {
        match mode(&["-v", "-abc"]) {
            Mode::Compute(config) => {
                assert!(config.verbose);
                assert_eq!(config.number.as_deref(), Some("-abc"));
            }
            other => panic!("expected Compute, got {other:?}"),
        }
    }

    #[test]
    fn dash_led_text_with_index_is_usage() {
        assert!(matches!(mode(&["7", "-abc"]), Mode::Usage));
        assert!(matches!(mode(&["-abc", "7"]), Mode::Usage));
    }

    #[test]
    fn flags_parse() {
        match mode(&["-m", "recursive", "-v", "--json", "7"]) {
            Mode::Compute(config) => {
                assert_eq!(config.method, "recursive");
                assert!(config.verbose);
                assert!(config.json);
            }
            other => panic!("expected Compute, got {other:?}"),
        }
    }

    #[test]
    fn completion_mode() {
        assert!(matches!(
            mode(&["--completion", "bash"]),
            Mode::Completion(clap_complete::Shell::Bash)
        ));
    }

    #[test]
    fn help_is_an_error_to_exit_with() {
        let err = Mode::from_args(["fib", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn bad_completion_shell_is_an_error() {
        let err = Mode::from_args(["fib", "--completion", "cmd"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }
}
