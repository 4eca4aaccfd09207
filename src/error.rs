use thiserror::Error;

/// Exit code used for every usage, parse, mode and validation failure
pub const USAGE_EXIT_CODE: i32 = 100;

/// Exit code used when the policy was valid but the handoff itself failed
pub const RUNTIME_EXIT_CODE: i32 = 1;

#[derive(Debug, Error)]
pub enum GatekeeperError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Mode(#[from] ModeError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("invalid value '{value}' for environment variable {name}: {reason}")]
    Environment {
        name: String,
        value: String,
        reason: String,
    },

    #[error("failed to render policy: {0}")]
    Render(#[from] toml::ser::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GatekeeperError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            GatekeeperError::Parse(ParseError::Flags(err)) if !err.use_stderr() => 0,
            GatekeeperError::Parse(_)
            | GatekeeperError::Mode(_)
            | GatekeeperError::Validation(_)
            | GatekeeperError::Environment { .. } => USAGE_EXIT_CODE,
            GatekeeperError::Render(_) | GatekeeperError::Io(_) => RUNTIME_EXIT_CODE,
        }
    }

    /// Whether usage text should follow the error message
    ///
    /// clap errors carry their own usage line.
    pub fn wants_usage(&self) -> bool {
        matches!(
            self,
            GatekeeperError::Parse(ParseError::MissingArguments)
                | GatekeeperError::Mode(_)
                | GatekeeperError::Validation(_)
        )
    }
}

/// Malformed command line input
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("you did not provide enough parameters and flags")]
    MissingArguments,

    /// Unknown flag, bad value, or a help/version request
    #[error("{0}")]
    Flags(#[from] clap::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModeError {
    #[error("unknown execution mode '{token}', expected 'trace' or 'run'")]
    Unknown { token: String },
}

/// A single broken invariant of a resolved policy
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error(
        "to delay the enforcement of seccomp policies, please also specify either --trigger-enforce-on-log-match or --trigger-enforce-on-signal"
    )]
    MissingEnforcementTrigger,

    #[error("no target binary given")]
    MissingTargetBinary,

    #[error("file system write access requires read access")]
    WriteWithoutRead,
}

/// Every invariant a resolved policy failed, in check order
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid policy: {}", format_violations(.violations))]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_lists_every_violation() {
        let err = ValidationError {
            violations: vec![Violation::MissingEnforcementTrigger, Violation::MissingTargetBinary],
        };
        let message = err.to_string();
        assert!(message.contains("--trigger-enforce-on-log-match"));
        assert!(message.contains("no target binary given"));
    }

    #[test]
    fn usage_failures_exit_with_fixed_code() {
        let validation = GatekeeperError::from(ValidationError {
            violations: vec![Violation::MissingTargetBinary],
        });
        let mode = GatekeeperError::from(ModeError::Unknown {
            token: "walk".to_string(),
        });
        let parse = GatekeeperError::from(ParseError::MissingArguments);

        assert_eq!(validation.exit_code(), USAGE_EXIT_CODE);
        assert_eq!(mode.exit_code(), USAGE_EXIT_CODE);
        assert_eq!(parse.exit_code(), USAGE_EXIT_CODE);
        assert!(parse.wants_usage());
    }

    #[test]
    fn io_failures_are_runtime_errors() {
        let err = GatekeeperError::from(std::io::Error::other("boom"));
        assert_eq!(err.exit_code(), RUNTIME_EXIT_CODE);
        assert!(!err.wants_usage());
    }
}
