use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::error::ModeError;

/// How the supervisor runs the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Record syscalls without blocking
    #[default]
    Trace,
    /// Enforce the policy
    Run,
}

impl ExecutionMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ExecutionMode::Trace => "trace",
            ExecutionMode::Run => "run",
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the positional mode token; exact, case-sensitive match
impl FromStr for ExecutionMode {
    type Err = ModeError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "trace" => Ok(ExecutionMode::Trace),
            "run" => Ok(ExecutionMode::Run),
            _ => Err(ModeError::Unknown {
                token: token.to_string(),
            }),
        }
    }
}

/// The process the supervisor launches
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TargetSpec {
    pub execution_mode: ExecutionMode,
    pub binary_path: String,
    pub args: Vec<String>,
}
