use serde::Serialize;

/// Process management access granted to the target
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ProcessPolicy {
    pub allow_management: bool,
}
