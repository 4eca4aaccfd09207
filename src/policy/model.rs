// Aggregate record combining all policy groups
use serde::Serialize;

use super::enforcement::EnforcementPolicy;
use super::file::FilesystemPolicy;
use super::net::NetworkPolicy;
use super::process::ProcessPolicy;
use super::syscall::SyscallPolicy;
use super::target::TargetSpec;

/// Resolved sandbox policy handed to the supervisor
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PolicyRecord {
    pub file: FilesystemPolicy,
    pub network: NetworkPolicy,
    pub process: ProcessPolicy,
    pub syscalls: SyscallPolicy,
    pub enforcement: EnforcementPolicy,
    pub target: TargetSpec,
}

impl PolicyRecord {
    /// Create a new empty policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the record as TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_policy_enforces_on_startup_and_kills() {
        let policy = PolicyRecord::new();
        assert!(policy.enforcement.enforce_on_startup);
        assert!(policy.syscalls.kill_target_if_denied());
        assert!(policy.target.binary_path.is_empty());
    }

    #[test]
    fn renders_as_toml() {
        let mut policy = PolicyRecord::new();
        policy.target.binary_path = "ls".to_string();
        policy.target.args = vec!["-l".to_string()];
        policy.syscalls.allow_list = vec!["openat".to_string()];

        let rendered = policy.to_toml().unwrap();
        assert!(rendered.contains("binary_path = \"ls\""));
        assert!(rendered.contains("execution_mode = \"trace\""));
        assert!(rendered.contains("on_denied = \"kill\""));
        assert!(rendered.contains("basic-time = false"));
    }
}
