use async_trait::async_trait;

use crate::{error::GatekeeperError, policy::PolicyRecord};

#[cfg(test)]
use mockall::automock;

/// Launches the target under a resolved policy and reports its exit code
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Supervisor: Send + Sync {
    async fn supervise(&self, policy: &PolicyRecord) -> Result<i32, GatekeeperError>;
}

/// Stand-in supervisor that only reports what would be launched
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSupervisor;

#[async_trait]
impl Supervisor for LoggingSupervisor {
    async fn supervise(&self, policy: &PolicyRecord) -> Result<i32, GatekeeperError> {
        log::info!(
            "starting {} with args {:?} in {} mode",
            policy.target.binary_path,
            policy.target.args,
            policy.target.execution_mode
        );
        Ok(0)
    }
}
