mod supervisor;

#[cfg(test)]
pub use supervisor::MockSupervisor;
pub use supervisor::{LoggingSupervisor, Supervisor};

use crate::{error::GatekeeperError, policy::PolicyRecord};

/// Hand a validated policy to the supervisor
///
/// Logs the enforcement plan, and the full record at debug level, before
/// launching. Returns the exit code of the supervised target.
pub async fn execute_with_policy<S>(
    supervisor: &S,
    policy: &PolicyRecord,
) -> Result<i32, GatekeeperError>
where
    S: Supervisor + ?Sized,
{
    if policy.enforcement.is_deferred() {
        log::info!(
            "deferring enforcement until log match {:?} or signal {:?}",
            policy.enforcement.trigger_log_match,
            policy.enforcement.trigger_signal
        );
    }
    if log::log_enabled!(log::Level::Debug) {
        log::debug!("resolved policy:\n{}", policy.to_toml()?);
    }

    let exit_code = supervisor.supervise(policy).await?;
    log::info!("{} exited with code {}", policy.target.binary_path, exit_code);
    Ok(exit_code)
}
