use crate::{
    error::ModeError,
    policy::{ExecutionMode, PolicyRecord},
};

/// Select the execution mode and bind the target binary
///
/// The first element of `tail` becomes the binary and the rest its arguments.
/// An empty tail keeps the baseline target, which is empty unless an
/// environment default was given.
pub fn bind_target(
    mut policy: PolicyRecord,
    mode_token: &str,
    tail: &[String],
) -> Result<PolicyRecord, ModeError> {
    policy.target.execution_mode = mode_token.parse::<ExecutionMode>()?;

    if let Some((binary, args)) = tail.split_first() {
        policy.target.binary_path = binary.clone();
        policy.target.args = args.to_vec();
    }

    Ok(policy)
}
