pub mod cli;
pub mod error;
pub mod policy;
pub mod runtime;

use cli::{DefaultPolicy, EnvSource, PolicyLoader};
use error::GatekeeperError;
use runtime::{Supervisor, execute_with_policy};

/// Resolve `args` into a policy and hand it to `supervisor`
///
/// The supervisor is only called once the whole pipeline has succeeded.
pub async fn run<E, S>(
    args: &[String],
    defaults: &DefaultPolicy<E>,
    supervisor: &S,
) -> Result<i32, GatekeeperError>
where
    E: EnvSource,
    S: Supervisor + ?Sized,
{
    let policy = PolicyLoader::load(args, defaults)?;
    execute_with_policy(supervisor, &policy).await
}
