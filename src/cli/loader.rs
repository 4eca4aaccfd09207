use clap::Parser;

use crate::{
    error::{GatekeeperError, ParseError},
    policy::{PolicyRecord, validate},
};

use super::{
    args::FlagArgs,
    config::{DefaultPolicy, EnvSource},
    prescan::prescan_syscalls,
    resolver::resolve,
    target::bind_target,
};

/// Resolve command line arguments into a validated policy
pub struct PolicyLoader;

impl PolicyLoader {
    /// Run the full resolution pipeline
    ///
    /// `args` excludes the program name: the mode token comes first, followed
    /// by flags, the target binary and its arguments. Nothing partial is ever
    /// returned; any failing stage aborts the whole load.
    pub fn load<E: EnvSource>(
        args: &[String],
        defaults: &DefaultPolicy<E>,
    ) -> Result<PolicyRecord, GatekeeperError> {
        let Some((mode, rest)) = args.split_first().filter(|(_, rest)| !rest.is_empty()) else {
            return Err(ParseError::MissingArguments.into());
        };

        let scan = prescan_syscalls(rest.iter().cloned());
        let flags = FlagArgs::try_parse_from(&scan.remaining).map_err(ParseError::Flags)?;

        let policy = resolve(defaults.get()?, &flags, &scan.syscalls);
        let policy = bind_target(policy, mode, &flags.command)?;
        Ok(validate(policy)?)
    }
}
