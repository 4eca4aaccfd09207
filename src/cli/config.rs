use std::{cell::OnceCell, collections::HashMap};

use crate::{
    error::GatekeeperError,
    policy::{DenialAction, ExecutionMode, PolicyRecord, SyscallCategory},
};

use super::args::parse_bool;

/// Prefix shared by every environment variable read as a default
pub const ENV_PREFIX: &str = "GATEKEEPER";

/// Source of environment-style configuration
pub trait EnvSource {
    fn var(&self, name: &str) -> Option<String>;
}

/// Reads from the process environment
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Typed reads of `GATEKEEPER_*` variables
struct EnvReader<'a, E: EnvSource + ?Sized> {
    env: &'a E,
}

impl<E: EnvSource + ?Sized> EnvReader<'_, E> {
    fn raw(&self, key: &str) -> (String, Option<String>) {
        let name = format!("{ENV_PREFIX}_{key}");
        let value = self.env.var(&name);
        (name, value)
    }

    fn bool(&self, key: &str, default: bool) -> Result<bool, GatekeeperError> {
        match self.raw(key) {
            (_, None) => Ok(default),
            (name, Some(value)) => {
                parse_bool(&value).map_err(|reason| GatekeeperError::Environment {
                    name,
                    value,
                    reason,
                })
            }
        }
    }

    fn string(&self, key: &str) -> String {
        self.raw(key).1.unwrap_or_default()
    }

    /// Comma separated list; blank entries are skipped
    fn list(&self, key: &str) -> Vec<String> {
        self.raw(key)
            .1
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|entry| !entry.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default()
    }

    fn execution_mode(&self) -> Result<ExecutionMode, GatekeeperError> {
        match self.raw("EXECUTION_MODE") {
            (_, None) => Ok(ExecutionMode::default()),
            (_, Some(value)) if value == "TRACE" => Ok(ExecutionMode::Trace),
            (_, Some(value)) if value == "RUN" => Ok(ExecutionMode::Run),
            (name, Some(value)) => Err(GatekeeperError::Environment {
                name,
                value,
                reason: "expected TRACE or RUN".to_string(),
            }),
        }
    }
}

/// Build the baseline policy record from environment variables
///
/// Unset variables fall back to an empty policy that enforces on startup and
/// kills the target on denied syscalls.
pub fn load_defaults<E: EnvSource + ?Sized>(env: &E) -> Result<PolicyRecord, GatekeeperError> {
    let reader = EnvReader { env };
    let mut policy = PolicyRecord::new();

    policy.file.allow_read = reader.bool("FILE_SYSTEM_ALLOW_READ", false)?;
    policy.file.allow_write = reader.bool("FILE_SYSTEM_ALLOW_WRITE", false)?;
    policy.file.allow_permissions = reader.bool("FILE_SYSTEM_ALLOW_PERMISSIONS", false)?;

    policy.network.allow_client = reader.bool("NETWORK_ALLOW_CLIENT", false)?;
    policy.network.allow_server = reader.bool("NETWORK_ALLOW_SERVER", false)?;
    policy.network.allow_local_sockets = reader.bool("LOCAL_SOCKETS_ALLOW", false)?;

    policy.process.allow_management = reader.bool("PROCESS_ALLOW_MANAGEMENT", false)?;

    policy.syscalls.allow_list = reader.list("SYSCALLS_ALLOW_LIST");
    for category in SyscallCategory::ALL {
        let key = format!("SYSCALLS_ALLOW_{}", category.env_suffix());
        policy.syscalls.set_category(category, reader.bool(&key, false)?);
    }
    // Kill and deny are a derived pair, so deny wins when both are set
    let kill = reader.bool("SYSCALLS_KILL_TARGET_IF_NOT_ALLOWED", true)?;
    let deny = reader.bool("SYSCALLS_DENY_TARGET_IF_NOT_ALLOWED", false)?;
    policy.syscalls.on_denied = if deny || !kill {
        DenialAction::Error
    } else {
        DenialAction::Kill
    };

    policy.enforcement.enforce_on_startup = reader.bool("ENFORCE_ON_STARTUP", true)?;
    policy.enforcement.trigger_log_match = reader.string("TRIGGER_ENFORCE_LOG_MATCH");
    policy.enforcement.trigger_signal = reader.string("TRIGGER_ENFORCE_SIGNAL");
    policy.enforcement.verbose = reader.bool("VERBOSE_LOG", false)?;

    policy.target.execution_mode = reader.execution_mode()?;
    policy.target.binary_path = reader.string("TARGET_BINARY");
    policy.target.args = reader.list("TARGET_ARGS");

    Ok(policy)
}

/// Lazily loaded default policy record
///
/// The environment is read on the first call to [`DefaultPolicy::get`] and
/// the result cached. [`DefaultPolicy::reset`] drops the cached record so the
/// next access reads the environment again.
pub struct DefaultPolicy<E: EnvSource = ProcessEnv> {
    env: E,
    record: OnceCell<PolicyRecord>,
}

impl DefaultPolicy<ProcessEnv> {
    pub fn from_process_env() -> Self {
        Self::new(ProcessEnv)
    }
}

impl<E: EnvSource> DefaultPolicy<E> {
    pub fn new(env: E) -> Self {
        Self {
            env,
            record: OnceCell::new(),
        }
    }

    pub fn get(&self) -> Result<&PolicyRecord, GatekeeperError> {
        if let Some(record) = self.record.get() {
            return Ok(record);
        }
        let loaded = load_defaults(&self.env)?;
        Ok(self.record.get_or_init(|| loaded))
    }

    pub fn reset(&mut self) {
        self.record.take();
    }

    #[cfg(test)]
    fn is_loaded(&self) -> bool {
        self.record.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_environment_gives_baseline() {
        let policy = load_defaults(&HashMap::<String, String>::new()).unwrap();
        assert_eq!(policy, PolicyRecord::new());
    }

    #[test]
    fn reads_every_group() {
        let policy = load_defaults(&env(&[
            ("GATEKEEPER_FILE_SYSTEM_ALLOW_READ", "true"),
            ("GATEKEEPER_NETWORK_ALLOW_SERVER", "1"),
            ("GATEKEEPER_PROCESS_ALLOW_MANAGEMENT", "T"),
            ("GATEKEEPER_SYSCALLS_ALLOW_LIST", "read, write,,openat"),
            ("GATEKEEPER_SYSCALLS_ALLOW_BASIC_TIME", "true"),
            ("GATEKEEPER_ENFORCE_ON_STARTUP", "false"),
            ("GATEKEEPER_TRIGGER_ENFORCE_SIGNAL", "SIGUSR2"),
            ("GATEKEEPER_VERBOSE_LOG", "true"),
            ("GATEKEEPER_EXECUTION_MODE", "RUN"),
            ("GATEKEEPER_TARGET_BINARY", "/usr/bin/env"),
            ("GATEKEEPER_TARGET_ARGS", "-i,PATH=/bin"),
        ]))
        .unwrap();

        assert!(policy.file.allow_read);
        assert!(policy.network.allow_server);
        assert!(policy.process.allow_management);
        assert_eq!(policy.syscalls.allow_list, vec!["read", "write", "openat"]);
        assert!(policy.syscalls.is_category_allowed(SyscallCategory::BasicTime));
        assert!(!policy.syscalls.is_category_allowed(SyscallCategory::Misc));
        assert!(!policy.enforcement.enforce_on_startup);
        assert_eq!(policy.enforcement.trigger_signal, "SIGUSR2");
        assert!(policy.enforcement.verbose);
        assert_eq!(policy.target.execution_mode, ExecutionMode::Run);
        assert_eq!(policy.target.binary_path, "/usr/bin/env");
        assert_eq!(policy.target.args, vec!["-i", "PATH=/bin"]);
    }

    #[rstest]
    #[case(&[], DenialAction::Kill)]
    #[case(&[("GATEKEEPER_SYSCALLS_DENY_TARGET_IF_NOT_ALLOWED", "true")], DenialAction::Error)]
    #[case(&[("GATEKEEPER_SYSCALLS_KILL_TARGET_IF_NOT_ALLOWED", "false")], DenialAction::Error)]
    #[case(
        &[
            ("GATEKEEPER_SYSCALLS_KILL_TARGET_IF_NOT_ALLOWED", "true"),
            ("GATEKEEPER_SYSCALLS_DENY_TARGET_IF_NOT_ALLOWED", "true"),
        ],
        DenialAction::Error
    )]
    fn test_denial_defaults(#[case] pairs: &[(&str, &str)], #[case] expected: DenialAction) {
        let policy = load_defaults(&env(pairs)).unwrap();
        assert_eq!(policy.syscalls.on_denied, expected);
    }

    #[rstest]
    #[case("GATEKEEPER_VERBOSE_LOG", "yes")]
    #[case("GATEKEEPER_SYSCALLS_ALLOW_MISC", "on")]
    #[case("GATEKEEPER_EXECUTION_MODE", "run")]
    fn test_malformed_values(#[case] name: &str, #[case] value: &str) {
        let err = load_defaults(&env(&[(name, value)])).unwrap_err();
        match err {
            GatekeeperError::Environment {
                name: got_name,
                value: got_value,
                ..
            } => {
                assert_eq!(got_name, name);
                assert_eq!(got_value, value);
            }
            other => panic!("Expected Environment error, got {other:?}"),
        }
    }

    struct CountingEnv {
        reads: Cell<usize>,
    }

    impl EnvSource for CountingEnv {
        fn var(&self, name: &str) -> Option<String> {
            self.reads.set(self.reads.get() + 1);
            (name == "GATEKEEPER_TARGET_BINARY").then(|| "ls".to_string())
        }
    }

    #[test]
    fn loads_lazily_once_and_reloads_after_reset() {
        let mut defaults = DefaultPolicy::new(CountingEnv {
            reads: Cell::new(0),
        });
        assert!(!defaults.is_loaded());
        assert_eq!(defaults.env.reads.get(), 0);

        assert_eq!(defaults.get().unwrap().target.binary_path, "ls");
        let reads_after_first = defaults.env.reads.get();
        assert!(reads_after_first > 0);

        defaults.get().unwrap();
        assert_eq!(defaults.env.reads.get(), reads_after_first);

        defaults.reset();
        assert!(!defaults.is_loaded());
        defaults.get().unwrap();
        assert_eq!(defaults.env.reads.get(), reads_after_first * 2);
    }

    #[test]
    fn failed_load_is_not_cached() {
        let defaults = DefaultPolicy::new(env(&[("GATEKEEPER_VERBOSE_LOG", "loud")]));
        assert!(defaults.get().is_err());
        assert!(!defaults.is_loaded());
    }
}
