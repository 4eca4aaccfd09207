use clap::{ArgAction, Parser};

use crate::policy::DenialAction;

/// Parse a boolean flag value
///
/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool(value: &str) -> Result<bool, String> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        other => Err(format!("invalid boolean value '{other}'")),
    }
}

/// Flags following the mode token
///
/// Boolean flags are set with `--flag` or `--flag=<bool>`; string flags take
/// `--flag value` or `--flag=value`. The first positional argument is the
/// target binary and everything after it is passed through to the target.
/// A repeated flag keeps its last value.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    name = "gatekeeper",
    version,
    about = "Syscall sandbox policy resolver for a ptrace/seccomp supervisor",
    override_usage = "gatekeeper <trace|run> [FLAGS] <BINARY> [ARGS]...",
    no_binary_name = true,
    args_override_self = true
)]
pub struct FlagArgs {
    /// Allow read access to the file system
    #[arg(long, action = ArgAction::Set, num_args = 0..=1, require_equals = true, default_missing_value = "true", default_value = "false", value_parser = parse_bool)]
    pub allow_file_system_read: bool,

    /// Allow write access to the file system (implies read)
    #[arg(long, action = ArgAction::Set, num_args = 0..=1, require_equals = true, default_missing_value = "true", default_value = "false", value_parser = parse_bool)]
    pub allow_file_system_write: bool,

    /// Allow read and write access to the file system
    #[arg(long, action = ArgAction::Set, num_args = 0..=1, require_equals = true, default_missing_value = "true", default_value = "false", value_parser = parse_bool)]
    pub allow_file_system: bool,

    /// Allow changing file permissions and ownership
    #[arg(long, action = ArgAction::Set, num_args = 0..=1, require_equals = true, default_missing_value = "true", default_value = "false", value_parser = parse_bool)]
    pub allow_file_system_permissions: bool,

    /// Allow outbound and inbound network connections
    #[arg(long, action = ArgAction::Set, num_args = 0..=1, require_equals = true, default_missing_value = "true", default_value = "false", value_parser = parse_bool)]
    pub allow_networking: bool,

    /// Allow outbound network connections
    #[arg(long, action = ArgAction::Set, num_args = 0..=1, require_equals = true, default_missing_value = "true", default_value = "false", value_parser = parse_bool)]
    pub allow_network_client: bool,

    /// Allow listening for inbound network connections
    #[arg(long, action = ArgAction::Set, num_args = 0..=1, require_equals = true, default_missing_value = "true", default_value = "false", value_parser = parse_bool)]
    pub allow_network_server: bool,

    /// Allow unix domain sockets
    #[arg(long, action = ArgAction::Set, num_args = 0..=1, require_equals = true, default_missing_value = "true", default_value = "false", value_parser = parse_bool)]
    pub allow_network_local_sockets: bool,

    /// Allow spawning and managing child processes
    #[arg(long, action = ArgAction::Set, num_args = 0..=1, require_equals = true, default_missing_value = "true", default_value = "false", value_parser = parse_bool)]
    pub allow_process_management: bool,

    /// Allow the syscall categories almost every program needs
    #[arg(long, action = ArgAction::Set, num_args = 0..=1, require_equals = true, default_missing_value = "true", default_value = "false", value_parser = parse_bool)]
    pub allow_implicit_commands: bool,

    #[arg(long, action = ArgAction::Set, num_args = 0..=1, require_equals = true, default_missing_value = "true", default_value = "false", value_parser = parse_bool)]
    pub allow_memory_management: bool,

    #[arg(long, action = ArgAction::Set, num_args = 0..=1, require_equals = true, default_missing_value = "true", default_value = "false", value_parser = parse_bool)]
    pub allow_process_synchronization: bool,

    #[arg(long, action = ArgAction::Set, num_args = 0..=1, require_equals = true, default_missing_value = "true", default_value = "false", value_parser = parse_bool)]
    pub allow_signals: bool,

    #[arg(long, action = ArgAction::Set, num_args = 0..=1, require_equals = true, default_missing_value = "true", default_value = "false", value_parser = parse_bool)]
    pub allow_misc: bool,

    #[arg(long, action = ArgAction::Set, num_args = 0..=1, require_equals = true, default_missing_value = "true", default_value = "false", value_parser = parse_bool)]
    pub allow_security_and_permissions: bool,

    #[arg(long, action = ArgAction::Set, num_args = 0..=1, require_equals = true, default_missing_value = "true", default_value = "false", value_parser = parse_bool)]
    pub allow_system_information: bool,

    /// Allow pipes, shared memory and message queues
    #[arg(long, action = ArgAction::Set, num_args = 0..=1, require_equals = true, default_missing_value = "true", default_value = "false", value_parser = parse_bool)]
    pub allow_process_communication: bool,

    #[arg(long, action = ArgAction::Set, num_args = 0..=1, require_equals = true, default_missing_value = "true", default_value = "false", value_parser = parse_bool)]
    pub allow_timers_and_clocks_management: bool,

    /// Enforce the policy as soon as the target starts
    #[arg(long, action = ArgAction::Set, num_args = 0..=1, require_equals = true, default_missing_value = "true", default_value = "true", value_parser = parse_bool)]
    pub enforce_on_startup: bool,

    /// Start enforcing once the target logs a line containing this text
    #[arg(long, value_name = "TEXT", default_value = "", allow_hyphen_values = true)]
    pub trigger_enforce_on_log_match: String,

    /// Start enforcing once the target receives this signal
    #[arg(long, value_name = "SIGNAL", default_value = "", allow_hyphen_values = true)]
    pub trigger_enforce_on_signal: String,

    /// What to do when the target calls a syscall outside the policy
    #[arg(long, value_enum, default_value_t = DenialAction::Kill)]
    pub on_syscall_denied: DenialAction,

    /// Enable verbose logging
    #[arg(long, action = ArgAction::Set, num_args = 0..=1, require_equals = true, default_missing_value = "true", default_value = "false", value_parser = parse_bool)]
    pub verbose: bool,

    /// Target binary followed by its arguments
    #[arg(value_name = "BINARY", trailing_var_arg = true)]
    pub command: Vec<String>,
}
