use crate::policy::{
    FilesystemPolicy, NetworkPolicy, PolicyRecord, ProcessPolicy, SyscallCategory,
};

use super::args::FlagArgs;

/// How one syscall category is derived from the flags
struct CategoryRule {
    category: SyscallCategory,
    /// Dedicated flag for the category, if it has one
    explicit: Option<fn(&FlagArgs) -> bool>,
    /// Whether `--allow-implicit-commands` raises the category
    implicit: bool,
}

const CATEGORY_RULES: [CategoryRule; 10] = [
    CategoryRule {
        category: SyscallCategory::ProcessManagement,
        explicit: None,
        implicit: true,
    },
    CategoryRule {
        category: SyscallCategory::BasicTime,
        explicit: None,
        implicit: true,
    },
    CategoryRule {
        category: SyscallCategory::MemoryManagement,
        explicit: Some(|flags: &FlagArgs| flags.allow_memory_management),
        implicit: true,
    },
    CategoryRule {
        category: SyscallCategory::ProcessSynchronization,
        explicit: Some(|flags: &FlagArgs| flags.allow_process_synchronization),
        implicit: true,
    },
    CategoryRule {
        category: SyscallCategory::Signals,
        explicit: Some(|flags: &FlagArgs| flags.allow_signals),
        implicit: true,
    },
    CategoryRule {
        category: SyscallCategory::Misc,
        explicit: Some(|flags: &FlagArgs| flags.allow_misc),
        implicit: true,
    },
    CategoryRule {
        category: SyscallCategory::SecurityAndPermissions,
        explicit: Some(|flags: &FlagArgs| flags.allow_security_and_permissions),
        implicit: true,
    },
    CategoryRule {
        category: SyscallCategory::SystemInformation,
        explicit: Some(|flags: &FlagArgs| flags.allow_system_information),
        implicit: true,
    },
    CategoryRule {
        category: SyscallCategory::TimersAndClocksManagement,
        explicit: Some(|flags: &FlagArgs| flags.allow_timers_and_clocks_management),
        implicit: true,
    },
    CategoryRule {
        category: SyscallCategory::ProcessCommunication,
        explicit: Some(|flags: &FlagArgs| flags.allow_process_communication),
        implicit: false,
    },
];

impl CategoryRule {
    fn evaluate(&self, flags: &FlagArgs) -> bool {
        let explicit = self.explicit.is_some_and(|flag| flag(flags));
        explicit || (self.implicit && flags.allow_implicit_commands)
    }
}

/// Merge the baseline record, parsed flags and pre-scanned syscall names
///
/// Pure: the same inputs always produce the same record. The baseline
/// contributes the head of the syscall allow list and the target; every other
/// field is derived from the flags.
pub fn resolve(defaults: &PolicyRecord, flags: &FlagArgs, syscalls: &[String]) -> PolicyRecord {
    let mut policy = defaults.clone();

    policy.file = FilesystemPolicy::from_flags(
        flags.allow_file_system_read,
        flags.allow_file_system_write,
        flags.allow_file_system,
        flags.allow_file_system_permissions,
    );
    policy.network = NetworkPolicy::from_flags(
        flags.allow_networking,
        flags.allow_network_client,
        flags.allow_network_server,
        flags.allow_network_local_sockets,
    );
    policy.process = ProcessPolicy {
        allow_management: flags.allow_process_management,
    };

    for rule in &CATEGORY_RULES {
        policy
            .syscalls
            .set_category(rule.category, rule.evaluate(flags));
    }
    policy.syscalls.extend_allow_list(syscalls.iter().cloned());
    policy.syscalls.on_denied = flags.on_syscall_denied;

    policy.enforcement.enforce_on_startup = flags.enforce_on_startup;
    policy.enforcement.trigger_log_match = flags.trigger_enforce_on_log_match.clone();
    policy.enforcement.trigger_signal = flags.trigger_enforce_on_signal.clone();
    policy.enforcement.verbose = flags.verbose;

    policy
}
