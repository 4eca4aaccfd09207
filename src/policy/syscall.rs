use std::collections::{BTreeMap, BTreeSet};

use clap::ValueEnum;
use serde::{Serialize, Serializer};

/// Named group of related syscalls toggled as a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SyscallCategory {
    ProcessManagement,
    MemoryManagement,
    ProcessSynchronization,
    Signals,
    BasicTime,
    Misc,
    SecurityAndPermissions,
    SystemInformation,
    ProcessCommunication,
    TimersAndClocksManagement,
}

impl SyscallCategory {
    pub const ALL: [SyscallCategory; 10] = [
        SyscallCategory::ProcessManagement,
        SyscallCategory::MemoryManagement,
        SyscallCategory::ProcessSynchronization,
        SyscallCategory::Signals,
        SyscallCategory::BasicTime,
        SyscallCategory::Misc,
        SyscallCategory::SecurityAndPermissions,
        SyscallCategory::SystemInformation,
        SyscallCategory::ProcessCommunication,
        SyscallCategory::TimersAndClocksManagement,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SyscallCategory::ProcessManagement => "process-management",
            SyscallCategory::MemoryManagement => "memory-management",
            SyscallCategory::ProcessSynchronization => "process-synchronization",
            SyscallCategory::Signals => "signals",
            SyscallCategory::BasicTime => "basic-time",
            SyscallCategory::Misc => "misc",
            SyscallCategory::SecurityAndPermissions => "security-and-permissions",
            SyscallCategory::SystemInformation => "system-information",
            SyscallCategory::ProcessCommunication => "process-communication",
            SyscallCategory::TimersAndClocksManagement => "timers-and-clocks-management",
        }
    }

    /// Suffix of the `SYSCALLS_ALLOW_*` environment variable
    pub fn env_suffix(self) -> String {
        self.as_str().replace('-', "_").to_ascii_uppercase()
    }
}

impl Serialize for SyscallCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// What happens to the target when it calls a syscall outside the policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DenialAction {
    /// Fail the syscall and let the target continue
    Error,
    /// Kill the target
    #[default]
    Kill,
}

/// Syscall level policy: explicit allow list plus category toggles
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyscallPolicy {
    /// Explicitly allowed syscall names (duplicates are harmless)
    pub allow_list: Vec<String>,
    pub on_denied: DenialAction,
    pub categories: BTreeMap<SyscallCategory, bool>,
}

impl Default for SyscallPolicy {
    fn default() -> Self {
        Self {
            allow_list: Vec::new(),
            on_denied: DenialAction::default(),
            categories: SyscallCategory::ALL.iter().map(|c| (*c, false)).collect(),
        }
    }
}

impl SyscallPolicy {
    pub fn is_category_allowed(&self, category: SyscallCategory) -> bool {
        self.categories.get(&category).copied().unwrap_or(false)
    }

    pub fn set_category(&mut self, category: SyscallCategory, allowed: bool) {
        self.categories.insert(category, allowed);
    }

    /// Append syscall names to the allow list, keeping existing entries
    pub fn extend_allow_list<I>(&mut self, names: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.allow_list.extend(names);
    }

    /// Allow list membership
    pub fn allows(&self, name: &str) -> bool {
        self.allow_list.iter().any(|allowed| allowed == name)
    }

    /// Allow list as a set
    pub fn allowed_syscalls(&self) -> BTreeSet<&str> {
        self.allow_list.iter().map(String::as_str).collect()
    }

    pub fn kill_target_if_denied(&self) -> bool {
        self.on_denied != DenialAction::Error
    }

    pub fn deny_target_if_denied(&self) -> bool {
        self.on_denied == DenialAction::Error
    }
}
