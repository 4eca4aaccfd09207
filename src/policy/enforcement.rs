use serde::Serialize;

/// When the policy becomes active
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnforcementPolicy {
    pub enforce_on_startup: bool,
    /// Activate once the target logs a line matching this text
    pub trigger_log_match: String,
    /// Activate once this signal is received
    pub trigger_signal: String,
    pub verbose: bool,
}

impl Default for EnforcementPolicy {
    fn default() -> Self {
        Self {
            enforce_on_startup: true,
            trigger_log_match: String::new(),
            trigger_signal: String::new(),
            verbose: false,
        }
    }
}

impl EnforcementPolicy {
    /// Enforcement waits for a runtime trigger
    pub fn is_deferred(&self) -> bool {
        !self.enforce_on_startup
    }

    pub fn has_trigger(&self) -> bool {
        !self.trigger_log_match.is_empty() || !self.trigger_signal.is_empty()
    }
}
