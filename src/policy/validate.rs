use crate::error::{ValidationError, Violation};

use super::model::PolicyRecord;

/// Check a resolved policy before it is handed to the supervisor
///
/// Collects every broken invariant instead of stopping at the first one.
/// The record is returned untouched on success.
pub fn validate(policy: PolicyRecord) -> Result<PolicyRecord, ValidationError> {
    let violations = violations(&policy);
    if violations.is_empty() {
        Ok(policy)
    } else {
        Err(ValidationError { violations })
    }
}

fn violations(policy: &PolicyRecord) -> Vec<Violation> {
    let mut violations = Vec::new();

    if policy.enforcement.is_deferred() && !policy.enforcement.has_trigger() {
        violations.push(Violation::MissingEnforcementTrigger);
    }

    if policy.target.binary_path.is_empty() {
        violations.push(Violation::MissingTargetBinary);
    }

    if policy.file.allow_write && !policy.file.allow_read {
        violations.push(Violation::WriteWithoutRead);
    }

    violations
}
