pub mod enforcement;
pub mod file;
pub mod model;
pub mod net;
pub mod process;
pub mod syscall;
pub mod target;
pub mod validate;

// Re-export main types for convenience
pub use enforcement::EnforcementPolicy;
pub use file::FilesystemPolicy;
pub use model::PolicyRecord;
pub use net::NetworkPolicy;
pub use process::ProcessPolicy;
pub use syscall::{DenialAction, SyscallCategory, SyscallPolicy};
pub use target::{ExecutionMode, TargetSpec};
pub use validate::validate;
