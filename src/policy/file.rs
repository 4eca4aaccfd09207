use serde::Serialize;

/// File system access granted to the target
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FilesystemPolicy {
    pub allow_read: bool,
    pub allow_write: bool,
    pub allow_permissions: bool,
}

impl FilesystemPolicy {
    /// Build from the file system flags
    ///
    /// `full_access` grants both read and write, and write always implies read.
    pub fn from_flags(read: bool, write: bool, full_access: bool, permissions: bool) -> Self {
        let allow_write = write || full_access;
        Self {
            allow_read: read || allow_write,
            allow_write,
            allow_permissions: permissions,
        }
    }
}
