const HYPHEN_PREFIX: &str = "--allow-syscall-";
const EQUALS_PREFIX: &str = "--allow-syscall=";

/// Arguments left for the flag parser and the syscall names pulled out of them
#[derive(Debug, Default, PartialEq)]
pub struct PreScan {
    pub remaining: Vec<String>,
    pub syscalls: Vec<String>,
}

/// Extract per-syscall allow directives before flag parsing
///
/// Recognizes `--allow-syscall-<name>` and `--allow-syscall=<name>`. Matching
/// tokens are removed and their names collected in order of appearance; every
/// other token is kept in its original relative order. Names are not checked
/// against any syscall table. A directive with an empty name is not a
/// directive and is left for the flag parser.
pub fn prescan_syscalls<I, S>(args: I) -> PreScan
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut scan = PreScan::default();
    for arg in args {
        let arg = arg.into();
        match syscall_name(&arg) {
            Some(name) => scan.syscalls.push(name.to_string()),
            None => scan.remaining.push(arg),
        }
    }
    scan
}

fn syscall_name(arg: &str) -> Option<&str> {
    arg.strip_prefix(EQUALS_PREFIX)
        .or_else(|| arg.strip_prefix(HYPHEN_PREFIX))
        .filter(|name| !name.is_empty())
}
