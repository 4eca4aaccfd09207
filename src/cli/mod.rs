pub mod args;
pub mod config;
pub mod loader;
pub mod prescan;
pub mod resolver;
pub mod target;

pub use args::FlagArgs;
pub use config::{DefaultPolicy, EnvSource, ProcessEnv};
pub use loader::PolicyLoader;
pub use prescan::{PreScan, prescan_syscalls};
pub use resolver::resolve;
pub use target::bind_target;
