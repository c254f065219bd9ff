#[cfg(feature = "cli")]
pub mod cli;
pub mod env;
pub mod file;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use env::EnvConfig;
pub use file::TomlConfig;

pub const DEFAULT_FEED_UNIT: &str = "kg";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
