use crate::error::StatError;
use clap::Parser;
use std::path::PathBuf;

/// Environment variable naming the sandbox root
pub const ROOT_ENV_KEY: &str = "ENV_ROOT_DIR_NAME";

/// Stat every file named on stdin, relative to a root directory, as JSON lines
#[derive(Debug, Parser)]
#[command(name = "names2stats2jsonl", version, about)]
pub struct Cli {
    /// Root directory all names are resolved in
    #[arg(long, env = ROOT_ENV_KEY)]
    pub root: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Validated run configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub root: PathBuf,
    pub log_level: String,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self, StatError> {
        let root = cli
            .root
            .filter(|r| !r.as_os_str().is_empty())
            .ok_or_else(|| StatError::ConfigMissing {
                key: ROOT_ENV_KEY.to_string(),
            })?;

        Ok(Self {
            root,
            log_level: cli.log_level,
        })
    }
}
