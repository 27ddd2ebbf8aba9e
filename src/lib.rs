#[cfg(not(unix))]
compile_error!("names2stats resolves names with unix *at syscalls and needs a unix target");

// Public API exports
pub mod config;
pub mod encoder;
pub mod error;
pub mod logging;
pub mod names;
pub mod pipeline;
pub mod sandbox;
pub mod security;
pub mod stat;
pub mod stream;

// Re-export main types for convenience
pub use error::{ErrorKind, StatError};
pub use sandbox::SandboxRoot;
pub use security::PathSanitizer;

pub use stat::{BasicStat, BasicStatJson, FileType, FileTypeLabels, ModeBits, UnixtimeUs};

pub use encoder::JsonlEncoder;
pub use stream::StatStream;

pub use config::{Cli, Config};
pub use names::read_names;
pub use pipeline::{stats_to_stdout, stats_to_writer};
