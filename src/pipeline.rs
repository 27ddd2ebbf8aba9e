use crate::encoder::JsonlEncoder;
use crate::error::StatError;
use crate::sandbox::SandboxRoot;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Open `root`, stat each name through it and write JSON lines to `writer`
///
/// The root is closed before returning, on success and on every error path.
/// Returns the number of records written.
pub fn stats_to_writer<N, W>(
    root: impl AsRef<Path>,
    names: N,
    writer: W,
    encoder: &JsonlEncoder,
) -> Result<usize, StatError>
where
    N: IntoIterator,
    N::Item: AsRef<str>,
    W: Write,
{
    let mut root = SandboxRoot::open(root)?;
    info!(root = %root.path().display(), "streaming stats");

    let result = encoder.encode(writer, root.stats(names));
    root.close();

    if let Ok(count) = result {
        info!(records = count, "done");
    }
    result
}

/// [`stats_to_writer`] with the default labels, writing to stdout
pub fn stats_to_stdout<N>(root: impl AsRef<Path>, names: N) -> Result<usize, StatError>
where
    N: IntoIterator,
    N::Item: AsRef<str>,
{
    let stdout = std::io::stdout();
    stats_to_writer(root, names, stdout.lock(), &JsonlEncoder::new())
}
