use std::io::BufRead;
use tracing::warn;

/// Lazily read one name per line from `reader`
///
/// Line endings (`\n` or `\r\n`) are stripped; nothing else is touched, so
/// blank lines come through as empty names. A read error (including invalid
/// UTF-8) ends the sequence after a warning.
pub fn read_names<R: BufRead>(reader: R) -> impl Iterator<Item = String> {
    reader.lines().map_while(|line| match line {
        Ok(name) => Some(name),
        Err(e) => {
            warn!(error = %e, "stopped reading names");
            None
        }
    })
}

/// Names from standard input
pub fn stdin_names() -> impl Iterator<Item = String> {
    read_names(std::io::stdin().lock())
}
