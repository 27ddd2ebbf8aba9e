#[cfg(test)]
mod tests;

use crate::error::StatError;
use crate::stat::{BasicStat, FileTypeLabels};
use std::io::{self, BufWriter, Write};
use tracing::debug;

/// Writes stat records as JSON lines
///
/// Records are pulled one at a time. The first error, whether it comes from
/// upstream or from writing, stops the run and is returned; lines already
/// written stay written. The output buffer is flushed on every exit path.
#[derive(Debug, Clone, Default)]
pub struct JsonlEncoder {
    labels: FileTypeLabels,
}

impl JsonlEncoder {
    /// Encoder using the default label table
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_labels(labels: FileTypeLabels) -> Self {
        Self { labels }
    }

    pub fn labels(&self) -> &FileTypeLabels {
        &self.labels
    }

    /// Encode every record from `stats` into `writer`. Returns the number of
    /// lines written.
    pub fn encode<W, I>(&self, writer: W, stats: I) -> Result<usize, StatError>
    where
        W: Write,
        I: IntoIterator<Item = Result<BasicStat, StatError>>,
    {
        let mut out = BufWriter::new(writer);
        let written = self.write_all(&mut out, stats);
        let flushed = out.flush().map_err(StatError::EncodeFailure);

        // The run's own error wins over a flush error
        let count = written?;
        flushed?;
        debug!(lines = count, "encoded stats");
        Ok(count)
    }

    /// Serialize one record as a single line, newline included
    pub fn encode_one<W: Write>(&self, mut writer: W, stat: &BasicStat) -> Result<(), StatError> {
        let json = stat
            .to_json(&self.labels)
            .map_err(StatError::EncodeFailure)?;
        serde_json::to_writer(&mut writer, &json)
            .map_err(|e| StatError::EncodeFailure(io::Error::from(e)))?;
        writer.write_all(b"\n").map_err(StatError::EncodeFailure)
    }

    fn write_all<W, I>(&self, out: &mut W, stats: I) -> Result<usize, StatError>
    where
        W: Write,
        I: IntoIterator<Item = Result<BasicStat, StatError>>,
    {
        let mut count = 0;
        for stat in stats {
            self.encode_one(&mut *out, &stat?)?;
            count += 1;
        }
        Ok(count)
    }
}
