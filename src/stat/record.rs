use super::{FileType, FileTypeLabels, ModeBits};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

/// Microseconds since the Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct UnixtimeUs(pub i64);

impl UnixtimeUs {
    /// Convert a system time, saturating at the `i64` range. Times before
    /// the epoch round down, so -1.5us becomes -2us.
    pub fn from_system_time(time: SystemTime) -> Self {
        match time.duration_since(UNIX_EPOCH) {
            Ok(after) => Self(i64::try_from(after.as_micros()).unwrap_or(i64::MAX)),
            Err(before) => {
                let d = before.duration();
                let whole = d.as_micros() + u128::from(d.subsec_nanos() % 1_000 != 0);
                Self(i64::try_from(whole).map(|us| -us).unwrap_or(i64::MIN))
            }
        }
    }

    /// From a `(seconds, nanoseconds)` pair as found in `struct stat`
    pub fn from_unix_parts(secs: i64, nanos: i64) -> Self {
        Self(
            secs.saturating_mul(1_000_000)
                .saturating_add(nanos.div_euclid(1_000)),
        )
    }

    /// Calendar rendering; `None` only for values outside chrono's range
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_micros(self.0)
    }
}

/// Per-file metadata record produced by resolving one name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicStat {
    path: String,
    size: i64,
    modified: UnixtimeUs,
    file_type: FileType,
}

/// JSON shape of a [`BasicStat`], one per output line
#[derive(Debug, Serialize)]
pub struct BasicStatJson<'a> {
    pub path: &'a str,
    pub size: i64,
    pub modified_time: DateTime<Utc>,
    pub file_type: &'a str,
}

impl BasicStat {
    pub fn new(
        path: impl Into<String>,
        size: i64,
        modified: UnixtimeUs,
        file_type: FileType,
    ) -> Self {
        Self {
            path: path.into(),
            size,
            modified,
            file_type,
        }
    }

    /// Build a record from a raw `struct stat`. The path is left empty; raw
    /// metadata does not know its own name, the caller attaches it with
    /// [`BasicStat::with_path`].
    pub fn from_stat(st: &libc::stat) -> Self {
        Self {
            path: String::new(),
            size: st.st_size as i64,
            modified: UnixtimeUs::from_unix_parts(st.st_mtime as i64, st.st_mtime_nsec as i64),
            file_type: ModeBits::from_unix_mode(st.st_mode).classify(),
        }
    }

    /// Same record under a different path
    pub fn with_path(self, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..self
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    pub fn modified(&self) -> UnixtimeUs {
        self.modified
    }

    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    /// Borrowing JSON view, labelled through `labels`
    pub fn to_json<'a>(&'a self, labels: &'a FileTypeLabels) -> io::Result<BasicStatJson<'a>> {
        let modified_time = self.modified.to_datetime().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("modification time out of range: {}us", self.modified.0),
            )
        })?;

        Ok(BasicStatJson {
            path: &self.path,
            size: self.size,
            modified_time,
            file_type: labels.label(self.file_type),
        })
    }
}
