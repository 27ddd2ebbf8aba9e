use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Every failure the stat pipeline can surface. At most one is reported per run.
#[derive(Error, Debug)]
pub enum StatError {
    #[error("Root directory not configured: set {key} or pass --root")]
    ConfigMissing { key: String },

    #[error("Root directory unavailable: {path}: {source}")]
    RootUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Path escapes root: {name}")]
    PathEscapesRoot { name: String },

    #[error("No such file in root: {name}")]
    NameNotFound { name: String },

    #[error("Failed to stat {name}: {source}")]
    StatUnavailable {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write record: {0}")]
    EncodeFailure(#[source] io::Error),
}

/// Coarse grouping of [`StatError`] used for exit status selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Root,
    Resolve,
    Encode,
}

impl StatError {
    /// Map an I/O error raised while looking up `name` to the matching variant
    pub(crate) fn from_lookup(name: &str, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => StatError::NameNotFound {
                name: name.to_string(),
            },
            _ => StatError::StatUnavailable {
                name: name.to_string(),
                source,
            },
        }
    }

    pub(crate) fn escapes(name: &str) -> Self {
        StatError::PathEscapesRoot {
            name: name.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            StatError::ConfigMissing { .. } => ErrorKind::Config,
            StatError::RootUnavailable { .. } => ErrorKind::Root,
            StatError::PathEscapesRoot { .. }
            | StatError::NameNotFound { .. }
            | StatError::StatUnavailable { .. } => ErrorKind::Resolve,
            StatError::EncodeFailure(_) => ErrorKind::Encode,
        }
    }

    /// Process exit status for this error (0 is reserved for success)
    pub fn exit_code(&self) -> u8 {
        match self.kind() {
            ErrorKind::Config => 2,
            ErrorKind::Root => 3,
            ErrorKind::Resolve => 4,
            ErrorKind::Encode => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_name_not_found() {
        let err = StatError::from_lookup("a.txt", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, StatError::NameNotFound { ref name } if name == "a.txt"));
    }

    #[test]
    fn test_other_io_maps_to_stat_unavailable() {
        let err = StatError::from_lookup(
            "a.txt",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, StatError::StatUnavailable { .. }));
        assert_eq!(err.kind(), ErrorKind::Resolve);
    }

    #[test]
    fn test_exit_codes_are_distinct_per_kind() {
        let config = StatError::ConfigMissing {
            key: "ENV_ROOT_DIR_NAME".to_string(),
        };
        let root = StatError::RootUnavailable {
            path: PathBuf::from("/nope"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        let escape = StatError::escapes("../x");
        let encode = StatError::EncodeFailure(io::Error::from(io::ErrorKind::BrokenPipe));

        assert_eq!(config.exit_code(), 2);
        assert_eq!(root.exit_code(), 3);
        assert_eq!(escape.exit_code(), 4);
        assert_eq!(encode.exit_code(), 5);
    }

    #[test]
    fn test_messages_name_the_input() {
        let err = StatError::escapes("../etc/passwd");
        assert!(err.to_string().contains("../etc/passwd"));
    }
}
