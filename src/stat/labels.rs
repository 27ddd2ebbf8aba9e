use super::FileType;
use std::collections::HashMap;

/// Label used whenever a lookup has nothing better to offer
pub const UNKNOWN_LABEL: &str = "UNKNOWN FILE TYPE";

impl FileType {
    /// Human-readable label from the fixed default table
    pub const fn label(self) -> &'static str {
        match self {
            FileType::Unspecified => UNKNOWN_LABEL,
            FileType::Regular => "regular file",
            FileType::Directory => "directory",
            FileType::Symlink => "symbolic link",
            FileType::Pipe => "FIFO",
            FileType::Socket => "socket",
            FileType::CharDevice => "character special",
            FileType::BlockDevice => "block special",
        }
    }
}

/// Lookup table from file type to output label
///
/// Missing entries fall back to the table's own `Unspecified` label, then
/// to [`UNKNOWN_LABEL`].
#[derive(Debug, Clone)]
pub struct FileTypeLabels {
    map: HashMap<FileType, String>,
}

impl FileTypeLabels {
    /// Create an empty table; every lookup yields [`UNKNOWN_LABEL`]
    pub fn empty() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Override (or add) the label for one file type
    pub fn set(&mut self, file_type: FileType, label: impl Into<String>) {
        self.map.insert(file_type, label.into());
    }

    /// Builder-style variant of [`FileTypeLabels::set`]
    pub fn with(mut self, file_type: FileType, label: impl Into<String>) -> Self {
        self.set(file_type, label);
        self
    }

    pub fn label(&self, file_type: FileType) -> &str {
        self.map
            .get(&file_type)
            .or_else(|| self.map.get(&FileType::Unspecified))
            .map(String::as_str)
            .unwrap_or(UNKNOWN_LABEL)
    }

    /// Label a raw numeric code; codes outside the enumeration get the fallback
    pub fn label_for_code(&self, code: i64) -> &str {
        self.label(FileType::from_code(code).unwrap_or(FileType::Unspecified))
    }
}

impl Default for FileTypeLabels {
    fn default() -> Self {
        let map = FileType::ALL
            .into_iter()
            .map(|t| (t, t.label().to_string()))
            .collect();
        Self { map }
    }
}
