use std::ffi::OsString;
use std::path::{Component, Path};

/// One move of a containment walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// `..`: back up one directory
    Parent,
    /// Descend into (or stop at) the named entry
    Child(OsString),
}

pub struct PathSanitizer;

impl PathSanitizer {
    /// Split a relative path into walk steps.
    ///
    /// `.` components are dropped, `..` becomes [`Step::Parent`]. Whether a
    /// `..` climbs out of the root can only be decided during the walk, once
    /// symlinks along the way are known.
    ///
    /// Returns `None` for anchored paths (absolute, or with a drive/UNC
    /// prefix): those never name something relative to a root.
    pub fn steps(path: &Path) -> Option<Vec<Step>> {
        let mut steps = Vec::new();

        for component in path.components() {
            match component {
                Component::Prefix(_) | Component::RootDir => return None,
                Component::CurDir => continue,
                Component::ParentDir => steps.push(Step::Parent),
                Component::Normal(part) => steps.push(Step::Child(part.to_os_string())),
            }
        }

        Some(steps)
    }
}
