mod fd;

use crate::error::StatError;
use crate::security::{PathSanitizer, Step};
use crate::stat::BasicStat;
use std::collections::VecDeque;
use std::fs::OpenOptions;
use std::io;
use std::os::fd::{AsFd, OwnedFd};
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Symlink expansions allowed while resolving one name
pub const MAX_SYMLINKS: usize = 40;

/// An open directory that bounds every lookup made through it
///
/// Names are resolved one component at a time, each lookup relative to the
/// descriptor of the directory reached so far, starting at the root handle.
/// Symlinks are never followed by the kernel: the walk reads and expands them
/// itself, and any step that would leave the root (a `..` at the top, a link
/// pointing outside) fails with [`StatError::PathEscapesRoot`].
#[derive(Debug)]
pub struct SandboxRoot {
    /// Canonical root path, used to place absolute symlink targets
    path: PathBuf,
    /// Held open for the lifetime of the root; `None` once closed
    handle: Option<OwnedFd>,
}

impl SandboxRoot {
    /// Open `root` as a sandbox. It must exist and be a directory.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, StatError> {
        let root = root.as_ref();
        let unavailable = |source: io::Error| StatError::RootUnavailable {
            path: root.to_path_buf(),
            source,
        };

        let path = root.canonicalize().map_err(unavailable)?;
        let handle = OpenOptions::new()
            .read(true)
            .custom_flags(libc::O_DIRECTORY)
            .open(&path)
            .map_err(unavailable)?;

        debug!(root = %path.display(), "opened sandbox root");
        Ok(Self {
            path,
            handle: Some(OwnedFd::from(handle)),
        })
    }

    /// Canonical path of the root directory, as it was when opened
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }

    /// Release the root handle. Calling it again does nothing.
    pub fn close(&mut self) {
        if self.handle.take().is_some() {
            debug!(root = %self.path.display(), "closed sandbox root");
        }
    }

    /// Stat `name`, relative to the root, following symlinks that stay inside
    /// it. The returned record carries `name` verbatim as its path.
    ///
    /// A trailing `/` (or `/.`) requires the entry to be a directory.
    pub fn resolve(&self, name: &str) -> Result<BasicStat, StatError> {
        let Some(root) = self.handle.as_ref() else {
            return Err(StatError::StatUnavailable {
                name: name.to_string(),
                source: io::Error::other("sandbox root is closed"),
            });
        };
        if name.is_empty() {
            return Err(StatError::NameNotFound {
                name: String::new(),
            });
        }

        let st = self.walk(root, name)?;
        let wants_dir = matches!(name.rsplit_once('/'), Some((_, "" | ".")));
        if wants_dir && !fd::is_dir(&st) {
            return Err(StatError::StatUnavailable {
                name: name.to_string(),
                source: io::Error::from_raw_os_error(libc::ENOTDIR),
            });
        }

        let stat = BasicStat::from_stat(&st);
        debug!(entry = name, size = stat.size(), file_type = ?stat.file_type(), "resolved");
        Ok(stat.with_path(name))
    }

    /// Walk `name` down from `root` and stat what it lands on
    fn walk(&self, root: &OwnedFd, name: &str) -> Result<fd::Stat, StatError> {
        let lookup = |e: io::Error| StatError::from_lookup(name, e);

        let mut pending: VecDeque<Step> = PathSanitizer::steps(Path::new(name))
            .ok_or_else(|| StatError::escapes(name))?
            .into();
        // Directories entered below the root, innermost last
        let mut dirs: Vec<OwnedFd> = Vec::new();
        let mut found = None;
        let mut expansions = 0;

        while let Some(step) = pending.pop_front() {
            let part = match step {
                Step::Parent => {
                    if dirs.pop().is_none() {
                        return Err(StatError::escapes(name));
                    }
                    continue;
                }
                Step::Child(part) => part,
            };

            let here = dirs.last().unwrap_or(root).as_fd();
            let st = fd::lstat_at(here, &part).map_err(lookup)?;
            if !fd::is_symlink(&st) {
                if pending.is_empty() {
                    found = Some(st);
                } else {
                    // O_NOFOLLOW: an entry swapped for a link since the
                    // lstat fails here instead of being followed
                    let next = fd::open_dir_at(here, &part).map_err(lookup)?;
                    dirs.push(next);
                }
                continue;
            }

            expansions += 1;
            if expansions > MAX_SYMLINKS {
                return Err(StatError::StatUnavailable {
                    name: name.to_string(),
                    source: io::Error::from_raw_os_error(libc::ELOOP),
                });
            }

            let target = fd::read_link_at(here, &part).map_err(lookup)?;
            let target = if target.is_absolute() {
                // Absolute targets restart from the root, if they are under it
                let inside = target
                    .strip_prefix(&self.path)
                    .map_err(|_| StatError::escapes(name))?
                    .to_path_buf();
                dirs.clear();
                inside
            } else {
                target
            };

            let steps = PathSanitizer::steps(&target).ok_or_else(|| StatError::escapes(name))?;
            for step in steps.into_iter().rev() {
                pending.push_front(step);
            }
        }

        match found {
            Some(st) => Ok(st),
            None => fd::fstat(dirs.last().unwrap_or(root).as_fd()).map_err(lookup),
        }
    }
}

impl Drop for SandboxRoot {
    fn drop(&mut self) {
        self.close();
    }
}
