use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// An entry that could not be removed during a directory reset
#[derive(Debug)]
pub struct RemovalFailure {
    pub path: PathBuf,
    pub error: io::Error,
}

/// Outcome of [`clean_dir`]
#[derive(Debug)]
pub enum DirReset {
    /// The directory exists and every entry was removed
    Cleaned {
        created: bool,
        removed: Vec<PathBuf>,
    },
    /// The directory exists but some entries are still in it
    PartiallyCleaned {
        created: bool,
        removed: Vec<PathBuf>,
        failures: Vec<RemovalFailure>,
    },
    /// The directory could not be created or listed
    NotCleaned { created: bool, error: io::Error },
}

impl DirReset {
    /// True when the directory is known to exist and be empty
    pub fn is_clean(&self) -> bool {
        matches!(self, DirReset::Cleaned { .. })
    }

    /// Whether this reset had to create the directory
    pub fn created(&self) -> bool {
        match self {
            DirReset::Cleaned { created, .. }
            | DirReset::PartiallyCleaned { created, .. }
            | DirReset::NotCleaned { created, .. } => *created,
        }
    }

    /// Entries that were removed
    pub fn removed(&self) -> &[PathBuf] {
        match self {
            DirReset::Cleaned { removed, .. } | DirReset::PartiallyCleaned { removed, .. } => {
                removed.as_slice()
            }
            DirReset::NotCleaned { .. } => &[],
        }
    }

    /// Entries that could not be removed
    pub fn failures(&self) -> &[RemovalFailure] {
        match self {
            DirReset::PartiallyCleaned { failures, .. } => failures.as_slice(),
            _ => &[],
        }
    }

    /// Turns anything short of a full clean into an error
    pub fn into_result(self) -> Result<Vec<PathBuf>, CleanError> {
        match self {
            DirReset::Cleaned { removed, .. } => Ok(removed),
            DirReset::PartiallyCleaned { failures, .. } => Err(CleanError::Partial {
                remaining: failures.into_iter().map(|f| f.path).collect(),
            }),
            DirReset::NotCleaned { error, .. } => Err(CleanError::Inaccessible(error)),
        }
    }
}

/// Error form of a directory reset that did not fully succeed
#[derive(Debug, Error)]
pub enum CleanError {
    #[error("could not remove {} entries", .remaining.len())]
    Partial { remaining: Vec<PathBuf> },
    #[error("directory could not be prepared: {0}")]
    Inaccessible(#[source] io::Error),
}

/// Ensures `path` is an existing, empty directory.
///
/// Missing directories are created. Every entry directly under the path is
/// removed as a file; subdirectories are not descended into and fail to
/// remove. Failures are logged and reported in the returned [`DirReset`],
/// never raised.
pub fn clean_dir(path: impl AsRef<Path>) -> DirReset {
    let path = path.as_ref();
    let mut created = false;

    if path.as_os_str().is_empty() {
        let error = io::Error::new(io::ErrorKind::InvalidInput, "directory path is empty");
        log::error!("Error occurred while cleaning directory: {}", error);
        return DirReset::NotCleaned { created, error };
    }

    if !path.exists() {
        if let Err(error) = fs::create_dir_all(path) {
            log::error!(
                "Error occurred while cleaning directory {}: {}",
                path.display(),
                error
            );
            return DirReset::NotCleaned { created, error };
        }
        created = true;
        log::info!("Created directory: {}", path.display());
    }

    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(error) => {
            log::error!(
                "Error occurred while cleaning directory {}: {}",
                path.display(),
                error
            );
            return DirReset::NotCleaned { created, error };
        }
    };

    let mut removed = Vec::new();
    let mut failures = Vec::new();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                log::error!("Failed to read entry in {}: {}", path.display(), error);
                failures.push(RemovalFailure {
                    path: path.to_path_buf(),
                    error,
                });
                continue;
            }
        };

        let file_path = entry.path();
        match fs::remove_file(&file_path) {
            Ok(()) => {
                log::info!("Removed file: {}", file_path.display());
                removed.push(file_path);
            }
            Err(error) => {
                log::error!("Failed to remove {}: {}", file_path.display(), error);
                failures.push(RemovalFailure {
                    path: file_path,
                    error,
                });
            }
        }
    }

    if failures.is_empty() {
        log::info!("Cleaned {} directory", path.display());
        DirReset::Cleaned { created, removed }
    } else {
        log::error!(
            "Error occurred while cleaning directory {}: {} entries left behind",
            path.display(),
            failures.len()
        );
        DirReset::PartiallyCleaned {
            created,
            removed,
            failures,
        }
    }
}
