use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of the timetable data layer.
///
/// The `Display` text is the underlying I/O reason, so it can be placed
/// straight into a status line after a short action prefix.
#[derive(Debug, Error)]
pub enum TimetableError {
    #[error("{source} ({})", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{source} ({})", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TimetableError {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TimetableError>;
