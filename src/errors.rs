//! Typed error definitions for shuffle_rename.
//! Each variant maps to a distinct process exit code so callers and scripts
//! can tell apart argument, precondition and relocation failures.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Relocation pass during which a failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The single pass, or pass one of a two-phase rename.
    First,
    /// Pass two of a two-phase rename (suffix stripping).
    Second,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::First => "first-phase",
            Phase::Second => "second-phase",
        })
    }
}

#[derive(Debug, Error)]
pub enum ShuffleRenameError {
    #[error("Input directory is required (use --in <DIR>)")]
    MissingInput,

    #[error("Input directory does not exist or is not readable: {}", .0.display())]
    InputDirInvalid(PathBuf),

    #[error("Failed to create output directory '{}'", .path.display())]
    OutputDirCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{phase} relocation failed, '{}' -> '{}'", .src.display(), .dest.display())]
    Transfer {
        phase: Phase,
        src: PathBuf,
        dest: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ShuffleRenameError {
    /// Stable process exit code for this failure.
    /// Code 1 is reserved for argument-parse failures handled in `cli`.
    pub fn code(&self) -> u8 {
        match self {
            ShuffleRenameError::MissingInput => 2,
            ShuffleRenameError::InputDirInvalid(_) => 3,
            ShuffleRenameError::OutputDirCreate { .. } => 4,
            ShuffleRenameError::Transfer { phase: Phase::First, .. } => 5,
            ShuffleRenameError::Transfer { phase: Phase::Second, .. } => 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_and_stable() {
        let transfer = |phase| ShuffleRenameError::Transfer {
            phase,
            src: PathBuf::from("a"),
            dest: PathBuf::from("b"),
            source: io::Error::new(io::ErrorKind::AlreadyExists, "exists"),
        };

        assert_eq!(ShuffleRenameError::MissingInput.code(), 2);
        assert_eq!(ShuffleRenameError::InputDirInvalid(PathBuf::from("/nope")).code(), 3);
        assert_eq!(
            ShuffleRenameError::OutputDirCreate {
                path: PathBuf::from("/ro"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            }
            .code(),
            4
        );
        assert_eq!(transfer(Phase::First).code(), 5);
        assert_eq!(transfer(Phase::Second).code(), 6);
    }

    #[test]
    fn transfer_error_names_the_failing_pair() {
        let e = ShuffleRenameError::Transfer {
            phase: Phase::First,
            src: PathBuf::from("/in/a.mp3"),
            dest: PathBuf::from("/out/01.mp3"),
            source: io::Error::new(io::ErrorKind::AlreadyExists, "exists"),
        };
        let msg = e.to_string();
        assert!(msg.contains("/in/a.mp3"));
        assert!(msg.contains("/out/01.mp3"));
        assert!(msg.contains("first-phase"));
    }
}
