//! Directory preconditions.
//! The input root must already exist; the output root is created on demand.
//! Both checks run before any file is touched.

use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::errors::ShuffleRenameError;

/// The input root must exist, be a directory, and be readable.
pub fn ensure_input_dir(dir: &Path) -> Result<(), ShuffleRenameError> {
    if !dir.is_dir() {
        return Err(ShuffleRenameError::InputDirInvalid(dir.to_path_buf()));
    }
    // Readability probe; an unreadable root would otherwise fail mid-scan.
    fs::read_dir(dir).map_err(|_| ShuffleRenameError::InputDirInvalid(dir.to_path_buf()))?;
    debug!(dir = %dir.display(), "input directory ok");
    Ok(())
}

/// Create the output root when absent.
pub fn ensure_output_dir(dir: &Path) -> Result<(), ShuffleRenameError> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|e| ShuffleRenameError::OutputDirCreate {
        path: dir.to_path_buf(),
        source: e,
    })?;
    info!(dir = %dir.display(), "created output directory");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn input_dir_must_exist() {
        let td = tempdir().unwrap();
        let missing = td.path().join("nope");
        let err = ensure_input_dir(&missing).unwrap_err();
        assert!(matches!(err, ShuffleRenameError::InputDirInvalid(_)));
        assert_eq!(err.code(), 3);
    }

    #[test]
    fn input_dir_must_be_a_directory() {
        let td = tempdir().unwrap();
        let file = td.path().join("plain");
        fs::write(&file, b"x").unwrap();
        let err = ensure_input_dir(&file).unwrap_err();
        assert!(matches!(err, ShuffleRenameError::InputDirInvalid(_)));
    }

    #[test]
    fn output_dir_is_created_when_absent() {
        let td = tempdir().unwrap();
        let out = td.path().join("a").join("b");
        ensure_output_dir(&out).unwrap();
        assert!(out.is_dir());
    }

    #[test]
    fn output_dir_creation_failure_is_fatal() {
        let td = tempdir().unwrap();
        let squatter = td.path().join("occupied");
        fs::write(&squatter, b"x").unwrap();
        let err = ensure_output_dir(&squatter).unwrap_err();
        assert!(matches!(err, ShuffleRenameError::OutputDirCreate { .. }));
        assert_eq!(err.code(), 4);
    }
}
