//! Move/copy primitives.
//! All three fail when the destination already exists; the relocator relies
//! on that to surface collisions.

use std::fs;
use std::io;
use std::path::Path;
use tracing::warn;

use super::helpers::io_error_with_help_io;

fn ensure_vacant(dst: &Path) -> io::Result<()> {
    if dst.try_exists()? {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("destination already exists: {}", dst.display()),
        ));
    }
    Ok(())
}

/// Copy `src` to `dst`, leaving the source untouched.
pub fn copy_path(src: &Path, dst: &Path) -> io::Result<()> {
    ensure_vacant(dst)?;
    fs::copy(src, dst).map_err(io_error_with_help_io("copy file", src))?;
    Ok(())
}

/// Move `src` to `dst`: a rename when possible, copy+remove across devices.
pub fn move_path(src: &Path, dst: &Path) -> io::Result<()> {
    ensure_vacant(dst)?;
    match fs::rename(src, dst) {
        Ok(()) => Ok(()),
        Err(e) if is_cross_device(&e) => {
            warn!(src = %src.display(), dst = %dst.display(), "cross-device rename; falling back to copy+remove");
            fs::copy(src, dst).map_err(io_error_with_help_io("copy file", src))?;
            fs::remove_file(src).map_err(io_error_with_help_io("remove original file", src))
        }
        Err(e) => Err(io_error_with_help_io("rename file", src)(e)),
    }
}

/// Pure same-directory rename; used by the second pass of a two-phase batch,
/// which never crosses devices.
pub fn rename_path(src: &Path, dst: &Path) -> io::Result<()> {
    ensure_vacant(dst)?;
    fs::rename(src, dst).map_err(io_error_with_help_io("rename file", src))
}

fn is_cross_device(e: &io::Error) -> bool {
    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        if code == libc::EXDEV {
            return true;
        }
        #[cfg(windows)]
        if code == 17 {
            // ERROR_NOT_SAME_DEVICE
            return true;
        }
        let _ = code;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn copy_keeps_source_and_creates_destination() {
        let td = tempdir().unwrap();
        let src = td.path().join("src.txt");
        let dst = td.path().join("dst.txt");
        fs::write(&src, b"payload").unwrap();

        copy_path(&src, &dst).unwrap();
        assert!(src.is_file());
        assert_eq!(fs::read(&dst).unwrap(), b"payload");
    }

    #[test]
    fn copy_refuses_existing_destination() {
        let td = tempdir().unwrap();
        let src = td.path().join("src.txt");
        let dst = td.path().join("dst.txt");
        fs::write(&src, b"new").unwrap();
        fs::write(&dst, b"old").unwrap();

        let err = copy_path(&src, &dst).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read(&dst).unwrap(), b"old");
    }

    #[test]
    fn move_removes_source() {
        let td = tempdir().unwrap();
        let src = td.path().join("src.txt");
        let dst = td.path().join("dst.txt");
        fs::write(&src, b"payload").unwrap();

        move_path(&src, &dst).unwrap();
        assert!(!src.exists());
        assert_eq!(fs::read(&dst).unwrap(), b"payload");
    }

    #[test]
    fn move_fails_when_source_is_missing() {
        let td = tempdir().unwrap();
        let err = move_path(&td.path().join("gone.txt"), &td.path().join("dst.txt")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn rename_refuses_existing_destination() {
        let td = tempdir().unwrap();
        let src = td.path().join("a");
        let dst = td.path().join("b");
        fs::write(&src, b"a").unwrap();
        fs::write(&dst, b"b").unwrap();

        let err = rename_path(&src, &dst).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert!(src.exists());
    }
}
