//! Enrichment of io::Error values with actionable hints.
//!
//! Usage:
//!   fs::rename(src, dst).map_err(io_error_with_help_io("rename file", src))?;

use std::io;
use std::path::Path;

/// Platform-aware hint appended to the enriched message; empty when we have
/// nothing useful to add.
fn hint_for(e: &io::Error) -> &'static str {
    #[cfg(unix)]
    if let Some(code) = e.raw_os_error() {
        if code == libc::EACCES || code == libc::EPERM {
            return " — permission denied; check ownership and write access";
        }
        if code == libc::EXDEV {
            return " — cross-filesystem; atomic rename not possible";
        }
        if code == libc::ENOENT {
            return " — path not found; the file may have moved underneath us";
        }
        if code == libc::EEXIST {
            return " — already exists; refusing to overwrite";
        }
        if code == libc::ENOSPC {
            return " — no space left on device";
        }
        if code == libc::EROFS {
            return " — read-only filesystem; cannot write here";
        }
    }

    match e.kind() {
        io::ErrorKind::PermissionDenied => " — permission denied; check ownership and write access",
        io::ErrorKind::NotFound => " — path not found; the file may have moved underneath us",
        io::ErrorKind::AlreadyExists => " — already exists; refusing to overwrite",
        _ => "",
    }
}

/// `.map_err` adapter that preserves the original ErrorKind while rewriting
/// the message with the operation, the path, and a hint.
pub fn io_error_with_help_io<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> io::Error + 'a {
    move |e: io::Error| {
        let msg = format!("{} '{}': {}{}", op, path.display(), e, hint_for(&e));
        io::Error::new(e.kind(), msg)
    }
}
