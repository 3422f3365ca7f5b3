//! Default path helpers.

use std::fs;
use std::path::PathBuf;

use dirs::data_dir;

/// OS-appropriate default log file path, used when `--log-file` is passed
/// without an explicit location.
pub fn default_log_path() -> Option<PathBuf> {
    if let Some(mut base) = data_dir() {
        base.push("shuffle_rename");
        // best-effort; opening the file will surface real failures
        let _ = fs::create_dir_all(&base);
        base.push("shuffle_rename.log");
        Some(base)
    } else {
        std::env::var("HOME").ok().map(|h| {
            PathBuf::from(h)
                .join(".local")
                .join("share")
                .join("shuffle_rename")
                .join("shuffle_rename.log")
        })
    }
}
