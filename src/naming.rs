//! Target-name generation.
//! Produces the zero-padded sequential names and the per-batch disambiguation
//! suffix used by the two-phase in-place rename.

use std::path::Path;

use rand::{Rng, distr::Alphanumeric};

/// Marker that precedes the random token in an intermediate name.
pub(crate) const SUFFIX_MARKER: &str = ".pending-";
/// Number of random alphanumeric characters in the token.
pub(crate) const SUFFIX_TOKEN_LEN: usize = 8;
/// Serialized length of a batch suffix. The stripper truncates exactly this
/// many bytes, so generator and stripper must agree on it.
pub const SUFFIX_LEN: usize = SUFFIX_MARKER.len() + SUFFIX_TOKEN_LEN;

/// Number of decimal digits needed to display `total`; `digit_width(0) == 1`.
pub fn digit_width(total: usize) -> usize {
    let mut width = 1;
    let mut rest = total / 10;
    while rest > 0 {
        width += 1;
        rest /= 10;
    }
    width
}

/// Build the target file name for the entry at `index` in a batch of `total`.
///
/// The display number is `index + 1`, left-padded with zeros to the batch
/// width, followed by `ext` (including its leading dot, or empty) and `suffix`
/// verbatim. Pure and deterministic: `numbered_name(4, 87, ".mp3", "")` is
/// always `"005.mp3"`.
pub fn numbered_name(index: usize, total: usize, ext: &str, suffix: &str) -> String {
    let width = digit_width(total);
    format!("{:0width$}{ext}{suffix}", index + 1)
}

/// Extension of `path` including the leading dot, or empty when absent.
/// Non-UTF-8 extensions are treated as absent.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default()
}

/// Generate one disambiguation suffix for a whole batch (OS-seeded).
pub fn batch_suffix() -> String {
    let token: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SUFFIX_TOKEN_LEN)
        .map(char::from)
        .collect();
    format!("{SUFFIX_MARKER}{token}")
}

/// Remove a batch suffix from `name` by truncating exactly [`SUFFIX_LEN`]
/// bytes. Returns `None` when the tail does not carry the marker.
pub fn strip_batch_suffix(name: &str) -> Option<&str> {
    if name.len() < SUFFIX_LEN {
        return None;
    }
    let (kept, tail) = name.split_at(name.len() - SUFFIX_LEN);
    if !tail.starts_with(SUFFIX_MARKER) {
        return None;
    }
    Some(kept)
}
