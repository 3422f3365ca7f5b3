//! Batch relocation.
//!
//! Applies the move/copy primitive across the shuffled batch, assigning the
//! zero-padded sequential names. When the batch moves files within the
//! directory they were read from, a naive single pass could overwrite a
//! source that has not been processed yet (the new name of file *i* may equal
//! the original name of file *j*). That case runs in two phases: pass one
//! parks every file under a shared disambiguation suffix, pass two strips the
//! suffix with a pure same-directory rename.

use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::errors::{Phase, ShuffleRenameError};
use crate::fs_ops::{copy_path, move_path, rename_path};
use crate::naming;
use crate::output;

/// Whether the batch copies or moves files. Chosen once at startup from the
/// CLI and dispatched explicitly for every file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferMode {
    Copy,
    Move,
}

impl TransferMode {
    fn apply(self, src: &Path, dst: &Path) -> io::Result<()> {
        match self {
            TransferMode::Copy => copy_path(src, dst),
            TransferMode::Move => move_path(src, dst),
        }
    }

    pub fn verb(self) -> &'static str {
        match self {
            TransferMode::Copy => "copy",
            TransferMode::Move => "move",
        }
    }
}

/// Per-file progress reporting, selected once at startup. Observational only;
/// it never affects control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Silent,
    Verbose,
}

impl Progress {
    pub fn note(self, from: &Path, to: &Path) {
        debug!(from = %from.display(), to = %to.display(), "transfer");
        if self == Progress::Verbose {
            output::print_user(&format!("[{}] <- [{}]", to.display(), from.display()));
        }
    }
}

/// True when assigning final names in a single pass could overwrite an
/// unprocessed source: the destination is the source directory itself and the
/// operation is a move. Copies never destroy sources; moves to a distinct
/// directory land in a disjoint namespace.
pub fn needs_two_phase(source_dir: &Path, dest_dir: &Path, mode: TransferMode) -> bool {
    if mode != TransferMode::Move {
        return false;
    }
    canonical_dir(source_dir) == canonical_dir(dest_dir)
}

fn canonical_dir(dir: &Path) -> PathBuf {
    dunce::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf())
}

/// Relocate the already-shuffled batch into `dest_dir`, index ascending.
///
/// Aborts on the first primitive failure, reporting the failing pair and the
/// pass it occurred in. Files already relocated stay relocated; a two-phase
/// batch interrupted mid-way leaves the remaining intermediates under their
/// suffixed names. Each batch entry is overwritten in place with the file's
/// current path as relocation proceeds.
pub fn relocate(
    batch: &mut [PathBuf],
    source_dir: &Path,
    dest_dir: &Path,
    mode: TransferMode,
    progress: Progress,
) -> Result<(), ShuffleRenameError> {
    let total = batch.len();

    if needs_two_phase(source_dir, dest_dir, mode) {
        let suffix = naming::batch_suffix();
        debug!(total, %suffix, "in-place move; two-phase rename");

        // Pass 1: park every file under its suffixed target name so no final
        // name can collide with a source that has not been moved yet.
        for (i, entry) in batch.iter_mut().enumerate() {
            let ext = naming::extension_of(entry);
            let target = dest_dir.join(naming::numbered_name(i, total, &ext, &suffix));
            progress.note(entry, &target);
            move_path(entry, &target)
                .map_err(|e| transfer_error(Phase::First, entry, &target, e))?;
            *entry = target;
        }

        // Pass 2: strip the suffix. Same directory, so a pure rename.
        for entry in batch.iter_mut() {
            let final_path = suffix_stripped(entry)
                .map_err(|e| transfer_error(Phase::Second, entry, entry, e))?;
            progress.note(entry, &final_path);
            rename_path(entry, &final_path)
                .map_err(|e| transfer_error(Phase::Second, entry, &final_path, e))?;
            *entry = final_path;
        }
    } else {
        for (i, entry) in batch.iter_mut().enumerate() {
            let ext = naming::extension_of(entry);
            let target = dest_dir.join(naming::numbered_name(i, total, &ext, ""));
            progress.note(entry, &target);
            mode.apply(entry, &target)
                .map_err(|e| transfer_error(Phase::First, entry, &target, e))?;
            *entry = target;
        }
    }

    info!(total, mode = mode.verb(), dest = %dest_dir.display(), "batch relocation complete");
    Ok(())
}

/// Final path for an intermediate: the same name with the batch suffix
/// truncated. The suffix has a fixed serialized length, so this is an exact
/// fixed-length cut.
fn suffix_stripped(path: &Path) -> io::Result<PathBuf> {
    let name = path.file_name().and_then(|n| n.to_str()).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("intermediate name is not valid UTF-8: {}", path.display()),
        )
    })?;
    let kept = naming::strip_batch_suffix(name).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("intermediate name lost its batch suffix: {name}"),
        )
    })?;
    Ok(path.with_file_name(kept))
}

fn transfer_error(phase: Phase, src: &Path, dest: &Path, source: io::Error) -> ShuffleRenameError {
    ShuffleRenameError::Transfer {
        phase,
        src: src.to_path_buf(),
        dest: dest.to_path_buf(),
        source,
    }
}
