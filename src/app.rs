//! Application orchestrator.
//! Resolves settings, initializes logging, validates the directories, then
//! runs scan -> shuffle -> relocate and reports the outcome.

use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, error, info};

use shuffle_rename::cli::Args;
use shuffle_rename::config::Settings;
use shuffle_rename::errors::ShuffleRenameError;
use shuffle_rename::fs_ops::{ensure_input_dir, ensure_output_dir};
use shuffle_rename::logging::init_tracing;
use shuffle_rename::output as out;
use shuffle_rename::relocate::{Progress, TransferMode, relocate};
use shuffle_rename::{naming, plan, scan};

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    let settings = Settings::from_args(&args)?;

    // Guard must outlive the run so file logs are flushed on exit.
    let _guard = init_tracing(
        &settings.log_level,
        settings.log_file.as_deref(),
        settings.json_logs,
    )
    .map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {e}"));
        e
    })?;

    debug!(?settings, "starting shuffle_rename");

    ensure_input_dir(&settings.input_dir)?;
    ensure_output_dir(&settings.output_dir)?;

    let mut batch = scan::collect_files(&settings.input_dir, settings.ext_filter.as_deref())?;
    if batch.is_empty() {
        out::print_info(&format!(
            "No matching files under '{}'; nothing to do.",
            settings.input_dir.display()
        ));
        return Ok(());
    }
    info!(total = batch.len(), input = %settings.input_dir.display(), "collected batch");

    plan::shuffle_batch(&mut batch);

    if settings.dry_run {
        print_plan(&batch, &settings);
        return Ok(());
    }

    let progress = if settings.verbose {
        Progress::Verbose
    } else {
        Progress::Silent
    };

    if let Err(e) = relocate(
        &mut batch,
        &settings.input_dir,
        &settings.output_dir,
        settings.mode,
        progress,
    ) {
        if let ShuffleRenameError::Transfer { phase, src, dest, .. } = &e {
            error!(code = e.code(), %phase, src = %src.display(), dest = %dest.display(), "relocation aborted");
        }
        return Err(e.into());
    }

    let done = match settings.mode {
        TransferMode::Copy => "Copied",
        TransferMode::Move => "Moved",
    };
    out::print_success(&format!(
        "{} {} file(s) into '{}'",
        done,
        batch.len(),
        settings.output_dir.display()
    ));
    Ok(())
}

/// Dry-run output: one mapping line per file, single-phase naming.
fn print_plan(batch: &[PathBuf], settings: &Settings) {
    let total = batch.len();
    out::print_info(&format!(
        "Dry-run: would {} {} file(s) into '{}'",
        settings.mode.verb(),
        total,
        settings.output_dir.display()
    ));
    for (i, src) in batch.iter().enumerate() {
        let target = settings
            .output_dir
            .join(naming::numbered_name(i, total, &naming::extension_of(src), ""));
        out::print_user(&format!("[{}] <- [{}]", target.display(), src.display()));
    }
}
