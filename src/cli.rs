//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - Copy is the default; --mv and --cp conflict.
//! - --debug is a shorthand for --log-level debug.

use clap::error::ErrorKind;
use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::LogLevel;

/// Renumber files in random order, copying or moving them.
#[derive(Parser, Debug, Clone)]
#[command(
    version,
    about = "Shuffle files into a randomized, sequentially numbered order"
)]
pub struct Args {
    /// Input directory, scanned recursively.
    #[arg(
        short = 'i',
        long = "in",
        value_name = "DIR",
        value_hint = ValueHint::DirPath,
        help = "Input directory"
    )]
    pub input: Option<PathBuf>,

    /// Output directory.
    #[arg(
        short = 'o',
        long = "out",
        value_name = "DIR",
        value_hint = ValueHint::DirPath,
        help = "Output directory (optional, defaults to the input directory)"
    )]
    pub output: Option<PathBuf>,

    /// Copy files (default behavior).
    #[arg(long = "cp", help = "Copy files (default behavior)")]
    pub cp: bool,

    /// Move files instead of copying.
    #[arg(long = "mv", conflicts_with = "cp", help = "Move files instead of copying")]
    pub mv: bool,

    /// Keep only files with this extension; exact, case-sensitive match.
    #[arg(
        short = 'e',
        long,
        value_name = "EXT",
        help = "File extension to filter (e.g. --ext \".mp3\")"
    )]
    pub ext: Option<String>,

    /// Print one (from, to) line per file per pass.
    #[arg(short = 'v', long, help = "Verbose: print each (from, to) pair")]
    pub verbose: bool,

    /// Show the planned renaming without touching the filesystem.
    #[arg(long, help = "Show what would be done, but do not modify files")]
    pub dry_run: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, value_name = "LEVEL", help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Also write logs to a file. A bare flag picks the OS data directory.
    #[arg(
        long,
        value_name = "PATH",
        num_args = 0..=1,
        help = "Write logs to a file (default location when PATH is omitted)"
    )]
    pub log_file: Option<Option<PathBuf>>,

    /// Emit logs in structured JSON (timestamp, level, structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > Normal.
    pub fn effective_log_level(&self) -> LogLevel {
        if self.debug {
            return LogLevel::Debug;
        }
        self.log_level
            .as_deref()
            .and_then(LogLevel::parse)
            .unwrap_or_default()
    }
}

/// Parse the command line. Usage problems print clap's message and exit with
/// code 1; --help/--version exit with 0.
pub fn parse() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            std::process::exit(0);
        }
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    }
}
