//! Runtime settings.
//! - Settings holds the fully resolved configuration for one invocation.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::cli::Args;
use crate::errors::ShuffleRenameError;
use crate::paths;
use crate::relocate::TransferMode;

/// Program-defined verbosity levels exposed to users.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More detail
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        })
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Fully resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Root to scan for files
    pub input_dir: PathBuf,
    /// Where renumbered files land; equals input_dir unless --out is given
    pub output_dir: PathBuf,
    /// Copy (default) or move
    pub mode: TransferMode,
    /// Literal extension filter including the leading dot
    pub ext_filter: Option<String>,
    /// Per-file progress lines
    pub verbose: bool,
    /// Plan only, no filesystem mutation
    pub dry_run: bool,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// Structured JSON log output
    pub json_logs: bool,
}

impl Settings {
    /// Resolve settings from parsed CLI arguments.
    /// The only hard requirement at this stage is the input directory flag.
    pub fn from_args(args: &Args) -> Result<Self, ShuffleRenameError> {
        let input_dir = args.input.clone().ok_or(ShuffleRenameError::MissingInput)?;
        let output_dir = args.output.clone().unwrap_or_else(|| input_dir.clone());
        let mode = if args.mv { TransferMode::Move } else { TransferMode::Copy };
        let log_file = match &args.log_file {
            None => None,
            Some(Some(path)) => Some(path.clone()),
            Some(None) => paths::default_log_path(),
        };

        Ok(Self {
            input_dir,
            output_dir,
            mode,
            ext_filter: args.ext.as_deref().map(normalize_ext_filter),
            verbose: args.verbose,
            dry_run: args.dry_run,
            log_level: args.effective_log_level(),
            log_file,
            json_logs: args.json,
        })
    }
}

/// Accept `--ext mp3` as well as `--ext .mp3`; matching stays literal and
/// case-sensitive after this.
fn normalize_ext_filter(raw: &str) -> String {
    if raw.starts_with('.') {
        raw.to_string()
    } else {
        format!(".{raw}")
    }
}
