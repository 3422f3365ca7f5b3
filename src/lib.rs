//! Core library for `shuffle_rename`.
//!
//! Renumbers a set of files into a randomized, sequentially numbered naming
//! scheme, optionally relocating them to another directory and filtering by
//! extension. The interesting part lives in [`relocate`]: when files are
//! moved within the directory they came from, target names can collide with
//! sources that have not been processed yet, so the batch runs as a two-phase
//! rename through temporary suffixed names.
//!
//! Pipeline: [`scan`] collects paths, [`plan`] shuffles them, [`relocate`]
//! applies the move/copy primitive from [`fs_ops`] using names from
//! [`naming`].

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod logging;
pub mod naming;
pub mod output;
pub mod paths;
pub mod plan;
pub mod relocate;
pub mod scan;

pub use config::{LogLevel, Settings};
pub use errors::{Phase, ShuffleRenameError};
pub use relocate::{Progress, TransferMode, needs_two_phase, relocate};
