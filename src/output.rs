//! User-facing terminal output.
//! Consistent prefix-tagged messages, colored only when the stream is a TTY.
//! Diagnostic records go through `tracing`; these helpers carry the primary
//! output users read or script against.

use owo_colors::OwoColorize;

pub fn print_info(msg: &str) {
    if atty::is(atty::Stream::Stdout) {
        println!("{} {}", "info:".cyan().bold(), msg);
    } else {
        println!("info: {msg}");
    }
}

pub fn print_success(msg: &str) {
    if atty::is(atty::Stream::Stdout) {
        println!("{} {}", "ok:".green().bold(), msg);
    } else {
        println!("ok: {msg}");
    }
}

pub fn print_warn(msg: &str) {
    if atty::is(atty::Stream::Stderr) {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {msg}");
    }
}

pub fn print_error(msg: &str) {
    if atty::is(atty::Stream::Stderr) {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {msg}");
    }
}

/// Plain line with no prefix. Used for per-file progress pairs and the
/// dry-run plan, which users may pipe elsewhere.
pub fn print_user(msg: &str) {
    println!("{msg}");
}
