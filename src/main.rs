use std::process::ExitCode;

use shuffle_rename::cli;
use shuffle_rename::errors::ShuffleRenameError;
use shuffle_rename::output;

mod app;

fn main() -> ExitCode {
    let args = cli::parse();
    match app::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&format!("{e:#}"));
            let code = e
                .downcast_ref::<ShuffleRenameError>()
                .map(|se| se.code())
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}
