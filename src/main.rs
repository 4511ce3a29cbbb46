use std::process::ExitCode;

use dirculese::output as out;

mod app;
mod logging;

fn main() -> ExitCode {
    let args = dirculese::cli::parse();
    match app::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Silent mode mutes this too; the log file already has the details.
            out::print_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
