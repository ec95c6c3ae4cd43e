use std::process::ExitCode;

use tracing::error;

fn main() -> ExitCode {
    transcript_export::logging::init();

    match transcript_export::cli::run() {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
