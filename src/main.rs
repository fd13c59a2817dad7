//! Binary entrypoint for the `upload-artifacts` CLI.

use std::process::ExitCode;

use artifact_upload::error::RunError;

fn main() -> ExitCode {
    // A missing .env file is normal; settings then come from flags and the environment.
    let _ = dotenvy::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Recording is handled in commands::dispatch via ARTIFACT_UPLOAD_RECORD=<dir>.
    match artifact_upload::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(RunError::Usage(err)) => {
            // Usage errors go to stderr, like clap's own exit path.
            let _ = err.print();
            ExitCode::FAILURE
        }
        Err(RunError::Command(message)) => {
            println!("{message}");
            ExitCode::FAILURE
        }
    }
}
