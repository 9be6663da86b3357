mod platform;

use std::process::ExitCode;

use card_logging::card_error;

fn main() -> ExitCode {
    match platform::run_app() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            card_error!("card_app failed: {err}");
            ExitCode::FAILURE
        }
    }
}
