use std::process::ExitCode;

use human_panic::setup_panic;
use log::error;

use id3_rename::prelude::*;

fn main() -> ExitCode {
    setup_panic!();

    let matches = get_matches();

    let log_file = get_log_file(&matches);
    if let Err(e) = init_logger(get_verbosity(&matches), log_file.as_deref()) {
        eprintln!("Failed to initialise logging: {e:#}");
        return ExitCode::FAILURE;
    }

    match perform_processing_based_on_arguments(&matches) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
