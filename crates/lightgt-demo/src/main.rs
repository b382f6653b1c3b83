use std::process::ExitCode;

use lightgt_engine::logging::{init_logging, LoggingConfig};
use lightgt_engine::DemoConfig;

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    match lightgt_engine::run(DemoConfig::default()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            // Init failures land here too; nothing past the failing phase ran.
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
