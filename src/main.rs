use clap::Parser;
use library_catalog::cli::{self, Argument};
use library_catalog::config;
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    let argument = Argument::parse();
    config::load_dotenv();

    let app_config = match config::load_config() {
        Ok(app_config) => app_config,
        Err(e) => {
            eprintln!("Cannot load config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let _guard = match app_config.logger() {
        Some(logger) => match config::log::set_global_logging_config(logger) {
            Ok(guard) => Some(guard),
            Err(e) => {
                eprintln!("Cannot set logging config: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => {
            config::log::set_default_logging_config();
            None
        }
    };

    let path = argument.file.as_deref()
        .unwrap_or_else(|| app_config.catalog().path());

    match cli::execute(&argument.command, path) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
