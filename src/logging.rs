//! log4rs setup.
//!
//! All log output goes to stderr; stdout is reserved for the report.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;

/// Default config file, relative to the working directory.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

const PATTERN: &str = "{d(%H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Initialise log4rs from `config_file`, falling back to a built-in stderr
/// config at `warn` when the file is missing or invalid.
pub fn init(config_file: &str) {
    let file_err = match log4rs::init_file(config_file, Default::default()) {
        Ok(()) => return,
        Err(e) => e,
    };

    match fallback_config().map(log4rs::init_config) {
        Ok(Ok(_handle)) => log::debug!("{config_file} not loaded ({file_err}), using built-in config"),
        Ok(Err(e)) => eprintln!("Error initializing log4rs: {e}"),
        Err(e) => eprintln!("Error building log4rs config: {e}"),
    }
}

fn fallback_config() -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    Ok(config)
}
