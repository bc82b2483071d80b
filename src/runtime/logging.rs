use std::fs::OpenOptions;

use env_logger::{Env, Target};

use crate::config;

/// Route `log` records to the configured file.
///
/// Without a file nothing is installed and records are dropped; stderr would
/// draw over the UI.
pub fn init_logging(settings: &config::LoggingSettings) {
    let Some(path) = settings.file.as_ref() else {
        return;
    };

    let file = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("soundwave: cannot open log file {}: {e}", path.display());
            return;
        }
    };

    let result = env_logger::Builder::from_env(Env::default().default_filter_or(&settings.level))
        .format_timestamp_millis()
        .target(Target::Pipe(Box::new(file)))
        .try_init();
    if let Err(e) = result {
        eprintln!("soundwave: logger already initialised: {e}");
    }
}
