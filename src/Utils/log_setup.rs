use chrono::Local;
use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use log::debug;
use std::fs::{self, File};

/// "off" | "none" | "error" | "warn" | "info" | "debug" -> LevelFilter
pub fn parse_log_level(level: &str) -> Result<LevelFilter, String> {
    match level.trim().to_lowercase().as_str() {
        "off" | "none" => Ok(LevelFilter::Off),
        "error" => Ok(LevelFilter::Error),
        "warn" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        other => Err(format!(
            "loglevel must be off, error, warn, info or debug, got '{}'",
            other
        )),
    }
}

/// Terminal logger, plus a log_<date>.txt file logger when `to_file` is set.
/// Returns the name of the log file if one was created. A logger that is already
/// installed is kept.
pub fn init_logger(level: LevelFilter, to_file: bool) -> Option<String> {
    if level == LevelFilter::Off {
        return None;
    }
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    loggers.push(TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ));

    let mut log_name = None;
    if to_file {
        let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
        let name = format!("log_{}.txt", date_and_time);
        match File::create(&name) {
            Ok(file) => {
                loggers.push(WriteLogger::new(level, Config::default(), file));
                log_name = Some(name);
            }
            Err(e) => eprintln!("could not create log file {}: {}", name, e),
        }
    }

    if install(loggers) {
        return log_name;
    }
    // the file logger was dropped with the rejected set, so its file stays empty
    if let Some(name) = log_name {
        if let Err(e) = fs::remove_file(&name) {
            debug!("could not remove unused log file {}: {}", name, e);
        }
    }
    None
}

/// true if these loggers were installed, false if a logger was already in place
fn install(loggers: Vec<Box<dyn SharedLogger>>) -> bool {
    let logger_instance = CombinedLogger::init(loggers);
    match logger_instance {
        Ok(()) => true,
        Err(_) => {
            debug!("a logger is already installed, keeping it");
            false
        }
    }
}
