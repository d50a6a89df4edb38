use std::{
    fs::{OpenOptions, create_dir_all},
    path::Path,
};

use env_logger::{Builder, Target};
use log::LevelFilter;

pub fn parse_level(log_level: &str) -> Option<LevelFilter> {
    match log_level.trim().to_lowercase().as_str() {
        "trace" => Some(LevelFilter::Trace),
        "debug" => Some(LevelFilter::Debug),
        "info" => Some(LevelFilter::Info),
        "warn" => Some(LevelFilter::Warn),
        "error" => Some(LevelFilter::Error),
        "off" => Some(LevelFilter::Off),
        _ => None,
    }
}

pub fn init_logger(log_level: &str, log_file: Option<&str>) -> Result<(), String> {
    let level = parse_level(log_level).unwrap_or_else(|| {
        eprintln!("Invalid log level '{}', defaulting to info", log_level);
        LevelFilter::Info
    });

    let mut builder = Builder::new();
    builder.filter_level(level).format_timestamp_secs();

    // only write to file if configured
    if let Some(log_file) = log_file {
        if let Some(parent) = Path::new(log_file).parent() {
            create_dir_all(parent)
                .map_err(|err| format!("Failed to create log directory for '{}': {}", log_file, err))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .map_err(|err| format!("Failed to open log file '{}': {}", log_file, err))?;

        builder.target(Target::Pipe(Box::new(file)));
    }
    // else → default (stderr)

    builder
        .try_init()
        .map_err(|err| format!("Failed to initialise logger: {}", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_levels() {
        assert_eq!(parse_level("trace"), Some(LevelFilter::Trace));
        assert_eq!(parse_level("Debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" info "), Some(LevelFilter::Info));
        assert_eq!(parse_level("WARN"), Some(LevelFilter::Warn));
        assert_eq!(parse_level("error"), Some(LevelFilter::Error));
        assert_eq!(parse_level("off"), Some(LevelFilter::Off));
    }

    #[test]
    fn rejects_unknown_level() {
        assert_eq!(parse_level("verbose"), None);
    }

    #[test]
    fn file_target_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("roundabout.log");

        // the global logger can only be installed once per process
        let _ = init_logger("debug", path.to_str());

        assert!(path.exists());
    }
}
