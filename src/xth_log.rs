use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use crate::xth_config::app_dir;

/// Environment variable holding the log filter (e.g. `XTHGMN_LOG=debug`)
pub const LOG_ENV: &str = "XTHGMN_LOG";

/// Log file path (<app_dir>/<exe_name>.log)
pub fn log_path() -> Option<PathBuf> {
    app_dir().map(|(dir, name)| dir.join(format!("{}.log", name)))
}

/// Build a logger that appends to `path`, filtered by `XTHGMN_LOG`
/// Defaults to `info` if the variable is not set
fn file_logger(path: &Path) -> Option<Builder> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path).ok()?;
    let mut builder = Builder::new();
    builder
        .filter_level(LevelFilter::Info)
        .parse_env(Env::new().filter(LOG_ENV))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_secs();
    Some(builder)
}

/// Initialize file logging
/// The terminal is owned by the full-screen UI, so records never go to stderr
/// Logging stays disabled if the log file cannot be opened
pub fn init_logging() {
    if let Some(mut builder) = log_path().as_deref().and_then(file_logger) {
        let _ = builder.try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn creates_log_file() {
        let path = env::temp_dir()
            .join(format!("xthgmn-log-{}", std::process::id()))
            .join("test.log");
        assert!(file_logger(&path).is_some());
        assert!(path.exists());
        let _ = fs::remove_file(&path);
    }
}
