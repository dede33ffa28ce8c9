//! Where bookcsv keeps its files
//!
//! ```text
//! <base>/bookcsv/config.yaml
//! <base>/bookcsv/logs/bookcsv.log.YYYY-MM-DD
//! ```
//!
//! `<base>` is `%APPDATA%` on Windows, otherwise `$XDG_CONFIG_HOME` or
//! `~/.config`.

use std::{env, fs, io, path::PathBuf};

const APP_DIR: &str = "bookcsv";

/// Prefix of the daily rotated log files
pub const LOG_FILE_NAME: &str = "bookcsv.log";

fn base_dir() -> Option<PathBuf> {
    if cfg!(target_os = "windows") {
        env::var_os("APPDATA").map(PathBuf::from)
    } else {
        env::var_os("XDG_CONFIG_HOME")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
    }
}

/// `<base>/bookcsv`
pub fn config_dir() -> Option<PathBuf> {
    base_dir().map(|base| base.join(APP_DIR))
}

/// `<base>/bookcsv/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `<base>/bookcsv/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> io::Result<PathBuf> {
    let logs = logs_dir().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "no home or config directory")
    })?;
    fs::create_dir_all(&logs)?;
    Ok(logs)
}
