//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Configuration required to bootstrap the terminal client.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    /// Directory with `classes.ron`, `skills.ron` and `config.toml`.
    /// `None` uses the embedded data set.
    pub data_dir: Option<PathBuf>,
    /// Seed for skill check rolls. `None` derives one from the clock.
    pub seed: Option<u64>,
    /// Root directory for session logs. `None` uses the platform cache dir.
    pub log_dir: Option<PathBuf>,
    /// Session identifier naming the log subdirectory.
    pub session_id: Option<String>,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CHARSHEET_DATA_DIR` - Rule table directory (default: embedded data)
    /// - `CHARSHEET_SEED` - Roll seed (default: derived from the clock)
    /// - `CHARSHEET_LOG_DIR` - Log root (default: platform cache directory)
    /// - `CHARSHEET_SESSION_ID` - Log session name (default: timestamp)
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var("CHARSHEET_DATA_DIR").ok().map(PathBuf::from),
            seed: read_env::<u64>("CHARSHEET_SEED"),
            log_dir: env::var("CHARSHEET_LOG_DIR").ok().map(PathBuf::from),
            session_id: env::var("CHARSHEET_SESSION_ID").ok(),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
