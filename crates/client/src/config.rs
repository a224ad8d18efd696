//! Client configuration loaded from the process environment.

use std::env;
use std::path::PathBuf;

use pity_core::Rules;

const APPLICATION: &str = "pity";

/// Settings for one interactive session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Location of the persisted progress record.
    pub state_path: PathBuf,
    /// Directory receiving `client.log`.
    pub log_dir: PathBuf,
    /// Seed for a reproducible random source. `None` uses the thread RNG.
    pub seed: Option<u64>,
    /// Rows shown by the soft pity table.
    pub table_rows: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            state_path: data_dir().join("pity_state.json"),
            log_dir: log_dir(),
            seed: None,
            table_rows: Rules::DEFAULT_HARD_PITY,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `PITY_STATE_PATH` - State file (default: `<data dir>/pity_state.json`)
    /// - `PITY_LOG_DIR` - Log directory (default: `<cache dir>/logs`)
    /// - `PITY_SEED` - Seed for the deterministic random source (default: unset)
    /// - `PITY_TABLE_ROWS` - Soft pity table rows (default: 80)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(path) = read_env::<PathBuf>("PITY_STATE_PATH") {
            config.state_path = path;
        }
        if let Some(dir) = read_env::<PathBuf>("PITY_LOG_DIR") {
            config.log_dir = dir;
        }
        config.seed = read_env::<u64>("PITY_SEED");
        if let Some(rows) = read_env::<u32>("PITY_TABLE_ROWS") {
            config.table_rows = rows.max(1);
        }

        config
    }
}

/// Platform data directory, e.g. `~/.local/share/pity` on Linux.
fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APPLICATION)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

/// Platform log directory, e.g. `~/.cache/pity/logs` on Linux.
fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APPLICATION)
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| env::temp_dir().join(APPLICATION))
        .join("logs")
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_into_platform_directories() {
        let config = ClientConfig::default();
        assert!(config.state_path.ends_with("pity_state.json"));
        assert!(config.log_dir.ends_with("logs"));
        assert_eq!(config.seed, None);
        assert_eq!(config.table_rows, 80);
    }
}
