//! Engine configuration.
//!
//! Deliberately small: almost everything that would normally be
//! configurable (storage backend, HTTP port, identity provider) lives in
//! external collaborators this crate does not own.

use std::path::PathBuf;

use tracing::Level;

/// Runtime configuration for the engine core.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Directories searched (in order) for `.dipmap` files by name.
    pub map_search_dirs: Vec<PathBuf>,
    /// Default log verbosity when the host application hasn't already
    /// installed a `tracing` subscriber.
    pub log_level: Level,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            map_search_dirs: Vec::new(),
            log_level: Level::INFO,
        }
    }
}

impl EngineConfig {
    /// Builds a config from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// - `DIPLOMACY_MAP_DIR`: colon-separated list of directories to
    ///   search for named `.dipmap` files.
    /// - `DIPLOMACY_LOG`: a `tracing::Level` name (`trace`, `debug`,
    ///   `info`, `warn`, `error`).
    pub fn from_env() -> Self {
        let map_search_dirs = std::env::var("DIPLOMACY_MAP_DIR")
            .map(|v| v.split(':').map(PathBuf::from).collect())
            .unwrap_or_default();

        let log_level = std::env::var("DIPLOMACY_LOG")
            .ok()
            .and_then(|v| v.parse::<Level>().ok())
            .unwrap_or(Level::INFO);

        EngineConfig {
            map_search_dirs,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_info_level_and_no_search_dirs() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.log_level, Level::INFO);
        assert!(cfg.map_search_dirs.is_empty());
    }
}
