//! Cross-platform config file discovery.

use std::path::PathBuf;

pub const APP_DIR: &str = ".timefield";
pub const CONFIG_FILE: &str = "config.toml";

/// Candidate config file locations, in priority order:
/// 1. Home directory (~/.timefield/config.toml)
/// 2. Platform config directory (XDG on Linux, Application Support on
///    macOS, AppData on Windows)
pub fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(home) = home::home_dir() {
        candidates.push(home.join(APP_DIR).join(CONFIG_FILE));
    }

    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("timefield").join(CONFIG_FILE));
    }

    candidates
}

/// First candidate that exists on disk.
pub fn find_config_file() -> Option<PathBuf> {
    config_candidates().into_iter().find(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_end_with_config_file() {
        for path in config_candidates() {
            assert!(path.ends_with(CONFIG_FILE));
        }
    }

    #[test]
    fn test_found_file_is_a_candidate() {
        if let Some(found) = find_config_file() {
            assert!(config_candidates().contains(&found));
            assert!(found.is_file());
        }
    }
}
