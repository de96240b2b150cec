use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Resolve the data directory by priority:
/// 1. Explicit --data-dir flag (with tilde expansion)
/// 2. XPDASH_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.xpdash (fallback for systems without XDG)
pub fn resolve_data_dir(explicit: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("XPDASH_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("xpdash"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".xpdash"));
    }

    anyhow::bail!("could not determine data directory: no HOME or XDG data directory found")
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Stored defaults so credentials-adjacent flags don't need repeating.
/// The password is never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default)]
    pub username: Option<String>,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("nope.toml"))?;
        assert!(config.base_url.is_none());
        assert!(config.username.is_none());
        Ok(())
    }

    #[test]
    fn save_and_load_round_trip() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");

        let config = Config {
            base_url: Some("https://learn.example.edu".to_string()),
            username: Some("jdoe".to_string()),
        };
        config.save_to(&path)?;

        let loaded = Config::load_from(&path)?;
        assert_eq!(loaded.base_url.as_deref(), Some("https://learn.example.edu"));
        assert_eq!(loaded.username.as_deref(), Some("jdoe"));
        Ok(())
    }

    #[test]
    fn explicit_data_dir_wins() -> Result<()> {
        let dir = resolve_data_dir(Some("/tmp/xpdash-test"))?;
        assert_eq!(dir, PathBuf::from("/tmp/xpdash-test"));
        Ok(())
    }
}
