use std::path::Path;

use anyhow::Result;

use crate::config::Config;

pub fn show(config: &Config, path: &Path) -> Result<()> {
    println!("Config file: {}", path.display());
    println!("  base_url: {}", config.base_url.as_deref().unwrap_or("(default)"));
    println!("  username: {}", config.username.as_deref().unwrap_or("(unset)"));
    Ok(())
}

pub fn set(
    mut config: Config,
    path: &Path,
    base_url: Option<String>,
    username: Option<String>,
) -> Result<()> {
    if base_url.is_none() && username.is_none() {
        anyhow::bail!("nothing to set; pass --base-url and/or --username");
    }

    if let Some(base_url) = base_url {
        config.base_url = Some(base_url);
    }
    if let Some(username) = username {
        config.username = Some(username);
    }

    config.save_to(path)?;
    println!("Saved {}", path.display());
    Ok(())
}
