use crate::naming::NamingRules;
use crate::renamer::DEFAULT_EXTENSION;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/mdretitle/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MdretitleConfig {
    /// Documentation root; relative paths resolve against the working directory.
    #[serde(default = "default_docs_root")]
    pub docs_root: PathBuf,
    /// Extension (without the dot) of the documents to process.
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Case policy, directory-scoped word substitutions and brand terms.
    #[serde(default)]
    pub naming: NamingRules,
}

fn default_docs_root() -> PathBuf {
    PathBuf::from("docs")
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

impl Default for MdretitleConfig {
    fn default() -> Self {
        Self {
            docs_root: default_docs_root(),
            extension: default_extension(),
            naming: NamingRules::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mdretitle")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<MdretitleConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = MdretitleConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: MdretitleConfig =
        toml::from_str(&data).with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
