// File: ./src/config.rs
use crate::model::ModifierKey;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "SHIFTLIST_CONFIG";
const LOG_FILE_NAME: &str = "shiftlist.log";

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Checklist opened when none is given on the command line.
    pub checklist: Option<PathBuf>,
    pub modifier: ModifierKey,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn get_path() -> Option<PathBuf> {
        // ISOLATION: Check env var first
        if let Ok(path) = env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("com", "shiftlist", "shiftlist")
            .map(|proj| proj.config_dir().join("config.toml"))
    }

    /// Missing file means defaults; a malformed one is an error.
    pub fn load() -> Result<Self> {
        match Self::get_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.log_file {
            return Some(path.clone());
        }
        if let Some(proj) = ProjectDirs::from("com", "shiftlist", "shiftlist") {
            let data_dir = proj.data_dir();
            if !data_dir.exists() {
                let _ = fs::create_dir_all(data_dir);
            }
            return Some(data_dir.join(LOG_FILE_NAME));
        }
        None
    }

    /// Command line wins over the configured checklist.
    pub fn resolve_checklist(&self, arg: Option<PathBuf>) -> Option<PathBuf> {
        arg.or_else(|| self.checklist.clone())
    }
}
