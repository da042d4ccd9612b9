// File: ./src/logging.rs
use anyhow::{Context, Result};
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::OpenOptions;
use std::path::Path;

/// File logger; the terminal is owned by the UI.
pub fn init(path: &Path, level: LevelFilter) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    WriteLogger::init(level, Config::default(), log_file)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwritable_log_path_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("shiftlist.log");
        let err = init(&path, LevelFilter::Debug).unwrap_err();
        assert!(err.to_string().contains("opening log file"));
    }
}
