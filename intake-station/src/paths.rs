//! Station directory layout
//!
//! ```text
//! {base}/
//! ├── data/
//! │   └── records.redb          # registered product collections
//! └── logs/
//!     └── intake-station.log.*  # daily-rolled tracing output
//! ```

use std::path::{Path, PathBuf};

/// Paths under the station's writable data directory.
#[derive(Debug, Clone)]
pub struct StationPaths {
    base: PathBuf,
}

impl StationPaths {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Data directory: {base}/data/
    pub fn data_dir(&self) -> PathBuf {
        self.base.join("data")
    }

    /// Record database: {base}/data/records.redb
    pub fn records_db_file(&self) -> PathBuf {
        self.data_dir().join("records.redb")
    }

    /// Log directory: {base}/logs/
    pub fn logs_dir(&self) -> PathBuf {
        self.base.join("logs")
    }

    /// Create the data and log directories if missing.
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.data_dir())?;
        std::fs::create_dir_all(self.logs_dir())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        let paths = StationPaths::new("/data/station");

        assert_eq!(paths.base(), Path::new("/data/station"));
        assert_eq!(paths.data_dir(), PathBuf::from("/data/station/data"));
        assert_eq!(
            paths.records_db_file(),
            PathBuf::from("/data/station/data/records.redb")
        );
        assert_eq!(paths.logs_dir(), PathBuf::from("/data/station/logs"));
    }

    #[test]
    fn test_ensure_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let paths = StationPaths::new(dir.path());

        paths.ensure_dirs().unwrap();
        assert!(paths.data_dir().is_dir());
        assert!(paths.logs_dir().is_dir());
    }
}
