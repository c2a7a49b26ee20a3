//! Small persisted settings blob: the last map the player picked and the
//! seed of that run, written atomically under the platform data dir.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::APP_NAME;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SettingsFile {
    pub format_version: u32,
    pub last_map_index: usize,
    pub last_seed: u64,
    pub updated_at_unix_ms: u64,
}

impl SettingsFile {
    pub fn get_default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
            let mut path = proj_dirs.data_dir().to_path_buf();
            path.push("settings.json");
            path
        })
    }

    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;

        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;

        Ok(())
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> SettingsFile {
        SettingsFile {
            format_version: 1,
            last_map_index: 2,
            last_seed: 12345,
            updated_at_unix_ms: 1_756_000_000_000,
        }
    }

    #[test]
    fn json_roundtrip() {
        let settings = sample();
        let json = serde_json::to_string(&settings).unwrap();
        let decoded: SettingsFile = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, decoded);
    }

    #[test]
    fn atomic_write_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let settings = sample();
        settings.write_atomic(&path).unwrap();
        assert!(path.exists());
        assert_eq!(SettingsFile::load(&path).unwrap(), settings);

        let tmp_path = path.with_extension("json.tmp");
        assert!(!tmp_path.exists());
    }

    #[test]
    fn corrupt_file_loads_as_invalid_data() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();
        let err = SettingsFile::load(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
