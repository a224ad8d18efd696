//! File-based StateRepository implementation.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use pity_core::{PityState, Rules};

use crate::repository::{RepositoryError, Result, StateRecord, StateRepository};

/// File-based implementation of StateRepository.
///
/// Stores the record as pretty-printed JSON (see [`StateRecord`]).
///
/// # Save sequence
///
/// 1. Copy the current file, if any, to `<path>.bak` (a failed copy is
///    logged and skipped)
/// 2. Write the new document to `<path>.tmp`
/// 3. Rename the temp file over `<path>`
///
/// A failure in steps 2 or 3 removes the temp file and leaves the previous
/// record readable.
pub struct FileStateRepository {
    path: PathBuf,
    backup_path: PathBuf,
    rules: Rules,
}

impl FileStateRepository {
    /// Create a repository at `path`, creating the parent directory.
    ///
    /// `rules` bounds the counters accepted on load.
    pub fn new(path: impl AsRef<Path>, rules: Rules) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(RepositoryError::Io)?;
        }
        let backup_path = with_suffix(&path, ".bak");
        Ok(Self {
            path,
            backup_path,
            rules,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backup_path(&self) -> &Path {
        &self.backup_path
    }
}

/// Appends `suffix` to the full file name, keeping any existing extension.
fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

impl StateRepository for FileStateRepository {
    fn save(&self, state: &PityState) -> Result<()> {
        let temp_path = with_suffix(&self.path, ".tmp");

        let json = serde_json::to_string_pretty(&StateRecord::new(state))
            .map_err(|e| RepositoryError::Json(e.to_string()))?;

        // Best-effort backup; the new record is still written without one.
        if self.path.exists()
            && let Err(e) = fs::copy(&self.path, &self.backup_path)
        {
            tracing::warn!(
                "Failed to back up {} to {}: {}",
                self.path.display(),
                self.backup_path.display(),
                e
            );
        }

        // Write to temp file, then atomic rename
        let written =
            fs::write(&temp_path, json).and_then(|()| fs::rename(&temp_path, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(RepositoryError::Io(e));
        }

        tracing::debug!(
            pulls_since_rare = state.pulls_since_rare(),
            banner_pulls = state.banner_pulls(),
            "Saved state to {}",
            self.path.display()
        );

        Ok(())
    }

    fn load(&self) -> Result<Option<PityState>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&self.path).map_err(RepositoryError::Io)?;
        let record: StateRecord =
            serde_json::from_str(&json).map_err(|e| RepositoryError::Json(e.to_string()))?;

        if !record.version.starts_with("1.") {
            return Err(RepositoryError::CorruptedData(format!(
                "unsupported record version '{}' in {}",
                record.version,
                self.path.display()
            )));
        }

        let state = record.into_state(&self.rules)?;

        tracing::debug!("Loaded state from {}", self.path.display());

        Ok(Some(state))
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn delete(&self) -> Result<()> {
        for path in [&self.path, &self.backup_path] {
            if path.exists() {
                fs::remove_file(path).map_err(RepositoryError::Io)?;
                tracing::info!("Deleted {}", path.display());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_keeps_the_extension() {
        assert_eq!(
            with_suffix(Path::new("/tmp/pity_state.json"), ".bak"),
            PathBuf::from("/tmp/pity_state.json.bak")
        );
        assert_eq!(
            with_suffix(Path::new("state"), ".tmp"),
            PathBuf::from("state.tmp")
        );
    }
}
