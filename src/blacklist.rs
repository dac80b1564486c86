//! Common-password lists for the
//! [`not_common_password`](crate::presets::not_common_password) rule.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Case-insensitive set of rejected values.
///
/// Cloning shares the underlying set, so one list can back the rules of
/// many fields.
#[derive(Clone, Debug, Default)]
pub struct Blacklist {
    entries: Arc<HashSet<String>>,
}

impl Blacklist {
    /// Builds a list from entries; blank entries are skipped.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|e| e.as_ref().trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Reads one entry per line.
    ///
    /// # Errors
    ///
    /// Returns error if the file does not exist, cannot be read, or holds
    /// no entries.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let list = security_input::Blacklist::from_path("assets/10k-most-common.txt")?;
    /// let rule = security_input::presets::not_common_password(list);
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BlacklistError> {
        let path = path.as_ref();
        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist loading FAILED: FileNotFound {:?}", path);
            return Err(BlacklistError::FileNotFound(path.to_path_buf()));
        }

        let list = Self::from_entries(std::fs::read_to_string(path)?.lines());
        if list.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist loading FAILED: Empty file {:?}", path);
            return Err(BlacklistError::EmptyFile);
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Blacklist loaded: {} entries from {:?}", list.len(), path);

        Ok(list)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.entries.contains(&value.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
