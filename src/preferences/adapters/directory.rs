//! Preference store writing one JSON file per key into a directory.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::ErrorKind;

use crate::preferences::ports::{PreferenceStore, PreferenceStoreError, PreferenceStoreResult};

/// Directory-backed preference store.
///
/// All access goes through a capability handle for the directory, so keys
/// can never address files outside it.
#[derive(Debug)]
pub struct DirectoryPreferenceStore {
    dir: Dir,
}

impl DirectoryPreferenceStore {
    /// Opens an existing directory as a preference store.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceStoreError::Persistence`] when the directory
    /// cannot be opened.
    pub fn open(path: &Utf8Path) -> PreferenceStoreResult<Self> {
        let dir = Dir::open_ambient_dir(path, ambient_authority())
            .map_err(PreferenceStoreError::persistence)?;
        Ok(Self { dir })
    }

    /// Wraps an already opened directory handle.
    #[must_use]
    pub const fn from_dir(dir: Dir) -> Self {
        Self { dir }
    }
}

fn file_name(key: &str) -> PreferenceStoreResult<String> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '.' | '-' | '_'));
    if !valid {
        return Err(PreferenceStoreError::InvalidKey(key.to_owned()));
    }
    Ok(format!("{key}.json"))
}

impl PreferenceStore for DirectoryPreferenceStore {
    fn load(&self, key: &str) -> PreferenceStoreResult<Option<String>> {
        let name = file_name(key)?;
        match self.dir.read_to_string(&name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(PreferenceStoreError::persistence(err)),
        }
    }

    fn save(&self, key: &str, value: &str) -> PreferenceStoreResult<()> {
        let name = file_name(key)?;
        self.dir
            .write(&name, value)
            .map_err(PreferenceStoreError::persistence)
    }
}
