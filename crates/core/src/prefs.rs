use crate::config::PREFERRED_LANGUAGE_KEY;
use crate::language::LanguageCode;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

const LOG_TARGET: &str = "prefs";

#[derive(thiserror::Error, Debug)]
pub enum PrefsError {
    #[error("preference file i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("preference file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Small string key-value store that survives restarts.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// JSON object on disk. Values of any JSON type are kept as they are; only
/// string values are visible through `get`.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is an empty object. Any other read failure, and a file
    /// that is not a JSON object, is an error.
    fn load(&self) -> Result<Map<String, Value>, PrefsError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let _guard = self.lock.read().unwrap_or_else(PoisonError::into_inner);
        match self.load() {
            Ok(values) => values.get(key).and_then(Value::as_str).map(str::to_owned),
            Err(e) => {
                tracing::warn!(target: LOG_TARGET, path = %self.path.display(), error = %e, "ignoring unreadable preferences");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        let _guard = self.lock.write().unwrap_or_else(PoisonError::into_inner);
        let mut values = match self.load() {
            Ok(values) => values,
            Err(PrefsError::Json(e)) => {
                tracing::warn!(target: LOG_TARGET, path = %self.path.display(), error = %e, "replacing corrupt preferences");
                Map::new()
            }
            Err(e) => return Err(e),
        };
        values.insert(key.to_owned(), Value::String(value.to_owned()));

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&values)?)?;
        Ok(())
    }
}

/// Reads the persisted language, falling back to English when it is absent or
/// not exactly one of the supported codes.
pub fn load_language(store: &dyn PreferenceStore) -> LanguageCode {
    match store.get(PREFERRED_LANGUAGE_KEY) {
        Some(raw) => LanguageCode::from_code(&raw).unwrap_or_else(|| {
            tracing::debug!(target: LOG_TARGET, value = %raw, "unsupported saved language, using default");
            LanguageCode::default()
        }),
        None => LanguageCode::default(),
    }
}

pub fn save_language(store: &dyn PreferenceStore, lang: LanguageCode) -> Result<(), PrefsError> {
    store.set(PREFERRED_LANGUAGE_KEY, lang.as_str())
}
