use crate::language::LanguageCode;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Session-wide memo of dynamic translations keyed by `(source text, language)`.
///
/// Entries are never evicted or expired. Writes are last-writer-wins; the lock
/// is only held for the duration of a single map operation, never across an
/// await point.
#[derive(Debug, Default)]
pub struct TranslationCache {
    entries: RwLock<HashMap<LanguageCode, HashMap<String, String>>>,
}

impl TranslationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, source_text: &str, lang: LanguageCode) -> Option<String> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(&lang)
            .and_then(|by_text| by_text.get(source_text))
            .cloned()
    }

    pub fn put(&self, source_text: &str, lang: LanguageCode, translated: &str) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries
            .entry(lang)
            .or_default()
            .insert(source_text.to_owned(), translated.to_owned());
    }

    pub fn contains(&self, source_text: &str, lang: LanguageCode) -> bool {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(&lang)
            .is_some_and(|by_text| by_text.contains_key(source_text))
    }

    pub fn len(&self) -> usize {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
