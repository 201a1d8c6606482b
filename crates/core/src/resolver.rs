use crate::cache::TranslationCache;
use crate::language::LanguageCode;
use crate::phrases;
use crate::translate::{TranslationRequest, Translator};
use std::sync::Arc;

const LOG_TARGET: &str = "resolver";

/// Best-effort translation of UI text.
///
/// Lookup order is: source language passthrough, curated phrase table, the
/// shared cache, and finally (async only) the provider chain. Nothing here
/// ever fails; when no translation is available the input comes back as-is.
#[derive(Clone)]
pub struct TranslationResolver {
    translator: Arc<dyn Translator>,
    cache: Arc<TranslationCache>,
}

impl TranslationResolver {
    pub fn new(translator: Arc<dyn Translator>, cache: Arc<TranslationCache>) -> Self {
        Self { translator, cache }
    }

    pub fn cache(&self) -> &Arc<TranslationCache> {
        &self.cache
    }

    /// Never touches the network. Returns `text` unchanged when neither the
    /// phrase table nor the cache knows it.
    pub fn resolve_sync(&self, text: &str, lang: LanguageCode) -> String {
        self.lookup_local(text, lang)
            .unwrap_or_else(|| text.to_owned())
    }

    pub async fn resolve(&self, text: &str, lang: LanguageCode) -> String {
        if let Some(found) = self.lookup_local(text, lang) {
            return found;
        }

        match self
            .translator
            .translate(TranslationRequest::new(text, lang))
            .await
        {
            Ok(translation) => {
                self.cache.put(text, lang, &translation.text);
                translation.text
            }
            Err(e) => {
                // Failures are not cached so the next call retries the network.
                tracing::warn!(target: LOG_TARGET, %lang, error = %e, "falling back to source text");
                text.to_owned()
            }
        }
    }

    /// Keyed lookup used by UI forms: the curated entry for `key` wins in any
    /// language, otherwise `fallback` (or the key itself) is resolved as text.
    pub fn resolve_key_sync(&self, key: &str, fallback: Option<&str>, lang: LanguageCode) -> String {
        if let Some(curated) = phrases::lookup(key, lang) {
            return curated.to_owned();
        }
        self.resolve_sync(fallback.unwrap_or(key), lang)
    }

    pub async fn resolve_key(&self, key: &str, fallback: Option<&str>, lang: LanguageCode) -> String {
        if let Some(curated) = phrases::lookup(key, lang) {
            return curated.to_owned();
        }
        self.resolve(fallback.unwrap_or(key), lang).await
    }

    fn lookup_local(&self, text: &str, lang: LanguageCode) -> Option<String> {
        if lang.is_source() {
            return Some(text.to_owned());
        }
        if let Some(curated) = phrases::lookup(text, lang) {
            return Some(curated.to_owned());
        }
        self.cache.get(text, lang)
    }
}
