use crate::bulk::{BulkContentTranslator, BulkReport, TextSurface};
use crate::language::LanguageCode;
use crate::prefs::{load_language, save_language, PreferenceStore};
use crate::resolver::TranslationResolver;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

const LOG_TARGET: &str = "context";

/// What UI collaborators talk to: the current language, keyed lookups in that
/// language, and whole-page translation.
pub struct LanguageContext {
    resolver: TranslationResolver,
    bulk: BulkContentTranslator,
    store: Arc<dyn PreferenceStore>,
    language: watch::Sender<LanguageCode>,
    in_flight: AtomicUsize,
}

impl LanguageContext {
    pub fn new(resolver: TranslationResolver, store: Arc<dyn PreferenceStore>) -> Self {
        let initial = load_language(store.as_ref());
        tracing::debug!(target: LOG_TARGET, lang = %initial, "language loaded");
        let (language, _) = watch::channel(initial);
        Self {
            bulk: BulkContentTranslator::new(resolver.clone()),
            resolver,
            store,
            language,
            in_flight: AtomicUsize::new(0),
        }
    }

    pub fn language(&self) -> LanguageCode {
        *self.language.borrow()
    }

    /// Switches language for every subsequent read, persists the choice and
    /// wakes subscribers. A failed write keeps the in-memory switch.
    pub fn set_language(&self, lang: LanguageCode) {
        let previous = self.language.send_replace(lang);
        if let Err(e) = save_language(self.store.as_ref(), lang) {
            tracing::warn!(target: LOG_TARGET, %lang, error = %e, "could not persist language");
        }
        tracing::info!(target: LOG_TARGET, from = %previous, to = %lang, "language changed");
    }

    /// Like `set_language` but leaves the saved preference alone.
    pub fn use_language(&self, lang: LanguageCode) {
        let previous = self.language.send_replace(lang);
        tracing::debug!(target: LOG_TARGET, from = %previous, to = %lang, "language overridden");
    }

    /// Switches and persists the language, then translates `surface` into it.
    /// Switching to English leaves the surface as it is.
    pub async fn change_language(&self, lang: LanguageCode, surface: &dyn TextSurface) -> BulkReport {
        self.set_language(lang);
        self.translate_visible_text(surface).await
    }

    pub fn subscribe(&self) -> watch::Receiver<LanguageCode> {
        self.language.subscribe()
    }

    pub fn resolver(&self) -> &TranslationResolver {
        &self.resolver
    }

    pub async fn t(&self, key: &str, fallback: Option<&str>) -> String {
        let lang = self.language();
        self.resolver.resolve_key(key, fallback, lang).await
    }

    pub fn t_sync(&self, key: &str, fallback: Option<&str>) -> String {
        self.resolver.resolve_key_sync(key, fallback, self.language())
    }

    /// True while at least one bulk translation is outstanding.
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    pub async fn translate_visible_text(&self, surface: &dyn TextSurface) -> BulkReport {
        let lang = self.language();
        if lang.is_source() {
            return BulkReport::default();
        }
        let _loading = LoadingGuard::enter(&self.in_flight);
        self.bulk.translate_visible_text(surface, lang).await
    }
}

struct LoadingGuard<'a>(&'a AtomicUsize);

impl<'a> LoadingGuard<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}
