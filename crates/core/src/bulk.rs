use crate::language::LanguageCode;
use crate::resolver::TranslationResolver;
use futures::future::join_all;
use serde::{Deserialize, Serialize};

const LOG_TARGET: &str = "bulk";

/// Fragments this long or longer are left alone.
pub const MAX_FRAGMENT_CHARS: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextFragment {
    pub id: NodeId,
    pub text: String,
}

/// Something that displays text nodes which can be read and rewritten.
pub trait TextSurface: Send + Sync {
    /// Text-bearing nodes as they are right now.
    fn snapshot(&self) -> Vec<TextFragment>;

    fn replace(&self, id: NodeId, text: String);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkReport {
    pub eligible: usize,
    pub replaced: usize,
    pub skipped: usize,
}

pub fn is_eligible(text: &str) -> bool {
    let len = text.chars().count();
    len > 0 && len < MAX_FRAGMENT_CHARS
}

#[derive(Clone)]
pub struct BulkContentTranslator {
    resolver: TranslationResolver,
}

impl BulkContentTranslator {
    pub fn new(resolver: TranslationResolver) -> Self {
        Self { resolver }
    }

    /// Translates every short fragment currently on `surface`.
    ///
    /// All fragments are resolved concurrently and the call returns once each
    /// one has settled. Invocations do not exclude each other; overlapping
    /// runs may write the same node twice.
    pub async fn translate_visible_text(
        &self,
        surface: &dyn TextSurface,
        lang: LanguageCode,
    ) -> BulkReport {
        if lang.is_source() {
            return BulkReport::default();
        }

        tracing::debug!(target: LOG_TARGET, %lang, "snapshotting");
        let snapshot = surface.snapshot();
        let total = snapshot.len();

        let eligible: Vec<(NodeId, String)> = snapshot
            .into_iter()
            .filter_map(|fragment| {
                let trimmed = fragment.text.trim();
                is_eligible(trimmed).then(|| (fragment.id, trimmed.to_owned()))
            })
            .collect();

        tracing::debug!(
            target: LOG_TARGET,
            %lang,
            fragments = eligible.len(),
            "dispatching"
        );

        let eligible_count = eligible.len();
        let pending: Vec<_> = eligible
            .into_iter()
            .map(|(id, original)| self.translate_fragment(surface, id, original, lang))
            .collect();
        let outcomes = join_all(pending).await;

        let replaced = outcomes.into_iter().filter(|changed| *changed).count();
        let report = BulkReport {
            eligible: eligible_count,
            replaced,
            skipped: total - eligible_count,
        };

        tracing::debug!(
            target: LOG_TARGET,
            %lang,
            eligible = report.eligible,
            replaced = report.replaced,
            skipped = report.skipped,
            "settled"
        );
        report
    }

    /// Returns whether the node was rewritten.
    async fn translate_fragment(
        &self,
        surface: &dyn TextSurface,
        id: NodeId,
        original: String,
        lang: LanguageCode,
    ) -> bool {
        let translated = self.resolver.resolve(&original, lang).await;
        if translated == original {
            return false;
        }
        surface.replace(id, translated);
        true
    }
}
