use crate::translate::{TranslateError, Translation, TranslationRequest, Translator};
use futures::future::BoxFuture;
use futures::FutureExt;
use std::sync::Arc;

const LOG_TARGET: &str = "translate::chain";

/// Tries each provider in order and returns the first usable translation.
/// Every failure is logged and swallowed; only exhausting the whole chain is
/// reported to the caller.
#[derive(Clone)]
pub struct ProviderChain {
    providers: Vec<Arc<dyn Translator>>,
}

impl ProviderChain {
    pub fn new(providers: Vec<Arc<dyn Translator>>) -> Self {
        Self { providers }
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }
}

impl Translator for ProviderChain {
    fn name(&self) -> &'static str {
        "chain"
    }

    fn translate(
        &self,
        request: TranslationRequest,
    ) -> BoxFuture<'_, Result<Translation, TranslateError>> {
        async move {
            for provider in &self.providers {
                match provider.translate(request.clone()).await {
                    Ok(translation) if !translation.text.trim().is_empty() => {
                        tracing::debug!(
                            target: LOG_TARGET,
                            provider = provider.name(),
                            lang = %request.target,
                            "translated"
                        );
                        return Ok(translation);
                    }
                    Ok(_) => {
                        tracing::warn!(
                            target: LOG_TARGET,
                            provider = provider.name(),
                            "empty translation, trying next provider"
                        );
                    }
                    Err(e) => {
                        tracing::warn!(
                            target: LOG_TARGET,
                            provider = provider.name(),
                            error = %e,
                            "provider failed, trying next provider"
                        );
                    }
                }
            }

            tracing::warn!(
                target: LOG_TARGET,
                lang = %request.target,
                text = %request.source_text,
                "all translation providers failed"
            );
            Err(TranslateError::AllProvidersFailed)
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderEndpoints;
    use crate::language::LanguageCode;
    use crate::translate::standard_chain;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedClient {
        name: &'static str,
        text: &'static str,
        calls: AtomicUsize,
    }

    impl FixedClient {
        fn new(name: &'static str, text: &'static str) -> Arc<Self> {
            Arc::new(Self {
                name,
                text,
                calls: AtomicUsize::new(0),
            })
        }
    }

    impl Translator for FixedClient {
        fn name(&self) -> &'static str {
            self.name
        }

        fn translate(
            &self,
            _request: TranslationRequest,
        ) -> BoxFuture<'_, Result<Translation, TranslateError>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            async move {
                Ok(Translation {
                    text: self.text.to_owned(),
                    provider: self.name,
                })
            }
            .boxed()
        }
    }

    struct FailingClient {
        calls: AtomicUsize,
    }

    impl Translator for FailingClient {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn translate(
            &self,
            _request: TranslationRequest,
        ) -> BoxFuture<'_, Result<Translation, TranslateError>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            async { Err(TranslateError::HttpStatus(502)) }.boxed()
        }
    }

    fn request() -> TranslationRequest {
        TranslationRequest::new("Select breed", LanguageCode::Fr)
    }

    #[tokio::test]
    async fn first_success_wins_and_later_providers_are_not_called() {
        let a = FixedClient::new("a", "Sélectionner la race");
        let b = FixedClient::new("b", "autre");
        let providers: Vec<Arc<dyn Translator>> = vec![a.clone(), b.clone()];
        let chain = ProviderChain::new(providers);

        let translation = chain.translate(request()).await.unwrap();
        assert_eq!(translation.text, "Sélectionner la race");
        assert_eq!(translation.provider, "a");
        assert_eq!(b.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn failures_advance_to_next_provider() {
        let failing = Arc::new(FailingClient {
            calls: AtomicUsize::new(0),
        });
        let empty = FixedClient::new("empty", "   ");
        let good = FixedClient::new("c", "Choisir la race");
        let providers: Vec<Arc<dyn Translator>> = vec![failing.clone(), empty.clone(), good.clone()];
        let chain = ProviderChain::new(providers);

        let translation = chain.translate(request()).await.unwrap();
        assert_eq!(translation.provider, "c");
        assert_eq!(failing.calls.load(Ordering::SeqCst), 1);
        assert_eq!(empty.calls.load(Ordering::SeqCst), 1);
        assert_eq!(good.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn exhausted_chain_reports_all_failed() {
        let providers: Vec<Arc<dyn Translator>> = vec![
            Arc::new(FailingClient {
                calls: AtomicUsize::new(0),
            }),
            Arc::new(FailingClient {
                calls: AtomicUsize::new(0),
            }),
        ];
        let chain = ProviderChain::new(providers);
        let err = chain.translate(request()).await.unwrap_err();
        assert!(matches!(err, TranslateError::AllProvidersFailed));
    }

    #[tokio::test]
    async fn empty_chain_fails() {
        let chain = ProviderChain::new(Vec::new());
        assert!(chain.is_empty());
        assert!(chain.translate(request()).await.is_err());
    }

    #[test]
    fn standard_chain_order_is_fixed() {
        let chain = standard_chain(&ProviderEndpoints::default(), reqwest::Client::new());
        assert_eq!(chain.len(), 3);
        assert_eq!(
            chain.provider_names(),
            vec!["mymemory", "libretranslate", "google-gtx"]
        );
    }
}
