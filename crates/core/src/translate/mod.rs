mod chain;
mod google;
mod libre;
mod mymemory;

use crate::config::ProviderEndpoints;
use crate::language::LanguageCode;
use futures::future::BoxFuture;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

pub use chain::ProviderChain;
pub use google::GoogleGtxTranslator;
pub use libre::LibreTranslator;
pub use mymemory::MyMemoryTranslator;

/// One piece of source text headed for one target language. Built at the call
/// site and consumed by a single provider attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranslationRequest {
    pub source_text: String,
    pub target: LanguageCode,
}

impl TranslationRequest {
    pub fn new<S: Into<String>>(source_text: S, target: LanguageCode) -> Self {
        Self {
            source_text: source_text.into(),
            target,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    pub provider: &'static str,
}

#[derive(thiserror::Error, Debug)]
pub enum TranslateError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("unexpected HTTP status {0}")]
    HttpStatus(u16),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("provider returned an empty translation")]
    EmptyTranslation,
    #[error("all translation providers failed")]
    AllProvidersFailed,
}

pub trait Translator: Send + Sync {
    /// Short provider name used in logs.
    fn name(&self) -> &'static str;

    fn translate(
        &self,
        request: TranslationRequest,
    ) -> BoxFuture<'_, Result<Translation, TranslateError>>;
}

pub fn http_client(timeout: Option<Duration>) -> Result<Client, TranslateError> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// MyMemory, then LibreTranslate, then Google gtx, sharing one HTTP client.
pub fn standard_chain(endpoints: &ProviderEndpoints, client: Client) -> ProviderChain {
    let providers: Vec<Arc<dyn Translator>> = vec![
        Arc::new(MyMemoryTranslator::new(client.clone(), endpoints.mymemory.clone())),
        Arc::new(LibreTranslator::new(
            client.clone(),
            endpoints.libretranslate.clone(),
        )),
        Arc::new(GoogleGtxTranslator::new(client, endpoints.google.clone())),
    ];
    ProviderChain::new(providers)
}

fn non_empty(text: &str) -> Result<String, TranslateError> {
    if text.trim().is_empty() {
        return Err(TranslateError::EmptyTranslation);
    }
    Ok(text.to_owned())
}
