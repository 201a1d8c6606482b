use crate::config::endpoint_url;
use crate::language::SOURCE_LANGUAGE;
use crate::translate::{non_empty, TranslateError, Translation, TranslationRequest, Translator};
use futures::future::BoxFuture;
use futures::FutureExt;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

const NAME: &str = "libretranslate";

#[derive(Clone)]
pub struct LibreTranslator {
    client: Client,
    base_url: Url,
}

impl LibreTranslator {
    pub fn new(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }
}

#[derive(Serialize)]
struct LibreRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LibreResponse {
    translated_text: Option<String>,
}

impl Translator for LibreTranslator {
    fn name(&self) -> &'static str {
        NAME
    }

    fn translate(
        &self,
        request: TranslationRequest,
    ) -> BoxFuture<'_, Result<Translation, TranslateError>> {
        async move {
            let url = endpoint_url(&self.base_url, "translate")
                .map_err(|e| TranslateError::InvalidResponse(format!("bad endpoint: {e}")))?;

            let body = LibreRequest {
                q: &request.source_text,
                source: SOURCE_LANGUAGE.as_str(),
                target: request.target.as_str(),
                format: "text",
            };

            let response = self.client.post(url).json(&body).send().await?;

            if !response.status().is_success() {
                return Err(TranslateError::HttpStatus(response.status().as_u16()));
            }

            let parsed: LibreResponse = response
                .json()
                .await
                .map_err(|e| TranslateError::InvalidResponse(format!("Failed to parse JSON: {e}")))?;

            let text = parsed.translated_text.ok_or_else(|| {
                TranslateError::InvalidResponse("missing translatedText".to_owned())
            })?;

            Ok(Translation {
                text: non_empty(&text)?,
                provider: NAME,
            })
        }
        .boxed()
    }
}
