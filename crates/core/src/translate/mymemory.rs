use crate::config::endpoint_url;
use crate::language::SOURCE_LANGUAGE;
use crate::translate::{non_empty, TranslateError, Translation, TranslationRequest, Translator};
use futures::future::BoxFuture;
use futures::FutureExt;
use reqwest::Client;
use serde_json::Value;
use url::Url;

const NAME: &str = "mymemory";

/// Free dictionary-style endpoint: `GET /get?q=..&langpair=en|xx`.
#[derive(Clone)]
pub struct MyMemoryTranslator {
    client: Client,
    base_url: Url,
}

impl MyMemoryTranslator {
    pub fn new(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    fn request_url(&self, request: &TranslationRequest) -> Result<Url, TranslateError> {
        let mut url = endpoint_url(&self.base_url, "get")
            .map_err(|e| TranslateError::InvalidResponse(format!("bad endpoint: {e}")))?;
        let langpair = format!("{}|{}", SOURCE_LANGUAGE, request.target);
        url.query_pairs_mut()
            .append_pair("q", &request.source_text)
            .append_pair("langpair", &langpair);
        Ok(url)
    }
}

/// The payload carries its own status next to the HTTP one; both must say 200.
fn parse_payload(payload: &Value) -> Result<String, TranslateError> {
    let status = &payload["responseStatus"];
    let ok = status.as_u64() == Some(200) || status.as_str() == Some("200");
    if !ok {
        return Err(TranslateError::InvalidResponse(format!(
            "responseStatus was {status}"
        )));
    }
    let text = payload["responseData"]["translatedText"]
        .as_str()
        .ok_or_else(|| {
            TranslateError::InvalidResponse("missing responseData.translatedText".to_owned())
        })?;
    non_empty(text)
}

impl Translator for MyMemoryTranslator {
    fn name(&self) -> &'static str {
        NAME
    }

    fn translate(
        &self,
        request: TranslationRequest,
    ) -> BoxFuture<'_, Result<Translation, TranslateError>> {
        async move {
            let url = self.request_url(&request)?;
            let response = self.client.get(url).send().await?;

            if !response.status().is_success() {
                return Err(TranslateError::HttpStatus(response.status().as_u16()));
            }

            let payload: Value = response
                .json()
                .await
                .map_err(|e| TranslateError::InvalidResponse(format!("Failed to parse JSON: {e}")))?;

            Ok(Translation {
                text: parse_payload(&payload)?,
                provider: NAME,
            })
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::LanguageCode;
    use mockito::Matcher;
    use serde_json::json;

    #[test]
    fn parses_successful_payload() {
        let payload = json!({
            "responseStatus": 200,
            "responseData": { "translatedText": "Sélectionner la race" }
        });
        assert_eq!(parse_payload(&payload).unwrap(), "Sélectionner la race");
    }

    #[test]
    fn rejects_payload_with_error_status() {
        let payload = json!({
            "responseStatus": 429,
            "responseData": { "translatedText": "MYMEMORY WARNING: YOU USED ALL AVAILABLE FREE TRANSLATIONS" }
        });
        assert!(matches!(
            parse_payload(&payload),
            Err(TranslateError::InvalidResponse(_))
        ));
    }

    #[test]
    fn rejects_empty_translation() {
        let payload = json!({ "responseStatus": "200", "responseData": { "translatedText": "  " } });
        assert!(matches!(
            parse_payload(&payload),
            Err(TranslateError::EmptyTranslation)
        ));
    }

    #[test]
    fn request_url_encodes_text_and_langpair() {
        let translator = MyMemoryTranslator::new(
            Client::new(),
            Url::parse("https://api.mymemory.translated.net").unwrap(),
        );
        let url = translator
            .request_url(&TranslationRequest::new("Select breed", LanguageCode::Fr))
            .unwrap();
        assert_eq!(url.path(), "/get");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("q".to_owned(), "Select breed".to_owned()),
                ("langpair".to_owned(), "en|fr".to_owned()),
            ]
        );
    }

    #[tokio::test]
    async fn translates_against_mock_server() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/get")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), "Select breed".into()),
                Matcher::UrlEncoded("langpair".into(), "en|fr".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"responseStatus":200,"responseData":{"translatedText":"Sélectionner la race"}}"#)
            .create_async()
            .await;

        let translator =
            MyMemoryTranslator::new(Client::new(), Url::parse(&server.url()).unwrap());
        let translation = translator
            .translate(TranslationRequest::new("Select breed", LanguageCode::Fr))
            .await
            .unwrap();

        assert_eq!(translation.text, "Sélectionner la race");
        assert_eq!(translation.provider, "mymemory");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/get")
            .match_query(Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let translator =
            MyMemoryTranslator::new(Client::new(), Url::parse(&server.url()).unwrap());
        let err = translator
            .translate(TranslationRequest::new("Hello", LanguageCode::Hi))
            .await
            .unwrap_err();
        assert!(matches!(err, TranslateError::HttpStatus(503)));
    }
}
