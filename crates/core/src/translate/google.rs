use crate::config::endpoint_url;
use crate::language::SOURCE_LANGUAGE;
use crate::translate::{non_empty, TranslateError, Translation, TranslationRequest, Translator};
use futures::future::BoxFuture;
use futures::FutureExt;
use reqwest::Client;
use serde_json::Value;
use url::Url;

const NAME: &str = "google-gtx";
const CLIENT_ID: &str = "gtx";

/// Unauthenticated `translate_a/single` endpoint. The answer is a nested
/// array; the first segment of the first sentence sits at `[0][0][0]`.
#[derive(Clone)]
pub struct GoogleGtxTranslator {
    client: Client,
    base_url: Url,
}

impl GoogleGtxTranslator {
    pub fn new(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    fn request_url(&self, request: &TranslationRequest) -> Result<Url, TranslateError> {
        let mut url = endpoint_url(&self.base_url, "translate_a/single")
            .map_err(|e| TranslateError::InvalidResponse(format!("bad endpoint: {e}")))?;
        url.query_pairs_mut()
            .append_pair("client", CLIENT_ID)
            .append_pair("sl", SOURCE_LANGUAGE.as_str())
            .append_pair("tl", request.target.as_str())
            .append_pair("dt", "t")
            .append_pair("q", &request.source_text);
        Ok(url)
    }
}

fn parse_payload(payload: &Value) -> Result<String, TranslateError> {
    let text = payload
        .get(0)
        .and_then(|sentences| sentences.get(0))
        .and_then(|segment| segment.get(0))
        .and_then(Value::as_str)
        .ok_or_else(|| TranslateError::InvalidResponse("no text at [0][0][0]".to_owned()))?;
    non_empty(text)
}

impl Translator for GoogleGtxTranslator {
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
    fn reads_first_segment() {
        let payload = json!([[["दूध उत्पादन", "Milk yield", null, null, 10]], null, "en"]);
        assert_eq!(parse_payload(&payload).unwrap(), "दूध उत्पादन");
    }

    #[test]
    fn shallow_payload_is_rejected() {
        assert!(matches!(
            parse_payload(&json!([])),
            Err(TranslateError::InvalidResponse(_))
        ));
        assert!(matches!(
            parse_payload(&json!({"sentences": []})),
            Err(TranslateError::InvalidResponse(_))
        ));
        assert!(matches!(
            parse_payload(&json!([[[42]]])),
            Err(TranslateError::InvalidResponse(_))
        ));
    }

    #[test]
    fn request_url_carries_all_parameters() {
        let translator = GoogleGtxTranslator::new(
            Client::new(),
            Url::parse("https://translate.googleapis.com").unwrap(),
        );
        let url = translator
            .request_url(&TranslationRequest::new("Cow & calf", LanguageCode::Ja))
            .unwrap();
        assert_eq!(url.path(), "/translate_a/single");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("client".to_owned(), "gtx".to_owned()),
                ("sl".to_owned(), "en".to_owned()),
                ("tl".to_owned(), "ja".to_owned()),
                ("dt".to_owned(), "t".to_owned()),
                ("q".to_owned(), "Cow & calf".to_owned()),
            ]
        );
    }

    #[tokio::test]
    async fn translates_against_mock_server() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/translate_a/single")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("tl".into(), "es".into()),
                Matcher::UrlEncoded("q".into(), "Farmers Helped".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[[["Agricultores ayudados","Farmers Helped",null,null,1]],null,"en"]"#)
            .create_async()
            .await;

        let translator =
            GoogleGtxTranslator::new(Client::new(), Url::parse(&server.url()).unwrap());
        let translation = translator
            .translate(TranslationRequest::new("Farmers Helped", LanguageCode::Es))
            .await
            .unwrap();

        assert_eq!(translation.text, "Agricultores ayudados");
        mock.assert_async().await;
    }
}
