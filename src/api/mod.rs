use crate::internal::models::{Entry, MissingWord, WordCard};
use anyhow::{Context, Result};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::Client;

const DICTIONARY_API_BASE_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en/";

/// Title the service puts in the body it returns for unknown words.
const NO_DEFINITIONS_TITLE: &str = "No Definitions Found";

/// Outcome of a lookup that reached the service and got a well-formed
/// answer. Transport and parse problems are reported as errors instead.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(WordCard),
    NotFound,
}

fn encode_word(word: &str) -> String {
    utf8_percent_encode(word, NON_ALPHANUMERIC).to_string()
}

#[cfg(test)]
pub fn entry_url(word: &str) -> String {
    format!("{}{}", DICTIONARY_API_BASE_URL, encode_word(word))
}

/// HTTP client for the public dictionary service.
///
/// Wraps a `reqwest::Client` and returns `anyhow::Result` with
/// contextualized errors to preserve diagnostic information instead of
/// erasing it into plain strings.
#[derive(Clone)]
pub struct DictionaryClient {
    client: Client,
    base_url: String,
}

impl DictionaryClient {
    /// Create a client pointed at the production endpoint.
    pub fn new() -> Self {
        Self::with_base_url(DICTIONARY_API_BASE_URL.to_string())
    }

    /// Point the client at a different endpoint root. Tests use this with
    /// a local mock server.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Look up a word: one GET, no retry, no timeout, no cancellation.
    ///
    /// The word is percent-encoded into the URL path. A body shaped like
    /// the service's "no definitions" object maps to
    /// [`LookupOutcome::NotFound`]; a body that is neither that object nor
    /// a usable entry array is an error.
    pub async fn lookup(&self, word: &str) -> Result<LookupOutcome> {
        let url = format!("{}{}", self.base_url, encode_word(word));

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("failed to send GET request to {url}"))?;

        let body = resp
            .text()
            .await
            .with_context(|| format!("failed to read response body from {url}"))?;

        // The service answers unknown words with an object instead of an
        // array; the status code is not part of the contract.
        if let Ok(missing) = serde_json::from_str::<MissingWord>(&body)
            && missing.title == NO_DEFINITIONS_TITLE
        {
            return Ok(LookupOutcome::NotFound);
        }

        let entries: Vec<Entry> = serde_json::from_str(&body)
            .with_context(|| format!("failed to parse dictionary response from {url}"))?;

        let card = WordCard::from_entries(&entries)
            .context("dictionary response carried no definitions")?;

        Ok(LookupOutcome::Found(card))
    }
}

impl Default for DictionaryClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internal::models::NO_EXAMPLE_TEXT;

    const SERENDIPITY_JSON: &str = r#"[
        {
            "word": "Serendipity",
            "phonetic": "/ˌsɛɹ.ənˈdɪp.ɪ.ti/",
            "phonetics": [
                {
                    "text": "/ˌsɛɹ.ənˈdɪp.ɪ.ti/",
                    "audio": "https://api.example/media/serendipity-us.mp3"
                }
            ],
            "meanings": [
                {
                    "partOfSpeech": "noun",
                    "synonyms": ["fortuity", "luck"],
                    "definitions": [
                        {
                            "definition": "Finding something good without looking for it",
                            "synonyms": [],
                            "antonyms": []
                        }
                    ]
                }
            ]
        }
    ]"#;

    const NOT_FOUND_JSON: &str = r#"{
        "title": "No Definitions Found",
        "message": "Sorry pal, we couldn't find definitions for the word you were looking for.",
        "resolution": "You can try the search again at later time or head to the web instead."
    }"#;

    #[test]
    fn test_entry_url() {
        assert_eq!(
            entry_url("zephyr"),
            "https://api.dictionaryapi.dev/api/v2/entries/en/zephyr"
        );
    }

    #[test]
    fn test_entry_url_escapes_the_word() {
        assert_eq!(
            entry_url("ice cream"),
            "https://api.dictionaryapi.dev/api/v2/entries/en/ice%20cream"
        );
    }

    #[tokio::test]
    async fn test_lookup_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/entries/en/Serendipity")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(SERENDIPITY_JSON)
            .create_async()
            .await;

        let client = DictionaryClient::with_base_url(format!("{}/entries/en/", server.url()));
        let outcome = client.lookup("Serendipity").await.unwrap();

        mock.assert_async().await;
        let LookupOutcome::Found(card) = outcome else {
            panic!("expected a card, got {outcome:?}");
        };
        assert_eq!(card.headword, "Serendipity");
        assert_eq!(
            card.definition,
            "Finding something good without looking for it"
        );
        assert_eq!(card.example, NO_EXAMPLE_TEXT);
        assert_eq!(card.synonyms, vec!["fortuity", "luck"]);
        assert_eq!(
            card.audio_url.as_deref(),
            Some("https://api.example/media/serendipity-us.mp3")
        );
    }

    #[tokio::test]
    async fn test_lookup_not_found() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/entries/en/zzzz")
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(NOT_FOUND_JSON)
            .create_async()
            .await;

        let client = DictionaryClient::with_base_url(format!("{}/entries/en/", server.url()));
        let outcome = client.lookup("zzzz").await.unwrap();

        mock.assert_async().await;
        assert_eq!(outcome, LookupOutcome::NotFound);
    }

    #[tokio::test]
    async fn test_lookup_invalid_json_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/entries/en/broken")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not json at all")
            .create_async()
            .await;

        let client = DictionaryClient::with_base_url(format!("{}/entries/en/", server.url()));
        let result = client.lookup("broken").await;

        mock.assert_async().await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_lookup_entry_without_definitions_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/entries/en/hollow")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"word": "hollow", "phonetics": [], "meanings": []}]"#)
            .create_async()
            .await;

        let client = DictionaryClient::with_base_url(format!("{}/entries/en/", server.url()));
        let result = client.lookup("hollow").await;

        mock.assert_async().await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_lookup_network_error() {
        // A port nothing listens on, so the connection itself fails.
        let client = DictionaryClient::with_base_url("http://127.0.0.1:1/entries/en/".to_string());
        let result = client.lookup("anything").await;

        assert!(result.is_err());
        let err_msg = format!("{:#}", result.unwrap_err());
        assert!(err_msg.contains("failed to send GET request"));
    }

    #[tokio::test]
    async fn test_lookup_foreign_object_body_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/entries/en/odd")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"title": "Some Other Title"}"#)
            .create_async()
            .await;

        let client = DictionaryClient::with_base_url(format!("{}/entries/en/", server.url()));
        let result = client.lookup("odd").await;

        mock.assert_async().await;
        assert!(result.is_err());
    }
}
