use tui_dict_app::api::{DictionaryClient, LookupOutcome};

const EPHEMERAL_JSON: &str = r#"[
    {
        "word": "ephemeral",
        "phonetics": [
            { "text": "/əˈfɛm(ə)ɹəl/", "audio": "" },
            {
                "text": "/əˈfɛməɹəl/",
                "audio": "https://api.dictionaryapi.dev/media/pronunciations/en/ephemeral-us.mp3"
            }
        ],
        "meanings": [
            {
                "partOfSpeech": "adjective",
                "synonyms": [
                    "transient",
                    "fleeting",
                    "momentary",
                    "short-lived",
                    "temporary",
                    "evanescent"
                ],
                "definitions": [
                    {
                        "definition": "Lasting for a short period of time.",
                        "example": "The ephemeral nature of fashion."
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

#[tokio::test]
async fn test_integration_lookup_found() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/entries/en/ephemeral")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(EPHEMERAL_JSON)
        .create_async()
        .await;

    let client = DictionaryClient::with_base_url(format!("{}/entries/en/", server.url()));
    let outcome = client
        .lookup("ephemeral")
        .await
        .expect("Failed to look up word");

    let LookupOutcome::Found(card) = outcome else {
        panic!("expected a definition, got {outcome:?}");
    };
    assert_eq!(card.headword, "ephemeral");
    assert_eq!(card.phonetic, "/əˈfɛm(ə)ɹəl/");
    assert_eq!(card.definition, "Lasting for a short period of time.");
    assert_eq!(card.example, "The ephemeral nature of fashion.");
    assert_eq!(
        card.synonyms,
        vec![
            "transient",
            "fleeting",
            "momentary",
            "short-lived",
            "temporary"
        ]
    );
    assert_eq!(
        card.audio_url.as_deref(),
        Some("https://api.dictionaryapi.dev/media/pronunciations/en/ephemeral-us.mp3")
    );
}

#[tokio::test]
async fn test_integration_lookup_not_found() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/entries/en/qqqqq")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(NOT_FOUND_JSON)
        .create_async()
        .await;

    let client = DictionaryClient::with_base_url(format!("{}/entries/en/", server.url()));
    let outcome = client
        .lookup("qqqqq")
        .await
        .expect("Failed to look up word");

    assert_eq!(outcome, LookupOutcome::NotFound);
}

#[tokio::test]
async fn test_integration_lookup_percent_encodes_the_word() {
    let mut server = mockito::Server::new_async().await;
    let m = server
        .mock("GET", "/entries/en/ice%20cream")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {
                    "word": "ice cream",
                    "meanings": [
                        {
                            "partOfSpeech": "noun",
                            "definitions": [
                                { "definition": "A frozen dessert made from cream." }
                            ]
                        }
                    ]
                }
            ]"#,
        )
        .create_async()
        .await;

    let client = DictionaryClient::with_base_url(format!("{}/entries/en/", server.url()));
    let outcome = client
        .lookup("ice cream")
        .await
        .expect("Failed to look up word");

    m.assert_async().await;
    let LookupOutcome::Found(card) = outcome else {
        panic!("expected a definition, got {outcome:?}");
    };
    assert_eq!(card.headword, "ice cream");
}

#[tokio::test]
async fn test_integration_lookup_server_error_with_garbage_body() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/entries/en/zephyr")
        .with_status(500)
        .with_body("<html>Internal Server Error</html>")
        .create_async()
        .await;

    let client = DictionaryClient::with_base_url(format!("{}/entries/en/", server.url()));
    let err = client
        .lookup("zephyr")
        .await
        .expect_err("a garbage body must not produce a definition");

    assert!(
        err.to_string().contains("failed to parse dictionary response"),
        "unexpected error: {err:#}"
    );
}
