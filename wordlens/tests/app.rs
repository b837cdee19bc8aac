use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::StatusCode;
use url::Url;
use wordlens::config::Settings;
use wordlens::{App, Error};
use wordlens_core::google::translate_url;
use wordlens_core::{Fetch, FetchError, Lookup};

const COLOUR_HTML: &str = include_str!("../../wordlens-core/tests/fixtures/colour.html");
const ENTRY_URL: &str = "https://dictionary.cambridge.org/dictionary/english/colour";

/// Serves canned pages and reports every probed URL as missing.
#[derive(Clone, Default)]
struct Pages(HashMap<String, String>);

#[async_trait]
impl Fetch for Pages {
    async fn get_text(&self, url: &Url) -> Result<String, FetchError> {
        self.0
            .get(url.as_str())
            .cloned()
            .ok_or(FetchError::Status(StatusCode::NOT_FOUND))
    }

    async fn exists(&self, _url: &Url) -> bool {
        false
    }
}

impl Pages {
    fn with(mut self, url: impl Into<String>, body: impl Into<String>) -> Pages {
        self.0.insert(url.into(), body.into());
        self
    }

    fn translation(self, text: &str, target_lang: &str, response: &str) -> Pages {
        let url = translate_url(text, "auto", target_lang).unwrap();

        self.with(url, response)
    }
}

fn app(pages: Pages, json: bool) -> App<Pages> {
    App::new(Lookup::with_fetch(pages), Settings::default(), json)
}

#[tokio::test]
async fn it_should_render_a_translated_word() {
    let pages = Pages::default()
        .translation("colour", "vi", r#"[[["màu","colour"]]]"#)
        .with(ENTRY_URL, COLOUR_HTML);

    let output = app(pages, false)
        .translate(&["colour".to_string()], None, None)
        .await
        .unwrap();

    assert_eq!(output, "colour → màu\n  UK /ˈkʌl.ər/\n");
}

#[tokio::test]
async fn it_should_override_the_target_language() {
    let pages = Pages::default().translation(
        "good morning",
        "da",
        r#"[[["godmorgen","good morning"]]]"#,
    );

    let output = app(pages, false)
        .translate(
            &["good".to_string(), "morning".to_string()],
            None,
            Some("da".to_string()),
        )
        .await
        .unwrap();

    assert!(output.starts_with("good morning → godmorgen\n"));
    assert!(output.contains("Audio: https://translate.google.com/translate_tts?"));
}

#[tokio::test]
async fn it_should_report_translation_failures() {
    let result = app(Pages::default(), false)
        .translate(&["colour".to_string()], None, None)
        .await;

    let err = result.unwrap_err();

    assert!(matches!(
        err,
        Error::Lookup(wordlens_core::Error::TranslationFailed(_))
    ));
    assert_eq!(err.to_string(), "Unable to translate text");
}

#[tokio::test]
async fn it_should_print_pronunciations_as_json() {
    let pages = Pages::default().with(ENTRY_URL, COLOUR_HTML);

    let output = app(pages, true).pronounce("Colour").await.unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["phonetic_uk"], "/ˈkʌl.ər/");
    assert!(value["phonetic_us"].is_null());
    assert!(value["audio_url_us"].is_null());
}

#[tokio::test]
async fn it_should_reject_phrases_for_the_dictionary() {
    let result = app(Pages::default(), false).pronounce("good morning").await;

    assert!(matches!(result, Err(Error::NotAWord(_))));
}

#[tokio::test]
async fn it_should_render_definitions() {
    let pages = Pages::default().with(ENTRY_URL, COLOUR_HTML);

    let output = app(pages, false).define("colour").await.unwrap();

    assert_eq!(
        output,
        "1. red, blue, green, yellow, etc.:\n   e.g. What's your favourite colour?\n"
    );
}

#[tokio::test]
async fn it_should_report_missing_dictionary_entries() {
    let result = app(Pages::default(), false).define("colour").await;

    assert!(matches!(
        result,
        Err(Error::Dictionary { ref word, .. }) if word == "colour"
    ));
}
