//! A client for the public Google Translate endpoint.
//!
//! The endpoint responds with positional JSON arrays rather than objects. Position 0 holds the
//! translated segments (each an array whose first element is a text fragment) and position 1, if
//! present, holds dictionary groups (each a pair of word type and list of translations).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use crate::Error;
use crate::consts::{GOOGLE_TRANSLATE_URL, GOOGLE_TTS_LANG, GOOGLE_TTS_URL};
use crate::http::Fetch;

/// The source language value asking the endpoint to detect the language.
pub const AUTO_DETECT: &str = "auto";

/// A group of translations sharing a word type.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DefinitionEntry {
    /// The word type, e.g. "noun".
    pub word_type: Option<String>,
    /// Translations in the order the endpoint listed them.
    pub translations: Vec<String>,
}

/// A translated text.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Translation {
    /// The concatenated translated segments.
    pub text: String,
    /// Dictionary groups, or `None` if the response had no dictionary payload at all.
    pub definitions: Option<Vec<DefinitionEntry>>,
}

impl DefinitionEntry {
    /// Maps a `[word_type, [translation, ...]]` group.
    ///
    /// Anything that isn't shaped like that yields missing fields rather than an error.
    #[must_use]
    pub fn from_value(value: &Value) -> DefinitionEntry {
        let word_type = value.get(0).and_then(Value::as_str).map(String::from);
        let translations = value
            .get(1)
            .and_then(Value::as_array)
            .map(|translations| {
                translations
                    .iter()
                    .filter_map(Value::as_str)
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        DefinitionEntry {
            word_type,
            translations,
        }
    }
}

impl Translation {
    /// Parses a decoded response.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoTranslation`] if the response contains no translated text.
    pub fn from_value(value: &Value) -> Result<Translation, Error> {
        let text: String = value
            .get(0)
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(|segment| segment.get(0).and_then(Value::as_str))
            .collect();

        if text.is_empty() {
            return Err(Error::NoTranslation);
        }

        let definitions = value
            .get(1)
            .and_then(Value::as_array)
            .map(|groups| groups.iter().map(DefinitionEntry::from_value).collect());

        Ok(Translation { text, definitions })
    }
}

/// An asynchronous client for Google Translate.
#[derive(Debug, Clone)]
pub struct Client<F = reqwest::Client> {
    fetch: F,
}

impl<F: Fetch> Client<F> {
    /// Constructs a `Client` on top of the given [`Fetch`] implementation.
    #[must_use]
    pub const fn with_fetch(fetch: F) -> Client<F> {
        Client { fetch }
    }

    /// Translates `text` from `source_lang` (or [`AUTO_DETECT`]) to `target_lang`.
    ///
    /// # Errors
    ///
    /// - [`Error::TranslationFailed`] if the request fails or the endpoint responds unsuccessfully.
    /// - [`Error::Decode`] if the response isn't JSON.
    /// - [`Error::NoTranslation`] if the response contains no translated text.
    #[instrument(skip(self))]
    pub async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<Translation, Error> {
        let url = translate_url(text, source_lang, target_lang)?;
        let body = self
            .fetch
            .get_text(&url)
            .await
            .map_err(Error::TranslationFailed)?;
        let value: Value = serde_json::from_str(&body).map_err(Error::Decode)?;
        let translation = Translation::from_value(&value)?;

        debug!(
            num_definitions = translation.definitions.as_ref().map(Vec::len),
            "received translation"
        );

        Ok(translation)
    }
}

/// Returns the request URL for translating `text`.
///
/// # Errors
///
/// Returns [`Error::Url`] if the URL can't be constructed.
pub fn translate_url(text: &str, source_lang: &str, target_lang: &str) -> Result<Url, Error> {
    let params = [
        ("client", "gtx"),
        ("sl", source_lang),
        ("tl", target_lang),
        ("dt", "t"),
        ("dt", "bd"),
        ("q", text),
    ];

    Ok(Url::parse_with_params(GOOGLE_TRANSLATE_URL, &params)?)
}

/// Returns a text-to-speech URL reading `text` aloud in English.
///
/// # Errors
///
/// Returns [`Error::Url`] if the URL can't be constructed.
pub fn tts_url(text: &str) -> Result<Url, Error> {
    let params = [
        ("ie", "UTF-8"),
        ("client", "gtx"),
        ("tl", GOOGLE_TTS_LANG),
        ("q", text),
    ];

    Ok(Url::parse_with_params(GOOGLE_TTS_URL, &params)?)
}
