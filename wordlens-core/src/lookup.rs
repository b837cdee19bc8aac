//! The lookup pipeline: translation first, then pronunciation for single English words.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::Error;
use crate::cambridge::{self, PronunciationRecord};
use crate::google::{self, DefinitionEntry};
use crate::http::{self, Fetch};

/// A request to look up a piece of text.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LookupRequest {
    text: String,
    source_lang: String,
    target_lang: String,
}

/// The classification of a looked-up text.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum WordClass {
    /// A single token made of ASCII letters only.
    SingleEnglishWord,
    /// Anything else: several words, digits, punctuation or non-ASCII letters.
    Phrase,
}

impl WordClass {
    /// Classifies `text`, ignoring leading and trailing whitespace.
    #[must_use]
    pub fn of(text: &str) -> WordClass {
        let text = text.trim();

        if !text.is_empty() && text.chars().all(|c| c.is_ascii_alphabetic()) {
            WordClass::SingleEnglishWord
        } else {
            WordClass::Phrase
        }
    }
}

impl LookupRequest {
    /// Creates a request to translate `text` from `source_lang` to `target_lang`.
    ///
    /// `source_lang` may be [`google::AUTO_DETECT`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyText`] if `text` is empty after trimming.
    pub fn new(
        text: impl Into<String>,
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
    ) -> Result<LookupRequest, Error> {
        let text = text.into();

        if text.trim().is_empty() {
            return Err(Error::EmptyText);
        }

        Ok(LookupRequest {
            text,
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
        })
    }

    /// The text as it was selected.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The source language code.
    #[must_use]
    pub fn source_lang(&self) -> &str {
        &self.source_lang
    }

    /// The target language code.
    #[must_use]
    pub fn target_lang(&self) -> &str {
        &self.target_lang
    }

    /// Classifies the text of this request.
    #[must_use]
    pub fn word_class(&self) -> WordClass {
        WordClass::of(&self.text)
    }
}

/// The outcome of a lookup.
///
/// Only single-word results carry a pronunciation, and only phrase results carry a
/// text-to-speech URL.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TranslationResult {
    source_text: String,
    translation: String,
    definitions: Option<Vec<DefinitionEntry>>,
    pronunciation: Option<PronunciationRecord>,
    tts_audio_url: Option<String>,
    is_single_word: bool,
}

impl TranslationResult {
    /// Creates the result of looking up a single English word.
    #[must_use]
    pub fn single_word(
        source_text: String,
        translation: google::Translation,
        pronunciation: Option<PronunciationRecord>,
    ) -> TranslationResult {
        TranslationResult {
            source_text,
            translation: translation.text,
            definitions: translation.definitions,
            pronunciation,
            tts_audio_url: None,
            is_single_word: true,
        }
    }

    /// Creates the result of looking up a phrase.
    #[must_use]
    pub fn phrase(
        source_text: String,
        translation: google::Translation,
        tts_audio_url: Option<String>,
    ) -> TranslationResult {
        TranslationResult {
            source_text,
            translation: translation.text,
            definitions: translation.definitions,
            pronunciation: None,
            tts_audio_url,
            is_single_word: false,
        }
    }

    /// The text that was looked up.
    #[must_use]
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    /// The translated text.
    #[must_use]
    pub fn translation(&self) -> &str {
        &self.translation
    }

    /// Dictionary groups, or `None` if the translation had no dictionary payload.
    #[must_use]
    pub fn definitions(&self) -> Option<&[DefinitionEntry]> {
        self.definitions.as_deref()
    }

    /// The pronunciation, if the text is a single word and the dictionary could be reached.
    #[must_use]
    pub const fn pronunciation(&self) -> Option<&PronunciationRecord> {
        self.pronunciation.as_ref()
    }

    /// The text-to-speech URL of a phrase.
    #[must_use]
    pub fn tts_audio_url(&self) -> Option<&str> {
        self.tts_audio_url.as_deref()
    }

    /// Whether the text was classified as a single English word.
    #[must_use]
    pub const fn is_single_word(&self) -> bool {
        self.is_single_word
    }
}

/// Performs lookups against Google Translate and the Cambridge Dictionary.
#[derive(Debug, Clone)]
pub struct Lookup<F = reqwest::Client> {
    google: google::Client<F>,
    cambridge: cambridge::Client<F>,
}

impl<F: Fetch + Clone> Lookup<F> {
    /// Constructs a `Lookup` sharing the given [`Fetch`] implementation between both services.
    #[must_use]
    pub fn with_fetch(fetch: F) -> Lookup<F> {
        Lookup {
            google: google::Client::with_fetch(fetch.clone()),
            cambridge: cambridge::Client::with_fetch(fetch),
        }
    }
}

impl<F: Fetch> Lookup<F> {
    /// Sets the maximum duration of a single audio existence probe.
    #[must_use]
    pub fn probe_timeout(mut self, timeout: Duration) -> Lookup<F> {
        self.cambridge = self.cambridge.probe_timeout(timeout);
        self
    }

    /// Returns the dictionary client.
    #[must_use]
    pub const fn cambridge(&self) -> &cambridge::Client<F> {
        &self.cambridge
    }

    /// Translates the text of `request` and, for single English words, looks up its
    /// pronunciation.
    ///
    /// The dictionary is only consulted once the translation has succeeded. A failed dictionary
    /// lookup leaves the pronunciation unset but doesn't fail the lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the translation fails, see [`google::Client::translate`].
    #[instrument(skip_all, fields(text = request.text()))]
    pub async fn translate(&self, request: &LookupRequest) -> Result<TranslationResult, Error> {
        let translation = self
            .google
            .translate(request.text(), request.source_lang(), request.target_lang())
            .await?;
        let source_text = request.text().to_string();

        match request.word_class() {
            WordClass::SingleEnglishWord => {
                let word = request.text().trim().to_lowercase();
                let pronunciation = match self.cambridge.pronunciation(&word).await {
                    Ok(record) => Some(record),
                    Err(err) => {
                        warn!(%word, %err, "could not look up pronunciation");
                        None
                    }
                };

                Ok(TranslationResult::single_word(
                    source_text,
                    translation,
                    pronunciation,
                ))
            }
            WordClass::Phrase => {
                let tts_audio_url = match google::tts_url(request.text()) {
                    Ok(url) => Some(String::from(url)),
                    Err(err) => {
                        debug!(%err, "could not construct text-to-speech url");
                        None
                    }
                };

                Ok(TranslationResult::phrase(
                    source_text,
                    translation,
                    tts_audio_url,
                ))
            }
        }
    }
}

impl Lookup<reqwest::Client> {
    /// Constructs a `Lookup` with a default HTTP client using the given request `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BuildClient`] if the underlying HTTP client fails to build.
    pub fn try_new(timeout: Duration) -> Result<Self, Error> {
        http::client::try_build(timeout).map(Lookup::with_fetch)
    }
}
