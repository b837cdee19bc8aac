//! The subcommands, producing the text written to stdout.

use serde::Serialize;
use tracing::{debug, instrument};
use wordlens_core::{DisplayView, Fetch, Lookup, LookupRequest, WordClass};

use crate::Error;
use crate::config::Settings;
use crate::render::{DefinitionsFormatter, PronunciationFormatter, ViewFormatter};

/// Runs lookups and renders their results.
pub struct App<F> {
    lookup: Lookup<F>,
    settings: Settings,
    json: bool,
}

impl<F: Fetch> App<F> {
    /// Creates a new app that looks up text with `lookup` according to `settings`, rendering
    /// results as JSON if `json` is set.
    #[must_use]
    pub const fn new(lookup: Lookup<F>, settings: Settings, json: bool) -> App<F> {
        App {
            lookup,
            settings,
            json,
        }
    }

    /// Translates the space-joined `text`, overriding the configured languages with `from` and
    /// `to` when given.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Lookup`] if the text is blank or the translation fails.
    #[instrument(skip_all)]
    pub async fn translate(
        &self,
        text: &[String],
        from: Option<String>,
        to: Option<String>,
    ) -> Result<String, Error> {
        let source_lang = from.unwrap_or_else(|| self.settings.source_lang.clone());
        let target_lang = to.unwrap_or_else(|| self.settings.target_lang.clone());

        debug!(%source_lang, %target_lang, "translating");

        let request =
            LookupRequest::new(text.join(" "), source_lang, target_lang).map_err(Error::Lookup)?;
        let result = self
            .lookup
            .translate(&request)
            .await
            .map_err(Error::Lookup)?;
        let view = DisplayView::new(&result, &self.settings.display_options());

        self.render(&view, || ViewFormatter(&view).to_string())
    }

    /// Looks up the pronunciation of `word` in the dictionary.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAWord`] unless `word` is a single English word, or
    /// [`Error::Dictionary`] if its entry can't be fetched.
    #[instrument(skip(self))]
    pub async fn pronounce(&self, word: &str) -> Result<String, Error> {
        let word = dictionary_word(word)?;
        let record = self
            .lookup
            .cambridge()
            .pronunciation(&word)
            .await
            .map_err(|source| Error::Dictionary {
                word: word.clone(),
                source,
            })?;

        self.render(&record, || {
            PronunciationFormatter {
                word: &word,
                record: &record,
            }
            .to_string()
        })
    }

    /// Looks up the definitions of `word` in the dictionary.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAWord`] unless `word` is a single English word, or
    /// [`Error::Dictionary`] if its entry can't be fetched.
    #[instrument(skip(self))]
    pub async fn define(&self, word: &str) -> Result<String, Error> {
        let word = dictionary_word(word)?;
        let definitions = self
            .lookup
            .cambridge()
            .definitions(&word)
            .await
            .map_err(|source| Error::Dictionary {
                word: word.clone(),
                source,
            })?;

        self.render(&definitions, || {
            DefinitionsFormatter {
                word: &word,
                definitions: &definitions,
            }
            .to_string()
        })
    }

    fn render<T: Serialize>(
        &self,
        value: &T,
        human: impl FnOnce() -> String,
    ) -> Result<String, Error> {
        if self.json {
            Ok(serde_json::to_string_pretty(value)? + "\n")
        } else {
            Ok(human())
        }
    }
}

/// Normalizes `word` for the dictionary, which is keyed by lowercase single English words.
fn dictionary_word(word: &str) -> Result<String, Error> {
    match WordClass::of(word) {
        WordClass::SingleEnglishWord => Ok(word.trim().to_lowercase()),
        WordClass::Phrase => Err(Error::NotAWord(word.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_should_normalize_dictionary_words() {
        assert_eq!(dictionary_word(" Hello ").unwrap(), "hello");
        assert!(matches!(
            dictionary_word("hello world"),
            Err(Error::NotAWord(_))
        ));
        assert!(matches!(dictionary_word(""), Err(Error::NotAWord(_))));
    }
}
