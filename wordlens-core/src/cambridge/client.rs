//! A client for scraping entry pages of the Cambridge Dictionary.
//!
//! The client fetches the entry page of a word and extracts pronunciations or definitions from
//! its markup.

use std::time::Duration;

use tracing::{debug, instrument, trace};
use url::Url;

use crate::consts::{CAMBRIDGE_ENTRY_PATH, CAMBRIDGE_ORIGIN, PROBE_TIMEOUT};
use crate::http::{self, Fetch, FetchError};

use super::{DictionaryDefinition, PronunciationRecord, probe};

/// An asynchronous client for the Cambridge Dictionary.
#[derive(Debug, Clone)]
pub struct Client<F = reqwest::Client> {
    /// The origin of the dictionary, without trailing slash.
    origin: String,
    /// How long a single audio probe may take.
    probe_timeout: Duration,
    /// The underlying [`Fetch`] implementation used for making HTTP requests.
    fetch: F,
}

impl<F: Fetch> Client<F> {
    /// Constructs a `Client` on top of the given [`Fetch`] implementation.
    ///
    /// This is useful if you want to share an HTTP client between multiple services.
    #[must_use]
    pub fn with_fetch(fetch: F) -> Client<F> {
        Client {
            origin: String::from(CAMBRIDGE_ORIGIN),
            probe_timeout: PROBE_TIMEOUT,
            fetch,
        }
    }

    /// Sets the maximum duration of a single audio existence probe.
    #[must_use]
    pub fn probe_timeout(mut self, timeout: Duration) -> Client<F> {
        self.probe_timeout = timeout;
        self
    }

    /// Returns the URL of the entry page for `word`.
    ///
    /// # Errors
    ///
    /// Returns [`url::ParseError`] if the configured origin isn't a valid base URL.
    pub fn entry_url(&self, word: &str) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(&self.origin)?;
        url.set_path(CAMBRIDGE_ENTRY_PATH);

        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .push(word);

        Ok(url)
    }

    /// Looks up the pronunciation of `word`.
    ///
    /// `word` is expected to be a single lower-case English word. Fields the dictionary has no
    /// data for are left unset. If the entry page doesn't reference any US recording, a fixed
    /// list of conventional media URLs is probed and the first one that exists is used.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] if the entry page can't be retrieved. Callers should treat this
    /// the same as a record with no fields set.
    #[instrument(skip(self))]
    pub async fn pronunciation(&self, word: &str) -> Result<PronunciationRecord, FetchError> {
        let markup = self.entry_markup(word).await?;
        let mut record = PronunciationRecord::from_markup(&markup, &self.origin);

        debug!(?record, "extracted pronunciation from markup");

        if record.audio_url_us.is_none() {
            record.audio_url_us = self.probe_us_audio(word).await;
        }

        Ok(record)
    }

    /// Looks up the definitions of `word`.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] if the entry page can't be retrieved.
    #[instrument(skip(self))]
    pub async fn definitions(&self, word: &str) -> Result<Vec<DictionaryDefinition>, FetchError> {
        let markup = self.entry_markup(word).await?;
        let definitions = DictionaryDefinition::parse_all(&markup);

        debug!(num_definitions = definitions.len(), "parsed definitions");

        Ok(definitions)
    }

    async fn entry_markup(&self, word: &str) -> Result<String, FetchError> {
        let url = self.entry_url(word)?;

        debug!(%url, "fetching entry page");
        let markup = self.fetch.get_text(&url).await?;
        trace!(len = markup.len(), "received entry page");

        Ok(markup)
    }

    /// Probes conventional media URLs in order and returns the first that exists.
    async fn probe_us_audio(&self, word: &str) -> Option<String> {
        for url in probe::candidate_urls(&self.origin, word) {
            if http::exists_within(&self.fetch, &url, self.probe_timeout).await {
                debug!(%url, "found audio by probing");

                return Some(url.into());
            }

            trace!(%url, "probe missed");
        }

        debug!("no audio found by probing");

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_url() {
        let client = Client::with_fetch(reqwest::Client::new());
        let url = client.entry_url("hello").unwrap();

        assert_eq!(
            url.as_str(),
            "https://dictionary.cambridge.org/dictionary/english/hello"
        );
    }

    #[test]
    fn test_entry_url_encodes_word() {
        let client = Client::with_fetch(reqwest::Client::new());
        let url = client.entry_url("a b/c").unwrap();

        assert_eq!(
            url.as_str(),
            "https://dictionary.cambridge.org/dictionary/english/a%20b%2Fc"
        );
    }
}
