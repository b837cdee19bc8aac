//! Error types

use miette::Diagnostic;
use thiserror::Error;
use wordlens_core::FetchError;

/// Application errors for configuration, lookups and output.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// The configuration could not be loaded.
    #[error("Could not load configuration")]
    #[diagnostic(
        code(wordlens::config),
        help("check the configuration file and any WORDLENS_* environment variables")
    )]
    Config(#[source] Box<figment::Error>),
    /// The HTTP client could not be set up.
    #[error("Could not create HTTP client")]
    #[diagnostic(code(wordlens::http_client))]
    HttpClient(#[source] wordlens_core::Error),
    /// The lookup pipeline failed.
    #[error("Unable to translate text")]
    #[diagnostic(code(wordlens::lookup))]
    Lookup(#[source] wordlens_core::Error),
    /// The dictionary entry of a word could not be fetched.
    #[error("Could not look up {word} in the dictionary")]
    #[diagnostic(code(wordlens::dictionary))]
    Dictionary {
        /// The word that was looked up.
        word: String,
        /// The underlying failure.
        #[source]
        source: FetchError,
    },
    /// The dictionary only has entries for single English words.
    #[error("Not a single English word: {0:?}")]
    #[diagnostic(
        code(wordlens::not_a_word),
        help("use the `translate` subcommand for phrases")
    )]
    NotAWord(String),
    /// Output could not be serialized.
    #[error("Could not serialize output")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use reqwest::StatusCode;

    use super::*;

    /// Returns the message of every error in the chain starting at `err`.
    fn chain(err: &Error) -> Vec<String> {
        std::iter::successors(Some(err as &dyn std::error::Error), |err| (*err).source())
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn it_should_state_each_cause_once() {
        let status = FetchError::Status(StatusCode::TOO_MANY_REQUESTS);
        let err = Error::Lookup(wordlens_core::Error::TranslationFailed(status));

        assert_eq!(
            chain(&err),
            vec![
                "Unable to translate text",
                "Translation failed",
                "server responded with 429 Too Many Requests",
            ]
        );
    }

    #[test]
    fn it_should_report_client_setup_separately() {
        let err = Error::HttpClient(wordlens_core::Error::EmptyText);

        assert_eq!(err.to_string(), "Could not create HTTP client");
        assert_eq!(chain(&err).len(), 2);
    }
}
