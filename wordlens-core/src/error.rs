use thiserror::Error;

use crate::http::FetchError;

/// Errors that can occur while performing a lookup.
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying HTTP client could not be constructed.
    #[error("could not construct http client")]
    BuildClient(#[source] reqwest::Error),
    /// The text to look up is empty after trimming.
    #[error("nothing to translate")]
    EmptyText,
    /// The translation endpoint could not be reached or responded unsuccessfully.
    #[error("Translation failed")]
    TranslationFailed(#[source] FetchError),
    /// The translation endpoint responded with something that isn't JSON.
    #[error("could not decode translation response")]
    Decode(#[source] serde_json::Error),
    /// The translation response decoded fine but contained no translated text.
    #[error("No translation received")]
    NoTranslation,
    /// A request URL could not be constructed.
    #[error("invalid url")]
    Url(#[from] url::ParseError),
}
