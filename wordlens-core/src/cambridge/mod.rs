//! Pronunciations and definitions scraped from the Cambridge Dictionary.
//!
//! The dictionary has no API, so entry pages are fetched as HTML and scanned with targeted
//! patterns. Phonetic transcriptions and audio URLs are extracted per [`Locale`], and when the
//! markup doesn't reference any US audio, a fixed list of conventionally-named media URLs is
//! probed instead.

mod audio;
pub mod client;
mod phonetic;
mod probe;
pub mod types;

pub use client::Client;
pub use types::{DictionaryDefinition, Locale, PronunciationRecord};
