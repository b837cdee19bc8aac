//! Core lookup pipeline for `wordlens`.
//!
//! A lookup translates a piece of text with Google Translate and, for single English words,
//! enriches the result with US/UK phonetics and audio URLs scraped from the Cambridge Dictionary.
//! The resulting [`TranslationResult`] is mapped to a [`DisplayView`] for rendering.

// Allow repetition of structure name instead of replacing with self as the output from
// rust-analyzer becomes more readable
#![allow(clippy::use_self)]

pub mod cambridge;
pub mod consts;
pub mod display;
mod error;
pub mod google;
pub mod http;
pub mod lookup;

pub use cambridge::{DictionaryDefinition, PronunciationRecord};
pub use display::{DisplayOptions, DisplayView, PlaybackRequest};
pub use error::Error;
pub use google::{DefinitionEntry, Translation};
pub use http::{Fetch, FetchError};
pub use lookup::{Lookup, LookupRequest, TranslationResult, WordClass};
