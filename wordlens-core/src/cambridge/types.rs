//! Structured types
use std::fmt::{self, Display};
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{audio, phonetic};

/// The maximum number of examples kept per definition.
const MAX_EXAMPLES: usize = 2;

/// A pronunciation dialect.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Locale {
    /// American English.
    Us,
    /// British English.
    Uk,
}

impl Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Us => f.write_str("US"),
            Locale::Uk => f.write_str("UK"),
        }
    }
}

/// Phonetic transcriptions and audio recordings of a single English word.
///
/// Transcriptions are wrapped in `/…/` delimiters. Every field is independently optional; a
/// record with no fields set means the dictionary had nothing usable for the word.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PronunciationRecord {
    /// The American transcription, e.g. `/heˈloʊ/`.
    pub phonetic_us: Option<String>,
    /// The British transcription, e.g. `/heˈləʊ/`.
    pub phonetic_uk: Option<String>,
    /// Absolute URL of the American recording.
    pub audio_url_us: Option<String>,
    /// Absolute URL of the British recording.
    pub audio_url_uk: Option<String>,
}

impl PronunciationRecord {
    /// Extracts transcriptions and audio URLs from the markup of an entry page.
    ///
    /// Relative audio paths are resolved against `origin`. This never probes for audio; see
    /// [`Client::pronunciation`] for the complete extraction.
    ///
    /// [`Client::pronunciation`]: super::Client::pronunciation
    #[must_use]
    pub fn from_markup(markup: &str, origin: &str) -> PronunciationRecord {
        let candidates = audio::candidates(markup);
        let audio_url = |locale| {
            audio::select(&candidates, locale).map(|url| audio::absolutize(url, origin))
        };

        PronunciationRecord {
            phonetic_us: phonetic::extract(markup, Locale::Us).map(delimit),
            phonetic_uk: phonetic::extract(markup, Locale::Uk).map(delimit),
            audio_url_us: audio_url(Locale::Us),
            audio_url_uk: audio_url(Locale::Uk),
        }
    }

    /// Returns the transcription for `locale`.
    #[must_use]
    pub fn phonetic(&self, locale: Locale) -> Option<&str> {
        match locale {
            Locale::Us => self.phonetic_us.as_deref(),
            Locale::Uk => self.phonetic_uk.as_deref(),
        }
    }

    /// Returns the audio URL for `locale`.
    #[must_use]
    pub fn audio_url(&self, locale: Locale) -> Option<&str> {
        match locale {
            Locale::Us => self.audio_url_us.as_deref(),
            Locale::Uk => self.audio_url_uk.as_deref(),
        }
    }

    /// Returns true if no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.phonetic_us.is_none()
            && self.phonetic_uk.is_none()
            && self.audio_url_us.is_none()
            && self.audio_url_uk.is_none()
    }
}

fn delimit(transcription: String) -> String {
    format!("/{transcription}/")
}

/// A definition block from an entry page.
///
/// # HTML Source
/// Parsed from `<div class="def-block">` elements
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DictionaryDefinition {
    /// Part of speech, e.g. "noun"
    ///
    /// Parsed from `<span class="pos dpos">`, absent on most blocks
    pub word_type: Option<String>,
    /// The definition text
    ///
    /// Parsed from `<div class="def ddef_d">`
    pub definition: String,
    /// Up to two example sentences
    ///
    /// Parsed from `<span class="eg deg">` elements
    pub examples: Vec<String>,
    /// Translation of the definition, only present on bilingual dictionary pages
    ///
    /// Parsed from `<span class="trans dtrans">`
    pub translation: Option<String>,
}

static BLOCK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.def-block").expect("definition block selector"));
static WORD_TYPE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.pos.dpos").expect("word type selector"));
static DEFINITION_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.def.ddef_d").expect("definition selector"));
static EXAMPLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.eg.deg").expect("example selector"));
static TRANSLATION_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.trans.dtrans").expect("translation selector"));

impl DictionaryDefinition {
    /// Parses every definition block of an entry page, in document order.
    ///
    /// Blocks without definition text are skipped.
    #[must_use]
    pub fn parse_all(markup: &str) -> Vec<DictionaryDefinition> {
        let document = Html::parse_document(markup);

        document
            .select(&BLOCK_SELECTOR)
            .filter_map(|ref block| DictionaryDefinition::from_html(block))
            .collect()
    }

    fn from_html(block: &ElementRef<'_>) -> Option<DictionaryDefinition> {
        let first_text = |selector: &Selector| {
            block
                .select(selector)
                .next()
                .map(element_text)
                .filter(|text| !text.is_empty())
        };

        let definition = first_text(&DEFINITION_SELECTOR)?;
        let word_type = first_text(&WORD_TYPE_SELECTOR);
        let translation = first_text(&TRANSLATION_SELECTOR);
        let examples = block
            .select(&EXAMPLE_SELECTOR)
            .map(element_text)
            .filter(|text| !text.is_empty())
            .take(MAX_EXAMPLES)
            .collect();

        Some(DictionaryDefinition {
            word_type,
            definition,
            examples,
            translation,
        })
    }
}

/// Returns the text of `elem` with runs of whitespace collapsed.
fn element_text(elem: ElementRef<'_>) -> String {
    elem.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
