//! Maps lookup results to what a rendering layer shows.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cambridge::{Locale, PronunciationRecord};
use crate::google::DefinitionEntry;
use crate::lookup::TranslationResult;

/// User preferences that affect what is shown.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayOptions {
    /// Show phonetic transcriptions.
    pub show_phonetic: bool,
    /// Offer audio recordings.
    pub enable_pronunciation: bool,
    /// Request playback of the primary recording as soon as the result is shown.
    pub auto_play_audio: bool,
    /// Playback volume, from 0.0 to 1.0.
    pub volume: f32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        DisplayOptions {
            show_phonetic: true,
            enable_pronunciation: true,
            auto_play_audio: false,
            volume: 1.0,
        }
    }
}

/// A request for the audio playback service.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlaybackRequest {
    /// The recording to play.
    pub audio_url: String,
    /// Playback volume, from 0.0 to 1.0.
    pub volume: f32,
}

/// The pronunciation of one locale.
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PronunciationView {
    /// The locale of this pronunciation.
    pub locale: Locale,
    /// The delimited transcription.
    pub phonetic: Option<String>,
    /// The recording.
    pub audio_url: Option<String>,
}

/// Everything a rendering layer needs to show a lookup result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayView {
    /// The looked-up text.
    pub source_text: String,
    /// The translated text.
    pub translation: String,
    /// The primary transcription, US preferred.
    pub phonetic: Option<String>,
    /// The primary recording: US preferred for words, synthesized speech for phrases.
    ///
    /// Words without a US recording fall back to the UK one, which is then also what
    /// [`DisplayView::playback`] starts when auto-play is enabled.
    pub audio_url: Option<String>,
    /// The US pronunciation section.
    pub us: Option<PronunciationView>,
    /// The UK pronunciation section.
    pub uk: Option<PronunciationView>,
    /// The definitions section.
    pub definitions: Option<Vec<DefinitionEntry>>,
    /// Playback to start right away.
    pub playback: Option<PlaybackRequest>,
}

impl PronunciationView {
    fn new(
        record: &PronunciationRecord,
        locale: Locale,
        options: &DisplayOptions,
    ) -> Option<PronunciationView> {
        let phonetic = record
            .phonetic(locale)
            .filter(|_| options.show_phonetic)
            .map(String::from);
        let audio_url = record
            .audio_url(locale)
            .filter(|_| options.enable_pronunciation)
            .map(String::from);

        if phonetic.is_none() && audio_url.is_none() {
            None
        } else {
            Some(PronunciationView {
                locale,
                phonetic,
                audio_url,
            })
        }
    }
}

impl DisplayView {
    /// Maps `result` to a view according to `options`.
    ///
    /// Phrase results never show pronunciation or definitions sections.
    #[must_use]
    pub fn new(result: &TranslationResult, options: &DisplayOptions) -> DisplayView {
        let mut view = DisplayView {
            source_text: result.source_text().to_string(),
            translation: result.translation().to_string(),
            phonetic: None,
            audio_url: None,
            us: None,
            uk: None,
            definitions: None,
            playback: None,
        };

        if result.is_single_word() {
            let (us, uk) = result.pronunciation().map_or((None, None), |record| {
                (
                    PronunciationView::new(record, Locale::Us, options),
                    PronunciationView::new(record, Locale::Uk, options),
                )
            });
            let sections = || us.iter().chain(uk.iter());

            view.phonetic = sections().find_map(|section| section.phonetic.clone());
            view.audio_url = sections().find_map(|section| section.audio_url.clone());
            view.definitions = result.definitions().map(<[_]>::to_vec);
            view.us = us;
            view.uk = uk;
        } else if options.enable_pronunciation {
            view.audio_url = result.tts_audio_url().map(String::from);
        }

        if options.auto_play_audio {
            view.playback = view.audio_url.clone().map(|audio_url| PlaybackRequest {
                audio_url,
                volume: options.volume.clamp(0.0, 1.0),
            });
        }

        view
    }
}
