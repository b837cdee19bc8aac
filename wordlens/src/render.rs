//! Human-readable terminal output.

use std::fmt::{self, Display};

use wordlens_core::cambridge::Locale;
use wordlens_core::display::PronunciationView;
use wordlens_core::{DefinitionEntry, DictionaryDefinition, DisplayView, PronunciationRecord};

/// Formats a [`DisplayView`].
pub struct ViewFormatter<'a>(pub &'a DisplayView);

/// Formats the pronunciation of `word`.
pub struct PronunciationFormatter<'a> {
    /// The word that was looked up.
    pub word: &'a str,
    /// Its pronunciation.
    pub record: &'a PronunciationRecord,
}

/// Formats the dictionary definitions of `word`.
pub struct DefinitionsFormatter<'a> {
    /// The word that was looked up.
    pub word: &'a str,
    /// Its definitions.
    pub definitions: &'a [DictionaryDefinition],
}

fn write_pronunciation(
    fmt: &mut fmt::Formatter<'_>,
    locale: Locale,
    phonetic: Option<&str>,
    audio_url: Option<&str>,
) -> fmt::Result {
    write!(fmt, "  {locale}")?;

    if let Some(phonetic) = phonetic {
        write!(fmt, " {phonetic}")?;
    }

    if let Some(audio_url) = audio_url {
        write!(fmt, " {audio_url}")?;
    }

    writeln!(fmt)
}

fn write_entry(fmt: &mut fmt::Formatter<'_>, entry: &DefinitionEntry) -> fmt::Result {
    let translations = entry.translations.join(", ");

    match &entry.word_type {
        Some(word_type) if translations.is_empty() => writeln!(fmt, "  {word_type}"),
        Some(word_type) => writeln!(fmt, "  {word_type}: {translations}"),
        None => writeln!(fmt, "  {translations}"),
    }
}

impl Display for ViewFormatter<'_> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;

        writeln!(fmt, "{} → {}", view.source_text.trim(), view.translation)?;

        let sections = [&view.us, &view.uk];

        if sections.iter().any(|section| section.is_some()) {
            for PronunciationView {
                locale,
                phonetic,
                audio_url,
            } in sections.into_iter().flatten()
            {
                write_pronunciation(fmt, *locale, phonetic.as_deref(), audio_url.as_deref())?;
            }
        } else if let Some(audio_url) = &view.audio_url {
            writeln!(fmt, "  Audio: {audio_url}")?;
        }

        if let Some(definitions) = view.definitions.as_ref().filter(|d| !d.is_empty()) {
            writeln!(fmt)?;

            for entry in definitions {
                write_entry(fmt, entry)?;
            }
        }

        if let Some(playback) = &view.playback {
            writeln!(fmt)?;
            writeln!(
                fmt,
                "Playing {} at {:.0}% volume",
                playback.audio_url,
                playback.volume * 100.0
            )?;
        }

        Ok(())
    }
}

impl Display for PronunciationFormatter<'_> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.record;

        if record.is_empty() {
            return writeln!(fmt, "No pronunciation found for {}", self.word);
        }

        writeln!(fmt, "{}", self.word)?;

        for locale in [Locale::Us, Locale::Uk] {
            let phonetic = record.phonetic(locale);
            let audio_url = record.audio_url(locale);

            if phonetic.is_some() || audio_url.is_some() {
                write_pronunciation(fmt, locale, phonetic, audio_url)?;
            }
        }

        Ok(())
    }
}

impl Display for DefinitionsFormatter<'_> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.definitions.is_empty() {
            return writeln!(fmt, "No definitions found for {}", self.word);
        }

        for (n, definition) in self.definitions.iter().enumerate() {
            write!(fmt, "{}.", n + 1)?;

            if let Some(word_type) = &definition.word_type {
                write!(fmt, " ({word_type})")?;
            }

            writeln!(fmt, " {}", definition.definition)?;

            if let Some(translation) = &definition.translation {
                writeln!(fmt, "   = {translation}")?;
            }

            for example in &definition.examples {
                writeln!(fmt, "   e.g. {example}")?;
            }
        }

        Ok(())
    }
}
