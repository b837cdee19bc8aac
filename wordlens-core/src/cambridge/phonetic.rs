//! Phonetic transcription patterns.

use std::sync::LazyLock;

use regex::Regex;

use super::Locale;

/// Patterns matching the US transcription, most specific markup first.
static US_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r#"(?s)<span class="us dpron-i ">.*?<span class="ipa dipa lpr-2 lpl-1">([^<]+)</span>"#)
            .expect("invalid regex"),
        Regex::new(r#"(?s)<div class="us dpron-i">.*?<span class="ipa dipa lpr-2 lpl-1">([^<]+)</span>"#)
            .expect("invalid regex"),
    ]
});

/// Patterns matching the UK transcription, most specific markup first.
static UK_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r#"(?s)<span class="uk dpron-i ">.*?<span class="ipa dipa lpr-2 lpl-1">([^<]+)</span>"#)
            .expect("invalid regex"),
        Regex::new(r#"(?s)<div class="uk dpron-i">.*?<span class="ipa dipa lpr-2 lpl-1">([^<]+)</span>"#)
            .expect("invalid regex"),
    ]
});

fn patterns(locale: Locale) -> &'static [Regex] {
    match locale {
        Locale::Us => US_PATTERNS.as_slice(),
        Locale::Uk => UK_PATTERNS.as_slice(),
    }
}

/// Returns the trimmed transcription for `locale`, without delimiters.
///
/// The first pattern that matches decides the outcome; later patterns are not consulted even if
/// the captured transcription turns out to be blank.
pub fn extract(markup: &str, locale: Locale) -> Option<String> {
    let transcription = patterns(locale)
        .iter()
        .find_map(|pattern| pattern.captures(markup))
        .and_then(|captures| captures.get(1))
        .map(|capture| capture.as_str().trim())?;

    if transcription.is_empty() {
        None
    } else {
        Some(transcription.to_string())
    }
}
