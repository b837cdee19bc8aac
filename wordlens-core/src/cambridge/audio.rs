//! Audio URL extraction from entry markup.

use std::sync::LazyLock;

use regex::Regex;

use super::Locale;

/// Extraction strategies in priority order: mp3 data attributes, ogg data attributes, generic
/// `<source>` tags and AMP audio elements.
static STRATEGIES: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        Regex::new(r#"data-src-mp3="([^"]+)""#).expect("invalid regex"),
        Regex::new(r#"data-src-ogg="([^"]+)""#).expect("invalid regex"),
        Regex::new(r#"<source[^>]*src="([^"]+)"[^>]*>"#).expect("invalid regex"),
        Regex::new(r#"<amp-audio[^>]*src="([^"]+)"[^>]*>"#).expect("invalid regex"),
    ]
});

const US_MARKERS: [&str; 5] = ["us_pron", "/us/", "_us.", "us.mp3", "us.ogg"];
const UK_MARKERS: [&str; 5] = ["uk_pron", "/uk/", "_uk.", "uk.mp3", "uk.ogg"];

/// Returns every audio URL referenced in `markup`.
///
/// Results are grouped by strategy in priority order, and within a strategy by position in the
/// markup. Duplicates are kept.
pub fn candidates(markup: &str) -> Vec<&str> {
    STRATEGIES
        .iter()
        .flat_map(|strategy| {
            strategy
                .captures_iter(markup)
                .filter_map(|captures| captures.get(1))
                .map(|capture| capture.as_str())
        })
        .collect()
}

impl Locale {
    fn markers(self) -> &'static [&'static str] {
        match self {
            Locale::Us => &US_MARKERS,
            Locale::Uk => &UK_MARKERS,
        }
    }

    /// Returns whether `url` looks like a recording for this locale.
    ///
    /// A URL may look like a recording of both locales.
    #[must_use]
    pub fn matches_url(self, url: &str) -> bool {
        self.markers().iter().any(|marker| url.contains(marker))
    }
}

/// Returns the first candidate that looks like a recording for `locale`.
pub fn select<'a>(candidates: &[&'a str], locale: Locale) -> Option<&'a str> {
    candidates
        .iter()
        .copied()
        .find(|url| locale.matches_url(url))
}

/// Turns a media path into an absolute URL on `origin`, leaving absolute URLs untouched.
pub fn absolutize(url: &str, origin: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("{origin}{url}")
    }
}
