//! Constants shared by the HTTP clients.

use std::time::Duration;

/// The `User-Agent` header to send when issuing HTTP requests.
///
/// The dictionary refuses requests that don't look like they come from a desktop browser.
pub const HTTP_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// The duration before a HTTP request times out.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// The duration before a single audio existence probe is abandoned.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// The maximum number of redirects to follow.
pub const HTTP_MAX_REDIRECTS: usize = 5;

/// The origin of the Cambridge Dictionary, used to absolutize relative media paths.
pub const CAMBRIDGE_ORIGIN: &str = "https://dictionary.cambridge.org";

/// The path prefix of an English dictionary entry page.
pub const CAMBRIDGE_ENTRY_PATH: &str = "/dictionary/english/";

/// The Google Translate endpoint returning translation and dictionary payloads.
pub const GOOGLE_TRANSLATE_URL: &str = "https://translate.googleapis.com/translate_a/single";

/// The Google Translate text-to-speech endpoint.
pub const GOOGLE_TTS_URL: &str = "https://translate.google.com/translate_tts";

/// The voice used when synthesizing speech for phrases.
pub const GOOGLE_TTS_LANG: &str = "en";
