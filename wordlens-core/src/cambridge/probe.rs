//! Conventionally-named US audio URLs to probe when the markup references none.

use tracing::warn;
use url::Url;

/// The shape of a media URL: `{origin}{prefix}/media/{dictionary}/{folder}/{initial}/{word}.{extension}`.
struct MediaPath {
    prefix: &'static str,
    dictionary: &'static str,
    folder: &'static str,
    extension: &'static str,
}

/// Media paths in the order they're probed.
const MEDIA_PATHS: [MediaPath; 6] = [
    MediaPath {
        prefix: "/us",
        dictionary: "english",
        folder: "us_pron",
        extension: "mp3",
    },
    MediaPath {
        prefix: "",
        dictionary: "english",
        folder: "us_pron",
        extension: "mp3",
    },
    MediaPath {
        prefix: "/us",
        dictionary: "english-chinese-simplified",
        folder: "us_pron",
        extension: "mp3",
    },
    MediaPath {
        prefix: "",
        dictionary: "english-chinese-simplified",
        folder: "us_pron",
        extension: "mp3",
    },
    MediaPath {
        prefix: "/us",
        dictionary: "english",
        folder: "us_pron_ogg",
        extension: "ogg",
    },
    MediaPath {
        prefix: "/zhs",
        dictionary: "english",
        folder: "us_pron",
        extension: "mp3",
    },
];

impl MediaPath {
    fn url(&self, origin: &str, word: &str, initial: char) -> String {
        let MediaPath {
            prefix,
            dictionary,
            folder,
            extension,
        } = self;

        format!("{origin}{prefix}/media/{dictionary}/{folder}/{initial}/{word}.{extension}")
    }
}

/// Returns the URLs to probe for `word`, in order.
///
/// Returns an empty list for an empty word.
pub fn candidate_urls(origin: &str, word: &str) -> Vec<Url> {
    let Some(initial) = word.chars().next() else {
        return Vec::new();
    };

    MEDIA_PATHS
        .iter()
        .map(|path| path.url(origin, word, initial))
        .filter_map(|url| match Url::parse(&url) {
            Ok(url) => Some(url),
            Err(err) => {
                warn!(%url, %err, "skipping malformed probe url");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_should_build_candidates_in_order() {
        let urls: Vec<String> = candidate_urls("https://dictionary.cambridge.org", "hello")
            .into_iter()
            .map(String::from)
            .collect();

        assert_eq!(
            urls,
            vec![
                "https://dictionary.cambridge.org/us/media/english/us_pron/h/hello.mp3",
                "https://dictionary.cambridge.org/media/english/us_pron/h/hello.mp3",
                "https://dictionary.cambridge.org/us/media/english-chinese-simplified/us_pron/h/hello.mp3",
                "https://dictionary.cambridge.org/media/english-chinese-simplified/us_pron/h/hello.mp3",
                "https://dictionary.cambridge.org/us/media/english/us_pron_ogg/h/hello.ogg",
                "https://dictionary.cambridge.org/zhs/media/english/us_pron/h/hello.mp3",
            ]
        );
    }

    #[test]
    fn it_should_have_no_candidates_for_empty_word() {
        assert!(candidate_urls("https://dictionary.cambridge.org", "").is_empty());
    }
}
