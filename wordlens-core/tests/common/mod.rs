//! An in-memory [`Fetch`] implementation serving canned responses.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use url::Url;
use wordlens_core::{Fetch, FetchError};

pub const HELLO_HTML: &str = include_str!("../fixtures/hello.html");
pub const COLOUR_HTML: &str = include_str!("../fixtures/colour.html");
pub const EMPTY_HTML: &str = include_str!("../fixtures/empty.html");

/// A request as seen by the fake.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Request {
    Get(String),
    Head(String),
}

#[derive(Debug, Default)]
struct State {
    pages: HashMap<String, Result<String, StatusCode>>,
    existing: HashSet<String>,
    slow: HashSet<String>,
    log: Vec<Request>,
}

#[derive(Debug, Clone, Default)]
pub struct FakeFetch {
    state: Arc<Mutex<State>>,
}

impl FakeFetch {
    pub fn new() -> FakeFetch {
        FakeFetch::default()
    }

    /// Serves `body` for `GET url`.
    pub fn page(self, url: impl Into<String>, body: impl Into<String>) -> FakeFetch {
        self.state
            .lock()
            .unwrap()
            .pages
            .insert(url.into(), Ok(body.into()));
        self
    }

    /// Responds to `GET url` with `status`.
    pub fn status(self, url: impl Into<String>, status: StatusCode) -> FakeFetch {
        self.state
            .lock()
            .unwrap()
            .pages
            .insert(url.into(), Err(status));
        self
    }

    /// Reports `url` as existing when probed.
    pub fn existing(self, url: impl Into<String>) -> FakeFetch {
        self.state.lock().unwrap().existing.insert(url.into());
        self
    }

    /// Makes probes of `url` hang.
    pub fn slow(self, url: impl Into<String>) -> FakeFetch {
        self.state.lock().unwrap().slow.insert(url.into());
        self
    }

    /// Returns every request made so far, in order.
    pub fn requests(&self) -> Vec<Request> {
        self.state.lock().unwrap().log.clone()
    }

    /// Returns the URLs of every existence check made so far, in order.
    pub fn probes(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .filter_map(|request| match request {
                Request::Head(url) => Some(url),
                Request::Get(_) => None,
            })
            .collect()
    }
}

#[async_trait]
impl Fetch for FakeFetch {
    async fn get_text(&self, url: &Url) -> Result<String, FetchError> {
        let mut state = self.state.lock().unwrap();
        state.log.push(Request::Get(url.to_string()));

        match state.pages.get(url.as_str()) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(status)) => Err(FetchError::Status(*status)),
            None => Err(FetchError::Status(StatusCode::NOT_FOUND)),
        }
    }

    async fn exists(&self, url: &Url) -> bool {
        let (found, slow) = {
            let mut state = self.state.lock().unwrap();
            state.log.push(Request::Head(url.to_string()));

            (
                state.existing.contains(url.as_str()),
                state.slow.contains(url.as_str()),
            )
        };

        if slow {
            tokio::time::sleep(Duration::from_secs(5)).await;
        }

        found
    }
}

pub fn entry_url(word: &str) -> String {
    format!("https://dictionary.cambridge.org/dictionary/english/{word}")
}

pub fn probe_urls(word: &str) -> Vec<String> {
    let initial = &word[..1];

    vec![
        format!("https://dictionary.cambridge.org/us/media/english/us_pron/{initial}/{word}.mp3"),
        format!("https://dictionary.cambridge.org/media/english/us_pron/{initial}/{word}.mp3"),
        format!(
            "https://dictionary.cambridge.org/us/media/english-chinese-simplified/us_pron/{initial}/{word}.mp3"
        ),
        format!(
            "https://dictionary.cambridge.org/media/english-chinese-simplified/us_pron/{initial}/{word}.mp3"
        ),
        format!("https://dictionary.cambridge.org/us/media/english/us_pron_ogg/{initial}/{word}.ogg"),
        format!("https://dictionary.cambridge.org/zhs/media/english/us_pron/{initial}/{word}.mp3"),
    ]
}
