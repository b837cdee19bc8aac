//! HTTP features
//!
//! Every network call in the pipeline goes through the [`Fetch`] trait so that the lookup can be
//! driven by something other than a live [`reqwest::Client`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, trace};
use url::Url;

/// Errors returned by a [`Fetch`] implementation.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request could not be sent or the body could not be read.
    #[error("request error")]
    Request(#[source] reqwest::Error),
    /// The server responded with a non-successful status code.
    #[error("server responded with {0}")]
    Status(StatusCode),
    /// The request URL could not be constructed.
    #[error("invalid url")]
    Url(#[from] url::ParseError),
}

/// The HTTP primitives the lookup pipeline needs.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Issues a `GET` request and returns the response body as text.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Request`] on transport failure and [`FetchError::Status`] if the
    /// server responds with a non-successful status code.
    async fn get_text(&self, url: &Url) -> Result<String, FetchError>;

    /// Issues a lightweight existence check (`HEAD`) and returns whether the resource exists.
    ///
    /// Transport errors count as a miss.
    async fn exists(&self, url: &Url) -> bool;
}

#[async_trait]
impl Fetch for reqwest::Client {
    async fn get_text(&self, url: &Url) -> Result<String, FetchError> {
        trace!(%url, "GET");
        let response = self
            .get(url.clone())
            .send()
            .await
            .map_err(FetchError::Request)?;
        let status = response.status();

        if !status.is_success() {
            debug!(%url, %status, "unsuccessful response");

            return Err(FetchError::Status(status));
        }

        response.text().await.map_err(FetchError::Request)
    }

    async fn exists(&self, url: &Url) -> bool {
        trace!(%url, "HEAD");

        match self.head(url.clone()).send().await {
            Ok(response) => {
                let status = response.status();
                trace!(%url, %status, "existence check");

                status.is_success()
            }
            Err(err) => {
                debug!(%url, %err, "existence check failed");

                false
            }
        }
    }
}

pub mod client {
    //! Construction of the shared [`reqwest::Client`].

    use std::time::Duration;

    use reqwest::redirect::Policy;

    use crate::{Error, consts};

    pub use reqwest::Client;

    /// Returns a default HTTP client builder with the given request `timeout`.
    #[must_use]
    pub fn builder(timeout: Duration) -> reqwest::ClientBuilder {
        reqwest::ClientBuilder::new()
            .gzip(true)
            .redirect(Policy::limited(consts::HTTP_MAX_REDIRECTS))
            .timeout(timeout)
            .user_agent(consts::HTTP_USER_AGENT)
    }

    /// Builds a default HTTP client with the given request `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BuildClient`] if the TLS backend or system configuration can't be
    /// initialized.
    pub fn try_build(timeout: Duration) -> Result<Client, Error> {
        builder(timeout).build().map_err(Error::BuildClient)
    }
}

/// Runs an existence check, giving up after `timeout`.
pub(crate) async fn exists_within<F: Fetch + ?Sized>(
    fetch: &F,
    url: &Url,
    timeout: Duration,
) -> bool {
    if let Ok(found) = tokio::time::timeout(timeout, fetch.exists(url)).await {
        found
    } else {
        debug!(%url, ?timeout, "existence check timed out");

        false
    }
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;
    use crate::consts::HTTP_TIMEOUT;

    const FOUND: &str = "HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\nok";
    const NOT_FOUND: &str =
        "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n";

    /// Serves `200 ok` on `/found` and `404` on every other path.
    async fn serve() -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                tokio::spawn(async move {
                    let mut buf = vec![0; 4096];
                    let len = stream.read(&mut buf).await.unwrap_or(0);
                    let request = String::from_utf8_lossy(&buf[..len]);
                    let response = match request.split_whitespace().nth(1) {
                        Some("/found") => FOUND,
                        _ => NOT_FOUND,
                    };

                    let _ = stream.write_all(response.as_bytes()).await;
                    let _ = stream.shutdown().await;
                });
            }
        });

        addr
    }

    /// Returns the address of a port nothing listens on.
    async fn closed() -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();

        listener.local_addr().unwrap()
    }

    fn http_client() -> reqwest::Client {
        client::builder(HTTP_TIMEOUT).no_proxy().build().unwrap()
    }

    fn url(addr: SocketAddr, path: &str) -> Url {
        Url::parse(&format!("http://{addr}{path}")).unwrap()
    }

    #[test]
    fn test_build_client() {
        assert!(client::try_build(HTTP_TIMEOUT).is_ok());
    }

    #[tokio::test]
    async fn it_should_get_text_of_successful_responses() {
        let addr = serve().await;
        let body = http_client().get_text(&url(addr, "/found")).await.unwrap();

        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn it_should_fail_on_unsuccessful_responses() {
        let addr = serve().await;
        let result = http_client().get_text(&url(addr, "/missing")).await;

        assert!(matches!(
            result,
            Err(FetchError::Status(status)) if status == StatusCode::NOT_FOUND
        ));
    }

    #[tokio::test]
    async fn it_should_fail_when_the_connection_is_refused() {
        let addr = closed().await;
        let result = http_client().get_text(&url(addr, "/found")).await;

        assert!(matches!(result, Err(FetchError::Request(_))));
    }

    #[tokio::test]
    async fn it_should_check_existence() {
        let addr = serve().await;
        let client = http_client();

        assert!(client.exists(&url(addr, "/found")).await);
        assert!(!client.exists(&url(addr, "/missing")).await);
        assert!(!client.exists(&url(closed().await, "/found")).await);
    }
}
