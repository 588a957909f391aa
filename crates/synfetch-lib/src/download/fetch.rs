use reqwest::Client;
use std::collections::HashSet;
use tracing::debug;

/// Fetches single images, folding every failure into "no content".
#[derive(Clone, Debug)]
pub struct ImageFetcher {
    http: Client,
    unavailable_urls: HashSet<String>,
}

impl ImageFetcher {
    pub fn new(http: Client, unavailable_urls: impl IntoIterator<Item = String>) -> Self {
        Self {
            http,
            unavailable_urls: unavailable_urls.into_iter().collect(),
        }
    }

    /// Returns `None` on transport errors, non-success statuses, empty bodies and
    /// responses whose final URL is a known placeholder.
    pub async fn fetch(&self, url: &str) -> Option<Vec<u8>> {
        let response = match self.http.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                debug!(url, error = %e, "Image request failed");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            debug!(url, %status, "Image request returned an error status");
            return None;
        }

        if self.unavailable_urls.contains(response.url().as_str()) {
            debug!(url, final_url = %response.url(), "Image replaced by placeholder");
            return None;
        }

        match response.bytes().await {
            Ok(body) if body.is_empty() => {
                debug!(url, "Image body is empty");
                None
            }
            Ok(body) => Some(body.to_vec()),
            Err(e) => {
                debug!(url, error = %e, "Failed to read image body");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_host_is_no_content() {
        // Port 9 on localhost is the discard service; nothing listens there in CI.
        let fetcher = ImageFetcher::new(Client::new(), Vec::new());

        assert_eq!(fetcher.fetch("http://127.0.0.1:9/a.jpg").await, None);
    }

    #[tokio::test]
    async fn test_malformed_url_is_no_content() {
        let fetcher = ImageFetcher::new(Client::new(), Vec::new());

        assert_eq!(fetcher.fetch("not a url").await, None);
        assert_eq!(fetcher.fetch("").await, None);
    }
}
