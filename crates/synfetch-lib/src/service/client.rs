use super::endpoints::ServiceEndpoints;
use crate::config::Config;
use crate::download::{DownloadOptions, DownloadSummary, ImageFetcher, download_url_list};
use crate::error::SynsetError;
use crate::storage::{
    StorageLayout, UrlList, ensure_dir, exists, parse_response, save_url_list,
};
use crate::wnid::Wnid;
use reqwest::Client as Http;
use std::path::PathBuf;
use tracing::{debug, info};
use url::Url;

const DEFAULT_USER_AGENT: &str = concat!("synfetch/", env!("CARGO_PKG_VERSION"));

/// How [`SynsetClient::fetch_url_list`] satisfied the request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UrlListStatus {
    /// The cache file was already on disk; nothing was requested.
    Cached,
    /// The list was fetched and written with this many entries.
    Fetched(usize),
    /// The service answered with an empty list; no cache file was written.
    Empty,
}

/// Client for the taxonomy service plus the local image store under one root.
#[derive(Clone, Debug)]
pub struct SynsetClient {
    http: Http,
    endpoints: ServiceEndpoints,
    layout: StorageLayout,
    invalid_response: String,
    images: ImageFetcher,
}

impl SynsetClient {
    pub fn new(config: &Config, root: impl Into<PathBuf>) -> Result<Self, SynsetError> {
        let endpoints = ServiceEndpoints::from_config(&config.service)?;
        let user_agent = config
            .service
            .user_agent
            .as_deref()
            .unwrap_or(DEFAULT_USER_AGENT);
        let http = Http::builder().user_agent(user_agent).build()?;

        Ok(Self {
            images: ImageFetcher::new(
                http.clone(),
                config.download.unavailable_image_urls.iter().cloned(),
            ),
            http,
            endpoints,
            layout: StorageLayout::new(root, config.download.image_extension.clone()),
            invalid_response: config.service.invalid_response.clone(),
        })
    }

    pub fn layout(&self) -> &StorageLayout {
        &self.layout
    }

    async fn get_text(&self, wnid: &Wnid, url: Url) -> Result<String, SynsetError> {
        debug!(%wnid, %url, "Querying service");
        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SynsetError::ServiceStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        if body.trim_end() == self.invalid_response {
            return Err(SynsetError::InvalidResponse {
                wnid: wnid.to_string(),
                url: url.to_string(),
            });
        }
        Ok(body)
    }

    /// Returns `wnid` followed by its hyponyms; all descendants when `recursive`,
    /// direct children otherwise.
    pub async fn resolve_children(
        &self,
        wnid: &str,
        recursive: bool,
    ) -> Result<Vec<Wnid>, SynsetError> {
        let wnid = Wnid::parse(wnid)?;
        let url = self.endpoints.children(&wnid, recursive)?;
        let body = self.get_text(&wnid, url).await?;

        // Hyponyms come back as `-nXXXXXXXX` lines under the parent.
        body.split_whitespace()
            .map(|token| Wnid::parse(token.trim_start_matches('-')))
            .collect()
    }

    pub async fn resolve_labels(&self, wnid: &str) -> Result<Vec<String>, SynsetError> {
        let wnid = Wnid::parse(wnid)?;
        let url = self.endpoints.labels(&wnid)?;
        let body = self.get_text(&wnid, url).await?;

        Ok(body
            .split('\n')
            .map(str::trim_end)
            .filter(|label| !label.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Makes sure `<root>/list/<wnid>.txt` exists, fetching it only when missing.
    pub async fn fetch_url_list(&self, wnid: &str) -> Result<UrlListStatus, SynsetError> {
        let wnid = Wnid::parse(wnid)?;
        let list_path = self.layout.url_list_path(&wnid);
        if exists(&list_path).await? {
            debug!(%wnid, path = %list_path.display(), "URL list already cached");
            return Ok(UrlListStatus::Cached);
        }

        let url = self.endpoints.url_list(&wnid)?;
        let body = self.get_text(&wnid, url).await?;
        let entries = parse_response(&body);
        if entries.is_empty() {
            info!(%wnid, "Service returned an empty URL list");
            return Ok(UrlListStatus::Empty);
        }

        ensure_dir(&self.layout.list_dir()).await?;
        save_url_list(&list_path, &entries).await?;
        info!(%wnid, entries = entries.len(), path = %list_path.display(), "Saved URL list");
        Ok(UrlListStatus::Fetched(entries.len()))
    }

    /// Downloads the images named in the cached URL list of `wnid`.
    pub async fn download_all(
        &self,
        wnid: &str,
        options: DownloadOptions,
    ) -> Result<DownloadSummary, SynsetError> {
        let wnid = Wnid::parse(wnid)?;
        let list = UrlList::load(&self.layout.url_list_path(&wnid)).await?;

        let summary = download_url_list(&self.images, &self.layout, &wnid, &list, options).await?;
        info!(
            %wnid,
            total = summary.total,
            visited = summary.visited(),
            saved = summary.saved,
            already_present = summary.already_present,
            unavailable = summary.unavailable,
            rejected = summary.rejected,
            limit_reached = summary.limit_reached,
            "Finished category"
        );
        Ok(summary)
    }

    /// Fetches the URL list if needed, then downloads its images.
    pub async fn download(
        &self,
        wnid: &str,
        options: DownloadOptions,
    ) -> Result<DownloadSummary, SynsetError> {
        match self.fetch_url_list(wnid).await? {
            UrlListStatus::Empty => Ok(DownloadSummary::default()),
            UrlListStatus::Cached | UrlListStatus::Fetched(_) => {
                self.download_all(wnid, options).await
            }
        }
    }

    /// Downloads `wnid` and every descendant, parent first. `options.limit`
    /// applies to each category separately.
    pub async fn download_recursive(
        &self,
        wnid: &str,
        options: DownloadOptions,
    ) -> Result<Vec<(Wnid, DownloadSummary)>, SynsetError> {
        let wnids = self.resolve_children(wnid, true).await?;
        info!(root = wnid, categories = wnids.len(), "Resolved category tree");

        let mut summaries = Vec::with_capacity(wnids.len());
        for wnid in wnids {
            let summary = self.download(wnid.as_str(), options).await?;
            summaries.push((wnid, summary));
        }
        Ok(summaries)
    }
}
