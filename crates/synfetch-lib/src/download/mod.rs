#[allow(clippy::module_inception)]
mod download;
mod fetch;
mod types;

pub use download::download_url_list;
pub use fetch::ImageFetcher;
pub use types::{DownloadOptions, DownloadSummary};
