use super::fetch::ImageFetcher;
use super::types::{DownloadOptions, DownloadSummary};
use crate::error::SynsetError;
use crate::storage::{StorageLayout, UrlList, ensure_dir, exists, write_atomically};
use crate::wnid::Wnid;
use tracing::warn;

macro_rules! progress {
    ($verbose:expr, $($arg:tt)+) => {
        if $verbose {
            tracing::info!($($arg)+)
        } else {
            tracing::debug!($($arg)+)
        }
    };
}

/// Walks `list` in order and saves every image that is not on disk yet.
///
/// Files already present are skipped without touching the network. Images
/// that cannot be fetched are counted and skipped; only local I/O failures
/// abort the run.
pub async fn download_url_list(
    fetcher: &ImageFetcher,
    layout: &StorageLayout,
    wnid: &Wnid,
    list: &UrlList,
    options: DownloadOptions,
) -> Result<DownloadSummary, SynsetError> {
    let image_dir = layout.image_dir(wnid);
    ensure_dir(&image_dir).await?;

    let total = list.len();
    let mut summary = DownloadSummary {
        total,
        ..DownloadSummary::default()
    };

    for (i, entry) in list.iter().enumerate() {
        progress!(
            options.verbose,
            "{:5}/{:5} fname: {}  url: {}",
            i + 1,
            total,
            entry.filename,
            entry.url
        );

        let Some(output_path) = layout.image_path(wnid, &entry.filename) else {
            warn!(%wnid, filename = %entry.filename, "Skipping entry with unusable filename");
            summary.rejected += 1;
            continue;
        };

        if exists(&output_path).await? {
            progress!(options.verbose, "\talready exists");
            summary.already_present += 1;
            continue;
        }

        let Some(image) = fetcher.fetch(&entry.url).await else {
            progress!(options.verbose, "\timage not available");
            summary.unavailable += 1;
            continue;
        };

        write_atomically(&output_path, &image).await?;
        summary.saved += 1;
        progress!(
            options.verbose,
            "\tsaved[{}] to {}",
            summary.saved,
            output_path.display()
        );

        if options.limit_reached(summary.saved) {
            summary.limit_reached = true;
            break;
        }
    }

    Ok(summary)
}
