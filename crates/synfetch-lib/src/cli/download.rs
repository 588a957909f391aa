use crate::cli::DownloadParams;
use crate::download::DownloadSummary;
use crate::error::SynsetError;
use crate::service::SynsetClient;
use crate::wnid::Wnid;

pub async fn run_download(
    params: DownloadParams,
) -> Result<Vec<(Wnid, DownloadSummary)>, SynsetError> {
    let DownloadParams {
        app_config,
        root,
        wnid,
        recursive,
        options,
    } = params;

    tracing::info!("Using root directory {}", root.display());
    let client = SynsetClient::new(&app_config, root)?;

    let summaries = if recursive {
        client.download_recursive(wnid.as_str(), options).await?
    } else {
        let summary = client.download(wnid.as_str(), options).await?;
        vec![(wnid, summary)]
    };

    let saved: usize = summaries.iter().map(|(_, summary)| summary.saved).sum();
    tracing::info!(
        "Saved {} new images across {} categories",
        saved,
        summaries.len()
    );
    Ok(summaries)
}
