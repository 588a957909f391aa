use crate::cli::InfoParams;
use crate::error::SynsetError;
use crate::service::SynsetClient;

pub async fn run_info(params: InfoParams) -> Result<(), SynsetError> {
    let InfoParams {
        app_config,
        root,
        wnid,
        recursive,
    } = params;

    let client = SynsetClient::new(&app_config, root)?;
    let labels = client.resolve_labels(wnid.as_str()).await?;
    let children = client.resolve_children(wnid.as_str(), recursive).await?;

    println!("{wnid}: {}", labels.join(", "));
    // The first entry is the category itself.
    for child in children.iter().skip(1) {
        println!("  {child}");
    }
    Ok(())
}
