use synfetch_lib::cli::{ResolvedCommand, parse_args, resolve_command, run_download, run_info};
use synfetch_lib::error::SynsetError;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<(), SynsetError> {
    color_eyre::install()?;

    let args = parse_args();
    let command = resolve_command(args.command)?;

    match command {
        ResolvedCommand::Download(params) => {
            run_download(params).await?;
        }
        ResolvedCommand::Info(params) => run_info(params).await?,
    }

    Ok(())
}
