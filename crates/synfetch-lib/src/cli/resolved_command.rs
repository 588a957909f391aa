use crate::cli::args::Command;
use crate::cli::params::{DownloadParams, InfoParams};
use crate::config::{Config, load_config};
use crate::download::DownloadOptions;
use crate::error::SynsetError;
use crate::wnid::Wnid;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub enum ResolvedCommand {
    Download(DownloadParams),
    Info(InfoParams),
}

fn resolve_root(root: Option<String>, app_config: &Config) -> Result<PathBuf, SynsetError> {
    match root.map(PathBuf::from).or_else(|| app_config.root.clone()) {
        Some(root) if root.as_os_str().is_empty() => Err(SynsetError::CliArgumentValidation {
            details: "Root directory must not be empty.".to_string(),
        }),
        Some(root) => Ok(root),
        None => Ok(std::env::current_dir()?),
    }
}

pub fn resolve_command(command: Command) -> Result<ResolvedCommand, SynsetError> {
    match command {
        Command::Download {
            config_path,
            wnid,
            root,
            limit,
            recursive,
            verbose,
        } => {
            let wnid = Wnid::parse(&wnid)?;
            let app_config = load_config(config_path.as_deref().map(Path::new))?;
            let root = resolve_root(root, &app_config)?;

            Ok(ResolvedCommand::Download(DownloadParams {
                app_config,
                root,
                wnid,
                recursive,
                options: DownloadOptions { limit, verbose },
            }))
        }
        Command::Info {
            config_path,
            wnid,
            root,
            recursive,
        } => {
            let wnid = Wnid::parse(&wnid)?;
            let app_config = load_config(config_path.as_deref().map(Path::new))?;
            let root = resolve_root(root, &app_config)?;

            Ok(ResolvedCommand::Info(InfoParams {
                app_config,
                root,
                wnid,
                recursive,
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn download_command(wnid: &str, root: Option<&str>, config_path: Option<String>) -> Command {
        Command::Download {
            config_path,
            wnid: wnid.to_string(),
            root: root.map(str::to_string),
            limit: 7,
            recursive: true,
            verbose: true,
        }
    }

    #[test]
    fn test_resolve_download_with_explicit_root() {
        let resolved = resolve_command(download_command("n01440764", Some("/data"), None)).unwrap();

        match resolved {
            ResolvedCommand::Download(params) => {
                assert_eq!(params.wnid.as_str(), "n01440764");
                assert_eq!(params.root, PathBuf::from("/data"));
                assert!(params.recursive);
                assert_eq!(
                    params.options,
                    DownloadOptions {
                        limit: 7,
                        verbose: true
                    }
                );
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_resolve_rejects_invalid_wnid() {
        assert!(matches!(
            resolve_command(download_command("n1440764", Some("/data"), None)),
            Err(SynsetError::InvalidWnid { .. })
        ));
    }

    #[test]
    fn test_root_falls_back_to_config_then_cwd() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("synfetch.toml");
        std::fs::write(&config_path, "root = \"/from/config\"\n").unwrap();
        let config_path = config_path.to_str().unwrap().to_string();

        match resolve_command(download_command(
            "n01440764",
            None,
            Some(config_path.clone()),
        ))
        .unwrap()
        {
            ResolvedCommand::Download(params) => {
                assert_eq!(params.root, PathBuf::from("/from/config"))
            }
            other => panic!("unexpected command: {other:?}"),
        }

        // The command line wins over the config file.
        match resolve_command(download_command("n01440764", Some("/cli"), Some(config_path)))
            .unwrap()
        {
            ResolvedCommand::Download(params) => assert_eq!(params.root, PathBuf::from("/cli")),
            other => panic!("unexpected command: {other:?}"),
        }

        match resolve_command(download_command("n01440764", None, None)).unwrap() {
            ResolvedCommand::Download(params) => {
                assert_eq!(params.root, std::env::current_dir().unwrap())
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_resolve_rejects_empty_root() {
        assert!(matches!(
            resolve_command(download_command("n01440764", Some(""), None)),
            Err(SynsetError::CliArgumentValidation { .. })
        ));
    }

    #[test]
    fn test_resolve_info() {
        let command = Command::Info {
            config_path: None,
            wnid: "n02084071".to_string(),
            root: Some("/data".to_string()),
            recursive: false,
        };

        match resolve_command(command).unwrap() {
            ResolvedCommand::Info(params) => {
                assert_eq!(params.wnid.as_str(), "n02084071");
                assert!(!params.recursive);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
