use clap::{ArgAction, Parser};
use tracing::Level;

#[derive(Debug, Clone)]
pub enum Command {
    Download {
        config_path: Option<String>,
        wnid: String,
        root: Option<String>,
        limit: usize,
        recursive: bool,
        verbose: bool,
    },
    Info {
        config_path: Option<String>,
        wnid: String,
        root: Option<String>,
        recursive: bool,
    },
}

pub struct Args {
    pub command: Command,
}

#[derive(Debug, Parser)]
#[command(
    name = "synfetch",
    version,
    about = "Download the images of a wordnet category from the image-net taxonomy service"
)]
struct Cli {
    /// Category id, e.g. n01440764
    #[arg(value_name = "WNID")]
    wnid: String,

    #[arg(
        long = "root",
        value_name = "DIR",
        help = "Root directory for list/ and img/ (default: config root, then cwd)"
    )]
    root: Option<String>,

    #[arg(
        long = "limit",
        value_name = "N",
        help = "Maximum number of images to save per category, 0 for no limit",
        default_value_t = 0,
        conflicts_with = "info"
    )]
    limit: usize,

    #[arg(
        short = 'r',
        long = "recursive",
        help = "Also process every descendant category"
    )]
    recursive: bool,

    #[arg(
        short = 'v',
        long = "verbose",
        help = "Show progress messages (repeat for more detail)",
        action = ArgAction::Count
    )]
    verbose: u8,

    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Sets a custom config file"
    )]
    config: Option<String>,

    #[arg(
        long = "info",
        help = "Print the category's labels and child ids instead of downloading"
    )]
    info: bool,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn into_command(cli: Cli) -> Command {
    if cli.info {
        Command::Info {
            config_path: cli.config,
            wnid: cli.wnid,
            root: cli.root,
            recursive: cli.recursive,
        }
    } else {
        Command::Download {
            config_path: cli.config,
            wnid: cli.wnid,
            root: cli.root,
            limit: cli.limit,
            recursive: cli.recursive,
            verbose: cli.verbose > 0,
        }
    }
}

pub fn parse_args() -> Args {
    let cli = Cli::parse();
    let log_level = log_level(cli.verbose);

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(log_level.into())
                .from_env_lossy()
                .add_directive("hyper=warn".parse().unwrap())
                .add_directive("reqwest=warn".parse().unwrap()),
        )
        .init();

    Args {
        command: into_command(cli),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Command {
        into_command(Cli::try_parse_from(args).unwrap())
    }

    #[test]
    fn test_defaults() {
        match parse(&["synfetch", "n01440764"]) {
            Command::Download {
                config_path,
                wnid,
                root,
                limit,
                recursive,
                verbose,
            } => {
                assert_eq!(config_path, None);
                assert_eq!(wnid, "n01440764");
                assert_eq!(root, None);
                assert_eq!(limit, 0);
                assert!(!recursive);
                assert!(!verbose);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_all_download_flags() {
        match parse(&[
            "synfetch",
            "n01440764",
            "--root",
            "/data",
            "--limit",
            "5",
            "-r",
            "-vv",
            "-c",
            "synfetch.toml",
        ]) {
            Command::Download {
                config_path,
                root,
                limit,
                recursive,
                verbose,
                ..
            } => {
                assert_eq!(config_path.as_deref(), Some("synfetch.toml"));
                assert_eq!(root.as_deref(), Some("/data"));
                assert_eq!(limit, 5);
                assert!(recursive);
                assert!(verbose);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_info_flag() {
        assert!(matches!(
            parse(&["synfetch", "--info", "--recursive", "n01440764"]),
            Command::Info {
                recursive: true,
                ..
            }
        ));
    }

    #[test]
    fn test_info_conflicts_with_limit() {
        assert!(Cli::try_parse_from(["synfetch", "--info", "--limit", "3", "n01440764"]).is_err());
    }

    #[test]
    fn test_wnid_is_required() {
        assert!(Cli::try_parse_from(["synfetch"]).is_err());
    }

    #[test]
    fn test_log_level_from_verbosity() {
        assert_eq!(log_level(0), Level::WARN);
        assert_eq!(log_level(1), Level::INFO);
        assert_eq!(log_level(2), Level::DEBUG);
        assert_eq!(log_level(7), Level::TRACE);
    }
}
