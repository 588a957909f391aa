mod args;
mod download;
mod info;
mod params;
mod resolved_command;

pub use args::{Args, Command, parse_args};
pub use download::run_download;
pub use info::run_info;
pub use params::{DownloadParams, InfoParams};
pub use resolved_command::{ResolvedCommand, resolve_command};
