use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SynsetError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid wnid: {wnid:?}")]
    InvalidWnid { wnid: String },

    #[error("Service rejected the request for {wnid} ({url})")]
    InvalidResponse { wnid: String, url: String },

    #[error("Service returned {status} for {url}")]
    ServiceStatus { url: String, status: u16 },

    #[error("Invalid endpoint template {template}: {reason}")]
    EndpointTemplate { template: String, reason: String },

    #[error("Malformed URL list {path} at line {line}: {reason}")]
    UrlListParse {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("Failed to create directory {path}: {reason}")]
    DirectoryCreation { path: PathBuf, reason: String },

    #[error("Invalid command line arguments: {details}")]
    CliArgumentValidation { details: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("Unexpected error: {0}")]
    Unexpected(#[from] eyre::Report),
}
