pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod service;
pub mod storage;
pub mod wnid;

pub use config::Config;
pub use error::SynsetError;
pub use service::SynsetClient;
pub use wnid::Wnid;
