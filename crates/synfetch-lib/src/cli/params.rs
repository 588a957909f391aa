use crate::config::Config;
use crate::download::DownloadOptions;
use crate::wnid::Wnid;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct DownloadParams {
    pub app_config: Config,
    pub root: PathBuf,
    pub wnid: Wnid,
    pub recursive: bool,
    pub options: DownloadOptions,
}

#[derive(Debug, Clone)]
pub struct InfoParams {
    pub app_config: Config,
    pub root: PathBuf,
    pub wnid: Wnid,
    pub recursive: bool,
}
