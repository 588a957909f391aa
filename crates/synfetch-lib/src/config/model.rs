use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CHILDREN_URL: &str =
    "http://www.image-net.org/api/text/wordnet.structure.hyponym?wnid={wnid}&full={full}";
pub const DEFAULT_LABELS_URL: &str =
    "http://www.image-net.org/api/text/wordnet.synset.getwords?wnid={wnid}";
pub const DEFAULT_URL_LIST_URL: &str =
    "http://www.image-net.org/api/text/imagenet.synset.geturls.getmapping?wnid={wnid}";
pub const DEFAULT_INVALID_RESPONSE: &str = "Invalid url!";
pub const DEFAULT_UNAVAILABLE_IMAGE_URL: &str =
    "https://s.yimg.com/pw/images/en-us/photo_unavailable.png";

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Root of the on-disk layout; the current directory when unset.
    #[serde(default)]
    pub root: Option<PathBuf>,
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub download: DownloadConfig,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct ServiceConfig {
    /// Children lookup template; `{wnid}` and `{full}` are substituted.
    pub children_url: String,
    /// Label lookup template; `{wnid}` is substituted.
    pub labels_url: String,
    /// Filename/URL mapping template; `{wnid}` is substituted.
    pub url_list_url: String,
    /// Body the service answers with for an unknown category.
    pub invalid_response: String,
    pub user_agent: Option<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            children_url: DEFAULT_CHILDREN_URL.to_string(),
            labels_url: DEFAULT_LABELS_URL.to_string(),
            url_list_url: DEFAULT_URL_LIST_URL.to_string(),
            invalid_response: DEFAULT_INVALID_RESPONSE.to_string(),
            user_agent: None,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct DownloadConfig {
    pub image_extension: String,
    /// Final response URLs that mean "no image here".
    pub unavailable_image_urls: Vec<String>,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            image_extension: "jpg".to_string(),
            unavailable_image_urls: vec![DEFAULT_UNAVAILABLE_IMAGE_URL.to_string()],
        }
    }
}
