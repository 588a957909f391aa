use crate::wnid::Wnid;
use std::path::PathBuf;

const LIST_DIR: &str = "list";
const IMAGE_DIR: &str = "img";

/// On-disk layout under a root directory:
///
/// ```text
/// <root>/list/<wnid>.txt
/// <root>/img/<wnid>/<filename>.<ext>
/// ```
#[derive(Clone, Debug)]
pub struct StorageLayout {
    root: PathBuf,
    image_extension: String,
}

impl StorageLayout {
    pub fn new(root: impl Into<PathBuf>, image_extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            image_extension: image_extension.into(),
        }
    }

    pub fn list_dir(&self) -> PathBuf {
        self.root.join(LIST_DIR)
    }

    pub fn image_root(&self) -> PathBuf {
        self.root.join(IMAGE_DIR)
    }

    pub fn url_list_path(&self, wnid: &Wnid) -> PathBuf {
        self.list_dir().join(format!("{wnid}.txt"))
    }

    pub fn image_dir(&self, wnid: &Wnid) -> PathBuf {
        self.image_root().join(wnid.as_str())
    }

    /// Returns `None` when `filename` would escape the category directory.
    pub fn image_path(&self, wnid: &Wnid, filename: &str) -> Option<PathBuf> {
        if !is_plain_file_name(filename) {
            return None;
        }
        Some(
            self.image_dir(wnid)
                .join(format!("{filename}.{}", self.image_extension)),
        )
    }
}

fn is_plain_file_name(filename: &str) -> bool {
    !filename.is_empty()
        && filename != "."
        && filename != ".."
        && !filename.contains(['/', '\\', '\0'])
}
