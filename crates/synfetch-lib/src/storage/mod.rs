mod files;
mod layout;
mod url_list;

pub use files::{ensure_dir, exists, write_atomically};
pub use layout::StorageLayout;
pub use url_list::{UrlList, UrlListEntry, parse_response, save_url_list};
