use super::files::write_atomically;
use crate::error::SynsetError;
use itertools::Itertools;
use std::collections::HashMap;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UrlListEntry {
    pub filename: String,
    pub url: String,
}

/// Splits the service's mapping response, whitespace separated
/// `filename url filename url ...` tokens, into pairs in response order.
/// Repeated filenames are kept as they are. An unpaired trailing token is dropped.
pub fn parse_response(body: &str) -> Vec<UrlListEntry> {
    body.split_whitespace()
        .tuples()
        .map(|(filename, url)| UrlListEntry {
            filename: filename.to_string(),
            url: url.to_string(),
        })
        .collect()
}

/// Writes `entries` as a cache file, one `filename url` pair per line.
pub async fn save_url_list(path: &Path, entries: &[UrlListEntry]) -> Result<(), SynsetError> {
    write_atomically(path, file_contents(entries).as_bytes()).await
}

fn file_contents(entries: &[UrlListEntry]) -> String {
    entries
        .iter()
        .map(|entry| format!("{} {}\n", entry.filename, entry.url))
        .collect()
}

/// Ordered filename → URL mapping of one category, as read back from its cache file.
///
/// A repeated filename keeps its first position and takes the latest URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UrlList {
    entries: Vec<UrlListEntry>,
    index: HashMap<String, usize>,
}

impl UrlList {
    fn insert(&mut self, filename: &str, url: &str) {
        match self.index.get(filename) {
            Some(&i) => self.entries[i].url = url.to_string(),
            None => {
                self.index.insert(filename.to_string(), self.entries.len());
                self.entries.push(UrlListEntry {
                    filename: filename.to_string(),
                    url: url.to_string(),
                });
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UrlListEntry> {
        self.entries.iter()
    }

    /// Parses the cache file format, one `filename url` pair per line.
    pub fn parse(path: &Path, content: &str) -> Result<Self, SynsetError> {
        let mut list = Self::default();
        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let Some((filename, url)) = line.split_once(char::is_whitespace) else {
                return Err(SynsetError::UrlListParse {
                    path: path.to_path_buf(),
                    line: i + 1,
                    reason: "expected `filename url`".to_string(),
                });
            };
            list.insert(filename, url.trim_start());
        }
        Ok(list)
    }

    pub async fn load(path: &Path) -> Result<Self, SynsetError> {
        let content = tokio::fs::read_to_string(path).await?;
        Self::parse(path, &content)
    }
}

impl<'a> IntoIterator for &'a UrlList {
    type Item = &'a UrlListEntry;
    type IntoIter = std::slice::Iter<'a, UrlListEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
