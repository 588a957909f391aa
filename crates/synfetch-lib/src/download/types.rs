#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DownloadOptions {
    /// Stop after this many newly saved images; 0 means no limit.
    pub limit: usize,
    /// Log per-image progress at info instead of debug.
    pub verbose: bool,
}

impl DownloadOptions {
    pub fn limit_reached(&self, saved: usize) -> bool {
        self.limit != 0 && saved >= self.limit
    }
}

/// Outcome counters for one category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DownloadSummary {
    /// Entries in the URL list.
    pub total: usize,
    pub saved: usize,
    pub already_present: usize,
    /// Fetch failed, came back empty, or landed on a placeholder image.
    pub unavailable: usize,
    /// Filename could not be mapped to a path inside the category directory.
    pub rejected: usize,
    pub limit_reached: bool,
}

impl DownloadSummary {
    pub fn visited(&self) -> usize {
        self.saved + self.already_present + self.unavailable + self.rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_limit_is_unlimited() {
        let options = DownloadOptions {
            limit: 0,
            verbose: false,
        };

        assert!(!options.limit_reached(0));
        assert!(!options.limit_reached(usize::MAX));
    }

    #[test]
    fn test_limit_reached_at_exact_count() {
        let options = DownloadOptions {
            limit: 3,
            verbose: false,
        };

        assert!(!options.limit_reached(2));
        assert!(options.limit_reached(3));
    }
}
