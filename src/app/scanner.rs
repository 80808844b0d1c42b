use crate::app::counter::count_lines;
use crate::app::error::ScanError;
use crate::app::models::{DirectoryEntry, ScanConfig, ScanResult};
use crate::app::policy::{classify, Decision};
use crate::app::sniffer::is_likely_binary;
use ignore::{Walk, WalkBuilder};

pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Walks the tree and sums the lines of every eligible file.
    ///
    /// A directory that cannot be listed aborts the scan. A file that cannot
    /// be read is reported and left out of the total.
    pub fn scan(&self) -> Result<ScanResult, ScanError> {
        let root = &self.config.root;
        match root.try_exists() {
            Ok(true) => {}
            Ok(false) => return Err(ScanError::NotFound { path: root.clone() }),
            Err(source) => {
                return Err(ScanError::Inaccessible {
                    path: root.clone(),
                    source,
                })
            }
        }

        let mut result = ScanResult::default();
        for item in self.walker() {
            let entry = DirectoryEntry::from_walk(&item.map_err(|source| ScanError::Walk {
                root: root.clone(),
                source,
            })?);
            // filter_entry never sees the root, so a skip-listed root stops here
            if classify(&entry, &self.config.policy) == Decision::Prune {
                log::debug!("Pruning directory {}", entry.path.display());
                break;
            }
            self.visit(&entry, &mut result);
        }

        log::debug!(
            "Scanned {}: {} lines in {} files",
            root.display(),
            result.total_lines,
            result.files_counted
        );
        Ok(result)
    }

    /// Pre-order walk with siblings sorted by name. Hidden entries are visited
    /// and ignore files have no effect. Pruned subtrees are never read.
    fn walker(&self) -> Walk {
        let policy = self.config.policy.clone();

        WalkBuilder::new(&self.config.root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                let entry = DirectoryEntry::from_walk(entry);
                if classify(&entry, &policy) == Decision::Prune {
                    log::debug!("Pruning directory {}", entry.path.display());
                    return false;
                }
                true
            })
            .build()
    }

    fn visit(&self, entry: &DirectoryEntry, result: &mut ScanResult) {
        match classify(entry, &self.config.policy) {
            Decision::Prune | Decision::Descend => {}
            Decision::Skip => {
                log::debug!("Skipping {} (filtered by name)", entry.path.display());
                result.files_skipped += 1;
            }
            Decision::CountIfText => match is_likely_binary(&entry.path) {
                Ok(false) => self.count(entry, result),
                Ok(true) => {
                    log::debug!("Skipping {} (binary)", entry.path.display());
                    result.files_skipped += 1;
                }
                Err(err) => {
                    log::debug!("Skipping {} (unreadable: {})", entry.path.display(), err);
                    result.files_skipped += 1;
                }
            },
            Decision::Count => self.count(entry, result),
        }
    }

    fn count(&self, entry: &DirectoryEntry, result: &mut ScanResult) {
        match count_lines(&entry.path) {
            Ok(lines) => {
                log::trace!("{}: {} lines", entry.path.display(), lines);
                result.total_lines += lines;
                result.files_counted += 1;
            }
            Err(err) => {
                log::warn!("Could not count lines in {}: {}", entry.path.display(), err);
                result.files_failed += 1;
            }
        }
    }
}
