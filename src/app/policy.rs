use crate::app::models::{DirectoryEntry, FilterMode, ScanPolicy};

/// What the scanner should do with a visited entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Directory whose whole subtree is skipped.
    Prune,
    Descend,
    Skip,
    /// Count only if the file does not sniff as binary.
    CountIfText,
    Count,
}

/// Decides an entry's fate from its name alone. Never touches the filesystem.
pub fn classify(entry: &DirectoryEntry, policy: &ScanPolicy) -> Decision {
    if entry.is_dir {
        return if policy.skip_dirs.contains(&entry.name) {
            Decision::Prune
        } else {
            Decision::Descend
        };
    }

    match policy.mode {
        FilterMode::All => Decision::Count,
        FilterMode::Code => {
            if is_code_file(&entry.name, policy) {
                Decision::Count
            } else {
                Decision::Skip
            }
        }
        FilterMode::Text => {
            if policy.skip_files.contains(&entry.name) {
                Decision::Skip
            } else {
                Decision::CountIfText
            }
        }
    }
}

/// The suffix of `name` starting at its last `.`, or `""` when there is none.
pub fn extension_of(name: &str) -> &str {
    name.rfind('.').map_or("", |i| &name[i..])
}

fn is_code_file(name: &str, policy: &ScanPolicy) -> bool {
    let ext = extension_of(name);
    !ext.is_empty() && policy.code_extensions.contains(&ext.to_lowercase())
}
