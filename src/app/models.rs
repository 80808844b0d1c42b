use std::collections::HashSet;
use std::path::PathBuf;

use crate::app::config::{DEFAULT_CODE_EXTENSIONS, DEFAULT_SKIP_DIRS, DEFAULT_SKIP_FILES};

/// Which files are eligible for counting. Chosen once per scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Every file under a non-pruned directory, binaries included.
    All,
    /// Skip-listed names and binary files are left out.
    #[default]
    Text,
    /// Only files with a recognized source-code extension.
    Code,
}

/// Name-based filtering rules applied to every visited entry.
#[derive(Debug, Clone)]
pub struct ScanPolicy {
    pub mode: FilterMode,
    pub skip_dirs: HashSet<String>,
    pub skip_files: HashSet<String>,
    /// Lower-cased, leading dot included (".rs").
    pub code_extensions: HashSet<String>,
}

#[cfg(test)]
impl ScanPolicy {
    /// A policy that filters nothing by name.
    pub fn unfiltered(mode: FilterMode) -> Self {
        Self {
            mode,
            skip_dirs: HashSet::new(),
            skip_files: HashSet::new(),
            code_extensions: HashSet::new(),
        }
    }

    pub fn with_mode(mut self, mode: FilterMode) -> Self {
        self.mode = mode;
        self
    }
}

impl Default for ScanPolicy {
    fn default() -> Self {
        Self {
            mode: FilterMode::default(),
            skip_dirs: DEFAULT_SKIP_DIRS.iter().map(|s| s.to_string()).collect(),
            skip_files: DEFAULT_SKIP_FILES.iter().map(|s| s.to_string()).collect(),
            code_extensions: DEFAULT_CODE_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Represents the final configuration after merging defaults and CLI args.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub root: PathBuf,
    pub policy: ScanPolicy,
}

/// A single path produced by the walker, alive for one visit.
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    pub path: PathBuf,
    pub name: String,
    pub is_dir: bool,
}

impl DirectoryEntry {
    pub fn from_walk(entry: &ignore::DirEntry) -> Self {
        Self {
            path: entry.path().to_path_buf(),
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir: entry.file_type().is_some_and(|ft| ft.is_dir()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    pub total_lines: u64,
    pub files_counted: u64,
    pub files_skipped: u64,
    pub files_failed: u64,
}
