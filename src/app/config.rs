use crate::app::cli::Cli;
use crate::app::models::{FilterMode, ScanConfig, ScanPolicy};
use anyhow::{ensure, Result};
use std::collections::HashSet;
use std::path::PathBuf;

pub const DEFAULT_SKIP_DIRS: &[&str] = &[".git", "node_modules", "vendor", "build", "dist"];

pub const DEFAULT_SKIP_FILES: &[&str] = &["region_database.json"];

pub const DEFAULT_CODE_EXTENSIONS: &[&str] = &[
    ".go", ".py", ".java", ".c", ".cpp", ".h", ".hpp", ".cs", ".js", ".ts", ".html", ".css",
    ".scss", ".rb", ".php", ".swift", ".kt", ".rs", ".sh",
];

/// Appends CLI items to the defaults, dropping duplicates but keeping order.
fn merge_names(defaults: &[&str], cli_vec: Option<Vec<String>>) -> Vec<String> {
    let mut combined: Vec<String> = defaults.iter().map(|s| s.to_string()).collect();
    if let Some(mut cli_items) = cli_vec {
        combined.append(&mut cli_items);
    }
    let mut seen = HashSet::new();
    combined.retain(|item| seen.insert(item.clone()));
    combined
}

/// "RS", "rs" and ".rs" all become ".rs". Only the part after a name's last
/// dot is ever compared, so multi-part values like "tar.gz" are rejected.
fn normalize_extension(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_start_matches('.');
    ensure!(
        !trimmed.is_empty() && !trimmed.contains(['.', '/', '\\']),
        "Invalid extension: {:?}",
        raw
    );
    Ok(format!(".{}", trimmed.to_lowercase()))
}

fn validate_names(kind: &str, names: &[String]) -> Result<()> {
    for name in names {
        ensure!(
            !name.is_empty() && !name.contains(['/', '\\']),
            "Invalid {} name: {:?} (expected a bare name, not a path)",
            kind,
            name
        );
    }
    Ok(())
}

fn resolve_mode(cli: &Cli) -> FilterMode {
    if cli.code_only {
        FilterMode::Code
    } else if cli.all {
        FilterMode::All
    } else {
        FilterMode::Text
    }
}

pub fn resolve_config(cli: Cli, root: PathBuf) -> Result<ScanConfig> {
    let mode = resolve_mode(&cli);

    let skip_dirs = merge_names(DEFAULT_SKIP_DIRS, cli.skip_dir);
    validate_names("directory", &skip_dirs)?;

    let skip_files = merge_names(DEFAULT_SKIP_FILES, cli.skip_file);
    validate_names("file", &skip_files)?;

    let code_extensions: HashSet<String> = merge_names(DEFAULT_CODE_EXTENSIONS, cli.extensions)
        .iter()
        .map(|ext| normalize_extension(ext))
        .collect::<Result<_>>()?;

    Ok(ScanConfig {
        root,
        policy: ScanPolicy {
            mode,
            skip_dirs: skip_dirs.into_iter().collect(),
            skip_files: skip_files.into_iter().collect(),
            code_extensions,
        },
    })
}
