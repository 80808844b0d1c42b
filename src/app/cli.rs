use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Count the text lines in every file under a directory"
)]
pub struct Cli {
    /// Directory to scan
    pub path: Option<PathBuf>,

    /// Only count files with a recognized source-code extension
    #[arg(long = "codeonly", conflicts_with = "all")]
    pub code_only: bool,

    /// Count every file, binaries and skip-listed names included
    #[arg(long)]
    pub all: bool,

    /// Extra directory names to skip entirely (e.g. 'target')
    #[arg(long, num_args = 1..)]
    pub skip_dir: Option<Vec<String>>,

    /// Extra file names to skip in the default mode
    #[arg(long, num_args = 1..)]
    pub skip_file: Option<Vec<String>>,

    /// Extra source-code extensions for --codeonly (e.g. 'zig' or '.zig')
    #[arg(long = "ext", num_args = 1..)]
    pub extensions: Option<Vec<String>>,

    /// Log skipped files and print a per-scan breakdown
    #[arg(short, long)]
    pub verbose: bool,
}
