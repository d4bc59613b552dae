use clap::Parser;
use std::path::PathBuf;

use crate::scanner::ScanOptions;

#[derive(Parser, Debug)]
#[command(name = "todo-table")]
#[command(about = "Collect `// TODO user; date; comment` annotations and query them interactively")]
#[command(version)]
pub struct Cli {
    /// Path to scan (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// File extension to collect, without the dot (repeatable)
    #[arg(long = "ext", value_name = "EXT", default_value = "js")]
    pub extensions: Vec<String>,

    /// Also scan VCS, dependency and build directories
    #[arg(long, default_value_t = false)]
    pub no_ignore: bool,

    /// Log debug output to stderr
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            extensions: self
                .extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect(),
            include_ignored: self.no_ignore,
        }
    }
}
