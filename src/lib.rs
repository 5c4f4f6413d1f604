/*!
 * treedump - Write an indented text listing of a directory tree
 *
 * The tree is walked depth-first, pre-order. Each directory produces one
 * line followed by one line per file it contains, then its subdirectories
 * in turn. Every level of depth adds four spaces of indentation.
 */

pub mod config;
pub mod error;
pub mod report;
pub mod scanner;
pub mod types;
pub mod utils;
pub mod writer;


use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use indicatif::ProgressBar;

// Re-export main components for easier access
pub use config::{Args, Config};
pub use error::{Result, TreeError};
pub use report::{ReportFormat, Reporter, ScanReport};
pub use scanner::Scanner;
pub use types::{EntryKind, ScanStatistics, SkipReason, SkippedDir};
pub use writer::TreeWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Write the tree rooted at `root` into `destination`.
///
/// Uses file system order and does not follow symlinked directories. The
/// destination is flushed before returning; on error, lines already written
/// stay in it.
pub fn write_tree<W: Write>(root: &Path, destination: W) -> Result<()> {
    write_tree_with(&Config::for_root(root), destination).map(|_| ())
}

/// Write the tree described by `config` into `destination` and return the
/// collected statistics. `config.output_file` is ignored.
pub fn write_tree_with<W: Write>(config: &Config, destination: W) -> Result<ScanStatistics> {
    let scanner = Scanner::new(config.clone(), Arc::new(ProgressBar::hidden()));
    let mut writer = TreeWriter::new(destination);
    let stats = scanner.scan(&mut writer)?;
    writer.finish()?;
    Ok(stats)
}
