/*!
 * Directory walking for treedump
 */

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use indicatif::ProgressBar;
use walkdir::WalkDir;

use crate::config::{validate_root, Config};
use crate::error::{Result, TreeError};
use crate::types::{ScanStatistics, SkipReason, SkippedDir};
use crate::utils::display_name;
use crate::writer::TreeWriter;

/// Immediate children of one directory, split the way they are emitted
#[derive(Debug, Default)]
struct Listing {
    /// Subdirectories to descend into, with their display names
    dirs: Vec<(PathBuf, String)>,
    /// File names, written right after the directory line
    files: Vec<String>,
}

/// Walks a directory tree and streams it into a `TreeWriter`
pub struct Scanner {
    /// Scanner configuration
    config: Config,
    /// Progress indicator, one tick per directory
    pub progress: Arc<ProgressBar>,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        Self { config, progress }
    }

    /// Walk the configured root and write every line to `writer`.
    ///
    /// Failure to read the root is fatal. Subdirectories that cannot be read
    /// are left out and reported in the returned statistics.
    pub fn scan<W: Write>(&self, writer: &mut TreeWriter<W>) -> Result<ScanStatistics> {
        let root = self.config.target_dir.as_path();
        validate_root(root)?;

        let listing = self.read_listing(root)?;

        let mut ancestors = Vec::new();
        if self.config.follow_links {
            ancestors.push(canonical(root)?);
        }

        let mut stats = ScanStatistics::default();
        self.visit(
            &display_name(root),
            0,
            listing,
            &mut ancestors,
            writer,
            &mut stats,
        )?;

        Ok(stats)
    }

    /// Write one directory, its files, then each subdirectory in turn
    fn visit<W: Write>(
        &self,
        name: &str,
        level: usize,
        listing: Listing,
        ancestors: &mut Vec<PathBuf>,
        writer: &mut TreeWriter<W>,
        stats: &mut ScanStatistics,
    ) -> Result<()> {
        self.progress.inc(1);
        self.progress.set_message(format!("📂 {}", name));

        writer.write_dir(level, name)?;
        stats.directories += 1;
        stats.max_depth = stats.max_depth.max(level);

        for file in &listing.files {
            writer.write_file(level + 1, file)?;
            stats.files += 1;
        }

        for (path, dir_name) in listing.dirs {
            let guard = if self.config.follow_links {
                match canonical(&path) {
                    Ok(real) if ancestors.contains(&real) => {
                        self.skip(stats, path, SkipReason::Cycle);
                        continue;
                    }
                    Ok(real) => Some(real),
                    Err(e) => {
                        self.skip(stats, path, SkipReason::Unreadable(io_message(&e)));
                        continue;
                    }
                }
            } else {
                None
            };

            let child = match self.read_listing(&path) {
                Ok(child) => child,
                Err(e) => {
                    self.skip(stats, path, SkipReason::Unreadable(io_message(&e)));
                    continue;
                }
            };

            if let Some(real) = guard {
                ancestors.push(real);
                let result = self.visit(&dir_name, level + 1, child, ancestors, writer, stats);
                ancestors.pop();
                result?;
            } else {
                self.visit(&dir_name, level + 1, child, ancestors, writer, stats)?;
            }
        }

        Ok(())
    }

    /// List the immediate children of `dir`.
    ///
    /// Entries that resolve to a directory are subdirectories, everything
    /// else (broken links included) is a file. Without link following,
    /// symlinked directories are neither listed nor descended into.
    fn read_listing(&self, dir: &Path) -> Result<Listing> {
        let mut walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(self.config.follow_links);
        if self.config.sort {
            walker = walker.sort_by_file_name();
        }

        let mut listing = Listing::default();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    // Errors past depth 0 belong to a single child, not the listing
                    match (e.depth(), e.path().map(Path::to_path_buf)) {
                        (0, _) | (_, None) => {
                            return Err(TreeError::ReadDir {
                                path: dir.to_path_buf(),
                                source: io::Error::from(e),
                            })
                        }
                        (_, Some(path)) => {
                            let name = display_name(&path);
                            if e.loop_ancestor().is_some() {
                                listing.dirs.push((path, name));
                            } else {
                                listing.files.push(name);
                            }
                            continue;
                        }
                    }
                }
            };

            let name = entry.file_name().to_string_lossy().to_string();
            let path = entry.path().to_path_buf();

            if entry.file_type().is_dir() {
                listing.dirs.push((path, name));
            } else if entry.path_is_symlink() && path.is_dir() {
                // Symlinked directory while not following links
                continue;
            } else {
                listing.files.push(name);
            }
        }

        Ok(listing)
    }

    fn skip(&self, stats: &mut ScanStatistics, path: PathBuf, reason: SkipReason) {
        self.progress
            .set_message(format!("⚠️ Skipping {}: {}", path.display(), reason));
        stats.skipped.push(SkippedDir { path, reason });
    }
}

/// Resolve a directory to its canonical path for cycle detection
fn canonical(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|e| TreeError::ReadDir {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Message of the underlying I/O error, without the path prefix
fn io_message(err: &TreeError) -> String {
    match err {
        TreeError::ReadDir { source, .. } => source.to_string(),
        other => other.to_string(),
    }
}
