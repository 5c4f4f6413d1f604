/*!
 * Core types and data structures for treedump
 */

use std::fmt;
use std::path::PathBuf;

/// Indentation emitted once per level of depth
pub const INDENT_UNIT: &str = "    ";

/// Marker placed before directory names
pub const DIR_GLYPH: char = '📁';

/// Marker placed before file names
pub const FILE_GLYPH: char = '📄';

/// Kind of entry a tree line describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Directory, listed before its files and subdirectories
    Directory,
    /// Anything that is not a directory
    File,
}

impl EntryKind {
    /// Glyph written in front of the entry name
    pub fn glyph(self) -> char {
        match self {
            EntryKind::Directory => DIR_GLYPH,
            EntryKind::File => FILE_GLYPH,
        }
    }
}

/// Why a subdirectory was left out of the listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Listing the directory failed (usually permission denied)
    Unreadable(String),
    /// Following a link would re-enter a directory already on the walk stack
    Cycle,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Unreadable(msg) => write!(f, "unreadable: {}", msg),
            SkipReason::Cycle => write!(f, "symlink cycle"),
        }
    }
}

/// A subdirectory the scanner did not descend into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDir {
    /// Path of the directory as seen during the walk
    pub path: PathBuf,
    /// Reason it was skipped
    pub reason: SkipReason,
}

/// Counters collected while writing the tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStatistics {
    /// Directory lines written, the root included
    pub directories: usize,
    /// File lines written
    pub files: usize,
    /// Deepest level reached (root = 0)
    pub max_depth: usize,
    /// Subdirectories left out of the listing
    pub skipped: Vec<SkippedDir>,
}

impl ScanStatistics {
    /// Total number of lines written
    pub fn lines(&self) -> usize {
        self.directories + self.files
    }
}
