/*!
 * Indented text writer for treedump
 */

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Result, TreeError};
use crate::types::{EntryKind, INDENT_UNIT};

/// Writes one line per tree entry to an owned sink
pub struct TreeWriter<W: Write> {
    /// Output sink
    sink: W,
    /// Lines written so far
    lines: usize,
}

impl TreeWriter<BufWriter<File>> {
    /// Create (or truncate) the output file and wrap it in a buffered writer
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|e| TreeError::CreateOutput {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> TreeWriter<W> {
    /// Wrap an existing sink
    pub fn new(sink: W) -> Self {
        Self { sink, lines: 0 }
    }

    /// Write a directory line at the given level
    pub fn write_dir(&mut self, level: usize, name: &str) -> Result<()> {
        self.write_entry(EntryKind::Directory, level, name)
    }

    /// Write a file line at the given level
    pub fn write_file(&mut self, level: usize, name: &str) -> Result<()> {
        self.write_entry(EntryKind::File, level, name)
    }

    /// Write `<indent(level)><glyph> <name>\n`
    pub fn write_entry(&mut self, kind: EntryKind, level: usize, name: &str) -> Result<()> {
        let line = format_line(kind, level, name);
        self.sink
            .write_all(line.as_bytes())
            .map_err(TreeError::Write)?;
        self.lines += 1;
        Ok(())
    }

    /// Number of lines written so far
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Flush pending output and hand the sink back
    pub fn finish(mut self) -> Result<W> {
        self.sink.flush().map_err(TreeError::Write)?;
        Ok(self.sink)
    }
}

/// Format a single tree line, newline included
pub fn format_line(kind: EntryKind, level: usize, name: &str) -> String {
    format!("{}{} {}\n", INDENT_UNIT.repeat(level), kind.glyph(), name)
}
