/*!
 * Configuration handling for treedump
 */

use std::path::{Path, PathBuf};

use clap::Parser;
use clap_complete::Shell;

use crate::error::{Result, TreeError};
use crate::{bail, ensure};

/// Output file written when none is given
pub const DEFAULT_OUTPUT_FILE: &str = "structure.txt";

/// Command-line arguments for treedump
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "treedump",
    version = env!("CARGO_PKG_VERSION"),
    about = "Write an indented listing of a directory tree to a text file",
    long_about = "Walks a directory tree depth-first and writes one line per directory and file, indented four spaces per level, to an output file."
)]
pub struct Args {
    /// Directory to walk
    #[clap(default_value = ".")]
    pub directory_path: String,

    /// Output text file (created or truncated)
    #[clap(default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: String,

    /// Sort entries by name instead of using file system order
    #[clap(long)]
    pub sort: bool,

    /// Descend into symlinked directories (cycles are skipped)
    #[clap(long)]
    pub follow_links: bool,

    /// Do not print progress or the summary table
    #[clap(long, short)]
    pub quiet: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Root directory to walk
    pub target_dir: PathBuf,

    /// Output file path
    pub output_file: PathBuf,

    /// Sort entries by file name
    pub sort: bool,

    /// Follow symlinked directories
    pub follow_links: bool,

    /// Suppress progress and report output
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_dir: PathBuf::from("."),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            sort: false,
            follow_links: false,
            quiet: false,
        }
    }
}

impl Config {
    /// Configuration for walking `root` with default options
    pub fn for_root(root: &Path) -> Self {
        Self {
            target_dir: root.to_path_buf(),
            ..Self::default()
        }
    }

    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            target_dir: PathBuf::from(args.directory_path),
            output_file: PathBuf::from(args.output_file),
            sort: args.sort,
            follow_links: args.follow_links,
            quiet: args.quiet,
        }
    }

    /// Validate the configuration before anything is written
    pub fn validate(&self) -> Result<()> {
        ensure!(
            !self.target_dir.as_os_str().is_empty(),
            InvalidArgument,
            "target directory must not be empty"
        );
        ensure!(
            !self.output_file.as_os_str().is_empty(),
            InvalidArgument,
            "output file must not be empty"
        );

        validate_root(&self.target_dir)?;

        // Check if output file directory exists
        if let Some(parent) = self.output_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                bail!(PathNotFound, "Output directory {}", parent.display());
            }
        }

        if self.output_file.is_dir() {
            bail!(
                InvalidArgument,
                "output file {} is a directory",
                self.output_file.display()
            );
        }

        Ok(())
    }
}

/// Check that `root` exists and is a directory
pub fn validate_root(root: &Path) -> Result<()> {
    let metadata = match std::fs::metadata(root) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            bail!(PathNotFound, "Target directory {}", root.display())
        }
        Err(e) => {
            return Err(TreeError::ReadDir {
                path: root.to_path_buf(),
                source: e,
            })
        }
    };

    ensure!(metadata.is_dir(), NotADirectory, "{}", root.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_match_cli_defaults() {
        let args = Args::parse_from(["treedump"]);
        let config = Config::from_args(args);
        assert_eq!(config.target_dir, PathBuf::from("."));
        assert_eq!(config.output_file, PathBuf::from("structure.txt"));
        assert!(!config.sort);
        assert!(!config.follow_links);
        assert!(!config.quiet);
    }

    #[test]
    fn test_args_positional_and_flags() {
        let args = Args::parse_from(["treedump", "proj", "out.txt", "--sort", "--follow-links", "-q"]);
        let config = Config::from_args(args);
        assert_eq!(config.target_dir, PathBuf::from("proj"));
        assert_eq!(config.output_file, PathBuf::from("out.txt"));
        assert!(config.sort && config.follow_links && config.quiet);
    }

    #[test]
    fn test_validate_missing_root() {
        let temp_dir = tempdir().unwrap();
        let config = Config {
            target_dir: temp_dir.path().join("nope"),
            output_file: temp_dir.path().join("structure.txt"),
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, TreeError::PathNotFound(_)));
    }

    #[test]
    fn test_validate_root_is_file() {
        let temp_dir = tempdir().unwrap();
        let file = temp_dir.path().join("plain.txt");
        std::fs::write(&file, "x").unwrap();

        let config = Config {
            target_dir: file,
            output_file: temp_dir.path().join("structure.txt"),
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, TreeError::NotADirectory(_)));
    }

    #[test]
    fn test_validate_missing_output_dir() {
        let temp_dir = tempdir().unwrap();
        let config = Config {
            target_dir: temp_dir.path().to_path_buf(),
            output_file: temp_dir.path().join("missing").join("structure.txt"),
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, TreeError::PathNotFound(_)));
    }

    #[test]
    fn test_validate_ok() {
        let temp_dir = tempdir().unwrap();
        let config = Config {
            target_dir: temp_dir.path().to_path_buf(),
            output_file: temp_dir.path().join("structure.txt"),
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }
}
