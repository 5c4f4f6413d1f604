/*!
 * Utility functions for treedump
 */

use std::path::Path;

/// Name shown for a directory or file: its last path segment.
///
/// Paths ending in `.`, `..` or `/` show that segment itself. Names that are
/// not valid UTF-8 are converted lossily (U+FFFD) since the output is UTF-8.
pub fn display_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().to_string(),
        None => path
            .components()
            .next_back()
            .map(|c| c.as_os_str().to_string_lossy().to_string())
            .unwrap_or_default(),
    }
}

/// Format a count with human-readable units
pub fn format_count(num: usize) -> String {
    if num >= 1_000_000 {
        format!("{:.1}M", num as f64 / 1_000_000.0)
    } else if num >= 1_000 {
        format!("{:.1}K", num as f64 / 1_000.0)
    } else {
        num.to_string()
    }
}

/// Shorten a path for table display, keeping its trailing segments
pub fn truncate_path(path: &str, max_len: usize) -> String {
    if path.chars().count() <= max_len {
        return path.to_string();
    }

    let mut kept = Vec::new();
    let mut len = 3; // "..."
    for part in path.split('/').rev() {
        let part_len = part.chars().count() + 1;
        if len + part_len > max_len {
            break;
        }
        kept.push(part);
        len += part_len;
    }

    if kept.is_empty() {
        let tail: String = path
            .chars()
            .rev()
            .take(max_len.saturating_sub(3))
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        return format!("...{}", tail);
    }

    let mut result = String::from("...");
    for part in kept.iter().rev() {
        result.push('/');
        result.push_str(part);
    }
    result
}
