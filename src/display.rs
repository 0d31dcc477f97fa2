// Terminal output formatting.
// Cache-size units, column layout, truncation, relative time, and glyphs.

use std::io::IsTerminal;
use std::process::Command;

use chrono::{DateTime, Utc};
use crossterm::style::Stylize;

use crate::github::ActionsCache;

const KB_IN_BYTES: f64 = 1024.0;
const MB_IN_BYTES: f64 = 1024.0 * 1024.0;
const GB_IN_BYTES: f64 = 1024.0 * 1024.0 * 1024.0;

const SIZE_COLUMN_WIDTH: usize = 15;
const LAST_ACCESSED_COLUMN_WIDTH: usize = 20;

/// Tables are laid out against at least this many columns.
const MIN_TABLE_WIDTH: usize = 100;
const DEFAULT_TERMINAL_WIDTH: usize = 100;

/// Rows printed before the trimmed list cuts off.
const TRIMMED_LIST_LIMIT: usize = 30;

/// Format a byte count with threshold-based unit selection.
pub fn format_cache_size(size_in_bytes: f64) -> String {
    if size_in_bytes < KB_IN_BYTES {
        format!("{:.2} B", size_in_bytes)
    } else if size_in_bytes < MB_IN_BYTES {
        format!("{:.2} KB", size_in_bytes / KB_IN_BYTES)
    } else if size_in_bytes < GB_IN_BYTES {
        format!("{:.2} MB", size_in_bytes / MB_IN_BYTES)
    } else {
        format!("{:.2} GB", size_in_bytes / GB_IN_BYTES)
    }
}

/// Cut a string to exactly `width` characters, truncating with an ellipsis
/// or right-padding with spaces.
pub fn trim_or_pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len > width {
        let mut out: String = value.chars().take(width.saturating_sub(3)).collect();
        out.push_str("...");
        out
    } else {
        let mut out = value.to_string();
        out.push_str(&" ".repeat(width - len));
        out
    }
}

/// Column widths for the cache table, derived from the terminal width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub key: usize,
    pub size: usize,
    pub ref_name: usize,
    pub time: usize,
}

impl ColumnWidths {
    /// Size and time columns are fixed; the key takes 65% and the ref 20%
    /// of what remains.
    pub fn for_width(terminal_width: usize) -> Self {
        let width = terminal_width.max(MIN_TABLE_WIDTH);
        let remaining = width - SIZE_COLUMN_WIDTH - LAST_ACCESSED_COLUMN_WIDTH;
        Self {
            key: (0.65 * remaining as f64).floor() as usize,
            size: SIZE_COLUMN_WIDTH,
            ref_name: (0.20 * remaining as f64).floor() as usize,
            time: LAST_ACCESSED_COLUMN_WIDTH,
        }
    }
}

/// Format a timestamp as relative time (e.g. "2h ago").
pub fn relative_time(dt: &DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(*dt);

    if duration.num_days() > 0 {
        format!("{}d ago", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{}h ago", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{}m ago", duration.num_minutes())
    } else {
        "just now".to_string()
    }
}

fn last_accessed(dt: &DateTime<Utc>) -> String {
    format!(" {}", relative_time(dt))
}

/// Format one cache entry as a fixed-width row.
pub fn format_cache_row(cache: &ActionsCache, widths: &ColumnWidths) -> String {
    let key = trim_or_pad(&cache.key, widths.key);
    let size = trim_or_pad(
        &format!("[{}]", format_cache_size(cache.size_in_bytes as f64)),
        widths.size,
    );
    let ref_name = trim_or_pad(&cache.ref_name, widths.ref_name);
    let time = trim_or_pad(&last_accessed(&cache.last_accessed_at), widths.time);
    format!("{} {} {} {}", key, size, ref_name, time)
}

/// Print all cache entries as a table sized to the terminal.
#[allow(dead_code)]
pub fn print_cache_list(caches: &[ActionsCache]) {
    let widths = ColumnWidths::for_width(terminal_width());
    for cache in caches {
        println!("{}", format_cache_row(cache, &widths));
    }
}

/// Format at most 30 cache entries as rows, with a footer noting how many
/// were cut off.
pub fn format_trimmed_cache_list(caches: &[ActionsCache], widths: &ColumnWidths) -> Vec<String> {
    let mut lines: Vec<String> = caches
        .iter()
        .take(TRIMMED_LIST_LIMIT)
        .map(|cache| format_cache_row(cache, widths))
        .collect();
    if caches.len() > TRIMMED_LIST_LIMIT {
        lines.push(format!(
            "... and {} more",
            caches.len() - TRIMMED_LIST_LIMIT
        ));
    }
    lines
}

/// Print at most 30 cache entries, noting how many were cut off.
pub fn print_trimmed_cache_list(caches: &[ActionsCache]) {
    let widths = ColumnWidths::for_width(terminal_width());
    for line in format_trimmed_cache_list(caches, &widths) {
        println!("{}", line);
    }
    // The cut-off footer gets its own trailing blank line.
    if caches.len() > TRIMMED_LIST_LIMIT {
        println!();
    }
    println!();
}

/// Number of character columns in the current terminal. Falls back to
/// `tput cols` and then to a fixed default.
pub fn terminal_width() -> usize {
    match crossterm::terminal::size() {
        Ok((cols, _)) => cols as usize,
        Err(_) => tput_cols().unwrap_or(DEFAULT_TERMINAL_WIDTH),
    }
}

fn tput_cols() -> Option<usize> {
    let output = Command::new("tput").arg("cols").output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8_lossy(&output.stdout).trim().parse().ok()
}

/// A tick glyph, red when stdout is a terminal.
#[allow(dead_code)]
pub fn red_tick() -> String {
    let tick = "\u{2713}";
    if std::io::stdout().is_terminal() {
        tick.red().to_string()
    } else {
        tick.to_string()
    }
}

/// Format a count with its singular or plural noun.
pub fn singular_or_plural(count: u64, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn cache(key: &str, size_in_bytes: u64, ref_name: &str) -> ActionsCache {
        ActionsCache {
            id: 1,
            key: key.to_string(),
            ref_name: ref_name.to_string(),
            size_in_bytes,
            version: None,
            created_at: Utc::now(),
            last_accessed_at: Utc::now(),
        }
    }

    #[test]
    fn test_format_cache_size_bytes() {
        assert_eq!(format_cache_size(500.0), "500.00 B");
    }

    #[test]
    fn test_format_cache_size_kilobytes() {
        assert_eq!(format_cache_size(2048.0), "2.00 KB");
    }

    #[test]
    fn test_format_cache_size_megabytes() {
        assert_eq!(format_cache_size(5.0 * 1024.0 * 1024.0), "5.00 MB");
    }

    #[test]
    fn test_format_cache_size_gigabytes() {
        assert_eq!(format_cache_size(3.0 * 1024.0 * 1024.0 * 1024.0), "3.00 GB");
    }

    #[test]
    fn test_trim_or_pad_truncates() {
        let out = trim_or_pad("a-very-long-cache-key", 10);
        assert_eq!(out, "a-very-...");
        assert_eq!(out.chars().count(), 10);
    }

    #[test]
    fn test_trim_or_pad_pads() {
        let out = trim_or_pad("key", 10);
        assert_eq!(out, "key       ");
        assert_eq!(out.chars().count(), 10);
    }

    #[test]
    fn test_trim_or_pad_exact_width() {
        assert_eq!(trim_or_pad("1234567890", 10), "1234567890");
    }

    #[test]
    fn test_column_widths_at_default() {
        let widths = ColumnWidths::for_width(100);
        // 65 columns remain after the fixed size and time columns.
        assert_eq!(widths.key, 42);
        assert_eq!(widths.ref_name, 13);
        assert_eq!(widths.size, 15);
        assert_eq!(widths.time, 20);
    }

    #[test]
    fn test_column_widths_clamp_narrow_terminals() {
        assert_eq!(ColumnWidths::for_width(40), ColumnWidths::for_width(100));
    }

    #[test]
    fn test_format_cache_row_width() {
        let widths = ColumnWidths::for_width(120);
        let row = format_cache_row(&cache("Linux-node-abc123", 2048, "refs/heads/main"), &widths);
        let expected = widths.key + widths.size + widths.ref_name + widths.time + 3;
        assert_eq!(row.chars().count(), expected);
        assert!(row.contains("[2.00 KB]"));
    }

    #[test]
    fn test_trimmed_list_caps_rows() {
        let widths = ColumnWidths::for_width(100);
        let caches: Vec<ActionsCache> = (0..31)
            .map(|i| cache(&format!("key-{}", i), 1024, "refs/heads/main"))
            .collect();

        let lines = format_trimmed_cache_list(&caches, &widths);
        assert_eq!(lines.len(), 31);
        assert_eq!(lines[30], "... and 1 more");
        assert!(lines[29].starts_with("key-29"));
    }

    #[test]
    fn test_trimmed_list_under_limit_has_no_footer() {
        let widths = ColumnWidths::for_width(100);
        let caches: Vec<ActionsCache> = (0..30)
            .map(|i| cache(&format!("key-{}", i), 1024, "refs/heads/main"))
            .collect();

        let lines = format_trimmed_cache_list(&caches, &widths);
        assert_eq!(lines.len(), 30);
        assert!(lines.last().unwrap().starts_with("key-29"));
    }

    #[test]
    fn test_relative_time() {
        let now = Utc::now();
        assert_eq!(relative_time(&now), "just now");
        assert_eq!(relative_time(&(now - Duration::minutes(5))), "5m ago");
        assert_eq!(relative_time(&(now - Duration::hours(2))), "2h ago");
        assert_eq!(relative_time(&(now - Duration::days(3))), "3d ago");
    }

    #[test]
    fn test_singular_or_plural() {
        assert_eq!(singular_or_plural(1, "cache entry", "cache entries"), "1 cache entry");
        assert_eq!(
            singular_or_plural(4, "cache entry", "cache entries"),
            "4 cache entries"
        );
        assert_eq!(
            singular_or_plural(0, "cache entry", "cache entries"),
            "0 cache entries"
        );
    }

    #[test]
    fn test_red_tick_contains_glyph() {
        assert!(red_tick().contains('\u{2713}'));
    }
}
