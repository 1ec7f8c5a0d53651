//! Shared helper functions for CLI commands

/// Truncate a string to max_len characters, adding "..." if truncated
///
/// Useful for table columns that need fixed-width output. Width is counted
/// in chars and the cut is made on a char boundary, so multi-byte names
/// (supplier labels are free text) never split mid-character.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let keep: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", keep)
    }
}

/// Escape a string for use inside a markdown table cell
///
/// Pipes would otherwise split the cell.
pub fn escape_md_cell(s: &str) -> String {
    s.replace('|', "\\|")
}

/// Escape a string for CSV output
///
/// Handles commas, quotes, and newlines according to RFC 4180.
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Render a horizontal bar scaled so that `max` fills `width` cells
///
/// Zero-valued (and degenerate zero-max) rows render an empty bar; any
/// positive value shows at least one cell.
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let cells = ((value / max) * width as f64).round() as usize;
    "█".repeat(cells.max(1))
}
