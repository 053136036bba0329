//! CLI output formatting.
//!
//! Information-first display: each category leads with its positional
//! index, slug, and item count; the result line naming the written file
//! comes last. Format functions are pure (return `Vec<String>`, no I/O)
//! so tests can assert on exact lines; each has a `print_*` wrapper that
//! writes to stdout.
//!
//! ```text
//! Categories
//! 001 balloons (12 items)
//! 002 characters (3 items)
//! 003 shows (empty)
//! Wrote gallery manifest: public/gallery-manifest.json
//! ```

use crate::scan::Manifest;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// One line per category: index, slug, item count.
fn category_line(index: usize, slug: &str, count: usize) -> String {
    match count {
        0 => format!("{} {} (empty)", format_index(index), slug),
        1 => format!("{} {} (1 item)", format_index(index), slug),
        n => format!("{} {} ({} items)", format_index(index), slug, n),
    }
}

/// Format the category summary for a built manifest.
pub fn format_category_summary(manifest: &Manifest) -> Vec<String> {
    let mut lines = vec!["Categories".to_string()];
    for (i, (slug, items)) in manifest.categories.iter().enumerate() {
        lines.push(category_line(i + 1, slug, items.len()));
    }
    lines
}

/// Format full build output: summary plus the result line naming the file.
pub fn format_build_output(manifest: &Manifest, output_path: &Path) -> Vec<String> {
    let mut lines = format_category_summary(manifest);
    lines.push(format!(
        "Wrote gallery manifest: {}",
        output_path.display()
    ));
    lines
}

/// Print build output to stdout.
pub fn print_build_output(manifest: &Manifest, output_path: &Path) {
    for line in format_build_output(manifest, output_path) {
        println!("{}", line);
    }
}

/// Print check output (summary only, nothing written) to stdout.
pub fn print_check_output(manifest: &Manifest) {
    for line in format_category_summary(manifest) {
        println!("{}", line);
    }
    println!("Media tree is valid");
}
