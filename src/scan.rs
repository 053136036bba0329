//! Media tree scanning and manifest assembly.
//!
//! The core of the tool: walks each configured category directory under
//! the media root, filters to supported media, normalizes paths, and runs
//! the dedupe → sort → declump pipeline to produce the per-category
//! display order. `build_manifest` assembles the full document and
//! `write_manifest` persists it atomically.
//!
//! ## Directory Structure
//!
//! ```text
//! public/images/               # Media root
//! ├── Balloons/                # One directory per category
//! │   ├── IMG_0001.jpg
//! │   └── arches/              # Nesting is fine - files flatten into the list
//! │       └── red_1.jpg
//! ├── Characters/
//! │   ├── Elsa_1.jpg
//! │   └── .DS_Store            # Dot entries are skipped
//! └── Shows/                   # Missing directories are not an error
//! ```
//!
//! ## Failure Model
//!
//! A missing category directory resolves to an empty list — categories
//! are routinely configured before content is uploaded. Any other
//! filesystem failure (permissions, I/O error mid-walk) aborts the whole
//! run; the tool never writes a partial manifest. There are no retries:
//! the build is idempotent, so re-invoking is the recovery path.

use crate::collate::natural_cmp;
use crate::config::BuildConfig;
use crate::declump::interleave_by_group;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("failed to read {}: {source}", path.display())]
    Walk { path: PathBuf, source: io::Error },
    #[error("failed to write manifest {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Manifest schema version. Bump on any incompatible change to the shape
/// of `categories`.
pub const MANIFEST_VERSION: u32 = 1;

/// The generated manifest document.
///
/// Serialized field names match what the gallery pages read
/// (`generatedAt`, `categories`). Within each category the list order is
/// the display order; the consumer renders it unmodified.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub version: u32,
    /// Build timestamp, informational only.
    pub generated_at: DateTime<Utc>,
    /// Category slug → ordered media-root-relative paths. BTreeMap so the
    /// serialized key order is stable across runs.
    pub categories: BTreeMap<String, Vec<String>>,
}

/// Build the ordered media list for one category directory.
///
/// Returns media-root-relative, forward-slash paths — unique, sorted by
/// filename, and declumped. A missing directory yields an empty list.
pub fn build_category_list(
    media_root: &Path,
    directory: &str,
    extensions: &[String],
) -> Result<Vec<String>, BuildError> {
    let dir = media_root.join(directory);
    if !dir.is_dir() {
        // Category configured ahead of content being uploaded.
        return Ok(Vec::new());
    }

    let mut rel_paths = Vec::new();
    let walker = WalkDir::new(&dir)
        .sort_by_file_name()
        .into_iter()
        // Skip dot entries (`.DS_Store`, `.thumbnails/`, ...) below the
        // category root; the root itself is exempt so a hidden path
        // component in the media root does not blank the walk. Symlinked
        // directories are not followed, so cycles cannot recurse.
        .filter_entry(|e| e.depth() == 0 || !is_hidden_name(e.file_name()));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| dir.clone());
                let source = err
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("directory walk failed"));
                return Err(BuildError::Walk { path, source });
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if !has_supported_extension(entry.path(), extensions) {
            continue;
        }
        // Entry paths always start with media_root/directory.
        let rel = entry.path().strip_prefix(media_root).unwrap();
        rel_paths.push(to_url_path(rel));
    }

    Ok(order_items(rel_paths))
}

/// Dedupe (first occurrence wins), sort by filename, declump.
///
/// The sort is stable with a full-path byte tiebreak, so names that
/// compare equal under [`natural_cmp`] still order deterministically.
fn order_items(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut unique: Vec<String> = items.into_iter().filter(|p| seen.insert(p.clone())).collect();

    unique.sort_by(|a, b| {
        natural_cmp(filename_of(a), filename_of(b)).then_with(|| a.as_str().cmp(b.as_str()))
    });

    interleave_by_group(unique)
}

/// Build the full manifest from configuration.
///
/// Every configured slug appears in `categories`, empty or not.
pub fn build_manifest(config: &BuildConfig) -> Result<Manifest, BuildError> {
    let media_root = Path::new(&config.media_root);
    let extensions = config.supported_extensions();

    let mut categories = BTreeMap::new();
    for (slug, directory) in &config.categories {
        let items = build_category_list(media_root, directory, &extensions)?;
        categories.insert(slug.clone(), items);
    }

    Ok(Manifest {
        version: MANIFEST_VERSION,
        generated_at: Utc::now(),
        categories,
    })
}

/// Serialize the manifest as pretty JSON (trailing newline) and write it
/// atomically: the document lands at a `.tmp` sibling first and is
/// renamed over the target, so a failed run never leaves a partial file
/// that looks successful.
pub fn write_manifest(manifest: &Manifest, path: &Path) -> Result<(), BuildError> {
    let mut body = serde_json::to_string_pretty(manifest)?;
    body.push('\n');

    let write_err = |source: io::Error| BuildError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "gallery-manifest.json".to_string());
    let tmp = path.with_file_name(format!("{file_name}.tmp"));

    fs::write(&tmp, body).map_err(write_err)?;
    if let Err(source) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(write_err(source));
    }
    Ok(())
}

fn is_hidden_name(name: &std::ffi::OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

fn has_supported_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .is_some_and(|ext| extensions.iter().any(|s| *s == ext))
}

/// Convert a relative path to a forward-slash string with no leading
/// slash, directly usable as a public URL fragment.
fn to_url_path(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn filename_of(rel_path: &str) -> &str {
    rel_path.rsplit('/').next().unwrap_or(rel_path)
}
