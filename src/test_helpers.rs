//! Shared test utilities.
//!
//! Builds throwaway media trees and matching configs so scan tests never
//! touch real fixtures on disk.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::config::BuildConfig;

/// Create a temp directory with a `media/` root containing the given
/// relative files (placeholder content; only names matter to the scanner).
///
/// ```rust
/// let tmp = media_fixture(&["Balloons/IMG_0001.jpg", "Characters/Elsa_1.jpg"]);
/// ```
pub fn media_fixture(files: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let media_root = tmp.path().join("media");
    fs::create_dir_all(&media_root).unwrap();
    for rel in files {
        write_placeholder(&media_root, rel);
    }
    tmp
}

fn write_placeholder(root: &Path, rel: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, "placeholder").unwrap();
}

/// Config pointing at the fixture's `media/` root with the given
/// slug → directory mapping and default extensions.
pub fn test_config(tmp: &TempDir, categories: &[(&str, &str)]) -> BuildConfig {
    let mut config = BuildConfig::default();
    config.media_root = tmp.path().join("media").to_string_lossy().into_owned();
    config.output = tmp
        .path()
        .join("gallery-manifest.json")
        .to_string_lossy()
        .into_owned();
    config.categories = categories
        .iter()
        .map(|(slug, dir)| (slug.to_string(), dir.to_string()))
        .collect();
    config
}
