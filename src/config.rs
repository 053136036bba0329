//! Build configuration module.
//!
//! Handles loading and validating `gallery.toml`. The config names the
//! fixed set of gallery categories (URL slug → directory under the media
//! root), the supported media extensions, and the input/output locations.
//! All paths resolve relative to the invocation directory.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! media_root = "public/images"              # Directory holding category folders
//! output = "public/gallery-manifest.json"   # Manifest destination
//!
//! # URL slug -> directory name under media_root.
//! # A missing directory is fine: the category ships as an empty list.
//! [categories]
//! balloons = "Balloons"
//! characters = "Characters"
//! entertainers = "Entertainers"
//! "face-painting" = "FacePainting"
//! shows = "Shows"
//! "special-characters" = "Special"
//!
//! # Case-insensitive extension allow-lists. Anything else is skipped.
//! [extensions]
//! image = ["jpg", "jpeg", "png", "webp"]
//! video = ["mp4", "webm", "mov"]
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want. Note that
//! a `[categories]` table replaces the default set rather than merging
//! with it. Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Build configuration loaded from `gallery.toml`.
///
/// All fields have defaults matching the production site layout. User
/// config files need only specify the values they want to override.
/// Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Directory under which all category folders live.
    pub media_root: String,
    /// Where the manifest JSON is written.
    pub output: String,
    /// Category slug (used in routes) → folder name under `media_root`.
    /// BTreeMap so iteration and serialization order are stable.
    pub categories: BTreeMap<String, String>,
    /// Supported media extension allow-lists.
    pub extensions: ExtensionsConfig,
}

/// Extension allow-lists, split by kind.
///
/// Both kinds land in the same manifest list; the gallery page decides
/// per entry whether to render an `<img>` or a `<video>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtensionsConfig {
    pub image: Vec<String>,
    pub video: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            media_root: "public/images".to_string(),
            output: "public/gallery-manifest.json".to_string(),
            categories: default_categories(),
            extensions: ExtensionsConfig::default(),
        }
    }
}

impl Default for ExtensionsConfig {
    fn default() -> Self {
        Self {
            image: vec!["jpg", "jpeg", "png", "webp"]
                .into_iter()
                .map(String::from)
                .collect(),
            video: vec!["mp4", "webm", "mov"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

fn default_categories() -> BTreeMap<String, String> {
    [
        ("balloons", "Balloons"),
        ("characters", "Characters"),
        ("entertainers", "Entertainers"),
        ("face-painting", "FacePainting"),
        ("shows", "Shows"),
        ("special-characters", "Special"),
    ]
    .into_iter()
    .map(|(slug, dir)| (slug.to_string(), dir.to_string()))
    .collect()
}

impl BuildConfig {
    /// Validate slugs, directories, and extension lists.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.categories.is_empty() {
            return Err(ConfigError::Validation(
                "at least one category must be configured".into(),
            ));
        }
        for (slug, dir) in &self.categories {
            if !is_valid_slug(slug) {
                return Err(ConfigError::Validation(format!(
                    "category slug '{slug}' must be lowercase ASCII letters, digits, or '-'"
                )));
            }
            if dir.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "category '{slug}' has an empty directory name"
                )));
            }
        }
        if self.extensions.image.is_empty() && self.extensions.video.is_empty() {
            return Err(ConfigError::Validation(
                "at least one supported extension must be configured".into(),
            ));
        }
        for ext in self.extensions.image.iter().chain(&self.extensions.video) {
            if ext.trim_start_matches('.').is_empty() {
                return Err(ConfigError::Validation(
                    "extensions must be non-empty".into(),
                ));
            }
        }
        if self.media_root.is_empty() {
            return Err(ConfigError::Validation("media_root must be set".into()));
        }
        if self.output.is_empty() {
            return Err(ConfigError::Validation("output must be set".into()));
        }
        Ok(())
    }

    /// All supported extensions, lowercased, with any leading dot stripped.
    ///
    /// This is the form the scanner compares against; the image/video split
    /// does not matter for manifest membership, only for the consumer.
    pub fn supported_extensions(&self) -> Vec<String> {
        self.extensions
            .image
            .iter()
            .chain(&self.extensions.video)
            .map(|e| e.trim_start_matches('.').to_lowercase())
            .collect()
    }
}

/// Slugs are route fragments: lowercase ASCII alphanumerics and hyphens.
fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Load config from `path`, falling back to defaults when the file does
/// not exist. A present-but-invalid file is always an error.
pub fn load_config(path: &Path) -> Result<BuildConfig, ConfigError> {
    if path.exists() {
        load_config_file(path)
    } else {
        let config = BuildConfig::default();
        config.validate()?;
        Ok(config)
    }
}

/// Load config from a file that must exist (explicit `--config`).
pub fn load_config_file(path: &Path) -> Result<BuildConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: BuildConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Stock `gallery.toml` with every option documented — printed by the
/// `gen-config` subcommand so users start from a known-good file.
pub fn stock_config_toml() -> String {
    r##"# Gallery manifest configuration.
# All options are optional - the values below are the defaults.

# Directory holding the category folders.
media_root = "public/images"

# Where the manifest JSON is written.
output = "public/gallery-manifest.json"

# URL slug -> folder name under media_root.
# Defining this table replaces the default set entirely.
# A missing folder is not an error: the category ships as an empty list.
[categories]
balloons = "Balloons"
characters = "Characters"
entertainers = "Entertainers"
"face-painting" = "FacePainting"
shows = "Shows"
"special-characters" = "Special"

# Case-insensitive extension allow-lists. Files outside these lists are
# silently skipped. Both kinds land in the same manifest list; the gallery
# page decides how to render each entry.
[extensions]
image = ["jpg", "jpeg", "png", "webp"]
video = ["mp4", "webm", "mov"]
"##
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_are_valid() {
        BuildConfig::default().validate().unwrap();
    }

    #[test]
    fn default_categories_match_site_layout() {
        let config = BuildConfig::default();
        assert_eq!(config.categories.len(), 6);
        assert_eq!(config.categories["balloons"], "Balloons");
        assert_eq!(config.categories["face-painting"], "FacePainting");
        assert_eq!(config.categories["special-characters"], "Special");
    }

    #[test]
    fn stock_config_parses_back_to_defaults() {
        let parsed: BuildConfig = toml::from_str(&stock_config_toml()).unwrap();
        let defaults = BuildConfig::default();
        assert_eq!(parsed.media_root, defaults.media_root);
        assert_eq!(parsed.output, defaults.output);
        assert_eq!(parsed.categories, defaults.categories);
        assert_eq!(parsed.extensions.image, defaults.extensions.image);
        assert_eq!(parsed.extensions.video, defaults.extensions.video);
    }

    #[test]
    fn missing_file_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("gallery.toml")).unwrap();
        assert_eq!(config.media_root, "public/images");
    }

    #[test]
    fn partial_file_overrides_only_named_values() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("gallery.toml");
        std::fs::write(&path, "media_root = \"content/media\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.media_root, "content/media");
        assert_eq!(config.output, "public/gallery-manifest.json");
        assert_eq!(config.categories.len(), 6);
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let result = load_config_file(&tmp.path().join("nope.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("gallery.toml");
        std::fs::write(&path, "media_rootz = \"oops\"\n").unwrap();

        assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn unreadable_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("gallery.toml");
        std::fs::write(&path, "not valid toml [[[").unwrap();

        assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn uppercase_slug_fails_validation() {
        let mut config = BuildConfig::default();
        config
            .categories
            .insert("Balloons".to_string(), "Balloons".to_string());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn empty_categories_fails_validation() {
        let mut config = BuildConfig::default();
        config.categories.clear();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn empty_extension_lists_fail_validation() {
        let mut config = BuildConfig::default();
        config.extensions.image.clear();
        config.extensions.video.clear();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn supported_extensions_are_normalized() {
        let mut config = BuildConfig::default();
        config.extensions.image = vec![".JPG".to_string(), "Png".to_string()];
        config.extensions.video = vec!["mp4".to_string()];
        assert_eq!(config.supported_extensions(), vec!["jpg", "png", "mp4"]);
    }

    #[test]
    fn slug_rules() {
        assert!(is_valid_slug("face-painting"));
        assert!(is_valid_slug("shows2"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("Face-Painting"));
        assert!(!is_valid_slug("face painting"));
        assert!(!is_valid_slug("face/painting"));
    }
}
