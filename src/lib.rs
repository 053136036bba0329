//! # Gallery Manifest
//!
//! Build-time manifest generator for the party-site media galleries.
//! Your filesystem is the data source: each gallery category maps to one
//! directory under the media root, and every supported photo or video in
//! that directory (at any depth) becomes an entry in the published manifest.
//!
//! # Pipeline
//!
//! One invocation is a full rebuild:
//!
//! ```text
//! media root  →  walk  →  filter  →  dedupe  →  sort  →  declump  →  gallery-manifest.json
//! ```
//!
//! The output is a single versioned JSON document mapping each category
//! slug to an ordered list of media-root-relative paths. The site's
//! gallery pages read that document and render the entries in the given
//! order — they never re-sort, re-filter, or re-deduplicate, so the order
//! written here is the display order.
//!
//! # Determinism
//!
//! Re-running against an unchanged media tree produces byte-identical
//! `categories` content (only `generatedAt` moves). That property is what
//! makes the manifest safe to commit and diff, and it is enforced at every
//! step: the directory walk is name-ordered, the sort is stable with a
//! full-path tiebreak, and the declump sweep order is derived purely from
//! the sorted input.
//!
//! # Declumping
//!
//! Camera and chat exports produce runs of near-identical filenames
//! (`IMG_0001.jpg`, `IMG_0002.jpg`, ...). Rendered naively, a gallery page
//! shows ten consecutive shots of the same balloon arch. The declump step
//! buckets filenames by a heuristic group key and round-robins across the
//! buckets so similar shots spread out over the page. See [`declump`] for
//! the exact heuristic.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | walks category directories, builds per-category lists, assembles and writes the manifest |
//! | [`config`] | `gallery.toml` loading, validation, and the documented stock config |
//! | [`collate`] | case-insensitive, numeric-aware string comparison |
//! | [`declump`] | group-key heuristic and round-robin interleave |
//! | [`output`] | CLI output formatting — category summaries and result lines |

pub mod collate;
pub mod config;
pub mod declump;
pub mod output;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
