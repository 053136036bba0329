//! Group-key heuristic and round-robin interleave ("declumping").
//!
//! Burst-mode and chat exports arrive as runs of near-identical filenames.
//! After the baseline filename sort those runs sit back-to-back, which
//! renders as a wall of the same scene. Declumping spreads them out:
//!
//! 1. Each item gets a **group key** — the first meaningful token of its
//!    filename (see [`group_key`]).
//! 2. Items are bucketed by key, keeping each bucket's sorted order.
//! 3. Keys are ordered with the same comparator used for filenames.
//! 4. The output is built by sweeping the keys round-robin, taking one
//!    item per non-empty bucket per sweep until all buckets drain.
//!
//! The group key is a best-effort string heuristic. Two unrelated files
//! that happen to share a first word will share a bucket; that is accepted
//! behavior, not a bug worth more machinery.

use crate::collate::natural_cmp;
use std::collections::HashMap;
use std::collections::VecDeque;

/// First tokens that carry no meaning of their own — camera and chat
/// export prefixes. When one of these leads the filename, the second
/// token is the real discriminator (`WhatsApp_Beach_2` groups as `beach`).
const GENERIC_PREFIXES: &[&str] = &["photo", "whatsapp", "image", "screenshot", "img", "dsc"];

/// Fallback key for filenames that yield no tokens at all.
const FALLBACK_KEY: &str = "misc";

/// Derive the declump group key for a media-root-relative path.
///
/// Takes the filename without its last extension, lowercases it, and
/// splits on underscores, hyphens, and whitespace:
///
/// - `"Shows/Elsa_and_Anna_2.jpg"` → `"elsa"`
/// - `"Balloons/WhatsApp_Beach_1.jpg"` → `"beach"` (generic first token)
/// - `"IMG_0042.jpg"` → `"0042"`
/// - `"___.jpg"` → `"misc"` (no tokens)
pub fn group_key(rel_path: &str) -> String {
    let filename = rel_path.rsplit('/').next().unwrap_or(rel_path);
    let stem = filename
        .rsplit_once('.')
        .map_or(filename, |(stem, _ext)| stem);

    let lowered = stem.to_lowercase();
    let tokens: Vec<&str> = lowered
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();

    match tokens.as_slice() {
        [] => FALLBACK_KEY.to_string(),
        [first, second, ..] if GENERIC_PREFIXES.contains(first) => (*second).to_string(),
        [first, ..] => (*first).to_string(),
    }
}

/// Round-robin interleave a sorted item list across its group-key buckets.
///
/// Bucket order within a key preserves the input order; keys are swept in
/// `natural_cmp` order (byte-order tiebreak so equal-comparing keys still
/// order deterministically). Each sweep takes the earliest remaining item
/// from every non-empty bucket; exhausted buckets are skipped.
pub fn interleave_by_group(items: Vec<String>) -> Vec<String> {
    let total = items.len();

    let mut buckets: Vec<(String, VecDeque<String>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for item in items {
        let key = group_key(&item);
        match index.get(&key) {
            Some(&i) => buckets[i].1.push_back(item),
            None => {
                index.insert(key.clone(), buckets.len());
                buckets.push((key, VecDeque::from([item])));
            }
        }
    }

    buckets.sort_by(|a, b| natural_cmp(&a.0, &b.0).then_with(|| a.0.cmp(&b.0)));

    let mut out = Vec::with_capacity(total);
    while out.len() < total {
        for (_, bucket) in &mut buckets {
            if let Some(item) = bucket.pop_front() {
                out.push(item);
            }
        }
    }
    out
}
