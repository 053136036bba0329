//! Case-insensitive, numeric-aware string comparison.
//!
//! The manifest's baseline order comes from comparing filenames the way a
//! human reads them: `Photo_2` before `Photo_10`, and `IMG` equal to `img`.
//! Digit runs are compared as numbers, everything else character by
//! character after lowercasing.
//!
//! This is the ordering used both for the per-category filename sort and
//! for ordering declump group keys, so it must be total and deterministic.
//! Note that distinct strings can compare equal (`img_01` vs `IMG_1`);
//! callers that need a strict order add their own tiebreak.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// Compare two strings case-insensitively, treating digit runs numerically.
///
/// - `"img_2"` < `"img_10"` (numeric, not lexicographic)
/// - `"Beach"` == `"beach"` (case-insensitive)
/// - `"img_007"` == `"img_7"` (leading zeros ignored)
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ca = a.chars().peekable();
    let mut cb = b.chars().peekable();

    loop {
        match (ca.peek().copied(), cb.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                if x.is_ascii_digit() && y.is_ascii_digit() {
                    let run_a = take_digit_run(&mut ca);
                    let run_b = take_digit_run(&mut cb);
                    match cmp_digit_runs(&run_a, &run_b) {
                        Ordering::Equal => {}
                        ord => return ord,
                    }
                } else {
                    // char::to_lowercase can expand to multiple chars; the
                    // iterator comparison handles that.
                    let ord = x.to_lowercase().cmp(y.to_lowercase());
                    if ord != Ordering::Equal {
                        return ord;
                    }
                    ca.next();
                    cb.next();
                }
            }
        }
    }
}

/// Consume a maximal run of ASCII digits from the iterator.
fn take_digit_run(chars: &mut Peekable<Chars>) -> String {
    let mut run = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

/// Compare two digit runs as integers of arbitrary length.
///
/// Strips leading zeros, then compares by length and finally digit by
/// digit — no parsing, so runs longer than any integer type still work.
fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_runs_compare_numerically() {
        assert_eq!(natural_cmp("img_2", "img_10"), Ordering::Less);
        assert_eq!(natural_cmp("img_10", "img_2"), Ordering::Greater);
    }

    #[test]
    fn case_is_ignored() {
        assert_eq!(natural_cmp("Beach", "beach"), Ordering::Equal);
        assert_eq!(natural_cmp("IMG_1", "img_1"), Ordering::Equal);
    }

    #[test]
    fn leading_zeros_are_equal() {
        assert_eq!(natural_cmp("img_007", "img_7"), Ordering::Equal);
    }

    #[test]
    fn plain_text_orders_alphabetically() {
        assert_eq!(natural_cmp("anna", "elsa"), Ordering::Less);
        assert_eq!(natural_cmp("elsa", "anna"), Ordering::Greater);
    }

    #[test]
    fn prefix_sorts_before_longer_string() {
        assert_eq!(natural_cmp("img", "img_1"), Ordering::Less);
    }

    #[test]
    fn equal_strings() {
        assert_eq!(natural_cmp("party_3.jpg", "party_3.jpg"), Ordering::Equal);
    }

    #[test]
    fn number_vs_letter_segment() {
        // '1' < 'a' in character order once the digit run ends
        assert_eq!(natural_cmp("img_1x", "img_2"), Ordering::Less);
    }

    #[test]
    fn huge_digit_runs_do_not_overflow() {
        let a = format!("v{}", "9".repeat(40));
        let b = format!("v1{}", "0".repeat(40));
        assert_eq!(natural_cmp(&a, &b), Ordering::Less);
    }

    #[test]
    fn sort_example_from_camera_exports() {
        let mut names = vec!["img_10.jpg", "img_1.jpg", "img_2.jpg"];
        names.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(names, vec!["img_1.jpg", "img_2.jpg", "img_10.jpg"]);
    }
}
