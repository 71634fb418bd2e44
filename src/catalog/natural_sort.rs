// SPDX-License-Identifier: MPL-2.0
//! Natural ordering of file names (`image2.png` before `image10.png`).

use std::borrow::Cow;
use std::cmp::Ordering;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Compares two names run by run.
///
/// Digit runs compare by numeric value (a run with leading zeros compares
/// digit by digit, so `01` sorts before `1`). Other characters compare
/// case-insensitively. Names that are equal under those rules (`A` vs `a`)
/// fall back to a plain comparison of the full names so the order stays
/// total.
#[must_use]
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natord::compare_ignore_case(a, b).then_with(|| a.cmp(b))
}

fn file_name(path: &Path) -> Cow<'_, str> {
    path.file_name()
        .unwrap_or_else(|| OsStr::new(""))
        .to_string_lossy()
}

/// Sorts paths by the natural order of their file names.
pub fn sort_paths(paths: &mut [PathBuf]) {
    paths.sort_by(|a, b| natural_cmp(&file_name(a), &file_name(b)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut paths: Vec<PathBuf> = names.iter().map(PathBuf::from).collect();
        sort_paths(&mut paths);
        paths
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn numbers_compare_by_value() {
        assert_eq!(
            sorted(&["image10.png", "image2.png", "image1.png"]),
            vec!["image1.png", "image2.png", "image10.png"]
        );
    }

    #[test]
    fn catalog_of_six_hundred_pages_is_in_reading_order() {
        let names: Vec<String> = (1..=604).rev().map(|n| format!("image{n}.png")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let result = sorted(&refs);
        for (i, name) in result.iter().enumerate() {
            assert_eq!(name, &format!("image{}.png", i + 1));
        }
    }

    #[test]
    fn leading_zeros_sort_before_plain_numbers() {
        assert_eq!(natural_cmp("page01.png", "page1.png"), Ordering::Less);
        assert_eq!(natural_cmp("page1.png", "page01.png"), Ordering::Greater);
        assert_eq!(natural_cmp("page002.png", "page10.png"), Ordering::Less);
    }

    #[test]
    fn letters_ignore_case_then_tie_break() {
        assert_eq!(natural_cmp("b1.png", "A2.png"), Ordering::Greater);
        assert_eq!(natural_cmp("Image1.png", "image1.png"), Ordering::Less);
    }

    #[test]
    fn prefix_sorts_first() {
        assert_eq!(natural_cmp("image", "image1"), Ordering::Less);
        assert_eq!(natural_cmp("", "a"), Ordering::Less);
        assert_eq!(natural_cmp("x", "x"), Ordering::Equal);
    }

    #[test]
    fn huge_digit_runs_do_not_overflow() {
        let big = "p123456789012345678901234567890.png";
        let bigger = "p1234567890123456789012345678901.png";
        assert_eq!(natural_cmp(big, bigger), Ordering::Less);
    }

    #[test]
    fn digits_against_letters_compare_as_characters() {
        assert_eq!(natural_cmp("1a", "a1"), Ordering::Less);
    }
}
