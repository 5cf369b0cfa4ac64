//! Character-bigram Dice coefficient.
//!
//! `2 * |common bigrams| / (|bigrams(a)| + |bigrams(b)|)`, counted as a
//! multiset so repeated bigrams only match as often as they occur on both
//! sides. Whitespace is removed before bigramming.

use fxhash::FxHashMap;

/// Similarity of `a` and `b` in `[0.0, 1.0]`.
///
/// Identical strings (after whitespace removal) score `1.0`, including two
/// empty strings. Otherwise a string with fewer than two characters has no
/// bigrams and the score is `0.0`.
///
/// ```
/// use perceptual::dice_coefficient;
///
/// assert_eq!(dice_coefficient("abc", "abc"), 1.0);
/// assert_eq!(dice_coefficient("abc", "xyz"), 0.0);
/// ```
pub fn dice_coefficient(a: &str, b: &str) -> f64 {
    let first: Vec<char> = a.chars().filter(|c| !c.is_whitespace()).collect();
    let second: Vec<char> = b.chars().filter(|c| !c.is_whitespace()).collect();

    if first == second {
        return 1.0;
    }
    if first.len() < 2 || second.len() < 2 {
        return 0.0;
    }

    let mut first_bigrams: FxHashMap<(char, char), usize> = FxHashMap::default();
    for pair in first.windows(2) {
        *first_bigrams.entry((pair[0], pair[1])).or_insert(0) += 1;
    }

    let mut intersection = 0usize;
    for pair in second.windows(2) {
        if let Some(count) = first_bigrams.get_mut(&(pair[0], pair[1])) {
            if *count > 0 {
                *count -= 1;
                intersection += 1;
            }
        }
    }

    (2.0 * intersection as f64) / ((first.len() + second.len() - 2) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn identical_strings_score_one() {
        assert_eq!(dice_coefficient("abc", "abc"), 1.0);
        assert_eq!(dice_coefficient("", ""), 1.0);
    }

    #[test]
    fn whitespace_is_ignored() {
        assert_eq!(dice_coefficient("a b c", "abc"), 1.0);
        assert_eq!(dice_coefficient("hello world", "hello\n\tworld"), 1.0);
    }

    #[test]
    fn short_strings_score_zero() {
        assert_eq!(dice_coefficient("a", "ab"), 0.0);
        assert_eq!(dice_coefficient("", "abc"), 0.0);
    }

    #[test]
    fn disjoint_strings_score_zero() {
        assert_eq!(dice_coefficient("abcd", "wxyz"), 0.0);
    }

    #[test]
    fn known_values() {
        // healed: he ea al le ed ; sealed: se ea al le ed -> 4 shared of 5 + 5
        assert!(approx(dice_coefficient("healed", "sealed"), 0.8));
        // night: ni ig gh ht ; nacht: na ac ch ht -> 1 shared
        assert!(approx(dice_coefficient("night", "nacht"), 0.25));
    }

    #[test]
    fn repeated_bigrams_count_as_multiset() {
        // aaaa has three "aa" bigrams, aa has one
        assert!(approx(dice_coefficient("aaaa", "aa"), 2.0 / 4.0));
    }

    #[test]
    fn symmetric() {
        let pairs = [("french", "quebec"), ("france", "republic of france"), ("GGGG", "gggg")];
        for (a, b) in pairs {
            assert!(approx(dice_coefficient(a, b), dice_coefficient(b, a)));
        }
    }

    #[test]
    fn case_sensitive() {
        assert_eq!(dice_coefficient("ABC", "abc"), 0.0);
    }

    #[test]
    fn bounded() {
        let score = dice_coefficient("the cat sat on the mat", "the dog sat on the log");
        assert!((0.0..=1.0).contains(&score));
        assert!(score > 0.0);
    }
}
