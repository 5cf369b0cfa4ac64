//! Strided n-gram probe sampling.
//!
//! A probe is a window of `ngram_size` consecutive words, joined with single
//! spaces. Windows start at `0, step, 2 * step, ...` and sampling stops once
//! `max_queries` probes exist. Striding instead of sliding one word at a time
//! trades recall for a predictable number of outbound search calls.

use serde::{Deserialize, Serialize};

use crate::config::ProbeConfig;

/// One sampled window of the word sequence.
///
/// Probes are identified by [`text`](Self::text); `start` is informational
/// and only used for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Probe {
    /// Space-joined window text.
    pub text: String,
    /// Word offset of the first word in the window.
    pub start: usize,
}

impl Probe {
    /// The first `n` words of the probe, space-joined.
    pub fn leading_words(&self, n: usize) -> String {
        self.text.split(' ').take(n).collect::<Vec<_>>().join(" ")
    }

    /// Number of words in the probe.
    pub fn word_count(&self) -> usize {
        self.text.split(' ').filter(|w| !w.is_empty()).count()
    }
}

impl AsRef<str> for Probe {
    fn as_ref(&self) -> &str {
        self.text.as_str()
    }
}

/// Slice `words` into strided windows.
///
/// Returns an empty list when the sequence is shorter than one window, which
/// callers treat as "nothing to check". Zero `ngram_size` or `step` also
/// yield an empty list.
pub fn generate_probes<S: AsRef<str>>(
    words: &[S],
    ngram_size: usize,
    step: usize,
    max_queries: usize,
) -> Vec<Probe> {
    let n = words.len();
    if ngram_size == 0 || step == 0 || n < ngram_size {
        return Vec::new();
    }

    let last_start = n - ngram_size;
    let capacity = (last_start / step + 1).min(max_queries);
    let mut out = Vec::with_capacity(capacity);
    let mut start = 0usize;
    while start <= last_start && out.len() < max_queries {
        let text = words[start..start + ngram_size]
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(" ");
        out.push(Probe { text, start });
        match start.checked_add(step) {
            Some(next) => start = next,
            None => break,
        }
    }
    out
}

/// [`generate_probes`] driven by a [`ProbeConfig`].
pub fn probes_for<S: AsRef<str>>(words: &[S], cfg: &ProbeConfig) -> Vec<Probe> {
    generate_probes(words, cfg.ngram_size, cfg.step, cfg.max_queries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("w{i}")).collect()
    }

    #[test]
    fn too_short_yields_nothing() {
        let w = words(7);
        assert!(generate_probes(&w, 8, 3, 60).is_empty());
    }

    #[test]
    fn exact_length_yields_single_probe() {
        let w = words(8);
        let probes = generate_probes(&w, 8, 3, 60);
        assert_eq!(probes.len(), 1);
        assert_eq!(probes[0].start, 0);
        assert_eq!(probes[0].text, "w0 w1 w2 w3 w4 w5 w6 w7");
    }

    #[test]
    fn strided_offsets() {
        let w = words(10);
        let probes = generate_probes(&w, 3, 3, 60);
        let starts: Vec<usize> = probes.iter().map(|p| p.start).collect();
        assert_eq!(starts, vec![0, 3, 6]);
        assert_eq!(probes[2].text, "w6 w7 w8");
    }

    #[test]
    fn huge_step_takes_only_first_window() {
        let w = words(3);
        let probes = generate_probes(&w, 1, usize::MAX, 10);
        assert_eq!(probes.len(), 1);
        assert_eq!(probes[0].text, "w0");

        let probes = generate_probes(&w, 2, usize::MAX - 1, 10);
        let starts: Vec<usize> = probes.iter().map(|p| p.start).collect();
        assert_eq!(starts, vec![0]);
    }

    #[test]
    fn cap_stops_early() {
        let w = words(1_000);
        let probes = generate_probes(&w, 8, 3, 60);
        assert_eq!(probes.len(), 60);
        assert_eq!(probes.last().map(|p| p.start), Some(59 * 3));
    }

    #[test]
    fn count_matches_formula() {
        for n in 0..40 {
            for ngram in 1..6 {
                for step in 1..5 {
                    for cap in [1usize, 3, 100] {
                        let cfg = ProbeConfig {
                            ngram_size: ngram,
                            step,
                            max_queries: cap,
                        };
                        let w = words(n);
                        assert_eq!(
                            probes_for(&w, &cfg).len(),
                            cfg.expected_probe_count(n),
                            "n={n} ngram={ngram} step={step} cap={cap}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn zero_parameters_yield_nothing() {
        let w = words(20);
        assert!(generate_probes(&w, 0, 3, 60).is_empty());
        assert!(generate_probes(&w, 3, 0, 60).is_empty());
        assert!(generate_probes(&w, 3, 3, 0).is_empty());
    }

    #[test]
    fn leading_words_truncates() {
        let probe = Probe {
            text: "one two three four five six seven eight".into(),
            start: 0,
        };
        assert_eq!(probe.leading_words(5), "one two three four five");
        assert_eq!(probe.leading_words(50), probe.text);
        assert_eq!(probe.word_count(), 8);
    }

    #[test]
    fn accepts_str_slices() {
        let w = ["a", "b", "c", "d"];
        let probes = generate_probes(&w, 2, 1, 10);
        let texts: Vec<&str> = probes.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["a b", "b c", "c d"]);
    }
}
