//! Homopolymer and tandem-repeat run lengths.
//!
//! Both measures count *extra* repeats: a run of `k` copies of a unit scores
//! `k - 1`, so a sequence with no repeat at all scores 0. Bytes are compared
//! raw, without case folding or alphabet checks.

use std::cmp::Reverse;

use designer_core::{DesignerError, Result};

/// A run of identical, adjacent, non-overlapping units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatRun {
    /// Offset of the first unit (0-indexed).
    pub start: usize,
    /// Unit length.
    pub period: usize,
    /// Number of consecutive copies, at least 2.
    pub copies: usize,
}

impl RepeatRun {
    /// End offset (exclusive).
    pub fn end(&self) -> usize {
        self.start + self.period * self.copies
    }

    /// Copies beyond the first.
    pub fn extra_copies(&self) -> usize {
        self.copies - 1
    }
}

/// Longest homopolymer run, as repeats beyond the first base.
///
/// ```
/// use designer_oligos::runs::stretch;
///
/// assert_eq!(stretch(b"AAAAACCCCCCGGGGGGG"), 6);
/// assert_eq!(stretch(b"ATGC"), 0);
/// ```
pub fn stretch(seq: &[u8]) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for pair in seq.windows(2) {
        if pair[0] == pair[1] {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

/// Longest tandem repeat of an `n`-byte unit, as repeats beyond the first unit.
///
/// Every frame offset `0..n` is scanned, splitting the sequence into whole
/// `n`-byte windows; partial windows at either end never count.
///
/// # Errors
///
/// [`DesignerError::InvalidArgument`] if `n` is 0.
pub fn nrepeats(seq: &[u8], n: usize) -> Result<usize> {
    Ok(longest_repeat(seq, n)?.map_or(0, |run| run.extra_copies()))
}

/// The longest tandem repeat of an `n`-byte unit, if any unit repeats.
///
/// Ties go to the run that starts first.
pub fn longest_repeat(seq: &[u8], n: usize) -> Result<Option<RepeatRun>> {
    if n == 0 {
        log::debug!("rejecting zero-length repeat unit");
        return Err(DesignerError::InvalidArgument(
            "repeat unit length must be at least 1".into(),
        ));
    }
    let best = (0..n.min(seq.len()))
        .filter_map(|offset| longest_in_frame(seq, offset, n))
        .max_by_key(|run| (run.copies, Reverse(run.start)));
    Ok(best)
}

fn longest_in_frame(seq: &[u8], offset: usize, n: usize) -> Option<RepeatRun> {
    let mut windows = seq[offset..].chunks_exact(n);
    let mut prev = windows.next()?;
    let mut run = RepeatRun {
        start: offset,
        period: n,
        copies: 1,
    };
    let mut best: Option<RepeatRun> = None;

    for (k, window) in windows.enumerate() {
        if window == prev {
            run.copies += 1;
            if best.map_or(true, |b| run.copies > b.copies) {
                best = Some(run);
            }
        } else {
            run = RepeatRun {
                start: offset + (k + 1) * n,
                period: n,
                copies: 1,
            };
        }
        prev = window;
    }
    best
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn dna_seq(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(
            prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T')],
            0..=max_len,
        )
    }

    proptest! {
        #[test]
        fn unit_one_matches_stretch(seq in dna_seq(200)) {
            prop_assert_eq!(nrepeats(&seq, 1).unwrap(), stretch(&seq));
        }

        #[test]
        fn repeated_unit_is_found(unit in dna_seq(6), copies in 1usize..8) {
            prop_assume!(!unit.is_empty());
            let seq = unit.repeat(copies);
            prop_assert!(nrepeats(&seq, unit.len()).unwrap() >= copies - 1);
        }

        #[test]
        fn run_lies_within_sequence(seq in dna_seq(120), n in 1usize..6) {
            if let Some(run) = longest_repeat(&seq, n).unwrap() {
                prop_assert!(run.end() <= seq.len());
                let unit = &seq[run.start..run.start + n];
                for chunk in seq[run.start..run.end()].chunks_exact(n) {
                    prop_assert_eq!(chunk, unit);
                }
            }
        }
    }
}
