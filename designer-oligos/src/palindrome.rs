//! Longest complement-palindrome search.
//!
//! A complement-palindrome is a substring equal to its own reverse complement,
//! such as the EcoRI site `GAATTC`. Facing positions must be mutual complements
//! ([`ComplementTable::is_pair`]) rather than equal bytes, and an odd-length
//! palindrome is only possible around a self-complementary center
//! ([`ComplementTable::is_self_complementary`]: `N`, `S`, `W`, `-`, `.`).
//!
//! Two searches are provided and always agree:
//!
//! - [`palindrome`] expands around every center, O(n²) worst case.
//! - [`manacher`] is Manacher's algorithm run over complement pairs, O(n).
//!   Mirrored radii stay valid because every pair inside a palindrome is a
//!   mutual complement, so reflecting through the center maps matches to
//!   matches.
//!
//! Results are at least two bytes long; the longest palindrome wins and ties
//! go to the leftmost one. The returned slice borrows from the input and keeps
//! its case.

use std::ops::Range;

use designer_core::{NucleicAcid, Result};

use crate::alphabet::{self, ComplementTable};

/// Shortest span reported as a palindrome.
const MIN_LEN: usize = 2;

/// Gap marker interleaved between bases by [`manacher_span`]; never a valid symbol.
const SEPARATOR: u8 = b'|';

/// Longest complement-palindrome in `seq` by center expansion.
///
/// ```
/// use designer_oligos::palindrome::palindrome;
///
/// assert_eq!(palindrome(b"ATGGATCCA", true).unwrap(), b"TGGATCCA");
/// assert_eq!(palindrome(b"ANT", true).unwrap(), b"ANT");
/// assert!(palindrome(b"AAAA", true).unwrap().is_empty());
/// ```
///
/// # Errors
///
/// [`DesignerError::InvalidSymbol`](designer_core::DesignerError::InvalidSymbol)
/// for the first byte outside the IUPAC alphabet.
pub fn palindrome(seq: &[u8], acid: impl Into<NucleicAcid>) -> Result<&[u8]> {
    Ok(palindrome_span(seq, acid)?
        .map(|span| &seq[span])
        .unwrap_or_default())
}

/// Longest complement-palindrome in `seq` by Manacher's algorithm.
///
/// Returns exactly what [`palindrome`] returns.
pub fn manacher(seq: &[u8], acid: impl Into<NucleicAcid>) -> Result<&[u8]> {
    Ok(manacher_span(seq, acid)?
        .map(|span| &seq[span])
        .unwrap_or_default())
}

/// Location of the longest complement-palindrome, by center expansion.
pub fn palindrome_span(
    seq: &[u8],
    acid: impl Into<NucleicAcid>,
) -> Result<Option<Range<usize>>> {
    let acid: NucleicAcid = acid.into();
    alphabet::validate(seq)?;
    let table = ComplementTable::for_acid(acid);

    let mut best = 0..0;
    for k in 0..seq.len() {
        // even center between k - 1 and k, then the odd center on k
        let even = expand(seq, table, k, k);
        if even.len() > best.len() {
            best = even;
        }
        if table.is_self_complementary(seq[k]) {
            let odd = expand(seq, table, k, k + 1);
            if odd.len() > best.len() {
                best = odd;
            }
        }
    }

    log::trace!(
        "center expansion over {} bases ({}): best {:?}",
        seq.len(),
        acid,
        best
    );
    Ok(accept(best))
}

/// Grow the palindrome `lo..hi` outward while the flanking bytes pair.
fn expand(seq: &[u8], table: &ComplementTable, mut lo: usize, mut hi: usize) -> Range<usize> {
    while lo > 0 && hi < seq.len() && table.is_pair(seq[lo - 1], seq[hi]) {
        lo -= 1;
        hi += 1;
    }
    lo..hi
}

/// Location of the longest complement-palindrome, by Manacher's algorithm.
pub fn manacher_span(
    seq: &[u8],
    acid: impl Into<NucleicAcid>,
) -> Result<Option<Range<usize>>> {
    let acid: NucleicAcid = acid.into();
    alphabet::validate(seq)?;
    let table = ComplementTable::for_acid(acid);

    // |b0|b1|...|b(n-1)|  : even positions are gaps, odd positions are bases
    let mut t = Vec::with_capacity(2 * seq.len() + 1);
    for &b in seq {
        t.push(SEPARATOR);
        t.push(b.to_ascii_uppercase());
    }
    t.push(SEPARATOR);

    let faces = |a: u8, b: u8| (a == SEPARATOR && b == SEPARATOR) || table.is_pair(a, b);

    // radius[i] is both the arm length in `t` and the palindrome length in `seq`
    let mut radius = vec![0usize; t.len()];
    let mut center = 0;
    let mut right = 0;
    let mut best_len = 0;
    let mut best_start = 0;

    for i in 0..t.len() {
        if t[i] != SEPARATOR && !table.is_self_complementary(t[i]) {
            continue;
        }

        let mut r = if i < right {
            radius[2 * center - i].min(right - i)
        } else {
            0
        };
        while r < i && i + r + 1 < t.len() && faces(t[i - r - 1], t[i + r + 1]) {
            r += 1;
        }
        radius[i] = r;

        if i + r > right {
            center = i;
            right = i + r;
        }
        if r > best_len {
            best_len = r;
            best_start = (i - r) / 2;
        }
    }

    let best = best_start..best_start + best_len;
    log::trace!(
        "manacher over {} bases ({}): best {:?}",
        seq.len(),
        acid,
        best
    );
    Ok(accept(best))
}

fn accept(span: Range<usize>) -> Option<Range<usize>> {
    (span.len() >= MIN_LEN).then_some(span)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::reverse_complement;
    use designer_core::DesignerError;

    type Finder = for<'a> fn(&'a [u8], bool) -> Result<&'a [u8]>;

    fn by_expansion(seq: &[u8], dna: bool) -> Result<&[u8]> {
        palindrome(seq, dna)
    }

    fn by_manacher(seq: &[u8], dna: bool) -> Result<&[u8]> {
        manacher(seq, dna)
    }

    const FINDERS: [(&str, Finder); 2] =
        [("palindrome", by_expansion), ("manacher", by_manacher)];

    const FIXTURES: &[(&[u8], bool, &[u8])] = &[
        (b"", true, b""),
        (b"", false, b""),
        (b"A", true, b""),
        (b"A", false, b""),
        (b"AAAA", true, b""),
        (b"AAAA", false, b""),
        (b"ATATATATATAT", true, b"ATATATATATAT"),
        (b"ATATATATATAT", false, b""),
        (b"TGGATCCA", true, b"TGGATCCA"),
        (b"ATGGATCCA", true, b"TGGATCCA"),
        (b"AATGGATCCA", true, b"TGGATCCA"),
        (b"TGGATCCAT", true, b"TGGATCCA"),
        (b"TGGATCCATT", true, b"TGGATCCA"),
        (b"GAATTC", true, b"GAATTC"),
        (b"ATGAATTC", true, b"GAATTC"),
        (b"CTTAAG", true, b"CTTAAG"),
        (b"ANT", true, b"ANT"),
        (b"AANT", true, b"ANT"),
        (b"AWSNSWT", true, b"AWSNSWT"),
        (b"AWSSWT", true, b"AWSSWT"),
    ];

    #[test]
    fn fixtures() {
        for (name, find) in FINDERS {
            for &(seq, dna, expected) in FIXTURES {
                let result = find(seq, dna).unwrap();
                assert_eq!(
                    result,
                    expected,
                    "{} on {} (dna={})",
                    name,
                    String::from_utf8_lossy(seq),
                    dna
                );
                if !result.is_empty() {
                    assert_eq!(reverse_complement(result, true).unwrap(), result);
                }
            }
        }
    }

    #[test]
    fn rna_pairs_a_with_u() {
        for (_, find) in FINDERS {
            assert_eq!(find(b"CAUAUG", false).unwrap(), b"CAUAUG");
            assert!(find(b"CAUAUG", true).unwrap().is_empty());
        }
    }

    #[test]
    fn lone_self_complementary_base_is_not_reported() {
        for (_, find) in FINDERS {
            assert!(find(b"N", true).unwrap().is_empty());
            assert!(find(b"ANA", true).unwrap().is_empty());
            assert_eq!(find(b"NN", true).unwrap(), b"NN");
        }
    }

    #[test]
    fn ties_keep_leftmost() {
        for (_, find) in FINDERS {
            assert_eq!(find(b"GAATTCCCGGATCC", true).unwrap(), b"GAATTC");
        }
    }

    #[test]
    fn lowercase_input_keeps_case() {
        for (_, find) in FINDERS {
            assert_eq!(find(b"ttgaattcaa", true).unwrap(), b"ttgaattcaa");
            assert_eq!(find(b"cgAaTtca", true).unwrap(), b"gAaTtc");
        }
    }

    #[test]
    fn spans() {
        assert_eq!(palindrome_span(b"ATGGATCCA", true).unwrap(), Some(1..9));
        assert_eq!(manacher_span(b"ATGGATCCA", true).unwrap(), Some(1..9));
        assert_eq!(palindrome_span(b"ACGA", true).unwrap(), Some(1..3));
        assert_eq!(manacher_span(b"AAAA", true).unwrap(), None);
    }

    #[test]
    fn invalid_symbol_reported_by_both() {
        let expected = DesignerError::invalid_symbol(b'X', 3);
        assert_eq!(palindrome(b"GAAXTC", true), Err(expected.clone()));
        assert_eq!(manacher(b"GAAXTC", true), Err(expected));
    }
}
