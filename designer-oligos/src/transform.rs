//! Reverse, complement and reverse complement.
//!
//! Every transform comes in two forms: an allocating one that returns a new
//! `Vec<u8>`, and an `_in_place` one that rewrites a caller-owned `&mut [u8]`.
//! The two forms produce identical bytes for every valid input.
//!
//! Complementing output is always uppercase. [`reverse`] only reorders bytes,
//! so it preserves case and never fails.
//!
//! The in-place complement functions check the whole buffer before the first
//! write: on error the buffer is left exactly as it was.

use designer_core::{NucleicAcid, Result};

use crate::alphabet::{self, ComplementTable};

/// Return `seq` with its byte order reversed.
pub fn reverse(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().copied().collect()
}

/// Reverse `seq` in place.
pub fn reverse_in_place(seq: &mut [u8]) {
    seq.reverse();
}

/// Return the complement of `seq`.
///
/// # Errors
///
/// [`DesignerError::InvalidSymbol`](designer_core::DesignerError::InvalidSymbol)
/// for the first byte outside the IUPAC alphabet.
pub fn complement(seq: &[u8], acid: impl Into<NucleicAcid>) -> Result<Vec<u8>> {
    let table = ComplementTable::for_acid(acid.into());
    seq.iter()
        .enumerate()
        .map(|(i, &b)| table.complement_at(b, i))
        .collect()
}

/// Complement `seq` in place.
pub fn complement_in_place(seq: &mut [u8], acid: impl Into<NucleicAcid>) -> Result<()> {
    alphabet::validate(seq)?;
    let table = ComplementTable::for_acid(acid.into());
    for b in seq.iter_mut() {
        *b = table.complement_validated(*b);
    }
    Ok(())
}

/// Return the reverse complement of `seq`.
///
/// ```
/// use designer_oligos::transform::reverse_complement;
///
/// assert_eq!(reverse_complement(b"GGC", true).unwrap(), b"GCC");
/// assert_eq!(reverse_complement(b"GATC", false).unwrap(), b"GAUC");
/// ```
pub fn reverse_complement(seq: &[u8], acid: impl Into<NucleicAcid>) -> Result<Vec<u8>> {
    // validate first so the reported offset is the leftmost one
    alphabet::validate(seq)?;
    let table = ComplementTable::for_acid(acid.into());
    Ok(seq
        .iter()
        .rev()
        .map(|&b| table.complement_validated(b))
        .collect())
}

/// Reverse complement `seq` in place.
///
/// Swaps the complement of byte `i` with the complement of byte `n - 1 - i`,
/// meeting in the middle; an odd middle byte is complemented by itself.
pub fn reverse_complement_in_place(seq: &mut [u8], acid: impl Into<NucleicAcid>) -> Result<()> {
    alphabet::validate(seq)?;
    let table = ComplementTable::for_acid(acid.into());

    let mid = seq.len() / 2;
    let (left, right) = seq.split_at_mut(mid);
    for (l, r) in left.iter_mut().zip(right.iter_mut().rev()) {
        let front = *l;
        *l = table.complement_validated(*r);
        *r = table.complement_validated(front);
    }
    if seq.len() % 2 == 1 {
        seq[mid] = table.complement_validated(seq[mid]);
    }
    Ok(())
}
