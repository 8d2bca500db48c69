//! IUPAC complement tables for DNA and RNA.
//!
//! Each table is a 256-entry lookup built at compile time. Lowercase keys
//! resolve to the same (uppercase) complement as their uppercase form; bytes
//! outside the alphabet resolve to nothing.
//!
//! The two tables differ only in the partner of `A`: `T` for DNA, `U` for RNA.
//! Both `T` and `U` complement to `A` in either table, so a DNA table applied to
//! RNA input (or the reverse) still succeeds but does not round-trip.

use designer_core::{DesignerError, NucleicAcid, Result};

/// Every uppercase symbol the tables recognize.
pub const SYMBOLS: &[u8] = b"ACGTUNRYSWKMBVDH-.";

const INVALID: u8 = 0;

/// A complement mapping keyed by nucleotide byte.
#[derive(Clone)]
pub struct ComplementTable {
    acid: NucleicAcid,
    lut: [u8; 256],
}

/// DNA complement table (A↔T).
pub static COMPLEMENT_DNA: ComplementTable = ComplementTable::build(NucleicAcid::Dna);

/// RNA complement table (A↔U).
pub static COMPLEMENT_RNA: ComplementTable = ComplementTable::build(NucleicAcid::Rna);

const fn complement_upper(b: u8, partner_of_a: u8) -> u8 {
    match b {
        b'A' => partner_of_a,
        b'T' | b'U' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        b'R' => b'Y', // A|G → T|C
        b'Y' => b'R',
        b'S' => b'S', // G|C → C|G
        b'W' => b'W', // A|T → T|A
        b'K' => b'M', // G|T → C|A
        b'M' => b'K',
        b'B' => b'V', // C|G|T → G|C|A
        b'V' => b'B',
        b'D' => b'H', // A|G|T → T|C|A
        b'H' => b'D',
        b'N' => b'N',
        b'-' => b'-',
        b'.' => b'.',
        _ => INVALID,
    }
}

impl ComplementTable {
    const fn build(acid: NucleicAcid) -> Self {
        let partner_of_a = match acid {
            NucleicAcid::Dna => b'T',
            NucleicAcid::Rna => b'U',
        };
        let mut lut = [INVALID; 256];
        let mut i = 0;
        while i < lut.len() {
            lut[i] = complement_upper((i as u8).to_ascii_uppercase(), partner_of_a);
            i += 1;
        }
        Self { acid, lut }
    }

    /// The table for the given nucleic acid.
    #[inline]
    pub fn for_acid(acid: NucleicAcid) -> &'static ComplementTable {
        match acid {
            NucleicAcid::Dna => &COMPLEMENT_DNA,
            NucleicAcid::Rna => &COMPLEMENT_RNA,
        }
    }

    /// Which nucleic acid this table pairs for.
    pub const fn acid(&self) -> NucleicAcid {
        self.acid
    }

    /// Uppercase complement of `base`, or `None` if it is not a recognized symbol.
    #[inline]
    pub const fn get(&self, base: u8) -> Option<u8> {
        match self.lut[base as usize] {
            INVALID => None,
            c => Some(c),
        }
    }

    /// Complement of `base` at `position`, failing with
    /// [`DesignerError::InvalidSymbol`].
    #[inline]
    pub fn complement_at(&self, base: u8, position: usize) -> Result<u8> {
        self.get(base).ok_or_else(|| reject(base, position))
    }

    /// Raw lookup for bytes already checked by [`validate`].
    #[inline]
    pub(crate) fn complement_validated(&self, base: u8) -> u8 {
        self.lut[base as usize]
    }

    /// Whether `base` is its own complement (`N`, `S`, `W`, `-`, `.`).
    #[inline]
    pub fn is_self_complementary(&self, base: u8) -> bool {
        self.get(base) == Some(base.to_ascii_uppercase())
    }

    /// Whether `a` and `b` can face each other in a reverse-complementary
    /// substring: each is the complement of the other.
    ///
    /// In the RNA table `T` never pairs (its complement `A` maps back to `U`),
    /// and likewise `U` in the DNA table.
    #[inline]
    pub fn is_pair(&self, a: u8, b: u8) -> bool {
        match (self.get(a), self.get(b)) {
            (Some(ca), Some(cb)) => {
                ca == b.to_ascii_uppercase() && cb == a.to_ascii_uppercase()
            }
            _ => false,
        }
    }

    /// Iterate `(symbol, complement)` over [`SYMBOLS`].
    pub fn pairs(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        SYMBOLS
            .iter()
            .map(move |&b| (b, self.complement_validated(b)))
    }
}

impl std::fmt::Debug for ComplementTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.pairs().map(|(k, v)| (k as char, v as char)))
            .finish()
    }
}

fn reject(base: u8, position: usize) -> DesignerError {
    log::debug!(
        "rejecting byte 0x{:02X} at position {} (not an IUPAC nucleotide)",
        base,
        position
    );
    DesignerError::invalid_symbol(base, position)
}

/// Uppercase complement of `base` in the table for `acid`.
pub fn complement_base(base: u8, acid: impl Into<NucleicAcid>) -> Option<u8> {
    ComplementTable::for_acid(acid.into()).get(base)
}

/// Whether `base` (either case) is a recognized symbol.
#[inline]
pub fn is_valid(base: u8) -> bool {
    COMPLEMENT_DNA.get(base).is_some()
}

/// Whether `base` is its own complement in the table for `acid`.
pub fn is_self_complementary(base: u8, acid: impl Into<NucleicAcid>) -> bool {
    ComplementTable::for_acid(acid.into()).is_self_complementary(base)
}

/// Whether `a` and `b` are mutual complements in the table for `acid`.
pub fn is_complement_pair(a: u8, b: u8, acid: impl Into<NucleicAcid>) -> bool {
    ComplementTable::for_acid(acid.into()).is_pair(a, b)
}

/// Check every byte of `seq`, reporting the first one outside the alphabet.
pub fn validate(seq: &[u8]) -> Result<()> {
    match seq.iter().position(|&b| !is_valid(b)) {
        Some(position) => Err(reject(seq[position], position)),
        None => Ok(()),
    }
}
