//! Nucleotide sequence primitives for oligo design.
//!
//! Works directly on byte slices over the IUPAC nucleotide alphabet
//! (`ACGTU`, the ambiguity codes `NRYSWKMBVDH`, and the gap markers `-` and `.`),
//! in either case:
//!
//! - **Complement tables** — [`ComplementTable`] for DNA and RNA
//! - **Transforms** — [`reverse`], [`complement`], [`reverse_complement`] and
//!   their `_in_place` counterparts over `&mut [u8]`
//! - **Repeat runs** — [`stretch`] (homopolymers) and [`nrepeats`] (tandem
//!   repeats of any unit length)
//! - **Palindromes** — [`palindrome`] (reference) and [`manacher`] (linear time)
//!   for the longest substring equal to its own reverse complement
//!
//! Anything that complements takes an `impl Into<NucleicAcid>`: pass
//! [`NucleicAcid::Dna`] / [`NucleicAcid::Rna`] or a plain `is_dna` flag.
//!
//! # Example
//!
//! ```
//! use designer_oligos::{complement, manacher, nrepeats, reverse_complement_in_place, stretch};
//!
//! assert_eq!(complement(b"GATC", false).unwrap(), b"CUAG");
//!
//! let mut buf = *b"ggatcc";
//! reverse_complement_in_place(&mut buf, true).unwrap();
//! assert_eq!(&buf, b"GGATCC");
//!
//! assert_eq!(stretch(b"AAAAACCCCCCGGGGGGG"), 6);
//! assert_eq!(nrepeats(b"ACACAC", 2).unwrap(), 2);
//! assert_eq!(manacher(b"ATGGATCCA", true).unwrap(), b"TGGATCCA");
//! ```

pub mod alphabet;
pub mod palindrome;
pub mod runs;
pub mod transform;

pub use designer_core::{DesignerError, NucleicAcid, Result};

pub use alphabet::{ComplementTable, COMPLEMENT_DNA, COMPLEMENT_RNA};
pub use palindrome::{manacher, manacher_span, palindrome, palindrome_span};
pub use runs::{longest_repeat, nrepeats, stretch, RepeatRun};
pub use transform::{
    complement, complement_in_place, reverse, reverse_complement, reverse_complement_in_place,
    reverse_in_place,
};
