//! Shared primitives for the designer-dna crates.
//!
//! `designer-core` holds what every other crate in the workspace needs:
//!
//! - **Error types** — [`DesignerError`] and [`Result`] for structured error handling
//! - **Nucleic acid selector** — [`NucleicAcid`], choosing between the DNA and RNA
//!   complement tables

pub mod acid;
pub mod error;

pub use acid::NucleicAcid;
pub use error::{DesignerError, Result};
