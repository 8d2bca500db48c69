//! Nucleic acid selector.
//!
//! Complement-aware operations take an `impl Into<NucleicAcid>`, so callers
//! can pass either the enum or a plain `is_dna` flag.

/// Which complement table to use: DNA pairs A with T, RNA pairs A with U.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NucleicAcid {
    /// Deoxyribonucleic acid (A↔T).
    #[default]
    Dna,
    /// Ribonucleic acid (A↔U).
    Rna,
}

impl NucleicAcid {
    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            NucleicAcid::Dna => "DNA",
            NucleicAcid::Rna => "RNA",
        }
    }

    /// Whether this is [`NucleicAcid::Dna`].
    pub const fn is_dna(self) -> bool {
        matches!(self, NucleicAcid::Dna)
    }
}

impl From<bool> for NucleicAcid {
    /// `true` selects DNA, `false` selects RNA.
    fn from(is_dna: bool) -> Self {
        if is_dna {
            NucleicAcid::Dna
        } else {
            NucleicAcid::Rna
        }
    }
}

impl std::fmt::Display for NucleicAcid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bool() {
        assert_eq!(NucleicAcid::from(true), NucleicAcid::Dna);
        assert_eq!(NucleicAcid::from(false), NucleicAcid::Rna);
    }

    #[test]
    fn default_is_dna() {
        assert_eq!(NucleicAcid::default(), NucleicAcid::Dna);
        assert!(NucleicAcid::default().is_dna());
    }

    #[test]
    fn display_names() {
        assert_eq!(NucleicAcid::Dna.to_string(), "DNA");
        assert_eq!(NucleicAcid::Rna.to_string(), "RNA");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_lowercase() {
        assert_eq!(serde_json::to_string(&NucleicAcid::Rna).unwrap(), "\"rna\"");
        let acid: NucleicAcid = serde_json::from_str("\"dna\"").unwrap();
        assert_eq!(acid, NucleicAcid::Dna);
    }
}
