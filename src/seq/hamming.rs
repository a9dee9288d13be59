use anyhow::{bail, Result};

/// How positions beyond the shorter input are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pairing {
    /// Positions present in only one sequence count as mismatches.
    #[default]
    Full,
    /// Unequal lengths are an error.
    Strict,
}

/// Number of positions at which the two sequences differ.
///
/// Under [`Pairing::Full`] the shorter sequence is conceptually padded with
/// an absent symbol, so every unmatched trailing position is a mismatch and
/// the result is symmetric. Under [`Pairing::Strict`] a length mismatch
/// fails fast instead.
pub fn distance(seq1: &str, seq2: &str, pairing: Pairing) -> Result<u64> {
    if pairing == Pairing::Strict && seq1.len() != seq2.len() {
        bail!(
            "sequences differ in length ({} vs {}), strict pairing requires equal lengths",
            seq1.len(),
            seq2.len()
        );
    }

    let mut bases1 = seq1.bytes();
    let mut bases2 = seq2.bytes();
    let mut mismatches = 0;

    loop {
        match (bases1.next(), bases2.next()) {
            (None, None) => break,
            (base1, base2) if base1 != base2 => mismatches += 1,
            _ => {}
        }
    }

    Ok(mismatches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_distance() {
        let distance = distance("GAGCCTACTAACGGGAT", "CATCGTAATGACGGCCT", Pairing::Full).unwrap();
        assert_eq!(distance, 7);
    }

    #[test]
    fn identical_sequences_have_distance_zero() {
        assert_eq!(distance("ACGTACGT", "ACGTACGT", Pairing::Full).unwrap(), 0);
        assert_eq!(distance("", "", Pairing::Full).unwrap(), 0);
    }

    #[test]
    fn full_pairing_is_symmetric() {
        let d1 = distance("ACGTAA", "ACG", Pairing::Full).unwrap();
        let d2 = distance("ACG", "ACGTAA", Pairing::Full).unwrap();
        assert_eq!(d1, d2);
        assert_eq!(d1, 3);
    }

    #[test]
    fn overhang_counts_as_mismatches() {
        assert_eq!(distance("AAAT", "AAA", Pairing::Full).unwrap(), 1);
        assert_eq!(distance("", "ACGT", Pairing::Full).unwrap(), 4);
    }

    #[test]
    fn strict_pairing_rejects_unequal_lengths() {
        let err = distance("ACGT", "ACG", Pairing::Strict).unwrap_err();
        assert!(err.to_string().contains("4 vs 3"));
    }

    #[test]
    fn strict_pairing_matches_full_on_equal_lengths() {
        let full = distance("ACGT", "AGGT", Pairing::Full).unwrap();
        let strict = distance("ACGT", "AGGT", Pairing::Strict).unwrap();
        assert_eq!(full, strict);
    }
}
