//! The pure core: count nucleotides in a sequence.

use serde::{Deserialize, Serialize};

/// A DNA sequence as handed to us by a caller. Any characters are allowed —
/// validation is deliberately not this crate's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence(String);

impl Sequence {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Character count, not byte count. A sequence with a multi-byte
    /// character in it still reports one unit of length per character.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Sequence {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for Sequence {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

/// Occurrence counts for the four bases. All four keys are always present
/// in the serialized form, zero included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NucleotideCounts {
    #[serde(rename = "A")]
    pub a: usize,
    #[serde(rename = "C")]
    pub c: usize,
    #[serde(rename = "G")]
    pub g: usize,
    #[serde(rename = "T")]
    pub t: usize,
}

impl NucleotideCounts {
    /// Sum of the four counts. At most the sequence length; less whenever
    /// the input contains anything outside A/C/G/T.
    pub fn total(&self) -> usize {
        self.a + self.c + self.g + self.t
    }
}

/// What [`analyze`] produces. `sequence_length` is the exact character count
/// of the input, not the sum of the nucleotide counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub sequence_length: usize,
    pub nucleotide_counts: NucleotideCounts,
}

/// Count the bases. One linear scan; matching is case-sensitive and
/// uppercase-only, so lowercase bases and ambiguity codes like `N` count
/// toward the length but toward no nucleotide. Never fails, never mutates.
pub fn analyze(sequence: &Sequence) -> AnalysisResult {
    let mut counts = NucleotideCounts::default();
    let mut length = 0;

    for c in sequence.as_str().chars() {
        length += 1;
        match c {
            'A' => counts.a += 1,
            'C' => counts.c += 1,
            'G' => counts.g += 1,
            'T' => counts.t += 1,
            _ => {}
        }
    }

    AnalysisResult {
        sequence_length: length,
        nucleotide_counts: counts,
    }
}
