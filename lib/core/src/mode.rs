//! Mode enumerations
//!
//! [`SimilarityMode`] selects the metric a computation runs, [`MismatchMode`]
//! selects what happens when the two input vectors differ in length.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Similarity or distance metric
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityMode {
    /// dot(A, B) / (|A| * |B|)
    #[default]
    Cosine,
    /// dot(A, B) / (|A|^2 + |B|^2 - dot(A, B))
    Tanimoto,
    /// |A ∩ B| / sqrt(|A| * |B|) over distinct values
    Ochiai,
    /// |A ∩ B| / |A ∪ B| over distinct values
    JaccardIndex,
    /// 1 - JaccardIndex
    JaccardDistance,
    /// 2 * |A ∩ B| / (|A| + |B|) over distinct values
    Dice,
    /// Number of positions where A and B differ
    Hamming,
}

impl SimilarityMode {
    pub const ALL: [SimilarityMode; 7] = [
        SimilarityMode::Cosine,
        SimilarityMode::Tanimoto,
        SimilarityMode::Ochiai,
        SimilarityMode::JaccardIndex,
        SimilarityMode::JaccardDistance,
        SimilarityMode::Dice,
        SimilarityMode::Hamming,
    ];

    /// Name used by `Display`, `FromStr` and serde
    pub fn as_str(&self) -> &'static str {
        match self {
            SimilarityMode::Cosine => "cosine",
            SimilarityMode::Tanimoto => "tanimoto",
            SimilarityMode::Ochiai => "ochiai",
            SimilarityMode::JaccardIndex => "jaccard_index",
            SimilarityMode::JaccardDistance => "jaccard_distance",
            SimilarityMode::Dice => "dice",
            SimilarityMode::Hamming => "hamming",
        }
    }

    /// Whether the metric treats vectors as sets of distinct values
    /// rather than comparing them position by position
    pub fn is_set_based(&self) -> bool {
        matches!(
            self,
            SimilarityMode::Ochiai
                | SimilarityMode::JaccardIndex
                | SimilarityMode::JaccardDistance
                | SimilarityMode::Dice
        )
    }
}

impl fmt::Display for SimilarityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SimilarityMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        SimilarityMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| Error::UnknownMode(s.to_string()))
    }
}

/// Policy applied when the input vectors have different lengths
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum MismatchMode {
    /// Give up and report the mismatch
    #[default]
    Bail,
    /// Cut the longer vector down to the length of the shorter one
    Truncate,
}

impl MismatchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MismatchMode::Bail => "bail",
            MismatchMode::Truncate => "truncate",
        }
    }
}

impl fmt::Display for MismatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MismatchMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bail" => Ok(MismatchMode::Bail),
            "truncate" => Ok(MismatchMode::Truncate),
            _ => Err(Error::UnknownMode(s.to_string())),
        }
    }
}
