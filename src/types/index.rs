use serde::{Deserialize, Serialize};

use super::Rect;

/// Logical grid address.
///
/// `section` is signed: visible-range queries in infinite mode report virtual
/// sections left of 0 or past the last real section.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IndexPath {
    pub section: isize,
    pub row: usize,
}

impl IndexPath {
    pub fn new(section: isize, row: usize) -> Self {
        Self { section, row }
    }
}

/// Where a cell rectangle is placed relative to the real content
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Threshold {
    /// Real position
    #[default]
    In,
    /// Wrapped ghost one content width to the right
    Above,
    /// Wrapped ghost one content width to the left
    Below,
}

impl Threshold {
    /// Parse `in`, `above` or `below` (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in" => Some(Self::In),
            "above" => Some(Self::Above),
            "below" => Some(Self::Below),
            _ => None,
        }
    }
}

/// A cell the host should lay out for the current scroll position
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VisibleCell {
    pub index_path: IndexPath,
    pub threshold: Threshold,
    pub rect: Rect,
}
