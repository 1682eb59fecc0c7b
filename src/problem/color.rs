use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity classification of a disk, or the aggregate of a server's disks.
///
/// Variants are declared from least to most severe, so the derived `Ord`
/// gives `Red > Yellow > Green > None` and the worst color of a set is its `max`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Color {
    /// Server hosts no disks. Never valid for a disk.
    #[default]
    None,
    /// Unconstrained.
    Green,
    /// Soft-constrained.
    Yellow,
    /// Hard-constrained, immovable.
    Red,
}

impl Color {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Green => "GREEN",
            Self::Yellow => "YELLOW",
            Self::Red => "RED",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction selector for per-(disk, server, resource) relocation costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostKind {
    /// Cost of writing a disk's data onto a server.
    Insert,
    /// Cost of removing a disk's data from a server.
    Erase,
}
