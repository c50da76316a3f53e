//! Named positions on a 3×3 grid.
//!
//! The same nine positions address a cell inside a sub-board and a
//! sub-board inside the meta-board: index *i* of the meta-board sits
//! where cell *i* sits in every sub-board.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A position on a 3×3 grid (0-8, row-major).
///
/// Names parse in kebab case, ignoring ASCII case: `top-left`, `Center`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Position {
    /// 0
    TopLeft,
    /// 1
    TopCenter,
    /// 2
    TopRight,
    /// 3
    MiddleLeft,
    /// 4
    Center,
    /// 5
    MiddleRight,
    /// 6
    BottomLeft,
    /// 7
    BottomCenter,
    /// 8
    BottomRight,
}

impl Position {
    /// Row-major order, so `ALL[i].to_index() == i`.
    pub const ALL: [Position; 9] = [
        Self::TopLeft,
        Self::TopCenter,
        Self::TopRight,
        Self::MiddleLeft,
        Self::Center,
        Self::MiddleRight,
        Self::BottomLeft,
        Self::BottomCenter,
        Self::BottomRight,
    ];

    /// Kebab-case name, e.g. `middle-right`.
    pub fn label(self) -> &'static str {
        self.into()
    }

    /// Converts position to grid index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from grid index.
    ///
    /// Returns `None` for indices outside 0-8.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parses an index (`0`-`8`) or a name.
    ///
    /// Names may use spaces or underscores instead of dashes, so
    /// `Top left` and `top_left` both work.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(index) = s.parse::<usize>() {
            return Self::from_index(index);
        }
        Self::from_str(&s.replace([' ', '_'], "-")).ok()
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_index())
    }
}
