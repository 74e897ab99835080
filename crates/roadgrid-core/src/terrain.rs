//! The [`Terrain`] type — how a single cell may be traversed.

use std::fmt;

/// Cost of stepping onto a [`Terrain::Road`] cell.
pub const ROAD_COST: u32 = 1;

/// Cost of stepping onto a [`Terrain::Open`] cell. Large but finite, so
/// open ground is used only when no road route exists.
pub const OPEN_COST: u32 = 9999;

/// Terrain classification of a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    /// Traversable, strongly discouraged.
    #[default]
    Open,
    /// Preferred, cheapest terrain.
    Road,
    /// Impassable: no edge ever ends here.
    Blocked,
}

impl Terrain {
    /// Whether an edge may end on this terrain.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Terrain::Blocked)
    }

    /// Cost of entering a cell of this terrain, or `None` if it is blocked.
    #[inline]
    pub const fn entry_cost(self) -> Option<u32> {
        match self {
            Terrain::Road => Some(ROAD_COST),
            Terrain::Open => Some(OPEN_COST),
            Terrain::Blocked => None,
        }
    }

    /// Map-text glyph.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Terrain::Open => '.',
            Terrain::Road => '=',
            Terrain::Blocked => '#',
        }
    }

    /// Inverse of [`glyph`](Self::glyph).
    #[inline]
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Terrain::Open),
            '=' => Some(Terrain::Road),
            '#' => Some(Terrain::Blocked),
            _ => None,
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Terrain::Open => "open",
            Terrain::Road => "road",
            Terrain::Blocked => "blocked",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn costs() {
        assert_eq!(Terrain::Road.entry_cost(), Some(1));
        assert_eq!(Terrain::Open.entry_cost(), Some(9999));
        assert_eq!(Terrain::Blocked.entry_cost(), None);
        assert!(!Terrain::Blocked.is_passable());
        assert_eq!(Terrain::default(), Terrain::Open);
    }

    #[test]
    fn glyphs_round_trip() {
        for t in [Terrain::Open, Terrain::Road, Terrain::Blocked] {
            assert_eq!(Terrain::from_glyph(t.glyph()), Some(t));
        }
        assert_eq!(Terrain::from_glyph('S'), None);
    }
}
