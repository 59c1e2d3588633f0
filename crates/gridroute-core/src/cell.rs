//! The [`Cell`] type — binary occupancy state of one grid cell.

use std::fmt;

/// Occupancy state of a single grid cell.
///
/// `Free` cells are traversable, `Blocked` cells are not. The default is
/// `Free`, matching the wire encoding where `0` means free space.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Free,
    Blocked,
}

impl Cell {
    /// Build a cell from a wire occupancy value: `0` is free, any nonzero
    /// value is blocked.
    #[inline]
    pub const fn from_occupancy(value: u8) -> Self {
        if value == 0 { Self::Free } else { Self::Blocked }
    }

    /// Whether the cell is traversable.
    #[inline]
    pub const fn is_free(self) -> bool {
        matches!(self, Self::Free)
    }
}

impl From<u8> for Cell {
    #[inline]
    fn from(value: u8) -> Self {
        Self::from_occupancy(value)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Free => write!(f, "."),
            Self::Blocked => write!(f, "#"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupancy_conversion() {
        assert_eq!(Cell::from_occupancy(0), Cell::Free);
        assert_eq!(Cell::from_occupancy(1), Cell::Blocked);
        // Any nonzero value blocks, not just 1.
        assert_eq!(Cell::from_occupancy(7), Cell::Blocked);
    }

    #[test]
    fn default_is_free() {
        assert!(Cell::default().is_free());
        assert!(!Cell::Blocked.is_free());
        assert_eq!(Cell::from(1u8), Cell::Blocked);
    }

    #[test]
    fn display_glyphs() {
        assert_eq!(Cell::Free.to_string(), ".");
        assert_eq!(Cell::Blocked.to_string(), "#");
    }
}
