//! Lookup keys for locating a region by its coordinates

use region_core::Coordinates;

/// Partial coordinate key for region lookup.
///
/// Populated fields participate in matching; absent fields never match
/// anything. Lookup resolves in priority order: full coordinate equality,
/// then `start`, then `end`, then the `line`/`column` pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegionQuery {
    pub start: Option<usize>,
    pub end: Option<usize>,
    pub line: Option<usize>,
    pub column: Option<usize>,
    pub column_offset: Option<usize>,
}

impl RegionQuery {
    /// Key matching a payload's character start offset.
    pub fn at_start(start: usize) -> Self {
        Self {
            start: Some(start),
            ..Self::default()
        }
    }

    /// Key matching a payload's character end offset.
    pub fn at_end(end: usize) -> Self {
        Self {
            end: Some(end),
            ..Self::default()
        }
    }

    /// Key matching a payload's line and column pair.
    pub fn at_line_column(line: usize, column: usize) -> Self {
        Self {
            line: Some(line),
            column: Some(column),
            ..Self::default()
        }
    }

    /// All five fields populated and equal.
    pub(crate) fn matches_exactly(&self, coordinates: &Coordinates) -> bool {
        self.start == Some(coordinates.start)
            && self.end == Some(coordinates.end)
            && self.line == Some(coordinates.line)
            && self.column == Some(coordinates.column)
            && self.column_offset == Some(coordinates.column_offset)
    }

    pub(crate) fn matches_start(&self, coordinates: &Coordinates) -> bool {
        self.start == Some(coordinates.start)
    }

    pub(crate) fn matches_end(&self, coordinates: &Coordinates) -> bool {
        self.end == Some(coordinates.end)
    }

    pub(crate) fn matches_line_column(&self, coordinates: &Coordinates) -> bool {
        self.line == Some(coordinates.line) && self.column == Some(coordinates.column)
    }
}

impl From<Coordinates> for RegionQuery {
    fn from(coordinates: Coordinates) -> Self {
        Self {
            start: Some(coordinates.start),
            end: Some(coordinates.end),
            line: Some(coordinates.line),
            column: Some(coordinates.column),
            column_offset: Some(coordinates.column_offset),
        }
    }
}

impl From<&Coordinates> for RegionQuery {
    fn from(coordinates: &Coordinates) -> Self {
        Self::from(*coordinates)
    }
}
