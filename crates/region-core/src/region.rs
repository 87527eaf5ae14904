//! Byte-range descriptions of marker-delimited regions.
//!
//! A segment scanner reports each region it finds as a [`RegionBounds`]
//! value: four byte ranges into the same UTF-8 source describing the
//! opening marker, the payload, the closing marker, and the full span.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Byte-range description of one marker-delimited region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionBounds {
    /// First byte of the opening marker to one past the last byte of the
    /// closing marker.
    pub full: Range<usize>,
    /// The payload bytes, both markers excluded. May be empty.
    pub content: Range<usize>,
    /// The opening marker bytes.
    pub open_marker: Range<usize>,
    /// The closing marker bytes.
    pub close_marker: Range<usize>,
}

impl RegionBounds {
    /// Assembles bounds from the three component spans. The full span is
    /// derived from the outer edges of the markers.
    pub fn new(
        open_marker: Range<usize>,
        content: Range<usize>,
        close_marker: Range<usize>,
    ) -> Self {
        Self {
            full: open_marker.start..close_marker.end,
            content,
            open_marker,
            close_marker,
        }
    }

    /// Checks that the four spans describe a coherent region of `source`.
    ///
    /// The spans must lie inside the source on character boundaries, and
    /// must tile the full span exactly: opening marker, then payload, then
    /// closing marker, with no gaps. Reassembly splices the full span and
    /// rebuilds it from the three components, so a gap would drop text.
    pub fn validate(&self, source: &str) -> Result<()> {
        let len = source.len();
        for range in [
            &self.full,
            &self.open_marker,
            &self.content,
            &self.close_marker,
        ] {
            if range.start > range.end || range.end > len {
                return Err(Error::RangeOutOfBounds {
                    range: range.clone(),
                    len,
                });
            }
            if !source.is_char_boundary(range.start) || !source.is_char_boundary(range.end) {
                return Err(Error::RangeNotCharAligned {
                    range: range.clone(),
                });
            }
        }

        if self.open_marker.start != self.full.start {
            return Err(Error::malformed(
                self.full.start,
                "opening marker must begin the region",
            ));
        }
        if self.open_marker.end != self.content.start {
            return Err(Error::malformed(
                self.content.start,
                "payload must begin immediately after the opening marker",
            ));
        }
        if self.content.end != self.close_marker.start {
            return Err(Error::malformed(
                self.content.end,
                "closing marker must begin immediately after the payload",
            ));
        }
        if self.close_marker.end != self.full.end {
            return Err(Error::malformed(
                self.full.end,
                "closing marker must end the region",
            ));
        }

        Ok(())
    }
}

/// Validates a whole scan report: every region coherent, sorted ascending
/// by position, and non-overlapping.
pub fn validate_scan(source: &str, regions: &[RegionBounds]) -> Result<()> {
    let mut previous_end = 0;
    for bounds in regions {
        bounds.validate(source)?;
        if bounds.full.start < previous_end {
            return Err(Error::OverlappingRegions(bounds.full.clone()));
        }
        previous_end = bounds.full.end;
    }
    Ok(())
}

/// Slices `source` by `range`, reporting out-of-bounds and misaligned
/// ranges as errors instead of panicking.
pub(crate) fn slice_checked<'a>(source: &'a str, range: &Range<usize>) -> Result<&'a str> {
    if range.start > range.end || range.end > source.len() {
        return Err(Error::RangeOutOfBounds {
            range: range.clone(),
            len: source.len(),
        });
    }
    source
        .get(range.clone())
        .ok_or_else(|| Error::RangeNotCharAligned {
            range: range.clone(),
        })
}
