//! Checked slice access to the text around a region.

use crate::error::Result;
use crate::region::{slice_checked, RegionBounds};

/// Resolves the text slices a region's bounds point at.
///
/// Every read is bounds- and alignment-checked; a range that leaves the
/// source or cuts a character returns an error instead of panicking. Reads
/// borrow from the source, nothing is copied.
#[derive(Debug, Clone, Copy)]
pub struct RegionReader<'a> {
    source: &'a str,
}

impl<'a> RegionReader<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }

    /// Decodes a raw buffer as UTF-8 and wraps it.
    pub fn from_bytes(source: &'a [u8]) -> Result<Self> {
        Ok(Self {
            source: std::str::from_utf8(source)?,
        })
    }

    /// The full source this reader resolves against.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Everything before the region's opening marker.
    pub fn preceding(&self, bounds: &RegionBounds) -> Result<&'a str> {
        slice_checked(self.source, &(0..bounds.full.start))
    }

    /// The payload between the markers.
    pub fn content(&self, bounds: &RegionBounds) -> Result<&'a str> {
        slice_checked(self.source, &bounds.content)
    }

    /// The opening marker text.
    pub fn open_marker(&self, bounds: &RegionBounds) -> Result<&'a str> {
        slice_checked(self.source, &bounds.open_marker)
    }

    /// The closing marker text.
    pub fn close_marker(&self, bounds: &RegionBounds) -> Result<&'a str> {
        slice_checked(self.source, &bounds.close_marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    fn example() -> (&'static str, RegionBounds) {
        let source = "const x = 1;\n<template>{{x}}</template>\n";
        (source, RegionBounds::new(13..23, 23..28, 28..39))
    }

    #[test]
    fn test_reads_each_slice() {
        let (source, bounds) = example();
        let reader = RegionReader::new(source);
        assert_eq!(reader.preceding(&bounds).unwrap(), "const x = 1;\n");
        assert_eq!(reader.content(&bounds).unwrap(), "{{x}}");
        assert_eq!(reader.open_marker(&bounds).unwrap(), "<template>");
        assert_eq!(reader.close_marker(&bounds).unwrap(), "</template>");
    }

    #[test]
    fn test_from_bytes_decodes_before_reading() {
        let (source, bounds) = example();
        let reader = RegionReader::from_bytes(source.as_bytes()).unwrap();
        assert_eq!(reader.content(&bounds).unwrap(), "{{x}}");
        assert!(RegionReader::from_bytes(&[0x80]).is_err());
    }

    #[test]
    fn test_out_of_bounds_read_is_an_error() {
        let reader = RegionReader::new("short");
        let bounds = RegionBounds::new(0..2, 2..90, 90..95);
        assert!(matches!(
            reader.content(&bounds),
            Err(Error::RangeOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_misaligned_read_is_an_error() {
        // first region byte sits inside the two-byte é
        let reader = RegionReader::new("é<t>x</t>");
        let bounds = RegionBounds::new(1..4, 4..5, 5..9);
        assert!(matches!(
            reader.open_marker(&bounds),
            Err(Error::RangeNotCharAligned { .. })
        ));
    }
}
