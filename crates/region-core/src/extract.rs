//! One-shot extraction of every region in a document.

use serde::{Deserialize, Serialize};

use crate::coordinates::{coordinates_of, Coordinates};
use crate::error::Result;
use crate::reader::RegionReader;
use crate::region::{validate_scan, RegionBounds};
use crate::scan::{MarkerScanner, Scanner};

/// One region's payload together with where it lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedRegion {
    /// Owned copy of the payload text.
    pub contents: String,
    /// Character-space location of the payload.
    pub coordinates: Coordinates,
    /// Byte-space bounds as the scanner reported them.
    pub bounds: RegionBounds,
}

/// Scans `source` and returns every region's payload with its location.
///
/// Convenience for callers that want a report, not an editing session; the
/// transform engine goes through the same scan and mapping itself.
pub fn extract(source: &str, scanner: &dyn Scanner) -> Result<Vec<ExtractedRegion>> {
    let bounds_list = scanner.scan(source)?;
    validate_scan(source, &bounds_list)?;

    let reader = RegionReader::new(source);
    let mut extracted = Vec::with_capacity(bounds_list.len());
    for bounds in bounds_list {
        extracted.push(ExtractedRegion {
            contents: reader.content(&bounds)?.to_string(),
            coordinates: coordinates_of(source, &bounds.content)?,
            bounds,
        });
    }
    Ok(extracted)
}

/// [`extract`] with the default `template` marker scanner.
pub fn extract_default(source: &str) -> Result<Vec<ExtractedRegion>> {
    extract(source, &MarkerScanner::template())
}
