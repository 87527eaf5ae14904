//! Segment scanning: locating marker-delimited regions in a document.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;
use crate::region::RegionBounds;

/// Pattern for the default `template` opening marker, attributes allowed
static TEMPLATE_OPEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<template(?:\s[^>]*)?>").expect("Invalid open marker pattern"));

/// Locates marker-delimited regions in a document.
///
/// Implementations must report regions in ascending document order without
/// overlaps. The transform engine validates every report before trusting
/// its ranges, so a misbehaving scanner fails construction instead of
/// corrupting reassembly.
pub trait Scanner: Send + Sync {
    /// Reports the bounds of every complete region in `source`.
    fn scan(&self, source: &str) -> Result<Vec<RegionBounds>>;
}

/// Default scanner matching `<tag>` / `<tag attr...>` opening markers and
/// the literal `</tag>` closing marker.
///
/// Payload text is opaque: the first closing marker after an opening marker
/// terminates the region, and scanning resumes past it. An opening marker
/// with no closing marker ends the scan without emitting a region.
#[derive(Debug, Clone)]
pub struct MarkerScanner {
    open: Regex,
    close: String,
}

impl MarkerScanner {
    /// Builds a scanner for an arbitrary tag word.
    pub fn new(tag: &str) -> Result<Self> {
        let pattern = format!(r"<{}(?:\s[^>]*)?>", regex::escape(tag));
        Ok(Self {
            open: Regex::new(&pattern)?,
            close: format!("</{tag}>"),
        })
    }

    /// The `template` marker vocabulary.
    pub fn template() -> Self {
        Self {
            open: TEMPLATE_OPEN_PATTERN.clone(),
            close: "</template>".to_string(),
        }
    }
}

impl Default for MarkerScanner {
    fn default() -> Self {
        Self::template()
    }
}

impl Scanner for MarkerScanner {
    fn scan(&self, source: &str) -> Result<Vec<RegionBounds>> {
        let mut regions = Vec::new();
        let mut cursor = 0;

        while let Some(open) = self.open.find_at(source, cursor) {
            let Some(close_offset) = source[open.end()..].find(&self.close) else {
                break;
            };
            let close_start = open.end() + close_offset;
            let close_end = close_start + self.close.len();

            regions.push(RegionBounds::new(
                open.range(),
                open.end()..close_start,
                close_start..close_end,
            ));
            cursor = close_end;
        }

        tracing::debug!(regions = regions.len(), "Scanned document");
        Ok(regions)
    }
}
