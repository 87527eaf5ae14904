//! Engine-minted region identity

use std::fmt;
use std::ops::Range;

use region_core::RegionBounds;
use uuid::Uuid;

/// Stable identity of a region within its scan: the zero-based position of
/// the region in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegionHandle(usize);

impl RegionHandle {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the region in document order.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for RegionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identity stamp minted once per engine construction. Every region of a
/// scan carries its stamp, making regions from other engines detectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScanId(Uuid);

impl ScanId {
    pub(crate) fn mint() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ScanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One scanned region, stamped with the identity of the engine that minted
/// it.
///
/// Only an engine produces `Region` values; the fields are sealed so a
/// value is proof the region came out of exactly one scan. Clones remain
/// valid arguments for that engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    handle: RegionHandle,
    scan: ScanId,
    bounds: RegionBounds,
}

impl Region {
    pub(crate) fn new(handle: RegionHandle, scan: ScanId, bounds: RegionBounds) -> Self {
        Self {
            handle,
            scan,
            bounds,
        }
    }

    pub fn handle(&self) -> RegionHandle {
        self.handle
    }

    /// The stamp of the scan that produced this region.
    pub fn scan_id(&self) -> ScanId {
        self.scan
    }

    /// The scanner-reported byte spans.
    pub fn bounds(&self) -> &RegionBounds {
        &self.bounds
    }

    /// Byte range of the payload, markers excluded.
    pub fn content_range(&self) -> Range<usize> {
        self.bounds.content.clone()
    }

    /// Byte range of the whole region, markers included.
    pub fn full_range(&self) -> Range<usize> {
        self.bounds.full.clone()
    }
}
