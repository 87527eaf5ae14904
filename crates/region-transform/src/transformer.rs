//! The stateful transform engine: one scan, any number of recordings,
//! reassembly on demand.

use std::future::Future;

use parking_lot::Mutex;
use region_core::{
    coordinates_of, reverse_inner_coordinates, validate_scan, Coordinates, InnerCoordinates,
    MarkerScanner, RegionReader, Scanner,
};

use crate::error::{Error, Result};
use crate::query::RegionQuery;
use crate::region::{Region, RegionHandle, ScanId};

/// Records replacement payloads for the regions of one document and
/// reassembles the document on demand.
///
/// The document is scanned exactly once, at construction. Replacements
/// accumulate in a table keyed by region handle and are only applied when
/// [`materialize`](Self::materialize) runs, so recording order never has to
/// match document order. The pristine source is kept untouched throughout.
///
/// All operations take `&self` and may run concurrently. Recordings against
/// different regions never conflict; two recordings racing on the same
/// region leave one of the two replacements whole, and which one wins is
/// unspecified.
#[derive(Debug)]
pub struct Transformer {
    source: String,
    scan: ScanId,
    regions: Vec<Region>,
    coordinates: Vec<Coordinates>,
    transforms: Mutex<Vec<Option<String>>>,
}

impl Transformer {
    /// Scans `source` with the default `template` marker scanner.
    pub fn new(source: impl Into<String>) -> Result<Self> {
        Self::with_scanner(source, &MarkerScanner::template())
    }

    /// Scans `source` with the given scanner and maps every region's
    /// coordinates eagerly.
    ///
    /// Scanner failures and incoherent scan reports fail construction;
    /// afterwards every stored range is trusted by the other operations.
    pub fn with_scanner(source: impl Into<String>, scanner: &dyn Scanner) -> Result<Self> {
        let source = source.into();
        let bounds_list = scanner.scan(&source)?;
        validate_scan(&source, &bounds_list)?;

        let scan = ScanId::mint();
        let mut regions = Vec::with_capacity(bounds_list.len());
        let mut coordinates = Vec::with_capacity(bounds_list.len());
        for (index, bounds) in bounds_list.into_iter().enumerate() {
            coordinates.push(coordinates_of(&source, &bounds.content)?);
            regions.push(Region::new(RegionHandle::new(index), scan, bounds));
        }

        tracing::debug!(scan = %scan, regions = regions.len(), "Constructed transformer");

        let transforms = Mutex::new(vec![None; regions.len()]);
        Ok(Self {
            source,
            scan,
            regions,
            coordinates,
            transforms,
        })
    }

    /// The pristine document text the engine was constructed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Every region in ascending document order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Character-space coordinates of a region's payload.
    pub fn coordinates_of_region(&self, region: &Region) -> Result<Coordinates> {
        let index = self.verify_member(region)?;
        self.coordinates_at(index)
    }

    /// A region's original payload text, unaffected by recordings.
    pub fn content_of(&self, region: &Region) -> Result<&str> {
        let index = self.verify_member(region)?;
        Ok(self.reader().content(self.regions[index].bounds())?)
    }

    /// A region's current payload: the recorded replacement if one exists,
    /// the original text otherwise.
    pub fn current_content_of(&self, region: &Region) -> Result<String> {
        let index = self.verify_member(region)?;
        self.current_content(index)
    }

    /// Finds the region whose coordinates match `query`: full equality
    /// first, then `start`, then `end`, then the line/column pair.
    pub fn find_region(&self, query: impl Into<RegionQuery>) -> Option<&Region> {
        let query = query.into();

        if let Some(index) = self.coordinates.iter().position(|c| query.matches_exactly(c)) {
            return self.regions.get(index);
        }
        if let Some(index) = self.coordinates.iter().position(|c| query.matches_start(c)) {
            return self.regions.get(index);
        }
        if let Some(index) = self.coordinates.iter().position(|c| query.matches_end(c)) {
            return self.regions.get(index);
        }
        self.coordinates
            .iter()
            .position(|c| query.matches_line_column(c))
            .and_then(|index| self.regions.get(index))
    }

    /// Lifts a span measured inside a region's payload onto whole-document
    /// coordinates.
    pub fn reverse_inner_coordinates_of(
        &self,
        region: &Region,
        inner: &InnerCoordinates,
    ) -> Result<InnerCoordinates> {
        let index = self.verify_member(region)?;
        let coordinates = self.coordinates_at(index)?;
        Ok(reverse_inner_coordinates(&coordinates, inner))
    }

    /// Visits every region in document order with its current content and
    /// coordinates.
    pub fn for_each<F>(&self, mut inspect: F) -> Result<()>
    where
        F: FnMut(&str, Coordinates),
    {
        for index in 0..self.regions.len() {
            let coordinates = self.coordinates_at(index)?;
            let content = self.current_content(index)?;
            inspect(&content, coordinates);
        }
        Ok(())
    }

    /// Async [`Self::for_each`]: strictly sequential, each returned future
    /// runs to completion before the next callback is invoked.
    pub async fn for_each_async<F, Fut>(&self, mut inspect: F) -> Result<()>
    where
        F: FnMut(String, Coordinates) -> Fut,
        Fut: Future<Output = ()>,
    {
        for index in 0..self.regions.len() {
            let coordinates = self.coordinates_at(index)?;
            let content = self.current_content(index)?;
            inspect(content, coordinates).await;
        }
        Ok(())
    }

    /// Transforms every region in document order, recording each
    /// replacement as it is produced.
    ///
    /// The first callback error stops the iteration and is returned;
    /// replacements recorded before it stay recorded.
    pub fn map<F>(&self, mut transform: F) -> Result<()>
    where
        F: FnMut(&str, Coordinates) -> Result<String>,
    {
        for index in 0..self.regions.len() {
            let coordinates = self.coordinates_at(index)?;
            let content = self.current_content(index)?;
            let replacement = transform(&content, coordinates)?;
            self.record(index, replacement);
        }
        Ok(())
    }

    /// Async [`Self::map`]: callbacks are invoked in document order, the
    /// returned futures are driven concurrently in one task, and each
    /// replacement is recorded as its future completes.
    ///
    /// After all futures settle, the first error in document order is
    /// returned; replacements recorded by the other futures persist. This
    /// concurrent fan-out deliberately differs from the sequential
    /// [`Self::for_each_async`].
    pub async fn map_async<F, Fut>(&self, mut transform: F) -> Result<()>
    where
        F: FnMut(String, Coordinates) -> Fut,
        Fut: Future<Output = Result<String>>,
    {
        let mut pending = Vec::with_capacity(self.regions.len());
        for index in 0..self.regions.len() {
            let coordinates = self.coordinates_at(index)?;
            let content = self.current_content(index)?;
            let fut = transform(content, coordinates);
            pending.push(async move {
                let replacement = fut.await?;
                self.record(index, replacement);
                Ok(())
            });
        }

        futures::future::join_all(pending)
            .await
            .into_iter()
            .collect()
    }

    /// Transforms a single region through its current content.
    ///
    /// Fails with [`Error::ForeignRegion`] when the region was not minted
    /// by this engine's scan; the table is untouched on any failure.
    pub fn transform_one<F>(&self, region: &Region, transform: F) -> Result<()>
    where
        F: FnOnce(&str, Coordinates) -> Result<String>,
    {
        let index = self.verify_member(region)?;
        let coordinates = self.coordinates_at(index)?;
        let content = self.current_content(index)?;
        let replacement = transform(&content, coordinates)?;
        self.record(index, replacement);
        Ok(())
    }

    /// Async [`Self::transform_one`].
    pub async fn transform_one_async<F, Fut>(&self, region: &Region, transform: F) -> Result<()>
    where
        F: FnOnce(String, Coordinates) -> Fut,
        Fut: Future<Output = Result<String>>,
    {
        let index = self.verify_member(region)?;
        let coordinates = self.coordinates_at(index)?;
        let content = self.current_content(index)?;
        let replacement = transform(content, coordinates).await?;
        self.record(index, replacement);
        Ok(())
    }

    /// Reassembles the document: pristine source plus every recorded
    /// replacement, folded in ascending document order.
    ///
    /// Each splice replaces a region's full span with its opening marker,
    /// the replacement, and its closing marker; the running byte offset
    /// carries the length drift of earlier edits into later splice
    /// positions. Untouched regions and the text between regions come
    /// through byte-identical. Every call reassembles from scratch.
    pub fn materialize(&self) -> Result<String> {
        let recorded: Vec<Option<String>> = self.transforms.lock().clone();

        let reader = self.reader();
        let mut result = self.source.clone();
        let mut offset: isize = 0;
        let mut applied = 0usize;

        for (region, replacement) in self.regions.iter().zip(&recorded) {
            let Some(replacement) = replacement else {
                continue;
            };

            let bounds = region.bounds();
            let open_marker = reader.open_marker(bounds)?;
            let close_marker = reader.close_marker(bounds)?;
            let original_len = bounds.content.len();

            let splice_start = (bounds.full.start as isize + offset) as usize;
            let splice_end = (bounds.full.end as isize + offset) as usize;

            let mut patch = String::with_capacity(
                open_marker.len() + replacement.len() + close_marker.len(),
            );
            patch.push_str(open_marker);
            patch.push_str(replacement);
            patch.push_str(close_marker);
            result.replace_range(splice_start..splice_end, &patch);

            offset += replacement.len() as isize - original_len as isize;
            applied += 1;
        }

        tracing::debug!(applied, total = self.regions.len(), "Materialized document");
        Ok(result)
    }

    fn reader(&self) -> RegionReader<'_> {
        RegionReader::new(&self.source)
    }

    fn verify_member(&self, region: &Region) -> Result<usize> {
        if region.scan_id() != self.scan {
            return Err(Error::ForeignRegion {
                expected: self.scan,
                actual: region.scan_id(),
            });
        }
        let index = region.handle().index();
        match self.regions.get(index) {
            Some(own) if own == region => Ok(index),
            _ => Err(Error::ForeignRegion {
                expected: self.scan,
                actual: region.scan_id(),
            }),
        }
    }

    fn coordinates_at(&self, index: usize) -> Result<Coordinates> {
        self.coordinates
            .get(index)
            .copied()
            .ok_or(Error::MissingCoordinates {
                handle: RegionHandle::new(index),
            })
    }

    fn current_content(&self, index: usize) -> Result<String> {
        {
            let transforms = self.transforms.lock();
            if let Some(replacement) = &transforms[index] {
                return Ok(replacement.clone());
            }
        }
        Ok(self
            .reader()
            .content(self.regions[index].bounds())?
            .to_string())
    }

    fn record(&self, index: usize, replacement: String) {
        tracing::trace!(region = index, bytes = replacement.len(), "Recorded transform");
        let mut transforms = self.transforms.lock();
        transforms[index] = Some(replacement);
    }
}

/// Replaces every region's payload in one pass with the default scanner.
pub fn transform<F>(source: &str, replace: F) -> Result<String>
where
    F: FnMut(&str) -> String,
{
    transform_with(source, &MarkerScanner::template(), replace)
}

/// [`transform`] with a custom scanner.
pub fn transform_with<F>(source: &str, scanner: &dyn Scanner, mut replace: F) -> Result<String>
where
    F: FnMut(&str) -> String,
{
    let transformer = Transformer::with_scanner(source, scanner)?;
    transformer.map(|content, _| Ok(replace(content)))?;
    transformer.materialize()
}
