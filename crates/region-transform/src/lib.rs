//! Region recording and document reassembly for Region Transform
//!
//! Scans a document once, hands out handle-stamped regions, records
//! replacement payloads in any order, and reassembles the full document on
//! demand with every untouched byte intact.

pub mod error;
pub mod query;
pub mod region;
pub mod transformer;

pub use error::{Error, Result};
pub use query::RegionQuery;
pub use region::{Region, RegionHandle, ScanId};
pub use transformer::{transform, transform_with, Transformer};

pub use region_core::{Coordinates, InnerCoordinates, MarkerScanner, RegionBounds, Scanner};
