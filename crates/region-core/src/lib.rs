//! Coordinate mapping and marker scanning for Region Transform
//!
//! Locates marker-delimited regions in text documents and translates
//! between the three coordinate spaces involved: byte ranges into the
//! UTF-8 source, character offsets, and line/column positions.

pub mod coordinates;
pub mod error;
pub mod extract;
pub mod reader;
pub mod region;
pub mod scan;

pub use coordinates::{
    coordinates_of, coordinates_of_bytes, reverse_inner_coordinates, Coordinates,
    InnerCoordinates,
};
pub use error::{Error, Result};
pub use extract::{extract, extract_default, ExtractedRegion};
pub use reader::RegionReader;
pub use region::{validate_scan, RegionBounds};
pub use scan::{MarkerScanner, Scanner};
