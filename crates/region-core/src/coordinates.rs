//! Coordinate mapping between byte ranges and user-facing positions.
//!
//! Scanners report region payloads as byte ranges. Editors and language
//! tooling want character offsets and line/column pairs. [`coordinates_of`]
//! translates forward; [`reverse_inner_coordinates`] lifts positions
//! measured inside a payload back onto the whole document.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::region::slice_checked;

/// Character-space location of one region's payload.
///
/// Offsets count characters, not bytes; the two differ as soon as the
/// document contains multi-byte text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    /// 1-based line of the first payload character.
    pub line: usize,
    /// 0-based character column of the first payload character within its line.
    pub column: usize,
    /// Count of leading whitespace characters on that line.
    pub column_offset: usize,
    /// Character offset of the first payload character from document start.
    pub start: usize,
    /// `start` plus the payload length in characters.
    pub end: usize,
}

/// A line/column span measured relative to a payload's own first line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InnerCoordinates {
    /// 1-based start line.
    pub line: usize,
    /// 1-based end line.
    pub end_line: usize,
    /// 0-based character column of the span start.
    pub column: usize,
    /// 0-based character column of the span end.
    pub end_column: usize,
}

/// Maps a payload byte range to character-space [`Coordinates`].
///
/// Lines are delimited by `'\n'` alone; a carriage return counts as line
/// text. A payload at document start maps to line 1, column 0.
///
/// # Errors
///
/// Fails when the range leaves the source or cuts a character in half.
pub fn coordinates_of(source: &str, content: &Range<usize>) -> Result<Coordinates> {
    let payload = slice_checked(source, content)?;
    let preceding = slice_checked(source, &(0..content.start))?;

    let start = preceding.chars().count();
    let end = start + payload.chars().count();

    let line = preceding.split('\n').count();
    let current_line = preceding.rsplit('\n').next().unwrap_or_default();
    let column = current_line.chars().count();
    let column_offset = column - current_line.trim_start().chars().count();

    Ok(Coordinates {
        line,
        column,
        column_offset,
        start,
        end,
    })
}

/// Decodes a raw buffer as UTF-8, then maps like [`coordinates_of`].
pub fn coordinates_of_bytes(source: &[u8], content: &Range<usize>) -> Result<Coordinates> {
    let text = std::str::from_utf8(source)?;
    coordinates_of(text, content)
}

/// Lifts a span measured inside a payload onto whole-document coordinates.
///
/// `outer` locates the payload in the document; `inner` is relative to the
/// payload's first line. Lines stack additively. Columns on the payload's
/// first line sit after the opening marker, so they shift by the region's
/// own column; both column corrections key off `inner.line`.
pub fn reverse_inner_coordinates(
    outer: &Coordinates,
    inner: &InnerCoordinates,
) -> InnerCoordinates {
    let line = inner.line + outer.line - 1;
    let end_line = inner.end_line + outer.line - 1;

    let (column, end_column) = if inner.line == 1 {
        (inner.column + outer.column, inner.end_column + outer.column)
    } else {
        (inner.column, inner.end_column)
    };

    InnerCoordinates {
        line,
        end_line,
        column,
        end_column,
    }
}
