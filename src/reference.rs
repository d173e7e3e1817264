//! Input validation.
//!
//! The engine only ever sees a positive frame count and non-negative page
//! ids. These helpers turn raw user input into that shape.

use crate::{EvictError, EvictResult, PageId};

/// Parses a reference string.
///
/// Page ids may be separated by any mix of commas and whitespace, so
/// `"7, 0 1,2"` yields `[7, 0, 1, 2]`. Negative or non-numeric tokens are
/// rejected with [`EvictError::InvalidReference`]. Blank input yields an
/// empty stream.
pub fn parse_references(input: &str) -> EvictResult<Vec<PageId>> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(parse_page)
        .collect()
}

fn parse_page(token: &str) -> EvictResult<PageId> {
    token
        .parse::<u64>()
        .map(PageId)
        .map_err(|_| EvictError::InvalidReference(token.to_string()))
}

/// Validates a frame count.
pub fn frame_count(count: i64) -> EvictResult<usize> {
    if count <= 0 {
        return Err(EvictError::InvalidConfiguration(count));
    }
    usize::try_from(count).map_err(|_| EvictError::InvalidConfiguration(count))
}
