//! Precomputed column image of the display message.
//!
//! Glyphs are column bitmaps, one 32-bit word per column with bit `n`
//! addressing pixel `n` of the strip. The buffer is built once at
//! startup and replayed read-only by the renderer.

use heapless::Vec;

/// The scaled message does not fit the requested column count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityError {
    pub required: usize,
    pub available: usize,
}

/// Scaled, centered column representation of a message.
///
/// `MAX_COLUMNS` bounds the storage; the built length is the
/// `total_columns` passed to [`ColumnBuffer::build`].
#[derive(Debug)]
pub struct ColumnBuffer<const MAX_COLUMNS: usize> {
    columns: Vec<u32, MAX_COLUMNS>,
}

impl<const MAX_COLUMNS: usize> ColumnBuffer<MAX_COLUMNS> {
    /// Build the column image for `message`.
    ///
    /// Each glyph contributes `glyph_width` source columns; every
    /// source column is repeated `scale` times, and the resulting span
    /// is centered within `total_columns`. Padding columns are the
    /// background pattern (no pixels lit).
    pub fn build(
        message: &[&[u32]],
        glyph_width: usize,
        total_columns: usize,
        scale: usize,
    ) -> Result<Self, CapacityError> {
        let scale = scale.max(1);
        let span = message.len() * glyph_width * scale;
        if span > total_columns || total_columns > MAX_COLUMNS {
            return Err(CapacityError {
                required: span.max(total_columns),
                available: total_columns.min(MAX_COLUMNS),
            });
        }

        let left_pad = (total_columns - span) / 2;
        let mut columns: Vec<u32, MAX_COLUMNS> = Vec::new();
        for index in 0..total_columns {
            let pattern = if index >= left_pad && index < left_pad + span {
                let source = (index - left_pad) / scale;
                message[source / glyph_width][source % glyph_width]
            } else {
                0
            };
            // capacity was checked above
            let _ = columns.push(pattern);
        }

        Ok(Self { columns })
    }

    /// Number of columns in the built image
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Pattern of column `index`, valid for `0..len()`
    pub fn get(&self, index: usize) -> u32 {
        self.columns[index]
    }
}
