//! Pixel-to-module sampling
//!
//! A rectified, front-facing symbol image is cut into a regular grid of
//! cells. Each cell votes over the pixels of its inner area (the border
//! fraction given by the margin is ignored) and becomes a dark module when
//! more than half of those pixels are dark.

use crate::error::{DecodeError, Result};
use crate::models::{BitArray, BitMatrix, Rect};

/// Borrowed 8-bit luma buffer, row-major
#[derive(Debug, Clone, Copy)]
pub struct LumaImage<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
}

impl<'a> LumaImage<'a> {
    /// Wrap `data`, which must hold at least `width * height` pixels
    pub fn new(data: &'a [u8], width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 || data.len() < width * height {
            return Err(DecodeError::InvalidSize { width, height });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whole image as a rectangle
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Luma at (x, y); callers stay in bounds
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    /// Sample `roi` into a `cols x rows` grid; a cell is `true` when dark.
    pub fn sample_grid(
        &self,
        roi: Rect,
        cols: usize,
        rows: usize,
        margin: f32,
        threshold: u8,
    ) -> Result<BitMatrix> {
        if cols == 0 || rows == 0 {
            return Err(DecodeError::InvalidSize {
                width: cols,
                height: rows,
            });
        }
        if roi.width == 0
            || roi.height == 0
            || roi.x + roi.width > self.width
            || roi.y + roi.height > self.height
        {
            return Err(DecodeError::DimensionMismatch {
                left_w: self.width,
                left_h: self.height,
                right_w: roi.x + roi.width,
                right_h: roi.y + roi.height,
            });
        }

        let margin = margin.clamp(0.0, 0.9);
        let cell_w = roi.width as f32 / cols as f32;
        let cell_h = roi.height as f32 / rows as f32;
        let inner = |start: usize, cell: f32, index: usize, limit: usize| {
            let origin = start as f32 + cell * index as f32;
            let inset = cell * margin / 2.0;
            let lo = ((origin + inset).round() as usize).min(limit - 1);
            let hi = ((origin + cell - inset).round() as usize).clamp(lo + 1, limit);
            (lo, hi)
        };

        let mut grid = BitMatrix::new(cols, 0);
        for i in 0..rows {
            let (y0, y1) = inner(roi.y, cell_h, i, roi.y + roi.height);
            let mut row = BitArray::with_capacity(cols);
            for j in 0..cols {
                let (x0, x1) = inner(roi.x, cell_w, j, roi.x + roi.width);
                let dark = (y0..y1)
                    .flat_map(|y| (x0..x1).map(move |x| (x, y)))
                    .filter(|&(x, y)| self.get(x, y) < threshold)
                    .count();
                let total = (x1 - x0) * (y1 - y0);
                row.push(dark * 2 > total);
            }
            grid.push_row(&row)?;
        }
        Ok(grid)
    }
}
