use crate::error::{DecodeError, Result};
use crate::models::BitArray;

/// Axis-aligned cell rectangle inside a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Left column
    pub x: usize,
    /// Top row
    pub y: usize,
    /// Width in cells
    pub width: usize,
    /// Height in cells
    pub height: usize,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Compact bit matrix for storing binary data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl BitMatrix {
    /// Create a new bit matrix with given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        let bytes_needed = (width * height).div_ceil(8);
        Self {
            width,
            height,
            data: vec![0; bytes_needed],
        }
    }

    /// Square matrix of side `size`
    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    /// Parse rows of `'1'`/`'0'` characters (any other non-space character counts as 0)
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().trim().len()).unwrap_or(0);
        let mut matrix = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref().trim();
            if row.len() != width {
                return Err(DecodeError::DimensionMismatch {
                    left_w: width,
                    left_h: height,
                    right_w: row.len(),
                    right_h: 1,
                });
            }
            for (x, ch) in row.bytes().enumerate() {
                matrix.set(x, y, ch == b'1');
            }
        }
        Ok(matrix)
    }

    /// Get matrix width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get matrix height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get bit at (x, y)
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = y * self.width + x;
        let byte_index = index / 8;
        let bit_index = index % 8;
        (self.data[byte_index] >> bit_index) & 1 == 1
    }

    /// Get bit at (x, y), reporting out-of-range access
    pub fn try_get(&self, x: usize, y: usize) -> Result<bool> {
        if x >= self.width || y >= self.height {
            return Err(DecodeError::IndexOutOfBounds {
                index: y.saturating_mul(self.width).saturating_add(x),
                len: self.width * self.height,
            });
        }
        Ok(self.get(x, y))
    }

    /// Set bit at (x, y)
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = y * self.width + x;
        let byte_index = index / 8;
        let bit_index = index % 8;
        if value {
            self.data[byte_index] |= 1 << bit_index;
        } else {
            self.data[byte_index] &= !(1 << bit_index);
        }
    }

    /// Toggle bit at (x, y)
    pub fn toggle(&mut self, x: usize, y: usize) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = y * self.width + x;
        let byte_index = index / 8;
        let bit_index = index % 8;
        self.data[byte_index] ^= 1 << bit_index;
    }

    /// Clear all bits to 0
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Set every cell of `rect` that lies inside the matrix
    pub fn fill_rect(&mut self, rect: Rect) {
        let end_x = (rect.x + rect.width).min(self.width);
        let end_y = (rect.y + rect.height).min(self.height);
        for y in rect.y..end_y {
            for x in rect.x..end_x {
                self.set(x, y, true);
            }
        }
    }

    /// Copy out the cells covered by `rect`
    pub fn sub_matrix(&self, rect: Rect) -> Result<BitMatrix> {
        if rect.x + rect.width > self.width || rect.y + rect.height > self.height {
            return Err(DecodeError::DimensionMismatch {
                left_w: self.width,
                left_h: self.height,
                right_w: rect.x + rect.width,
                right_h: rect.y + rect.height,
            });
        }
        let mut out = BitMatrix::new(rect.width, rect.height);
        for y in 0..rect.height {
            for x in 0..rect.width {
                out.set(x, y, self.get(rect.x + x, rect.y + y));
            }
        }
        Ok(out)
    }

    /// Row `y` as a bit array
    pub fn row(&self, y: usize) -> Result<BitArray> {
        if y >= self.height {
            return Err(DecodeError::IndexOutOfBounds {
                index: y,
                len: self.height,
            });
        }
        Ok((0..self.width).map(|x| self.get(x, y)).collect())
    }

    /// Append a row; its length must equal the matrix width
    pub fn push_row(&mut self, row: &BitArray) -> Result<()> {
        if row.len() != self.width {
            return Err(DecodeError::DimensionMismatch {
                left_w: self.width,
                left_h: self.height,
                right_w: row.len(),
                right_h: 1,
            });
        }
        self.height += 1;
        self.data.resize((self.width * self.height).div_ceil(8), 0);
        let y = self.height - 1;
        for (x, bit) in row.iter().enumerate() {
            self.set(x, y, bit);
        }
        Ok(())
    }

    /// Remove column `col`, shifting the columns right of it one to the left
    pub fn remove_col(&mut self, col: usize) -> Result<()> {
        if col >= self.width {
            return Err(DecodeError::IndexOutOfBounds {
                index: col,
                len: self.width,
            });
        }
        let mut out = BitMatrix::new(self.width - 1, self.height);
        for y in 0..self.height {
            for x in 0..self.width - 1 {
                let src = if x < col { x } else { x + 1 };
                out.set(x, y, self.get(src, y));
            }
        }
        *self = out;
        Ok(())
    }

    /// Cell-wise AND with a matrix of identical size
    pub fn and(&mut self, other: &BitMatrix) -> Result<()> {
        self.check_same_size(other)?;
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a &= *b;
        }
        Ok(())
    }

    /// Cell-wise XOR with a matrix of identical size
    pub fn xor(&mut self, other: &BitMatrix) -> Result<()> {
        self.check_same_size(other)?;
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a ^= *b;
        }
        Ok(())
    }

    /// Flip every cell
    pub fn invert(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                self.toggle(x, y);
            }
        }
    }

    /// Number of set cells
    pub fn count_ones(&self) -> usize {
        (0..self.height)
            .map(|y| (0..self.width).filter(|&x| self.get(x, y)).count())
            .sum()
    }

    /// Get raw data as bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    fn check_same_size(&self, other: &BitMatrix) -> Result<()> {
        if self.width != other.width || self.height != other.height {
            return Err(DecodeError::DimensionMismatch {
                left_w: self.width,
                left_h: self.height,
                right_w: other.width,
                right_h: other.height,
            });
        }
        Ok(())
    }
}

impl Default for BitMatrix {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
