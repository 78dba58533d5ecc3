use crate::models::Point;

/// One located finder pattern in image pixel space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FinderMark {
    /// Pattern center
    pub center: Point,
    /// Outer width of the 7-module pattern in pixels
    pub width: f32,
}

impl FinderMark {
    /// Create a new mark
    pub fn new(center: Point, width: f32) -> Self {
        Self { center, width }
    }

    /// Estimated module pitch in pixels
    pub fn module_size(&self) -> f32 {
        self.width / 7.0
    }
}

/// The three finder marks of one symbol
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FinderMarks {
    /// Mark in the bottom-left corner
    pub bottom_left: FinderMark,
    /// Mark in the top-left corner
    pub top_left: FinderMark,
    /// Mark in the top-right corner
    pub top_right: FinderMark,
}

impl FinderMarks {
    /// Group three marks
    pub fn new(bottom_left: FinderMark, top_left: FinderMark, top_right: FinderMark) -> Self {
        Self {
            bottom_left,
            top_left,
            top_right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_size() {
        let mark = FinderMark::new(Point::new(35.0, 35.0), 70.0);
        assert!((mark.module_size() - 10.0).abs() < f32::EPSILON);
    }
}
