use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// 2D point with floating point coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Create a new point
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Calculate distance to another point
    pub fn distance(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Integer point for grid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointI {
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: i32,
}

impl PointI {
    /// Create a new integer point
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True when inside `0..width` x `0..height`
    pub fn within(&self, width: i32, height: i32) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < width && self.y < height
    }

    /// Component-wise product
    pub fn scale(self, other: PointI) -> PointI {
        PointI::new(self.x * other.x, self.y * other.y)
    }
}

impl Add for PointI {
    type Output = PointI;

    fn add(self, rhs: PointI) -> PointI {
        PointI::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for PointI {
    fn add_assign(&mut self, rhs: PointI) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for PointI {
    type Output = PointI;

    fn sub(self, rhs: PointI) -> PointI {
        PointI::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for PointI {
    fn sub_assign(&mut self, rhs: PointI) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<i32> for PointI {
    type Output = PointI;

    fn mul(self, rhs: i32) -> PointI {
        PointI::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for PointI {
    type Output = PointI;

    fn neg(self) -> PointI {
        PointI::new(-self.x, -self.y)
    }
}
