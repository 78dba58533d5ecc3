//! Configurable zig-zag traversal over a bit grid
//!
//! The grid is tiled by sampling cells of `cell_width x cell_height`. Inside a
//! cell the walk follows the bits flow (primary direction first, stepping along
//! the secondary one at each cell edge); cells are visited in the order of the
//! sample flow. Either level can reflect at its edge instead of wrapping.
//!
//! The QR data area is the main user (2x4 cells, sample mirroring), header
//! regions are read with 1x1 cells or a single cell spanning the region.

use crate::error::{DecodeError, Result};
use crate::models::{BitArray, BitMatrix, PointI};

/// Cardinal step direction, one bit per direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    /// Increasing y
    Bottom = 1,
    /// Decreasing x
    Left = 2,
    /// Increasing x
    Right = 4,
    /// Decreasing y
    Top = 8,
}

impl Direction {
    /// Direction for a single set bit
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            1 => Some(Direction::Bottom),
            2 => Some(Direction::Left),
            4 => Some(Direction::Right),
            8 => Some(Direction::Top),
            _ => None,
        }
    }

    /// Opposite direction
    pub fn reflect(self) -> Self {
        match self {
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Top => Direction::Bottom,
        }
    }

    /// One-cell step
    pub fn unit(self) -> PointI {
        match self {
            Direction::Bottom => PointI::new(0, 1),
            Direction::Left => PointI::new(-1, 0),
            Direction::Right => PointI::new(1, 0),
            Direction::Top => PointI::new(0, -1),
        }
    }

    /// Move the coordinate along this direction's axis to the edge a walk in
    /// this direction starts from; the other coordinate is left untouched
    fn init(self, width: i32, height: i32, mut p: PointI) -> PointI {
        match self {
            Direction::Left => p.x = width - 1,
            Direction::Right => p.x = 0,
            Direction::Top => p.y = height - 1,
            Direction::Bottom => p.y = 0,
        }
        p
    }
}

/// Ordered pair of directions, packed as `primary | secondary << 4`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlowDirection {
    /// Direction walked first
    pub primary: Direction,
    /// Direction stepped when the primary walk leaves its bounds
    pub secondary: Direction,
}

impl FlowDirection {
    /// Right, then up
    pub const RIGHT_TOP: Self = Self::new(Direction::Right, Direction::Top);
    /// Right, then down
    pub const RIGHT_BOTTOM: Self = Self::new(Direction::Right, Direction::Bottom);
    /// Left, then up
    pub const LEFT_TOP: Self = Self::new(Direction::Left, Direction::Top);
    /// Left, then down
    pub const LEFT_BOTTOM: Self = Self::new(Direction::Left, Direction::Bottom);
    /// Up, then right
    pub const TOP_RIGHT: Self = Self::new(Direction::Top, Direction::Right);
    /// Up, then left
    pub const TOP_LEFT: Self = Self::new(Direction::Top, Direction::Left);
    /// Down, then right
    pub const BOTTOM_RIGHT: Self = Self::new(Direction::Bottom, Direction::Right);
    /// Down, then left
    pub const BOTTOM_LEFT: Self = Self::new(Direction::Bottom, Direction::Left);

    /// Pair two directions
    pub const fn new(primary: Direction, secondary: Direction) -> Self {
        Self { primary, secondary }
    }

    /// Unpack `primary | secondary << 4`
    pub fn from_bits(bits: u8) -> Option<Self> {
        Some(Self::new(
            Direction::from_bits(bits & 0x0F)?,
            Direction::from_bits(bits >> 4)?,
        ))
    }

    /// Packed form
    pub fn bits(&self) -> u8 {
        self.primary as u8 | ((self.secondary as u8) << 4)
    }

    /// True when the two directions span both axes
    pub fn is_valid(&self) -> bool {
        self.primary != self.secondary && self.primary != self.secondary.reflect()
    }
}

/// Zig-zag sampler configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSampler {
    cell: PointI,
    bits_flow: FlowDirection,
    sample_flow: FlowDirection,
    bits_mirror: bool,
    sample_mirror: bool,
}

impl GridSampler {
    /// Sampler without mirroring at either level
    pub fn new(
        cell_width: usize,
        cell_height: usize,
        bits_flow: FlowDirection,
        sample_flow: FlowDirection,
    ) -> Self {
        Self {
            cell: PointI::new(cell_width as i32, cell_height as i32),
            bits_flow,
            sample_flow,
            bits_mirror: false,
            sample_mirror: false,
        }
    }

    /// Reflect instead of wrapping: inside a cell (`bits`) and across cells (`sample`)
    pub fn with_mirror(mut self, bits: bool, sample: bool) -> Self {
        self.bits_mirror = bits;
        self.sample_mirror = sample;
        self
    }

    /// First cell visited by `flow` over a `width x height` area
    pub fn start_position(width: i32, height: i32, flow: FlowDirection) -> Option<PointI> {
        if width < 1 || height < 1 || !flow.is_valid() {
            return None;
        }
        let p = flow.primary.init(width, height, PointI::new(-1, -1));
        Some(flow.secondary.init(width, height, p))
    }

    /// Walk `code` and collect its bits in visiting order.
    ///
    /// With a mask, only cells whose mask bit is set are emitted; the walk
    /// itself still visits every cell.
    pub fn sample(&self, code: &BitMatrix, mask: Option<&BitMatrix>) -> Result<BitArray> {
        if let Some(mask) = mask {
            if mask.width() != code.width() || mask.height() != code.height() {
                return Err(DecodeError::DimensionMismatch {
                    left_w: code.width(),
                    left_h: code.height(),
                    right_w: mask.width(),
                    right_h: mask.height(),
                });
            }
        }
        for flow in [self.bits_flow, self.sample_flow] {
            if !flow.is_valid() {
                return Err(DecodeError::InvalidFlow(flow.bits()));
            }
        }

        let (width, height) = (code.width() as i32, code.height() as i32);
        let (gw, gh) = (self.cell.x, self.cell.y);
        let mut out = BitArray::with_capacity(code.width() * code.height());

        let (Some(outer), Some(inner)) = (
            Self::start_position(width, height, self.sample_flow),
            Self::start_position(gw, gh, self.bits_flow),
        ) else {
            return Ok(out);
        };

        let mut bd1 = self.bits_flow.primary;
        let mut bd2 = self.bits_flow.secondary;
        let mut sd1 = self.sample_flow.primary;
        let sd2 = self.sample_flow.secondary;

        let mut current = outer + inner;
        if sd1 == Direction::Left || sd2 == Direction::Left {
            current.x -= gw - 1;
        }
        if sd1 == Direction::Top || sd2 == Direction::Top {
            current.y -= gh - 1;
        }
        let mut cell_pos = bd1.init(gw, gh, PointI::default());

        while current.within(width, height) {
            let (x, y) = (current.x as usize, current.y as usize);
            if mask.is_none_or(|m| m.get(x, y)) {
                out.push(code.get(x, y));
            }

            let mut offset_dim1 = bd1.unit();
            let offset_dim2;
            cell_pos += bd1.unit();
            if !cell_pos.within(gw, gh) {
                if self.bits_mirror {
                    bd1 = bd1.reflect();
                    offset_dim1 = PointI::default();
                } else {
                    offset_dim1 = (-offset_dim1).scale(PointI::new(gw - 1, gh - 1));
                }
                cell_pos = bd1.init(gw, gh, cell_pos);
                offset_dim2 = bd2.unit();
            } else {
                offset_dim2 = PointI::default();
            }

            let mut offset = offset_dim1 + offset_dim2;
            let next = current + offset;
            if !next.within(width, height) {
                if self.sample_mirror {
                    bd2 = bd2.reflect();
                    sd1 = sd1.reflect();
                }
                let wrapped = next + sd2.unit().scale(PointI::new(gw, gh));
                offset = sd1.init(width, height, wrapped) - current;
            }
            current += offset;
        }

        Ok(out)
    }
}
