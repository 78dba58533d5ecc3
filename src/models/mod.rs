//! Core data structures shared by every decoding stage

/// Growable bit sequence
pub mod bit_array;
/// Finder marks handed over by detection
pub mod marks;
/// Packed bit grid and cell rectangles
pub mod matrix;
/// Float and integer points
pub mod point;
/// Version, error correction level and mask pattern
pub mod qr_code;
/// Decoded data segments and their flags
pub mod segment;

pub use bit_array::BitArray;
pub use marks::{FinderMark, FinderMarks};
pub use matrix::{BitMatrix, Rect};
pub use point::{Point, PointI};
pub use qr_code::{ECLevel, MaskPattern, Version};
pub use segment::{
    DataMode, DataSegment, DataSegments, SegmentFlags, SegmentsFlags, StructuredAppend,
};
