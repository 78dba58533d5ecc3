/// Unmask QR code by applying the mask pattern
use crate::decoder::function_mask::FunctionMask;
use crate::error::Result;
use crate::models::{BitMatrix, MaskPattern, Version};

/// XOR mask of `pattern` restricted to the data region of `version`
pub fn xor_mask(version: Version, pattern: MaskPattern) -> BitMatrix {
    let func = FunctionMask::new(version);
    let mut mask = BitMatrix::square(func.size());
    for y in 0..func.size() {
        for x in 0..func.size() {
            if !func.is_function(x, y) && pattern.is_masked(y, x) {
                mask.set(x, y, true);
            }
        }
    }
    mask
}

/// Unmask QR code matrix by XORing with mask pattern
pub fn unmask(matrix: &mut BitMatrix, version: Version, pattern: MaskPattern) -> Result<()> {
    matrix.xor(&xor_mask(version, pattern))
}
