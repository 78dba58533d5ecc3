use crate::decoder::format::FormatInfo;
use crate::decoder::version::VersionInfo;
use crate::models::{BitMatrix, Rect, Version};

/// Function module mask for a specific QR version.
/// true = function module (not data), false = data module.
pub struct FunctionMask {
    mask: BitMatrix,
}

impl FunctionMask {
    /// Mark every function module of `version`
    pub fn new(version: Version) -> Self {
        let size = version.size();
        let mut mask = BitMatrix::square(size);

        // Finder patterns with their separators
        for rect in [
            Rect::new(0, 0, 8, 8),
            Rect::new(size - 8, 0, 8, 8),
            Rect::new(0, size - 8, 8, 8),
        ] {
            mask.fill_rect(rect);
        }

        // Timing patterns
        mask.fill_rect(Rect::new(8, 6, size - 16, 1));
        mask.fill_rect(Rect::new(6, 8, 1, size - 16));

        // Alignment patterns, except where they would overlap a finder
        let centers = version.alignment_centers();
        if let (Some(&first), Some(&last)) = (centers.first(), centers.last()) {
            for &cy in &centers {
                for &cx in &centers {
                    let on_finder = (cx == first && cy == first)
                        || (cx == last && cy == first)
                        || (cx == first && cy == last);
                    if !on_finder {
                        mask.fill_rect(Rect::new(cx - 2, cy - 2, 5, 5));
                    }
                }
            }
        }

        // Format info, both copies
        for rect in FormatInfo::copy1_regions() {
            mask.fill_rect(rect);
        }
        for rect in FormatInfo::copy2_regions(size) {
            mask.fill_rect(rect);
        }

        // Dark module
        mask.set(8, size - 8, true);

        // Version info (v7+)
        if version.has_version_info() {
            mask.fill_rect(VersionInfo::top_right_region(size));
            mask.fill_rect(VersionInfo::bottom_left_region(size));
        }

        Self { mask }
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.mask.width()
    }

    /// True for finder, timing, alignment, format and version modules
    pub fn is_function(&self, x: usize, y: usize) -> bool {
        self.mask.get(x, y)
    }

    /// Data region: set where a module carries codeword bits
    pub fn data_region(&self) -> BitMatrix {
        let mut region = self.mask.clone();
        region.invert();
        region
    }

    /// Modules left for codewords and remainder bits
    pub fn data_modules_count(&self) -> usize {
        self.size() * self.size() - self.mask.count_ones()
    }
}

/// Data region of `version`, set where a module carries codeword bits
pub fn data_region(version: Version) -> BitMatrix {
    FunctionMask::new(version).data_region()
}
