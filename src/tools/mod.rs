use crate::decoder::qr_decoder::QrDecoder;
use crate::error::Result;
use crate::models::{DataSegments, FinderMarks};
use crate::utils::grayscale::rgb_to_grayscale_parallel;
use crate::utils::sampling::LumaImage;
use image::DynamicImage;
use std::path::Path;

/// Convert any decoded image into 8-bit luma along with its dimensions.
pub fn luma_from_dynamic(img: &DynamicImage) -> (Vec<u8>, usize, usize) {
    let rgb = img.to_rgb8();
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);
    (rgb_to_grayscale_parallel(rgb.as_raw(), width, height), width, height)
}

/// Load an image file as 8-bit luma along with its dimensions.
pub fn load_luma<P: AsRef<Path>>(path: P) -> Result<(Vec<u8>, usize, usize)> {
    let img = image::open(path)?;
    Ok(luma_from_dynamic(&img))
}

/// Decode a rectified symbol image file with the process-wide configuration.
pub fn decode_file<P: AsRef<Path>>(path: P, marks: &FinderMarks) -> Result<DataSegments> {
    let (luma, width, height) = load_luma(path)?;
    let image = LumaImage::new(&luma, width, height)?;
    QrDecoder::new(*crate::decoder::config::DecoderConfig::global()).decode_image(&image, marks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;
    use image::{GrayImage, Luma, Rgb, RgbImage};
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU64, Ordering};

    static TEMP_FILE_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn temp_path(ext: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        let sequence = TEMP_FILE_COUNTER.fetch_add(1, Ordering::Relaxed);
        path.push(format!(
            "rust_qr_decoder_{}_{sequence}.{ext}",
            std::process::id()
        ));
        path
    }

    #[test]
    fn load_luma_reads_png() {
        let path = temp_path("png");
        let img = GrayImage::from_fn(4, 3, |x, _| Luma([if x < 2 { 0 } else { 255 }]));
        img.save(&path).unwrap();

        let (luma, width, height) = load_luma(&path).unwrap();
        assert_eq!((width, height), (4, 3));
        assert_eq!(luma[0], 0);
        assert!(luma[3] >= 254);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn luma_from_dynamic_weights_channels() {
        let img = RgbImage::from_fn(2, 1, |x, _| if x == 0 { Rgb([0, 255, 0]) } else { Rgb([0, 0, 255]) });
        let (luma, width, height) = luma_from_dynamic(&DynamicImage::ImageRgb8(img));
        assert_eq!((width, height), (2, 1));
        assert!(luma[0] > luma[1]);
    }

    #[test]
    fn load_luma_missing_file() {
        let path = temp_path("png");
        assert!(matches!(load_luma(&path), Err(DecodeError::Image(_))));
    }
}
