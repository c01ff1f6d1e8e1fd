use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::GenericImageView;
use lambda_runtime::tracing;

use crate::error::ResizeError;

/// Decodes `data` in whatever raster format it is in, stretches it to exactly
/// `width`×`height` and re-encodes it as JPEG.
pub fn resize_to_jpeg(
    data: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, ResizeError> {
    let img = image::load_from_memory(data).map_err(ResizeError::Decode)?;
    let (orig_w, orig_h) = img.dimensions();

    // Aspect ratio is intentionally not preserved.
    let resized = img.resize_exact(width, height, FilterType::CatmullRom);

    // JPEG has no alpha channel.
    let rgb = resized.to_rgb8();
    let mut buffer = Vec::new();
    JpegEncoder::new_with_quality(&mut buffer, quality)
        .encode_image(&rgb)
        .map_err(ResizeError::Encode)?;

    tracing::info!(
        original_width = orig_w,
        original_height = orig_h,
        width,
        height,
        size = buffer.len(),
        "Resized image"
    );
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
    use std::io::Cursor;

    fn encode(img: DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), format).unwrap();
        buf
    }

    fn decode_jpeg(data: &[u8]) -> DynamicImage {
        assert_eq!(image::guess_format(data).unwrap(), ImageFormat::Jpeg);
        image::load_from_memory_with_format(data, ImageFormat::Jpeg).unwrap()
    }

    #[test]
    fn test_large_landscape_is_stretched_to_target() {
        let src = RgbImage::from_pixel(4000, 3000, Rgb([200, 30, 30]));
        let data = encode(DynamicImage::ImageRgb8(src), ImageFormat::Bmp);

        let out = resize_to_jpeg(&data, 300, 300, 75).unwrap();
        assert_eq!(decode_jpeg(&out).dimensions(), (300, 300));
    }

    #[test]
    fn test_small_portrait_is_upscaled_to_target() {
        let src = RgbImage::from_pixel(40, 90, Rgb([0, 0, 255]));
        let data = encode(DynamicImage::ImageRgb8(src), ImageFormat::Png);

        let out = resize_to_jpeg(&data, 300, 300, 75).unwrap();
        assert_eq!(decode_jpeg(&out).dimensions(), (300, 300));
    }

    #[test]
    fn test_png_with_alpha_becomes_jpeg() {
        let src = RgbaImage::from_pixel(64, 48, Rgba([10, 200, 10, 128]));
        let data = encode(DynamicImage::ImageRgba8(src), ImageFormat::Png);

        let out = resize_to_jpeg(&data, 300, 300, 75).unwrap();
        assert_eq!(decode_jpeg(&out).dimensions(), (300, 300));
    }

    #[test]
    fn test_bmp_becomes_jpeg() {
        let src = RgbImage::from_pixel(120, 80, Rgb([255, 255, 0]));
        let data = encode(DynamicImage::ImageRgb8(src), ImageFormat::Bmp);

        let out = resize_to_jpeg(&data, 300, 300, 75).unwrap();
        assert_eq!(decode_jpeg(&out).dimensions(), (300, 300));
    }

    #[test]
    fn test_solid_colour_survives_resize() {
        let src = RgbImage::from_pixel(500, 200, Rgb([0, 128, 255]));
        let data = encode(DynamicImage::ImageRgb8(src), ImageFormat::Png);

        let out = decode_jpeg(&resize_to_jpeg(&data, 300, 300, 75).unwrap()).to_rgb8();
        let Rgb([r, g, b]) = *out.get_pixel(150, 150);
        assert!(r < 16 && (112..=144).contains(&g) && b > 239);
    }

    #[test]
    fn test_corrupt_bytes_fail_to_decode() {
        let err = resize_to_jpeg(b"definitely not an image", 300, 300, 75).unwrap_err();
        assert!(matches!(err, ResizeError::Decode(_)));
    }
}
