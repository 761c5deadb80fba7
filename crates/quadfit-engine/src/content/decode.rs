use super::{ContentBitmap, ContentError};

/// Decodes an encoded image (PNG, JPEG, BMP, GIF) into a premultiplied bitmap.
///
/// The format is sniffed from the bytes. Only the first frame of animated
/// formats is used.
pub fn decode_image(bytes: &[u8]) -> Result<ContentBitmap, ContentError> {
    let decoded = image::load_from_memory(bytes).map_err(|e| ContentError::Decode(e.to_string()))?;
    let rgba = decoded.into_rgba8();
    let (width, height) = rgba.dimensions();

    log::debug!("decoded image {width}x{height}");

    ContentBitmap::from_straight_rgba8(width, height, rgba.into_raw())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{ImageFormat, Rgba, RgbaImage};

    use super::*;

    fn png(img: &RgbaImage) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn decodes_png_and_premultiplies() {
        let mut img = RgbaImage::new(4, 2);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        img.put_pixel(3, 1, Rgba([255, 255, 255, 0]));

        let bmp = decode_image(&png(&img)).unwrap();

        assert_eq!((bmp.width(), bmp.height()), (4, 2));
        assert_eq!(bmp.pixel(0, 0), Some([255, 0, 0, 255]));
        assert_eq!(bmp.pixel(3, 1), Some([0, 0, 0, 0]));
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let err = decode_image(b"definitely not an image").unwrap_err();
        assert!(matches!(err, ContentError::Decode(_)));
    }
}
