use crate::errors::TransformError;
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::DynamicImage;

/// 画像を PNG にエンコードする
///
/// 可逆のまま最大圧縮（CompressionType::Best + Adaptive フィルタ）で出力する
pub fn encode_png(img: &DynamicImage) -> Result<Vec<u8>, TransformError> {
    let mut buf = Vec::new();

    let encoder =
        PngEncoder::new_with_quality(&mut buf, CompressionType::Best, PngFilterType::Adaptive);
    img.write_with_encoder(encoder)
        .map_err(|e| TransformError::ProcessingFailed(format!("PNG encode failed: {e}")))?;

    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_encode_png() {
        let img = DynamicImage::new_rgba8(10, 10);
        let data = encode_png(&img).unwrap();

        assert!(!data.is_empty());
        // PNG マジックナンバー確認
        assert_eq!(&data[0..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_encode_png_is_lossless() {
        let img = RgbaImage::from_fn(16, 16, |x, y| {
            Rgba([(x * 16) as u8, (y * 16) as u8, (x ^ y) as u8, (255 - x * 8) as u8])
        });
        let data = encode_png(&DynamicImage::ImageRgba8(img.clone())).unwrap();

        let decoded = image::load_from_memory(&data).unwrap().to_rgba8();
        assert_eq!(decoded, img);
    }
}
