use crate::errors::TransformError;
use fast_image_resize::{images::Image, FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use image::{DynamicImage, RgbaImage};

/// 画像を `target_w` x `target_h` ちょうどにリサイズする
///
/// fast_image_resize の Lanczos3 フィルタで縮小する。
/// アイコンは透過を持つことが多いため RGBA8 で処理する。
/// アスペクト比は維持しない（正方形でないソースは歪む）
pub fn resize_image(
    img: &DynamicImage,
    target_w: u32,
    target_h: u32,
) -> Result<DynamicImage, TransformError> {
    if target_w == 0 || target_h == 0 {
        return Err(TransformError::InvalidDimensions {
            width: target_w,
            height: target_h,
        });
    }

    let rgba_img = img.to_rgba8();
    let width = rgba_img.width();
    let height = rgba_img.height();

    let src_image = Image::from_vec_u8(width, height, rgba_img.into_raw(), PixelType::U8x4)
        .map_err(|e| {
            TransformError::ProcessingFailed(format!("failed to create source image: {e}"))
        })?;

    let mut dst_image = Image::new(target_w, target_h, PixelType::U8x4);

    // アルファの乗除算は ResizeOptions のデフォルトで有効
    let mut resizer = Resizer::new();
    resizer
        .resize(
            &src_image,
            &mut dst_image,
            &ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3)),
        )
        .map_err(|e| TransformError::ProcessingFailed(format!("resize failed: {e}")))?;

    let resized = RgbaImage::from_raw(target_w, target_h, dst_image.into_vec()).ok_or_else(|| {
        TransformError::ProcessingFailed("failed to convert resized image".to_string())
    })?;

    Ok(DynamicImage::ImageRgba8(resized))
}
