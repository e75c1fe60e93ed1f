use crate::errors::GeneratorError;
use image::ImageFormat;

/// PNG の読み書きがこのビルドで有効か検証する
///
/// image クレートのコーデックは feature で切り替わるため、
/// `png` feature なしでビルドされた場合はここで止める
pub fn check_png_support() -> Result<(), GeneratorError> {
    check_format_support(ImageFormat::Png, "PNG")
}

fn check_format_support(format: ImageFormat, name: &'static str) -> Result<(), GeneratorError> {
    if format.reading_enabled() && format.writing_enabled() {
        Ok(())
    } else {
        Err(GeneratorError::MissingCapability { format: name })
    }
}
