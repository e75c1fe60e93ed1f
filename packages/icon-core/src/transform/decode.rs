use crate::errors::TransformError;
use image::{DynamicImage, ImageReader};
use std::io::Cursor;

/// 画像バイト列をデコードする
///
/// フォーマットは拡張子ではなく先頭バイトから推測する
pub fn decode_image(input: &[u8]) -> Result<DynamicImage, TransformError> {
    let reader = ImageReader::new(Cursor::new(input))
        .with_guessed_format()
        .map_err(|e| TransformError::DecodeFailed(format!("failed to guess format: {e}")))?;

    reader
        .decode()
        .map_err(|e| TransformError::DecodeFailed(e.to_string()))
}
