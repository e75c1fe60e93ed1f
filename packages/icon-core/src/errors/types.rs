use std::path::PathBuf;

use thiserror::Error;

/// アイコン生成の統合エラー型
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("{format} codec support is not available in this build")]
    MissingCapability { format: &'static str },

    #[error("source image not found: {}", .path.display())]
    MissingSource { path: PathBuf },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("transform error: {0}")]
    Transform(#[from] TransformError),
}

/// 画像変換エラー
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("decode failed: {0}")]
    DecodeFailed(String),

    #[error("invalid target dimensions ({width}x{height})")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("processing failed: {0}")]
    ProcessingFailed(String),
}
