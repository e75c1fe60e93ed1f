use crate::constants::SOURCE_DIMENSION;
use crate::errors::GeneratorError;
use std::path::Path;

/// ソース画像のパスが既存のファイルを指しているか検証する
pub fn validate_source(path: &Path) -> Result<(), GeneratorError> {
    if !path.is_file() {
        return Err(GeneratorError::MissingSource {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}

/// ソース画像が想定どおり 1024x1024 の正方形か
///
/// 一致しなくても処理は続行する（呼び出し側で警告を出すだけ）
pub fn is_expected_source_dimensions(width: u32, height: u32) -> bool {
    width == SOURCE_DIMENSION && height == SOURCE_DIMENSION
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("icon.png");
        std::fs::write(&path, b"").unwrap();

        assert!(validate_source(&path).is_ok());
    }

    #[test]
    fn test_validate_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.png");

        match validate_source(&path).unwrap_err() {
            GeneratorError::MissingSource { path: reported } => assert_eq!(reported, path),
            other => panic!("expected MissingSource, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_directory_is_not_a_source() {
        let dir = TempDir::new().unwrap();
        assert!(validate_source(dir.path()).is_err());
    }

    #[test]
    fn test_expected_source_dimensions() {
        assert!(is_expected_source_dimensions(1024, 1024));
        assert!(!is_expected_source_dimensions(512, 512));
        assert!(!is_expected_source_dimensions(1024, 768));
    }
}
