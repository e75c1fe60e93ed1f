use std::fs;
use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::constants::{DENSITIES, OUTPUT_DIR, SOURCE_PATH};
use crate::density::Density;
use crate::errors::GeneratorError;
use crate::transform::{decode_image, encode_png, resize_image};
use crate::validation::{check_png_support, is_expected_source_dimensions, validate_source};

/// 入出力パス
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub source: PathBuf,
    pub output_dir: PathBuf,
}

impl GeneratorConfig {
    pub fn new(source: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output_dir: output_dir.into(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(SOURCE_PATH, OUTPUT_DIR)
    }
}

/// 書き出したアイコン1件分
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub density: Density,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// 進捗通知。各段階に入るたびに呼ばれる
pub trait Progress {
    fn source_found(&mut self, _path: &Path) {}
    fn creating_directories(&mut self) {}
    fn generating(&mut self) {}
    fn icon_generated(&mut self, _icon: &GeneratedIcon) {}
}

impl Progress for () {}

/// ソース画像から全密度のランチャーアイコンを生成する
///
/// 1. PNG コーデックが使えるか
/// 2. ソース画像が存在するか
/// 3. 出力ディレクトリ作成
/// 4. ソースを1回だけデコード
/// 5. 密度テーブル順にリサイズ・保存
///
/// どこかで失敗した時点で中断する（スキップや再試行はしない）
pub fn generate_icons<P: Progress + ?Sized>(
    config: &GeneratorConfig,
    progress: &mut P,
) -> Result<Vec<GeneratedIcon>, GeneratorError> {
    check_png_support()?;

    validate_source(&config.source)?;
    progress.source_found(&config.source);
    tracing::info!(source = %config.source.display(), "generating android launcher icons");

    progress.creating_directories();
    prepare_directories(&config.output_dir)?;

    let source = load_source(&config.source)?;

    progress.generating();
    let mut generated = Vec::with_capacity(DENSITIES.len());
    for density in DENSITIES {
        let icon = generate_icon(&source, density, &config.output_dir)?;
        progress.icon_generated(&icon);
        generated.push(icon);
    }

    Ok(generated)
}

/// 密度ごとの出力ディレクトリを作成する（既存なら何もしない）
fn prepare_directories(output_dir: &Path) -> Result<(), GeneratorError> {
    for density in DENSITIES {
        let dir = density.output_dir(output_dir);
        fs::create_dir_all(&dir).map_err(|source| GeneratorError::Io {
            path: dir.clone(),
            source,
        })?;
        tracing::debug!(dir = %dir.display(), "output directory ready");
    }
    Ok(())
}

fn load_source(path: &Path) -> Result<DynamicImage, GeneratorError> {
    let input = fs::read(path).map_err(|source| GeneratorError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let img = decode_image(&input)?;

    let (width, height) = (img.width(), img.height());
    tracing::debug!(width, height, "source image decoded");
    if !is_expected_source_dimensions(width, height) {
        tracing::warn!(
            width,
            height,
            "source image is not 1024x1024; output may be distorted or blurry"
        );
    }

    Ok(img)
}

fn generate_icon(
    source: &DynamicImage,
    density: Density,
    output_dir: &Path,
) -> Result<GeneratedIcon, GeneratorError> {
    let resized = resize_image(source, density.size, density.size)?;
    let png = encode_png(&resized)?;

    let path = density.output_path(output_dir);
    fs::write(&path, png).map_err(|source| GeneratorError::Io {
        path: path.clone(),
        source,
    })?;

    tracing::info!(
        density = density.label,
        size = density.size,
        path = %path.display(),
        "icon written"
    );

    Ok(GeneratedIcon {
        density,
        width: resized.width(),
        height: resized.height(),
        path,
    })
}
