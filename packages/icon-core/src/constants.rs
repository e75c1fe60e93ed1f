use crate::density::Density;

/// ソース画像のパス（作業ディレクトリからの相対パス）
pub const SOURCE_PATH: &str = "src/assets/app-icon-1024.png";

/// Android リソースの出力先ルート
pub const OUTPUT_DIR: &str = "android/app/src/main/res";

/// 各密度ディレクトリに書き出すファイル名
pub const ICON_FILE_NAME: &str = "ic_launcher.png";

/// 想定しているソース画像の一辺（px）
pub const SOURCE_DIMENSION: u32 = 1024;

/// 密度ごとの出力サイズ（テーブル順に生成する）
pub const DENSITIES: [Density; 5] = [
    Density::new("mipmap-mdpi", 48),
    Density::new("mipmap-hdpi", 72),
    Density::new("mipmap-xhdpi", 96),
    Density::new("mipmap-xxhdpi", 144),
    Density::new("mipmap-xxxhdpi", 192),
];
