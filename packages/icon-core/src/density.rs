use std::path::{Path, PathBuf};

use crate::constants::ICON_FILE_NAME;

/// Android の画面密度バケットと、そのアイコンサイズ
///
/// 出力は常に正方形なので、`size` は幅・高さの両方に使う
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Density {
    pub label: &'static str,
    pub size: u32,
}

impl Density {
    pub const fn new(label: &'static str, size: u32) -> Self {
        Self { label, size }
    }

    /// `<root>/<label>` を返す
    pub fn output_dir(&self, root: &Path) -> PathBuf {
        root.join(self.label)
    }

    /// `<root>/<label>/ic_launcher.png` を返す
    pub fn output_path(&self, root: &Path) -> PathBuf {
        self.output_dir(root).join(ICON_FILE_NAME)
    }
}
