use std::path::Path;

use icon_core::{GeneratedIcon, GeneratorError, Progress, TransformError};

/// 進捗を標準出力へ表示する
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn source_found(&mut self, path: &Path) {
        println!("✅ Source image found: {}", path.display());
        println!();
    }

    fn creating_directories(&mut self) {
        println!("📁 Creating directories...");
    }

    fn generating(&mut self) {
        println!("🔄 Generating icons...");
        println!();
    }

    fn icon_generated(&mut self, icon: &GeneratedIcon) {
        println!("{}", icon_line(icon));
    }
}

pub fn print_banner() {
    println!("🎨 Android Icon Generator");
    println!("{}", "=".repeat(50));
    println!();
}

pub fn print_summary(icons: &[GeneratedIcon]) {
    println!();
    println!("✅ All icons generated successfully!");
    println!();
    println!("📍 Icons saved to:");
    for icon in icons {
        println!("  - {}", icon.path.display());
    }
    println!();
    println!("🚀 Next steps:");
    println!("  1. npx cap sync android");
    println!("  2. cd android && ./gradlew assembleDebug");
    println!();
    println!("🎉 Done!");
}

pub fn print_error(err: &GeneratorError) {
    for line in error_lines(err) {
        eprintln!("{line}");
    }
}

fn icon_line(icon: &GeneratedIcon) -> String {
    format!("  ✅ {} ({}x{})", icon.density.label, icon.width, icon.height)
}

fn error_lines(err: &GeneratorError) -> Vec<String> {
    match err {
        GeneratorError::MissingCapability { format } => vec![
            format!("❌ {format} support is not available!"),
            String::new(),
            "📦 Rebuild with the image crate's png feature enabled:".to_string(),
            "  cargo build --release -p android-icon-generator".to_string(),
            String::new(),
        ],
        GeneratorError::MissingSource { path } => {
            vec![format!("❌ Source image not found: {}", path.display())]
        }
        GeneratorError::Transform(TransformError::DecodeFailed(msg)) => {
            vec![format!("❌ Error loading source image: {msg}")]
        }
        other => vec![format!("❌ {other}")],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use icon_core::Density;
    use std::path::PathBuf;

    #[test]
    fn test_icon_line() {
        let icon = GeneratedIcon {
            density: Density::new("mipmap-xxhdpi", 144),
            path: PathBuf::from("android/app/src/main/res/mipmap-xxhdpi/ic_launcher.png"),
            width: 144,
            height: 144,
        };
        assert_eq!(icon_line(&icon), "  ✅ mipmap-xxhdpi (144x144)");
    }

    #[test]
    fn test_missing_source_names_path() {
        let err = GeneratorError::MissingSource {
            path: PathBuf::from("src/assets/app-icon-1024.png"),
        };
        assert_eq!(
            error_lines(&err),
            vec!["❌ Source image not found: src/assets/app-icon-1024.png"]
        );
    }

    #[test]
    fn test_missing_capability_has_instructions() {
        let err = GeneratorError::MissingCapability { format: "PNG" };
        let lines = error_lines(&err);
        assert_eq!(lines[0], "❌ PNG support is not available!");
        assert!(lines.iter().any(|l| l.contains("cargo build")));
    }

    #[test]
    fn test_decode_failure_surfaces_underlying_text() {
        let err = GeneratorError::Transform(TransformError::DecodeFailed(
            "The image format could not be determined".to_string(),
        ));
        assert_eq!(
            error_lines(&err),
            vec!["❌ Error loading source image: The image format could not be determined"]
        );
    }
}
