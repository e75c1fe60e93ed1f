use std::process::ExitCode;

use icon_core::{generate_icons, GeneratorConfig};
use tracing_subscriber::EnvFilter;

mod console;

use console::ConsoleProgress;

fn main() -> ExitCode {
    // 通常の実行では進捗表示だけを出す。詳細は RUST_LOG で確認する
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    console::print_banner();

    let config = GeneratorConfig::default();
    match generate_icons(&config, &mut ConsoleProgress) {
        Ok(icons) => {
            console::print_summary(&icons);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "icon generation failed");
            console::print_error(&err);
            ExitCode::FAILURE
        }
    }
}
