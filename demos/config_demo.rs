//! Prints the settings DevKit would start with.
//!
//! Run with: cargo run --example config_demo

use devkit::config::Config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== DevKit Configuration Demo ===\n");

    let config = Config::load()?;
    let settings = &config.settings;

    println!("Current settings:");
    println!("  Last tool: {}", settings.last_tool.title());
    println!("  Diff mode: {}", settings.diff_mode.label());
    println!(
        "  JSON indent: {} (sort keys: {})",
        settings.json_indent, settings.json_sort_keys
    );
    println!("  Base64 alphabet: {}", settings.base64_alphabet.label());
    println!("  UUID batch size: {}", settings.uuid_batch_size);
    println!(
        "  Lorem ipsum: {} x {}",
        settings.lorem.count,
        settings.lorem.kind.label()
    );
    println!("  bcrypt rounds: {}", settings.bcrypt_cost);
    println!(
        "  QR code: {} px, {}",
        settings.qr.size,
        settings.qr.error_level.label()
    );

    if settings.recent_files.is_empty() {
        println!("\nNo recent files.");
    } else {
        println!("\nRecent files:");
        for path in &settings.recent_files {
            println!("  {}", path.display());
        }
    }

    println!("\nData directory: {}", config.data_dir().display());
    println!("Config file: {}", Config::config_path()?.display());

    Ok(())
}
