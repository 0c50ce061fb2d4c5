//! Example demonstrating the configuration system
//!
//! Run with: cargo run --example config_demo

use diff_rows::config::Config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Diff Rows Configuration Demo ===\n");

    // Load or create default config
    let config = Config::load()?;

    println!("Current settings:");
    println!("  Context lines: {}", config.settings.context_lines);
    println!("  Char diff cleanup: {}", config.settings.cleanup);
    println!("  Offset unit: {:?}", config.settings.offset_unit);

    println!("\nConfig file: {}", Config::config_path()?.display());

    println!("\nConfiguration loaded successfully!");
    println!("You can modify the config file manually or use Config::save() to persist changes.");

    Ok(())
}
