//! Builds rows for a small edit and prints them as a unified view.
//!
//! Run with: cargo run --example render_demo

use diff_rows::line_diff::diff_lines;
use diff_rows::rows::calculate_stats;
use diff_rows::config::Config;
use diff_rows::{RowBuilder, RowType, TokenClass, build_offset_index_with};

const OLD: &str = "use std::io;

fn main() {
    let name = read_name();
    println!(\"Hello, {}!\", name);
    let a = 1;
    let b = 2;
    let c = 3;
    let d = 4;
    let e = 5;
    report(a, b, c, d, e);
}
";

const NEW: &str = "use std::io;

fn main() {
    let name = read_name().trim().to_string();
    println!(\"Hello, {}!\", name);
    let a = 1;
    let b = 2;
    let c = 3;
    let d = 4;
    let e = 5;
    report(a, b, c, d, e);
    std::process::exit(0);
}
";

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let built = RowBuilder::new(2).build(&diff_lines(OLD, NEW));

    for row in &built.rows {
        let marker = match row.row_type {
            RowType::Deletion => '-',
            RowType::Addition => '+',
            RowType::Equal => ' ',
            RowType::Spacer => '~',
        };
        let text: String = row
            .tokens
            .iter()
            .map(|t| match t.class {
                TokenClass::InnerDiff
                    if matches!(row.row_type, RowType::Deletion | RowType::Addition) =>
                {
                    format!("[{}]", t.text)
                }
                _ => t.text.clone(),
            })
            .collect();
        println!(
            "{:>4} {:>4} {} {}",
            row.original_line_number, row.current_line_number, marker, text
        );
    }

    let stats = calculate_stats(&built);
    println!("\n+{} -{}", stats.added_chars, stats.removed_chars);

    let settings = Config::default().settings;
    let index = build_offset_index_with(&built.current_lines, settings.offset_unit);
    if let Some(offset) = index.get(4) {
        println!("current line 4 starts at offset {}", offset);
    }
}
