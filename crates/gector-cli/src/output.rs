//! Result rendering.

use anyhow::Result;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use gector_core::SearchResult;

use crate::demo::DemoReport;
use crate::OutputFormat;

/// Print search results in the specified format
pub fn print_results(results: &[SearchResult], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(results)?),
        OutputFormat::Table => {
            if results.is_empty() {
                println!("No results.");
            } else {
                println!("{}", results_table(results));
            }
        }
    }
    Ok(())
}

pub fn print_demo(report: &DemoReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let doc = serde_json::json!({
                "inserted": report.inserted,
                "level_sizes": report.level_sizes,
                "query": report.query,
                "results": report.results,
                "insert_ms": report.insert_ms,
                "search_ms": report.search_ms,
            });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        OutputFormat::Table => {
            println!(
                "Inserted {} vectors in {:.2} ms",
                report.inserted, report.insert_ms
            );
            for (level, size) in report.level_sizes.iter().enumerate() {
                println!("  level {level}: {size} nodes");
            }
            println!("Query: {}", format_values(&report.query.values));
            println!("Search took {:.3} ms", report.search_ms);
            print_results(&report.results, OutputFormat::Table)?;
        }
    }
    Ok(())
}

fn results_table(results: &[SearchResult]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let header: Vec<Cell> = ["#", "key", "vector id", "distance", "values"]
        .iter()
        .map(|c| Cell::new(c).fg(Color::Cyan))
        .collect();
    table.set_header(header);

    for (rank, result) in results.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(&result.id),
            Cell::new(&result.vector.id),
            Cell::new(format!("{:.4}", result.distance)),
            Cell::new(format_values(&result.vector.values)),
        ]);
    }

    table
}

pub fn format_values(values: &[f64]) -> String {
    const SHOWN: usize = 6;
    let mut parts: Vec<String> = values.iter().take(SHOWN).map(|v| format!("{v:.2}")).collect();
    if values.len() > SHOWN {
        parts.push(format!("… (+{})", values.len() - SHOWN));
    }
    format!("[{}]", parts.join(", "))
}
