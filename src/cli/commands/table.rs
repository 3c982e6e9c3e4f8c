//! Table command - Inspect and export a persisted Q-table

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    app::App,
    cli::output::{format_number, print_kv, print_section, print_subsection},
    sarsa::{DEFAULT_TABLE_PATH, QTable, SavedQTable},
};

#[derive(Parser, Debug)]
#[command(about = "Show statistics for a saved Q-table")]
pub struct TableArgs {
    /// Q-table file to inspect
    #[arg(long, default_value = DEFAULT_TABLE_PATH)]
    pub path: PathBuf,

    /// Also write the table as JSON to this file
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Number of highest-valued entries to list
    #[arg(long, default_value_t = 10)]
    pub top: usize,
}

/// Summary figures for a table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSummary {
    pub states: usize,
    pub values: usize,
    pub nonzero: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

pub fn summarize(table: &QTable) -> TableSummary {
    let values: Vec<f64> = table
        .rows()
        .flat_map(|(_, row)| row.values().copied())
        .collect();
    TableSummary {
        states: table.len(),
        values: values.len(),
        nonzero: values.iter().filter(|&&v| v != 0.0).count(),
        min: values.iter().copied().reduce(f64::min),
        max: values.iter().copied().reduce(f64::max),
    }
}

pub fn execute(args: TableArgs) -> Result<()> {
    let app = App::new();
    let table = app
        .load_table(&args.path)
        .with_context(|| format!("Failed to load Q-table from {}", args.path.display()))?;

    let summary = summarize(&table);
    print_section("Q-table");
    print_kv("Path", &args.path.display().to_string());
    print_kv("States", &format_number(summary.states));
    print_kv("Values", &format_number(summary.values));
    print_kv("Non-zero values", &format_number(summary.nonzero));
    if let (Some(min), Some(max)) = (summary.min, summary.max) {
        print_kv("Range", &format!("{min:.4} .. {max:.4}"));
    }

    if args.top > 0 && summary.values > 0 {
        let mut entries: Vec<(&str, String, f64)> = table
            .rows()
            .flat_map(|(state, row)| row.iter().map(move |(mv, &q)| (state, mv.to_string(), q)))
            .collect();
        entries.sort_by(|a, b| b.2.total_cmp(&a.2));

        print_subsection("Highest values");
        for (state, mv, q) in entries.into_iter().take(args.top) {
            println!("  {q:>9.4}  {mv:<6} {state}");
        }
    }

    if let Some(export) = &args.export {
        SavedQTable::new(table).export_json(export)?;
        println!("\nExported to {}", export.display());
    }

    Ok(())
}
