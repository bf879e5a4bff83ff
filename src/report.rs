//! Human-readable console report of the per-year count tables.

use std::io::{self, Write};

use crate::analyzers::aggregate::YearTables;

/// Writes the six labeled count tables followed by the two grand totals.
pub fn print_report<W: Write>(out: &mut W, years: &[YearTables]) -> io::Result<()> {
    let rendered: Vec<_> = years.iter().map(|t| (t.year, t.tables())).collect();
    let granularities = rendered.first().map_or(0, |(_, tables)| tables.len());

    for slot in 0..granularities {
        for (year, tables) in &rendered {
            let (granularity, rows) = &tables[slot];
            writeln!(
                out,
                "{} Package Counts — {}:",
                granularity.title(),
                year.label()
            )?;
            write_table(out, granularity.key_column(), rows)?;
            writeln!(out)?;
        }
    }

    for tables in years {
        writeln!(out, "Total packages — {}: {}", tables.year.label(), tables.total())?;
    }
    Ok(())
}

fn write_table<W: Write>(out: &mut W, key_column: &str, rows: &[(String, u64)]) -> io::Result<()> {
    let key_width = rows
        .iter()
        .map(|(key, _)| key.len())
        .max()
        .unwrap_or(0)
        .max(key_column.len());
    let count_width = rows
        .iter()
        .map(|(_, count)| count.to_string().len())
        .max()
        .unwrap_or(0)
        .max("Count".len());

    writeln!(out, "{:<key_width$}  {:>count_width$}", key_column, "Count")?;
    if rows.is_empty() {
        writeln!(out, "(no packages)")?;
    }
    for (key, count) in rows {
        writeln!(out, "{:<key_width$}  {:>count_width$}", key, count)?;
    }
    Ok(())
}
