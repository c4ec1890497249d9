use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;
use strum_macros::{Display, EnumString};
use tracing::info;

use crate::{catalog::Catalog, valuation::Valuation};

const SUMMARY_WIDTH: usize = 80;
const CATALOG_WIDTH: usize = 60;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ReportFormat {
    #[default]
    Csv,
    Txt,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Txt => "txt",
        }
    }
}

#[derive(Serialize)]
struct CsvRecord {
    #[serde(rename = "Stock Symbol")]
    symbol: String,
    #[serde(rename = "Quantity")]
    quantity: String,
    #[serde(rename = "Price per Share")]
    price: String,
    #[serde(rename = "Total Value")]
    value: String,
}

/// Two decimal places, rounded half away from zero.
pub fn cents(amount: Decimal) -> String {
    let mut amount = amount.round_dp(2);
    amount.rescale(2);
    amount.to_string()
}

fn rule(c: char, width: usize) -> String {
    c.to_string().repeat(width)
}

pub fn render_catalog(catalog: &Catalog) -> String {
    let mut lines = vec![
        String::new(),
        rule('=', CATALOG_WIDTH),
        String::from("AVAILABLE STOCKS"),
        rule('=', CATALOG_WIDTH),
        format!("{:<15} {:<25} {:<10}", "Stock Symbol", "Company Name", "Price ($)"),
        rule('-', CATALOG_WIDTH),
    ];
    for listing in catalog.listings() {
        lines.push(format!(
            "{:<15} {:<25} ${:<9}",
            listing.symbol,
            listing.company,
            cents(listing.price)
        ));
    }
    lines.push(rule('=', CATALOG_WIDTH));
    lines.join("\n")
}

fn table_lines(valuation: &Valuation) -> Vec<String> {
    let mut lines = vec![
        format!(
            "{:<10} {:<12} {:<15} {:<15}",
            "Stock", "Quantity", "Price/Share", "Total Value"
        ),
        rule('-', SUMMARY_WIDTH),
    ];
    for row in valuation.rows.iter() {
        lines.push(format!(
            "{:<10} {:<12} ${:<14} ${:<14}",
            row.ticker,
            row.quantity,
            cents(row.price),
            cents(row.value)
        ));
    }
    lines.push(rule('-', SUMMARY_WIDTH));
    lines.push(format!(
        "{:<52} ${:>14}",
        "TOTAL PORTFOLIO VALUE:",
        cents(valuation.total)
    ));
    lines.push(rule('=', SUMMARY_WIDTH));
    lines
}

/// Fixed-width table printed to the terminal after collection.
pub fn render_summary(valuation: &Valuation) -> String {
    let mut lines = vec![
        String::new(),
        rule('=', SUMMARY_WIDTH),
        String::from("PORTFOLIO SUMMARY"),
        rule('=', SUMMARY_WIDTH),
    ];
    lines.extend(table_lines(valuation));
    lines.join("\n")
}

pub fn write_csv<W: Write>(writer: W, valuation: &Valuation) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    for row in valuation.rows.iter() {
        writer.serialize(CsvRecord {
            symbol: row.ticker.to_string(),
            quantity: row.quantity.to_string(),
            price: format!("${}", cents(row.price)),
            value: format!("${}", cents(row.value)),
        })?;
    }
    writer.serialize(CsvRecord {
        symbol: String::from("TOTAL"),
        quantity: String::new(),
        price: String::new(),
        value: format!("${}", cents(valuation.total)),
    })?;
    writer.flush()?;

    Ok(())
}

pub fn write_text<W: Write>(
    mut writer: W,
    valuation: &Valuation,
    generated_at: NaiveDateTime,
) -> Result<()> {
    writeln!(writer, "{}", rule('=', SUMMARY_WIDTH))?;
    writeln!(writer, "STOCK PORTFOLIO SUMMARY")?;
    writeln!(
        writer,
        "Generated: {}",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(writer, "{}", rule('=', SUMMARY_WIDTH))?;
    writeln!(writer)?;
    for line in table_lines(valuation) {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;

    Ok(())
}

pub fn report_file_name(format: ReportFormat, now: NaiveDateTime) -> String {
    format!(
        "portfolio_{}.{}",
        now.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

/// Writes the report into `dir` and returns the path of the new file.
pub fn save(
    valuation: &Valuation,
    format: ReportFormat,
    dir: &Path,
    now: NaiveDateTime,
) -> Result<PathBuf> {
    let path = dir.join(report_file_name(format, now));
    let file = File::create(&path)
        .with_context(|| format!("Failed to create report file {}", path.display()))?;
    let writer = BufWriter::new(file);

    match format {
        ReportFormat::Csv => write_csv(writer, valuation)?,
        ReportFormat::Txt => write_text(writer, valuation, now)?,
    }
    info!("{} report written to {}", format, path.display());

    Ok(path)
}
