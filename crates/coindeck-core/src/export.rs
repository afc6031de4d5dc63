//! CSV export with currency-aware formatting.
//!
//! The column formats are load-bearing: downstream spreadsheets were built
//! against them, so `$1,234.50` style output is reproduced exactly.

use chrono::{DateTime, Local};

use crate::domain::PriceRecord;

const HEADER: &str =
    "Rank,Name,Symbol,Current Price (USD),Market Cap (USD),24h Change (%),Download Time";

/// One produced CSV file, ready to hand to the HTTP layer.
#[derive(Debug, Clone)]
pub struct CsvExport {
    /// `crypto_prices_<YYYYMMDD_HHMMSS>.csv`, from the export stamp.
    pub filename: String,
    pub bytes: Vec<u8>,
    pub record_count: usize,
}

impl CsvExport {
    /// Serialize `records` in the order given, all rows stamped with the
    /// same wall-clock export time.
    pub fn build(records: &[PriceRecord], stamp: DateTime<Local>) -> Self {
        let download_time = stamp.format("%Y-%m-%d %H:%M:%S").to_string();
        let filename = format!("crypto_prices_{}.csv", stamp.format("%Y%m%d_%H%M%S"));

        let mut out = String::with_capacity(64 * (records.len() + 1));
        out.push_str(HEADER);
        out.push('\n');

        for record in records {
            let row = [
                record.market_cap_rank.to_string(),
                record.name.clone(),
                record.symbol.clone(),
                format_usd_price(record.current_price),
                format_market_cap(record.market_cap),
                format_percent_change(record.price_change_percentage_24h),
                download_time.clone(),
            ];
            let cells: Vec<String> = row.iter().map(|cell| escape_cell(cell)).collect();
            out.push_str(&cells.join(","));
            out.push('\n');
        }

        Self {
            filename,
            bytes: out.into_bytes(),
            record_count: records.len(),
        }
    }
}

/// Sub-dollar prices keep 6 decimals so micro-cap coins stay legible;
/// everything else gets the usual 2.
pub fn format_usd_price(price: f64) -> String {
    let decimals = if price < 1.0 { 6 } else { 2 };
    let formatted = format!("{:.*}", decimals, price);
    let (int_part, frac_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), ""));
    format!("${}.{}", group_thousands(int_part), frac_part)
}

pub fn format_market_cap(market_cap: i64) -> String {
    format!("${}", group_thousands(&market_cap.to_string()))
}

/// `None` and `0.0` both render `N/A`: the upstream feed reports a missing
/// 24h change for fresh listings as either null or zero.
pub fn format_percent_change(change: Option<f64>) -> String {
    match change {
        Some(value) if value != 0.0 => format!("{:.2}%", value),
        _ => String::from("N/A"),
    }
}

/// Insert comma separators into a (possibly signed) integer string.
fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}", sign, grouped)
}

/// Minimal CSV quoting: wrap and double-quote only when the cell needs it.
/// Formatted prices contain commas, so this is the common path.
fn escape_cell(cell: &str) -> String {
    if cell.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
