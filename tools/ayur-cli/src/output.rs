//! Terminal output for the `ayur` tool.
//!
//! Human output goes through [`Output`]; with `--json` every styled line is
//! suppressed and commands print one JSON document instead. Errors are the
//! exception and are always reported, as JSON when requested.

use ayur_commerce::money::Money;
use console::{measure_text_width, pad_str, style, Alignment, StyledObject};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Info,
    Success,
    Warn,
    Error,
    Debug,
}

impl Mark {
    fn glyph(self) -> StyledObject<&'static str> {
        match self {
            Mark::Info => style("ℹ").blue(),
            Mark::Success => style("✓").green(),
            Mark::Warn => style("⚠").yellow(),
            Mark::Error => style("✗").red(),
            Mark::Debug => style("→").dim(),
        }
    }

    fn to_stderr(self) -> bool {
        matches!(self, Mark::Warn | Mark::Error | Mark::Debug)
    }
}

/// Styled CLI output.
#[derive(Debug, Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    fn status(&self, mark: Mark, msg: &str) {
        if self.json {
            return;
        }
        let body = match mark {
            Mark::Error => style(msg).red().to_string(),
            Mark::Debug => style(msg).dim().to_string(),
            _ => msg.to_string(),
        };
        if mark.to_stderr() {
            eprintln!("{} {}", mark.glyph(), body);
        } else {
            println!("{} {}", mark.glyph(), body);
        }
    }

    pub fn info(&self, msg: &str) {
        self.status(Mark::Info, msg);
    }

    pub fn success(&self, msg: &str) {
        self.status(Mark::Success, msg);
    }

    pub fn warn(&self, msg: &str) {
        self.status(Mark::Warn, msg);
    }

    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            self.status(Mark::Error, msg);
        }
    }

    /// Only shown with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if self.verbose {
            self.status(Mark::Debug, msg);
        }
    }

    pub fn header(&self, msg: &str) {
        if !self.json {
            println!("\n{}", style(msg).bold().underlined());
        }
    }

    pub fn json<T: serde::Serialize>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{}", json),
            Err(e) => tracing::warn!(error = %e, "could not encode output"),
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        if !self.json {
            println!("  {} {}", style(format!("{}:", key)).dim(), value);
        }
    }

    pub fn list_item(&self, item: &str) {
        if !self.json {
            println!("  {} {}", style("•").dim(), item);
        }
    }

    /// Print rows under a dimmed header, each column as wide as its widest cell.
    pub fn table(&self, headers: &[&str], rows: &[Vec<String>]) {
        if self.json {
            return;
        }
        let widths = column_widths(headers, rows);
        let header: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
        println!("  {}", style(layout_row(&header, &widths)).dim());
        for row in rows {
            println!("  {}", layout_row(row, &widths));
        }
    }

    /// Spinner shown while a simulated wait runs. Hidden under `--json`.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner:.green} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        pb.set_style(style);
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn is_json(&self) -> bool {
        self.json
    }
}

fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| measure_text_width(cell))
                .chain(std::iter::once(measure_text_width(h)))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

// Amounts sit flush right so rupee columns line up.
fn layout_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| {
            let align = if cell.starts_with('₹') || cell.parse::<i64>().is_ok() {
                Alignment::Right
            } else {
                Alignment::Left
            };
            pad_str(cell, width, align, None).into_owned()
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Sale price, followed by the struck-through list price when discounted.
pub fn price_with_original(price: Money, original: Option<Money>) -> String {
    let price = style(price.display()).green().bold();
    match original {
        Some(original) => format!("{} {}", price, style(original.display()).dim().strikethrough()),
        None => price.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_widths_count_rupee_sign_once() {
        let rows = vec![row(&["Triphala Churna", "₹1,499"]), row(&["Neem", "₹99"])];
        assert_eq!(column_widths(&["ITEM", "PRICE"], &rows), vec![15, 6]);
    }

    #[test]
    fn test_amounts_align_right() {
        let widths = [6, 6];
        assert_eq!(layout_row(&row(&["Neem", "₹99"]), &widths), "Neem       ₹99");
        assert_eq!(layout_row(&row(&["Tulsi", "3"]), &widths), "Tulsi        3");
    }

    #[test]
    fn test_price_with_original_text() {
        console::set_colors_enabled(false);
        assert_eq!(price_with_original(Money::inr(299), None), "₹299");
        assert_eq!(
            price_with_original(Money::inr(299), Some(Money::inr(399))),
            "₹299 ₹399"
        );
    }
}
