//! Output formatting utilities.

use colored::{Color, Colorize};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use bondtoken_core::StatusTone;

use crate::cli::OutputFormat;

/// Formats and prints rows based on the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(data),
        OutputFormat::Csv => print_csv(data),
    }
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{table}");
    Ok(())
}

/// Prints any serializable value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as CSV.
fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Rounds half away from zero to two decimals.
fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a rate held in percent, e.g. `4.75%`.
pub fn format_percent(value: Decimal) -> String {
    format!("{:.2}%", round_cents(value))
}

/// Formats a currency amount with two decimals.
pub fn format_amount(value: &Decimal) -> String {
    format!("{:.2}", round_cents(*value))
}

/// Terminal color of a status tone.
pub fn tone_color(tone: StatusTone) -> Color {
    match tone {
        StatusTone::Success => Color::Green,
        StatusTone::Warning => Color::Yellow,
        StatusTone::Danger => Color::Red,
        StatusTone::Info => Color::Blue,
        StatusTone::Highlight => Color::Magenta,
        StatusTone::Brand => Color::Cyan,
        StatusTone::Neutral => Color::BrightBlack,
    }
}

/// Colors `text` with its tone when writing a table; other formats stay plain.
pub fn paint(text: &str, tone: StatusTone, format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => text.color(tone_color(tone)).to_string(),
        OutputFormat::Json | OutputFormat::Csv => text.to_string(),
    }
}

/// Prints an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Field")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(dec!(4.75)), "4.75%");
        assert_eq!(format_percent(dec!(3.875)), "3.88%");
        assert_eq!(format_percent(dec!(3.865)), "3.87%");
        assert_eq!(format_percent(dec!(4)), "4.00%");
    }

    #[test]
    fn test_format_amount_rounds() {
        assert_eq!(format_amount(&dec!(142857.142857)), "142857.14");
        assert_eq!(format_amount(&dec!(0.005)), "0.01");
        assert_eq!(format_amount(&dec!(1000)), "1000.00");
    }

    #[test]
    fn test_tone_colors_are_distinct() {
        let tones = [
            StatusTone::Success,
            StatusTone::Warning,
            StatusTone::Danger,
            StatusTone::Info,
            StatusTone::Highlight,
            StatusTone::Brand,
            StatusTone::Neutral,
        ];
        for (i, a) in tones.iter().enumerate() {
            for b in &tones[i + 1..] {
                assert_ne!(tone_color(*a), tone_color(*b), "{a:?} and {b:?}");
            }
        }
    }

    #[test]
    fn test_paint_plain_outside_tables() {
        assert_eq!(paint("Pending", StatusTone::Warning, OutputFormat::Csv), "Pending");
        assert_eq!(paint("Pending", StatusTone::Warning, OutputFormat::Json), "Pending");
    }
}
