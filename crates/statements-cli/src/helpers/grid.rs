//! Manual-entry grid files.
//!
//! A grid is either CSV (header row with the grid column names, blank cell
//! means missing) or a JSON array of objects (null or absent means missing).
//! Rows are passed through as-is; the core decides which rows are usable.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::Context;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;

use statements_core::sanitize::{AccountInput, EntryInput};

use crate::cli::Grid;
use crate::errors::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GridFormat {
    Csv,
    Json,
}

impl GridFormat {
    fn from_path(path: &Path) -> anyhow::Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match extension.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            _ => Err(CliError::invalid_input(format!(
                "Unsupported grid file {}\nHint: Use a .csv or .json file.",
                path.display()
            ))
            .into()),
        }
    }
}

pub fn read_account_grid(path: &Path) -> anyhow::Result<Vec<AccountInput>> {
    read_grid(path)
}

pub fn read_entry_grid(path: &Path) -> anyhow::Result<Vec<EntryInput>> {
    read_grid(path)
}

fn read_grid<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
    let format = GridFormat::from_path(path)?;
    let file = File::open(path).map_err(|e| {
        CliError::not_found(
            format!("Cannot open grid file {}: {}", path.display(), e),
            "Check the path, or export a starting grid with `statements template`.",
        )
    })?;
    let rows = match format {
        GridFormat::Csv => parse_csv(file),
        GridFormat::Json => parse_json(file),
    };
    rows.map_err(|e| {
        CliError::invalid_input(format!(
            "Failed to read grid file {}: {:#}",
            path.display(),
            e
        ))
        .into()
    })
}

fn parse_csv<T: DeserializeOwned, R: Read>(reader: R) -> anyhow::Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (index, result) in reader.deserialize().enumerate() {
        let row: T = result.with_context(|| format!("Invalid row {}", index + 1))?;
        rows.push(row);
    }
    Ok(rows)
}

fn parse_json<T: DeserializeOwned, R: Read>(reader: R) -> anyhow::Result<Vec<T>> {
    serde_json::from_reader(reader).context("Expected a JSON array of row objects")
}

/// Default accounts grid offered for manual entry.
fn template_accounts() -> Vec<AccountInput> {
    vec![
        AccountInput::new(1, "Cash", "Asset"),
        AccountInput::new(2, "Accounts Receivable", "Asset"),
        AccountInput::new(3, "Accounts Payable", "Liability"),
        AccountInput::new(4, "Owner Capital", "Equity"),
        AccountInput::new(5, "Service Revenue", "Revenue"),
        AccountInput::new(6, "Rent Expense", "Expense"),
    ]
}

/// Default journal grid: owner investment and a cash sale, both balanced.
fn template_entries() -> Vec<EntryInput> {
    vec![
        EntryInput::new(1, 1, "2025-01-01", Decimal::from(50_000), Decimal::ZERO),
        EntryInput::new(2, 4, "2025-01-01", Decimal::ZERO, Decimal::from(50_000)),
        EntryInput::new(3, 1, "2025-01-15", Decimal::from(18_000), Decimal::ZERO),
        EntryInput::new(4, 5, "2025-01-15", Decimal::ZERO, Decimal::from(18_000)),
    ]
}

/// Write the default grid as CSV.
pub fn write_template<W: Write>(grid: Grid, writer: W) -> anyhow::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    match grid {
        Grid::Accounts => {
            for row in template_accounts() {
                csv_writer.serialize(row)?;
            }
        }
        Grid::Entries => {
            for row in template_entries() {
                csv_writer.serialize(row)?;
            }
        }
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use statements_core::sanitize::{sanitize_accounts, sanitize_entries};

    #[test]
    fn test_csv_blank_cells_are_missing() {
        let data = "account_id,account_name,account_type\n1,Cash,Asset\n2,,Liability\n";
        let rows: Vec<AccountInput> = parse_csv(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].account_name, None);
        assert_eq!(sanitize_accounts(&rows).skipped, vec![1]);
    }

    #[test]
    fn test_csv_entries_with_missing_amounts_and_dates() {
        let data = "entry_id,account_id,entry_date,debit,credit\n1,1,,12.50,\n2,,2025-02-01,,3\n";
        let rows: Vec<EntryInput> = parse_csv(data.as_bytes()).unwrap();
        let sanitized = sanitize_entries(&rows);
        assert_eq!(sanitized.skipped, vec![1]);
        assert_eq!(sanitized.rows[0].debit, dec!(12.5));
        assert_eq!(sanitized.rows[0].credit, Decimal::ZERO);
        assert_eq!(sanitized.rows[0].entry_date, "2025-01-01");
    }

    #[test]
    fn test_csv_bad_number_is_an_error() {
        let data = "account_id,account_name,account_type\nabc,Cash,Asset\n";
        let result: anyhow::Result<Vec<AccountInput>> = parse_csv(data.as_bytes());
        assert!(result.is_err());
    }

    #[test]
    fn test_json_nulls_are_missing() {
        let data = r#"[{"entry_id": 1, "account_id": null, "debit": 5}]"#;
        let rows: Vec<EntryInput> = parse_json(data.as_bytes()).unwrap();
        assert_eq!(rows[0].account_id, None);
        assert_eq!(rows[0].debit, Some(dec!(5)));
    }

    #[test]
    fn test_unsupported_extension() {
        let err = GridFormat::from_path(Path::new("grid.xlsx")).unwrap_err();
        assert!(err.to_string().contains("Unsupported grid file"));
        assert_eq!(GridFormat::from_path(Path::new("A.CSV")).unwrap(), GridFormat::Csv);
    }

    #[test]
    fn test_templates_read_back_and_balance() {
        let mut accounts = Vec::new();
        write_template(Grid::Accounts, &mut accounts).unwrap();
        let accounts: Vec<AccountInput> = parse_csv(accounts.as_slice()).unwrap();
        assert_eq!(accounts.len(), 6);

        let mut entries = Vec::new();
        write_template(Grid::Entries, &mut entries).unwrap();
        let text = String::from_utf8(entries.clone()).unwrap();
        assert!(text.starts_with("entry_id,account_id,entry_date,debit,credit"));

        let entries: Vec<EntryInput> = parse_csv(entries.as_slice()).unwrap();
        let sanitized = sanitize_entries(&entries);
        let debit: Decimal = sanitized.rows.iter().map(|e| e.debit).sum();
        let credit: Decimal = sanitized.rows.iter().map(|e| e.credit).sum();
        assert_eq!(debit, credit);

        let ids: Vec<i64> = accounts.iter().filter_map(|a| a.account_id).collect();
        assert!(sanitized.rows.iter().all(|e| ids.contains(&e.account_id)));
    }
}
