//! JSON output formatting for reports.

use std::path::Path;

use chrono::Utc;
use serde::Serialize;

/// Wrap report data with its name, source database and generation time.
pub fn envelope<T: Serialize>(
    report: &str,
    database: &Path,
    data: &T,
) -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::json!({
        "report": report,
        "database": database.display().to_string(),
        "generated_at": Utc::now().to_rfc3339(),
        "data": serde_json::to_value(data)?,
    }))
}

pub fn print_json(value: &serde_json::Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_fields() {
        let value = envelope(
            "income_statement",
            Path::new("/data/accounting.db"),
            &serde_json::Value::Null,
        )
        .unwrap();
        assert_eq!(value["report"], "income_statement");
        assert_eq!(value["database"], "/data/accounting.db");
        assert!(value["data"].is_null());
        let generated = value["generated_at"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(generated).is_ok());
    }
}
