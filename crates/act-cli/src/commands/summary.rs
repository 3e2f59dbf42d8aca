//! Summary command: per-day category totals.

use std::io::Write;

use anyhow::Result;

use act_core::summarize;
use act_store::Store;

use super::util::format_duration;

/// Aggregates finished activities into per-day category totals.
pub fn run<W: Write>(writer: &mut W, store: &Store, json: bool) -> Result<()> {
    let records = store.activities().list()?;
    let summary = summarize(&records);

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&summary)?)?;
        return Ok(());
    }
    if summary.dates.is_empty() {
        writeln!(writer, "No finished activities to summarize.")?;
        return Ok(());
    }
    for date in &summary.dates {
        writeln!(writer, "{date}")?;
        if let Some(categories) = summary.data.get(date) {
            for (category, seconds) in categories {
                writeln!(writer, "  {category}: {}", format_duration(*seconds))?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use act_core::timestamp;
    use insta::assert_snapshot;

    fn test_store() -> (tempfile::TempDir, Store) {
        let temp = tempfile::tempdir().unwrap();
        let store = Store::open(temp.path()).unwrap();
        (temp, store)
    }

    fn record(store: &Store, category: &str, start: &str, end: &str) {
        let started = store
            .activities()
            .start_at(category, "test", timestamp::parse(start).unwrap())
            .unwrap();
        store
            .activities()
            .end_at(started.id(), timestamp::parse(end).unwrap())
            .unwrap();
    }

    #[test]
    fn empty_log_has_nothing_to_summarize() {
        let (_temp, store) = test_store();
        let mut output = Vec::new();
        run(&mut output, &store, false).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_snapshot!(output, @"No finished activities to summarize.");
    }

    #[test]
    fn renders_days_with_category_totals() {
        let (_temp, store) = test_store();
        record(&store, "sports", "2025-11-03T10:00:00Z", "2025-11-03T11:30:00Z");
        record(&store, "study", "2025-11-04T09:00:00Z", "2025-11-04T09:45:00Z");

        let mut output = Vec::new();
        run(&mut output, &store, false).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_snapshot!(output, @r"
        2025-11-03
          sports: 1h 30m
        2025-11-04
          study: 45m 0s
        ");
    }

    #[test]
    fn json_output_matches_the_contract_shape() {
        let (_temp, store) = test_store();
        record(&store, "sports", "2025-11-03T10:00:00Z", "2025-11-03T11:30:00Z");
        record(&store, "sports", "2025-11-03T12:00:00Z", "2025-11-03T12:30:00Z");

        let mut output = Vec::new();
        run(&mut output, &store, true).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed["dates"], serde_json::json!(["2025-11-03"]));
        assert_eq!(parsed["data"]["2025-11-03"]["sports"], 7200);
    }

    #[test]
    fn open_records_are_left_out() {
        let (_temp, store) = test_store();
        store
            .activities()
            .start_at("sports", "run", timestamp::parse("2025-11-03T10:00:00Z").unwrap())
            .unwrap();

        let mut output = Vec::new();
        run(&mut output, &store, false).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("No finished activities"));
    }
}
