//! Start, end, and inspect activity records.

use std::io::Write;

use anyhow::Result;

use act_core::{ActivityRecord, timestamp};
use act_store::Store;

use super::util::format_duration;

/// Starts a new activity.
pub fn start<W: Write>(
    writer: &mut W,
    store: &Store,
    category: &str,
    name: &str,
    json: bool,
) -> Result<()> {
    let record = store.activities().start(category, name)?;
    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&record)?)?;
    } else {
        writeln!(
            writer,
            "Started {}/{} at {} ({})",
            record.category(),
            record.name(),
            timestamp::format(record.start_time()),
            record.id()
        )?;
    }
    Ok(())
}

/// Ends the activity with the given id.
pub fn end<W: Write>(writer: &mut W, store: &Store, id: &str, json: bool) -> Result<()> {
    let record = store.activities().end(id)?;
    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&record)?)?;
    } else {
        let duration = record.closure().map_or(0, |closure| closure.duration_seconds);
        writeln!(
            writer,
            "Ended {}/{} after {} ({})",
            record.category(),
            record.name(),
            format_duration(duration),
            record.id()
        )?;
    }
    Ok(())
}

/// Shows the activity currently in progress.
pub fn active<W: Write>(writer: &mut W, store: &Store, json: bool) -> Result<()> {
    let record = store.activities().active()?;
    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&record)?)?;
        return Ok(());
    }
    match record {
        Some(record) => writeln!(
            writer,
            "In progress: {}/{} since {} ({})",
            record.category(),
            record.name(),
            timestamp::format(record.start_time()),
            record.id()
        )?,
        None => writeln!(writer, "No activity in progress.")?,
    }
    Ok(())
}

/// Lists all recorded activities in insertion order.
pub fn list<W: Write>(writer: &mut W, store: &Store, json: bool) -> Result<()> {
    let records = store.activities().list()?;
    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&records)?)?;
        return Ok(());
    }
    if records.is_empty() {
        writeln!(writer, "No activities recorded.")?;
        return Ok(());
    }
    for record in records {
        writeln!(writer, "{}", render_line(&record))?;
    }
    Ok(())
}

fn render_line(record: &ActivityRecord) -> String {
    let state = match record.closure() {
        Some(closure) => format_duration(closure.duration_seconds),
        None => "open".to_string(),
    };
    format!(
        "{}  {}  {}/{}  {}",
        record.id(),
        timestamp::format(record.start_time()),
        record.category(),
        record.name(),
        state
    )
}
