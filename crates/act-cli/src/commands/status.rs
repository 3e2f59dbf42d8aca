//! Status command showing storage paths and record counts.

use std::io::Write;

use anyhow::Result;

use act_store::Store;

pub fn run<W: Write>(writer: &mut W, store: &Store) -> Result<()> {
    let types = store.types().list()?;
    let records = store.activities().list()?;
    let open = records.iter().filter(|record| record.is_open()).count();

    writeln!(writer, "Activity tracker status")?;
    writeln!(writer, "Types document:      {}", store.types().path().display())?;
    writeln!(
        writer,
        "Activities document: {}",
        store.activities().path().display()
    )?;
    writeln!(writer, "Activity types: {}", types.len())?;
    writeln!(writer, "Activities: {} ({} open)", records.len(), open)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    #[test]
    fn status_reports_paths_and_counts() {
        let temp = tempfile::tempdir().unwrap();
        let store = Store::open(temp.path()).unwrap();
        store.types().create("Sports", "Run").unwrap();
        store.activities().start("sports", "run").unwrap();

        let mut output = Vec::new();
        run(&mut output, &store).unwrap();

        let output = String::from_utf8(output).unwrap();
        let output = output.replace(&temp.path().display().to_string(), "[DATA]");
        assert_snapshot!(output, @r"
        Activity tracker status
        Types document:      [DATA]/activity_types.json
        Activities document: [DATA]/activities.json
        Activity types: 1
        Activities: 1 (1 open)
        ");
    }

    #[test]
    fn status_counts_closed_records() {
        let temp = tempfile::tempdir().unwrap();
        let store = Store::open(temp.path()).unwrap();
        let record = store.activities().start("sports", "run").unwrap();
        store.activities().end(record.id()).unwrap();

        let mut output = Vec::new();
        run(&mut output, &store).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Activities: 1 (0 open)"));
    }
}
