//! Activity type management commands.

use std::io::Write;

use anyhow::Result;

use act_store::Store;

/// Lists all activity types.
pub fn list<W: Write>(writer: &mut W, store: &Store, json: bool) -> Result<()> {
    let types = store.types().list()?;
    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&types)?)?;
        return Ok(());
    }
    if types.is_empty() {
        writeln!(writer, "No activity types defined.")?;
        return Ok(());
    }
    for ty in types {
        writeln!(writer, "{}  {}/{}", ty.id(), ty.category(), ty.name())?;
    }
    Ok(())
}

/// Defines a new activity type.
pub fn add<W: Write>(
    writer: &mut W,
    store: &Store,
    category: &str,
    name: &str,
    json: bool,
) -> Result<()> {
    let created = store.types().create(category, name)?;
    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&created)?)?;
    } else {
        writeln!(
            writer,
            "Added {}/{} ({})",
            created.category(),
            created.name(),
            created.id()
        )?;
    }
    Ok(())
}

/// Renames an existing activity type.
pub fn update<W: Write>(
    writer: &mut W,
    store: &Store,
    id: &str,
    category: &str,
    name: &str,
    json: bool,
) -> Result<()> {
    let updated = store.types().update(id, category, name)?;
    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&updated)?)?;
    } else {
        writeln!(
            writer,
            "Updated {}/{} ({})",
            updated.category(),
            updated.name(),
            updated.id()
        )?;
    }
    Ok(())
}

/// Deletes an activity type.
pub fn remove<W: Write>(writer: &mut W, store: &Store, id: &str) -> Result<()> {
    store.types().delete(id)?;
    writeln!(writer, "Removed {id}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    fn test_store() -> (tempfile::TempDir, Store) {
        let temp = tempfile::tempdir().unwrap();
        let store = Store::open(temp.path()).unwrap();
        (temp, store)
    }

    #[test]
    fn list_reports_empty_registry() {
        let (_temp, store) = test_store();
        let mut output = Vec::new();
        list(&mut output, &store, false).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_snapshot!(output, @"No activity types defined.");
    }

    #[test]
    fn add_then_list_shows_the_type() {
        let (_temp, store) = test_store();
        let mut output = Vec::new();
        add(&mut output, &store, "Sports", "Run", false).unwrap();
        list(&mut output, &store, false).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Added Sports/Run"));
        assert!(output.contains("Sports/Run"));
    }

    #[test]
    fn add_json_prints_the_wire_shape() {
        let (_temp, store) = test_store();
        let mut output = Vec::new();
        add(&mut output, &store, "Sports", "Run", true).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed["activity_category"], "Sports");
        assert_eq!(parsed["activity_name"], "Run");
        assert!(parsed["id"].is_string());
    }

    #[test]
    fn duplicate_add_surfaces_the_registry_error() {
        let (_temp, store) = test_store();
        let mut output = Vec::new();
        add(&mut output, &store, "Sports", "Run", false).unwrap();

        let error = add(&mut output, &store, " sports ", "RUN", false).unwrap_err();
        assert!(error.to_string().contains("already exists"));
    }

    #[test]
    fn remove_then_list_is_empty_again() {
        let (_temp, store) = test_store();
        let created = store.types().create("Sports", "Run").unwrap();

        let mut output = Vec::new();
        remove(&mut output, &store, created.id()).unwrap();
        assert!(store.types().list().unwrap().is_empty());
    }
}
