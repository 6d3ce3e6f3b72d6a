use std::{
    fs::{File, OpenOptions},
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use anyhow::Context;
use log::debug;

use crate::metadata::PostRecord;

pub fn load_records(records_path: &Path) -> anyhow::Result<Vec<PostRecord>> {
    let fd = File::open(records_path)
        .with_context(|| format!("Records file({records_path:?}) could not be opened"))?;
    let reader = BufReader::new(fd);
    let records: Vec<PostRecord> = serde_json::from_reader(reader)
        .with_context(|| format!("while reading records from {records_path:?}"))?;
    debug!("Loaded {} records from {records_path:?}", records.len());
    Ok(records)
}

pub fn save_records(records_path: &Path, records: &[PostRecord]) -> anyhow::Result<()> {
    let fd = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(records_path)
        .with_context(|| format!("while opening {records_path:?}"))?;
    let mut writer = BufWriter::new(fd);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn record(title: &str) -> PostRecord {
        PostRecord {
            title: title.to_string(),
            description: format!("About {title}"),
            file_name: format!("{}.html", title.to_lowercase()),
            output_path: PathBuf::from("site/blog").join(format!("{}.html", title.to_lowercase())),
        }
    }

    #[test]
    fn test_saved_file_is_a_json_array_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");
        save_records(&path, &[record("Second"), record("First")]).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let array = raw.as_array().unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array[0]["title"], "Second");
        assert_eq!(array[0]["file_name"], "second.html");
        assert_eq!(array[0]["output_path"], "site/blog/second.html");
        assert_eq!(array[1]["description"], "About First");

        let loaded = load_records(&path).unwrap();
        assert_eq!(loaded, vec![record("Second"), record("First")]);
    }

    #[test]
    fn test_overwrite_truncates_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");
        save_records(&path, &[record("One"), record("Two"), record("Three")]).unwrap();
        save_records(&path, &[record("Only")]).unwrap();

        assert_eq!(load_records(&path).unwrap(), vec![record("Only")]);
    }

    #[test]
    fn test_missing_records_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_records(&dir.path().join("nope.json")).is_err());
    }
}
