//! CSV export

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use super::column::{Column, Table, build_table, is_empty, non_empty_fields};
use crate::error::Result;

/// Writes records as one CSV row each
///
/// # Example
/// ```no_run
/// # fn example(internships: &[stagemarkt_core::Internship]) -> stagemarkt_core::Result<()> {
/// use stagemarkt_core::export::{Column, CsvExporter};
///
/// let columns = vec![Column::path("title"), Column::new("Bedrijf", "organisation.name")];
/// let written = CsvExporter::new()
///     .delimiter(b';')
///     .export("stages.csv", internships, &columns)?;
/// println!("{} rijen", written);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CsvExporter {
    include_empty: bool,
    delimiter: u8,
    title: Option<String>,
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self {
            include_empty: true,
            delimiter: b',',
            title: None,
        }
    }
}

impl CsvExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write empty values as they are (default) or as blank cells
    ///
    /// Empty means null, `false`, zero, `""`, `[]` or `{}`. Inside
    /// multi-path cells the empty entries are dropped; a row always keeps
    /// one cell per column.
    pub fn include_empty(mut self, include: bool) -> Self {
        self.include_empty = include;
        self
    }

    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Single-cell row written above the header
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Write records to any writer
    ///
    /// Returns the number of data rows written. Nothing at all is written
    /// for an empty record list.
    ///
    /// # Errors
    /// - `JsonError` if a record cannot be serialized
    /// - `CsvError`/`IoError` if writing fails
    pub fn write<T: Serialize, W: Write>(
        &self,
        writer: W,
        records: &[T],
        columns: &[Column<T>],
    ) -> Result<usize> {
        if records.is_empty() {
            return Ok(0);
        }
        let table = build_table(records, columns)?;
        self.write_table(writer, &table)
    }

    /// Write records to a file
    ///
    /// With no records the file is not created and 0 is returned.
    pub fn export<T: Serialize>(
        &self,
        path: impl AsRef<Path>,
        records: &[T],
        columns: &[Column<T>],
    ) -> Result<usize> {
        let path = path.as_ref();
        if records.is_empty() {
            debug!(path = %path.display(), "no records, CSV file not written");
            return Ok(0);
        }
        let file = File::create(path)?;
        let written = self.write(file, records, columns)?;
        info!(path = %path.display(), rows = written, "exported CSV");
        Ok(written)
    }

    fn write_table<W: Write>(&self, writer: W, table: &Table) -> Result<usize> {
        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .from_writer(writer);

        if let Some(title) = &self.title {
            writer.write_record([title.as_str()])?;
        }
        writer.write_record(&table.headers)?;

        for row in &table.rows {
            let cells: Vec<String> = row.iter().map(|value| self.cell(value)).collect();
            writer.write_record(&cells)?;
        }
        writer.flush()?;

        Ok(table.rows.len())
    }

    fn cell(&self, value: &Value) -> String {
        if !self.include_empty && is_empty(value) {
            return String::new();
        }
        match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null => String::new(),
            Value::Object(fields) if !self.include_empty => {
                let kept = non_empty_fields(fields);
                if kept.is_empty() {
                    String::new()
                } else {
                    Value::Object(kept).to_string()
                }
            }
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Row {
        name: String,
        city: Option<String>,
        days: u32,
        tags: Vec<String>,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                name: "Acme".to_string(),
                city: Some("Zwolle".to_string()),
                days: 4,
                tags: vec!["lunch".to_string()],
            },
            Row {
                name: "Bakkerij \"De Korf\"".to_string(),
                city: None,
                days: 0,
                tags: vec![],
            },
        ]
    }

    fn write_string(exporter: &CsvExporter, records: &[Row], columns: &[Column<Row>]) -> (usize, String) {
        let mut buffer = Vec::new();
        let written = exporter.write(&mut buffer, records, columns).unwrap();
        (written, String::from_utf8(buffer).unwrap())
    }

    #[test]
    fn test_header_and_rows() {
        let columns = vec![Column::path("name"), Column::new("Plaats", "city"), Column::path("days")];
        let (written, text) = write_string(&CsvExporter::new(), &rows(), &columns);
        assert_eq!(written, 2);
        assert_eq!(
            text,
            "name,Plaats,days\nAcme,Zwolle,4\n\"Bakkerij \"\"De Korf\"\"\",,0\n"
        );
    }

    #[test]
    fn test_inferred_columns_and_nested_values() {
        let (_, text) = write_string(&CsvExporter::new(), &rows(), &[]);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("name,city,days,tags"));
        assert_eq!(lines.next(), Some("Acme,Zwolle,4,\"[\"\"lunch\"\"]\""));
        assert_eq!(lines.next(), Some("\"Bakkerij \"\"De Korf\"\"\",,0,[]"));
    }

    #[test]
    fn test_delimiter_and_title() {
        let exporter = CsvExporter::new().delimiter(b';').title("Stages Zwolle");
        let (_, text) = write_string(&exporter, &rows()[..1], &[Column::path("name"), Column::path("days")]);
        assert_eq!(text, "Stages Zwolle\nname;days\nAcme;4\n");
    }

    #[test]
    fn test_exclude_empty_blanks_cells() {
        let exporter = CsvExporter::new().include_empty(false);
        assert_eq!(exporter.cell(&json!([])), "");
        assert_eq!(exporter.cell(&json!({"a": null, "b": "x"})), "{\"b\":\"x\"}");
        assert_eq!(exporter.cell(&json!({"a": ""})), "");
        assert_eq!(exporter.cell(&json!(0)), "");
        assert_eq!(exporter.cell(&json!(false)), "");
        assert_eq!(exporter.cell(&json!(3)), "3");
        assert_eq!(exporter.cell(&json!(true)), "true");
        assert_eq!(CsvExporter::new().cell(&json!(0)), "0");
        assert_eq!(CsvExporter::new().cell(&json!(false)), "false");
        assert_eq!(CsvExporter::new().cell(&json!({})), "{}");
    }

    #[derive(Serialize)]
    struct Flags {
        name: String,
        days: u32,
        often: bool,
    }

    #[test]
    fn test_exclude_empty_matches_json_exporter() {
        let records = vec![Flags {
            name: "Acme".to_string(),
            days: 0,
            often: false,
        }];

        let mut buffer = Vec::new();
        CsvExporter::new()
            .include_empty(false)
            .write(&mut buffer, &records, &[])
            .unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "name,days,often\nAcme,,\n");

        let json = crate::export::JsonExporter::new()
            .include_empty(false)
            .to_value(&records, &[])
            .unwrap();
        assert_eq!(json, json!([{"name": "Acme"}]));
    }

    #[test]
    fn test_empty_records_write_nothing() {
        let (written, text) = write_string(&CsvExporter::new(), &[], &[Column::path("name")]);
        assert_eq!(written, 0);
        assert!(text.is_empty());
    }

    #[test]
    fn test_export_empty_records_creates_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leeg.csv");
        let written = CsvExporter::new().export::<Row>(&path, &[], &[]).unwrap();
        assert_eq!(written, 0);
        assert!(!path.exists());
    }
}
