//! Export of search results to CSV, JSON and Excel files
//!
//! Columns pick values out of records by dotted path, e.g.
//! `organisation.address.city`. Without columns every top-level field
//! becomes a column.

mod column;
mod csv;
mod json;
mod xlsx;

use std::path::Path;

use serde::Serialize;

pub use self::column::{Column, Table, build_table, is_empty, resolve_path};
pub use self::csv::CsvExporter;
pub use self::json::JsonExporter;
pub use self::xlsx::XlsxExporter;

use crate::error::{Result, StagemarktError};

/// Output formats, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    /// Format for an extension, with or without leading dot
    ///
    /// # Errors
    /// `UnsupportedFormat` for anything but `csv`, `json` and `xlsx`
    pub fn from_extension(extension: &str) -> Result<Self> {
        let normalized = extension.trim_start_matches('.').to_ascii_lowercase();
        match normalized.as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "xlsx" => Ok(ExportFormat::Xlsx),
            _ => Err(StagemarktError::UnsupportedFormat(extension.to_string())),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| StagemarktError::UnsupportedFormat(path.display().to_string()))?;
        Self::from_extension(extension)
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

/// Export records to a file, picking the format from its extension
///
/// Default exporter settings apply. Returns the number of records written.
///
/// # Errors
/// - `UnsupportedFormat` if the extension is not `.csv`, `.json` or `.xlsx`
/// - `IoError`/`CsvError`/`JsonError`/`XlsxError` if writing fails
///
/// # Example
/// ```no_run
/// # async fn example() -> stagemarkt_core::Result<()> {
/// use stagemarkt_core::export::{Column, export};
/// use stagemarkt_core::{InternshipQuery, Level, StagemarktClient};
///
/// let client = StagemarktClient::new()?;
/// let query = InternshipQuery::new(Level::Mbo4, "Utrecht", 25998).limit(Some(40));
/// let internships = client.search_internships(&query).await?;
/// let columns = vec![Column::path("title"), Column::path("organisation.name")];
/// export("stages.json", &internships, &columns)?;
/// # Ok(())
/// # }
/// ```
pub fn export<T: Serialize>(
    path: impl AsRef<Path>,
    records: &[T],
    columns: &[Column<T>],
) -> Result<usize> {
    let path = path.as_ref();
    match ExportFormat::from_path(path)? {
        ExportFormat::Csv => CsvExporter::new().export(path, records, columns),
        ExportFormat::Json => JsonExporter::new().export(path, records, columns),
        ExportFormat::Xlsx => XlsxExporter::new().export(path, records, columns),
    }
}

pub fn to_csv<T: Serialize>(
    path: impl AsRef<Path>,
    records: &[T],
    columns: &[Column<T>],
) -> Result<usize> {
    CsvExporter::new().export(path, records, columns)
}

pub fn to_json<T: Serialize>(
    path: impl AsRef<Path>,
    records: &[T],
    columns: &[Column<T>],
) -> Result<usize> {
    JsonExporter::new().export(path, records, columns)
}

pub fn to_xlsx<T: Serialize>(
    path: impl AsRef<Path>,
    records: &[T],
    columns: &[Column<T>],
) -> Result<usize> {
    XlsxExporter::new().export(path, records, columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ExportFormat::from_extension("csv").unwrap(), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_extension(".JSON").unwrap(), ExportFormat::Json);
        assert_eq!(ExportFormat::from_extension("Xlsx").unwrap(), ExportFormat::Xlsx);
        assert!(matches!(
            ExportFormat::from_extension("pdf"),
            Err(StagemarktError::UnsupportedFormat(ext)) if ext == "pdf"
        ));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ExportFormat::from_path(Path::new("out/stages.csv")).unwrap(),
            ExportFormat::Csv
        );
        assert!(ExportFormat::from_path(Path::new("stages")).is_err());
        assert_eq!(
            ExportFormat::from_path(Path::new("stages_export.xlsx")).unwrap(),
            ExportFormat::Xlsx
        );
        assert_eq!(ExportFormat::Json.extension(), "json");
        assert_eq!(ExportFormat::Xlsx.extension(), "xlsx");
    }

    #[test]
    fn test_export_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stages.txt");
        let result = export(&path, &[1u32, 2], &[]);
        assert!(matches!(result, Err(StagemarktError::UnsupportedFormat(_))));
        assert!(!path.exists());
    }
}
