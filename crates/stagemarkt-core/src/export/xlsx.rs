//! Excel export

use std::path::Path;

use rust_xlsxwriter::{Format, FormatAlign, Workbook, Worksheet};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use super::column::{Column, Table, build_table, is_empty, non_empty_fields};
use crate::error::{Result, StagemarktError};

/// Writes records to a single worksheet
///
/// The header row is bold and frozen. Numbers and booleans become typed
/// cells; arrays and objects are written as compact JSON text.
///
/// # Example
/// ```no_run
/// # fn example(internships: &[stagemarkt_core::Internship]) -> stagemarkt_core::Result<()> {
/// use stagemarkt_core::export::{Column, XlsxExporter};
///
/// let columns = vec![Column::path("title"), Column::new("Bedrijf", "organisation.name")];
/// XlsxExporter::new()
///     .title("Stages Zwolle")
///     .sheet_name("Stages")
///     .export("stages_export.xlsx", internships, &columns)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct XlsxExporter {
    include_empty: bool,
    title: Option<String>,
    sheet_name: Option<String>,
}

impl Default for XlsxExporter {
    fn default() -> Self {
        Self {
            include_empty: true,
            title: None,
            sheet_name: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Cell {
    Blank,
    Number(f64),
    Bool(bool),
    Text(String),
}

impl XlsxExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write empty values as they are (default) or leave those cells blank
    pub fn include_empty(mut self, include: bool) -> Self {
        self.include_empty = include;
        self
    }

    /// Bold title above the header, merged across all columns
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn sheet_name(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = Some(name.into());
        self
    }

    /// Write records to a file
    ///
    /// With no records the file is not created and 0 is returned.
    ///
    /// # Errors
    /// - `JsonError` if a record cannot be serialized
    /// - `XlsxError` if the workbook cannot be built or saved
    pub fn export<T: Serialize>(
        &self,
        path: impl AsRef<Path>,
        records: &[T],
        columns: &[Column<T>],
    ) -> Result<usize> {
        let path = path.as_ref();
        if records.is_empty() {
            debug!(path = %path.display(), "no records, Excel file not written");
            return Ok(0);
        }
        let table = build_table(records, columns)?;
        let mut workbook = self.workbook(&table)?;
        workbook.save(path)?;
        info!(path = %path.display(), rows = table.rows.len(), "exported Excel workbook");
        Ok(table.rows.len())
    }

    /// Workbook bytes for records, empty for an empty record list
    pub fn to_buffer<T: Serialize>(&self, records: &[T], columns: &[Column<T>]) -> Result<Vec<u8>> {
        if records.is_empty() {
            return Ok(Vec::new());
        }
        let table = build_table(records, columns)?;
        Ok(self.workbook(&table)?.save_to_buffer()?)
    }

    fn workbook(&self, table: &Table) -> Result<Workbook> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        if let Some(name) = &self.sheet_name {
            worksheet.set_name(name)?;
        }

        let header_format = Format::new().set_bold();
        let title_format = Format::new().set_bold().set_align(FormatAlign::Center);

        let mut row = 0;
        if let Some(title) = &self.title {
            let last_col = column_index(table.headers.len().saturating_sub(1))?;
            if last_col > 0 {
                worksheet.merge_range(0, 0, 0, last_col, title, &title_format)?;
            } else {
                worksheet.write_string_with_format(0, 0, title, &title_format)?;
            }
            row += 1;
        }

        for (index, header) in table.headers.iter().enumerate() {
            worksheet.write_string_with_format(row, column_index(index)?, header, &header_format)?;
        }
        row += 1;
        worksheet.set_freeze_panes(row, 0)?;

        for values in &table.rows {
            for (index, value) in values.iter().enumerate() {
                write_cell(worksheet, row, column_index(index)?, self.cell(value))?;
            }
            row += 1;
        }

        Ok(workbook)
    }

    fn cell(&self, value: &Value) -> Cell {
        if !self.include_empty && is_empty(value) {
            return Cell::Blank;
        }
        match value {
            Value::Null => Cell::Blank,
            Value::Bool(b) => Cell::Bool(*b),
            Value::Number(n) => match n.as_f64() {
                Some(number) => Cell::Number(number),
                None => Cell::Text(n.to_string()),
            },
            Value::String(s) => Cell::Text(s.clone()),
            Value::Object(fields) if !self.include_empty => {
                Cell::Text(Value::Object(non_empty_fields(fields)).to_string())
            }
            other => Cell::Text(other.to_string()),
        }
    }
}

fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, cell: Cell) -> Result<()> {
    match cell {
        Cell::Blank => {}
        Cell::Number(number) => {
            worksheet.write_number(row, col, number)?;
        }
        Cell::Bool(b) => {
            worksheet.write_boolean(row, col, b)?;
        }
        Cell::Text(text) => {
            worksheet.write_string(row, col, text)?;
        }
    }
    Ok(())
}

fn column_index(index: usize) -> Result<u16> {
    u16::try_from(index)
        .map_err(|_| StagemarktError::InvalidInput(format!("too many columns for a worksheet: {}", index + 1)))
}
