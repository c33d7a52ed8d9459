//! JSON export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};
use tracing::info;

use super::column::{Column, build_table, is_empty};
use crate::error::{Result, StagemarktError};

/// Writes records as a JSON array of objects
///
/// Each object holds one key per column label. With a root key the array
/// is wrapped as `{"<root_key>": [...]}`.
#[derive(Debug, Clone)]
pub struct JsonExporter {
    include_empty: bool,
    indent: Option<usize>,
    root_key: Option<String>,
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self {
            include_empty: true,
            indent: Some(4),
            root_key: None,
        }
    }
}

impl JsonExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep empty values (default) or prune them, recursively
    pub fn include_empty(mut self, include: bool) -> Self {
        self.include_empty = include;
        self
    }

    /// Spaces per level, `None` for compact output (default: 4)
    pub fn indent(mut self, indent: Option<usize>) -> Self {
        self.indent = indent;
        self
    }

    pub fn root_key(mut self, key: impl Into<String>) -> Self {
        self.root_key = Some(key.into());
        self
    }

    /// Build the JSON document without writing it
    ///
    /// # Errors
    /// `JsonError` if a record cannot be serialized
    pub fn to_value<T: Serialize>(&self, records: &[T], columns: &[Column<T>]) -> Result<Value> {
        let table = build_table(records, columns)?;

        let objects = table
            .rows
            .into_iter()
            .map(|row| {
                let mut object = Map::new();
                for (label, value) in table.headers.iter().zip(row) {
                    if self.include_empty {
                        object.insert(label.clone(), value);
                    } else if let Some(value) = prune(value) {
                        object.insert(label.clone(), value);
                    }
                }
                Value::Object(object)
            })
            .collect();

        let array = Value::Array(objects);
        Ok(match &self.root_key {
            Some(key) => {
                let mut root = Map::new();
                root.insert(key.clone(), array);
                Value::Object(root)
            }
            None => array,
        })
    }

    pub fn to_string<T: Serialize>(&self, records: &[T], columns: &[Column<T>]) -> Result<String> {
        let mut buffer = Vec::new();
        self.write(&mut buffer, records, columns)?;
        String::from_utf8(buffer).map_err(|e| StagemarktError::ParseError(e.to_string()))
    }

    /// Write records to any writer, returning the number of records
    pub fn write<T: Serialize, W: Write>(
        &self,
        mut writer: W,
        records: &[T],
        columns: &[Column<T>],
    ) -> Result<usize> {
        let document = self.to_value(records, columns)?;
        match self.indent {
            Some(width) => {
                let indent = " ".repeat(width);
                let formatter = PrettyFormatter::with_indent(indent.as_bytes());
                let mut serializer = Serializer::with_formatter(&mut writer, formatter);
                document.serialize(&mut serializer)?;
            }
            None => serde_json::to_writer(&mut writer, &document)?,
        }
        writer.flush()?;
        Ok(records.len())
    }

    /// Write records to a file
    ///
    /// An empty record list still produces a file holding `[]`.
    pub fn export<T: Serialize>(
        &self,
        path: impl AsRef<Path>,
        records: &[T],
        columns: &[Column<T>],
    ) -> Result<usize> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let written = self.write(BufWriter::new(file), records, columns)?;
        info!(path = %path.display(), records = written, "exported JSON");
        Ok(written)
    }
}

/// Drop empty values, descending into objects and arrays
fn prune(value: Value) -> Option<Value> {
    let value = match value {
        Value::Object(fields) => Value::Object(
            fields
                .into_iter()
                .filter_map(|(k, v)| prune(v).map(|v| (k, v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().filter_map(prune).collect()),
        other => other,
    };
    (!is_empty(&value)).then_some(value)
}
