//! Column definitions and row building
//!
//! Records are serialized to JSON once; columns then read dotted paths
//! from that value.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;

type Transform<T> = Arc<dyn Fn(&T) -> Value + Send + Sync>;

enum Source<T> {
    /// One path gives its value, several give an object keyed by last segment
    Paths(Vec<String>),
    /// First path with a non-empty value
    Fallback(Vec<String>),
    Computed(Transform<T>),
}

/// One output column
///
/// # Example
/// ```
/// use stagemarkt_core::export::Column;
/// use stagemarkt_core::Internship;
///
/// let columns: Vec<Column<Internship>> = vec![
///     Column::path("title"),
///     Column::new("Bedrijf", "organisation.name"),
///     Column::new("Adres", "address.street").add("address.house_number").add("address.city"),
///     Column::new("Website", "organisation.website").fallback("organisation.email"),
///     Column::computed("Dagen", |i: &Internship| i.days_per_week.into()),
/// ];
/// assert_eq!(columns[0].label(), "title");
/// ```
pub struct Column<T> {
    label: String,
    source: Source<T>,
}

impl<T> Column<T> {
    /// Column labelled after the last segment of `path`
    pub fn path(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            label: last_segment(&path).to_string(),
            source: Source::Paths(vec![path]),
        }
    }

    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            source: Source::Paths(vec![path.into()]),
        }
    }

    /// Column whose value is computed from the record itself
    pub fn computed<F>(label: impl Into<String>, transform: F) -> Self
    where
        F: Fn(&T) -> Value + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            source: Source::Computed(Arc::new(transform)),
        }
    }

    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Add a path; the column then yields an object of all its paths
    ///
    /// On a fallback column the path joins the fallback chain instead.
    pub fn add(mut self, path: impl Into<String>) -> Self {
        self.source = match self.source {
            Source::Paths(mut paths) => {
                paths.push(path.into());
                Source::Paths(paths)
            }
            Source::Fallback(mut paths) => {
                paths.push(path.into());
                Source::Fallback(paths)
            }
            Source::Computed(_) => Source::Paths(vec![path.into()]),
        };
        self
    }

    /// Add a path to try when the previous ones are empty
    pub fn fallback(mut self, path: impl Into<String>) -> Self {
        self.source = match self.source {
            Source::Paths(mut paths) | Source::Fallback(mut paths) => {
                paths.push(path.into());
                Source::Fallback(paths)
            }
            Source::Computed(_) => Source::Fallback(vec![path.into()]),
        };
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Value of this column for one record
    ///
    /// `json` is the record serialized with [`serde_json::to_value`].
    pub fn value(&self, record: &T, json: &Value) -> Value {
        match &self.source {
            Source::Paths(paths) if paths.len() == 1 => resolve_path(json, &paths[0]),
            Source::Paths(paths) => {
                let mut object = Map::new();
                for path in paths {
                    object.insert(last_segment(path).to_string(), resolve_path(json, path));
                }
                Value::Object(object)
            }
            Source::Fallback(paths) => paths
                .iter()
                .map(|path| resolve_path(json, path))
                .find(|value| !is_empty(value))
                .unwrap_or(Value::Null),
            Source::Computed(transform) => transform(record),
        }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        let source = match &self.source {
            Source::Paths(paths) => Source::Paths(paths.clone()),
            Source::Fallback(paths) => Source::Fallback(paths.clone()),
            Source::Computed(transform) => Source::Computed(Arc::clone(transform)),
        };
        Self {
            label: self.label.clone(),
            source,
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match &self.source {
            Source::Paths(paths) => format!("paths {:?}", paths),
            Source::Fallback(paths) => format!("fallback {:?}", paths),
            Source::Computed(_) => "computed".to_string(),
        };
        f.debug_struct("Column")
            .field("label", &self.label)
            .field("source", &source)
            .finish()
    }
}

impl<T> From<&str> for Column<T> {
    fn from(path: &str) -> Self {
        Column::path(path)
    }
}

/// Header labels and cell values ready for a writer
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

/// Build a table from records
///
/// Without columns, the top-level fields of the first record become the
/// columns, in declaration order.
///
/// # Errors
/// `JsonError` if a record cannot be serialized
pub fn build_table<T: Serialize>(records: &[T], columns: &[Column<T>]) -> Result<Table> {
    let values = records
        .iter()
        .map(serde_json::to_value)
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let inferred;
    let columns = if columns.is_empty() {
        inferred = infer_columns(values.first());
        inferred.as_slice()
    } else {
        columns
    };

    let headers = columns.iter().map(|c| c.label().to_string()).collect();
    let rows = records
        .iter()
        .zip(&values)
        .map(|(record, json)| columns.iter().map(|c| c.value(record, json)).collect())
        .collect();

    Ok(Table { headers, rows })
}

fn infer_columns<T>(first: Option<&Value>) -> Vec<Column<T>> {
    match first {
        Some(Value::Object(fields)) => fields.keys().map(|k| Column::path(k.as_str())).collect(),
        Some(_) => vec![Column::path("").labeled("value")],
        None => Vec::new(),
    }
}

/// Follow a dotted path through objects and arrays
///
/// Numeric segments index into arrays. Missing segments give `null`; the
/// empty path gives the value itself.
pub fn resolve_path(value: &Value, path: &str) -> Value {
    if path.is_empty() {
        return value.clone();
    }
    let mut current = value;
    for segment in path.split('.') {
        let next = match current {
            Value::Object(fields) => fields.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        };
        match next {
            Some(value) => current = value,
            None => return Value::Null,
        }
    }
    current.clone()
}

/// `null`, `false`, zero, and empty strings, arrays and objects
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

/// Members of `fields` that are not empty
pub(super) fn non_empty_fields(fields: &Map<String, Value>) -> Map<String, Value> {
    fields
        .iter()
        .filter(|(_, v)| !is_empty(v))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

fn last_segment(path: &str) -> &str {
    path.rsplit('.').next().unwrap_or(path)
}
