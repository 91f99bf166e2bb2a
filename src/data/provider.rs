// File-backed test data access
//
// One dispatch point per on-disk format (JSON, CSV, XLSX) so path resolution
// and parsing never leak into individual specs. Each reader is stateless
// beyond the fixed data root; repeated reads of the same file return
// structurally identical data.

use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Reader};
use serde_json::Value;

use crate::data::{Record, UserData};
use crate::error::{Error, Result};

/// Uniform access to structured fixture data under a single data root.
#[derive(Debug, Clone)]
pub struct DataProvider {
    root: PathBuf,
}

impl DataProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, name: &str) -> Result<PathBuf> {
        let path = self.root.join(name);
        if !path.exists() {
            return Err(Error::FileNotFound { path });
        }
        Ok(path)
    }

    /// Reads a JSON fixture file into a sequence of records.
    ///
    /// The file must contain a top-level array of objects.
    pub async fn read_json(&self, name: &str) -> Result<Vec<Record>> {
        let path = self.resolve(name)?;
        let raw = tokio::fs::read_to_string(&path).await?;
        let value: Value = serde_json::from_str(&raw).map_err(|e| Error::Parse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        let Value::Array(items) = value else {
            return Err(Error::Parse {
                path,
                message: "expected a top-level array".to_string(),
            });
        };

        items
            .into_iter()
            .map(|item| match item {
                Value::Object(record) => Ok(record),
                other => Err(Error::Parse {
                    path: path.clone(),
                    message: format!("expected an array of objects, found {other}"),
                }),
            })
            .collect()
    }

    /// Reads a CSV fixture file row by row, keying each record by the header
    /// row. Row decode errors propagate as [`Error::Parse`].
    pub async fn read_csv(&self, name: &str) -> Result<Vec<Record>> {
        let path = self.resolve(name)?;
        let raw = tokio::fs::read(&path).await?;

        let mut reader = csv::Reader::from_reader(raw.as_slice());
        let headers = reader
            .headers()
            .map_err(|e| Error::Parse {
                path: path.clone(),
                message: e.to_string(),
            })?
            .clone();

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row.map_err(|e| Error::Parse {
                path: path.clone(),
                message: e.to_string(),
            })?;
            let mut record = Record::new();
            for (header, field) in headers.iter().zip(row.iter()) {
                record.insert(header.to_string(), Value::String(field.to_string()));
            }
            records.push(record);
        }

        tracing::debug!(file = %path.display(), rows = records.len(), "loaded CSV fixture");
        Ok(records)
    }

    /// Reads a worksheet from an Excel workbook into records.
    ///
    /// Selects `sheet` when given, the first worksheet otherwise; the first
    /// row is treated as the header row.
    pub async fn read_excel(&self, name: &str, sheet: Option<&str>) -> Result<Vec<Record>> {
        let path = self.resolve(name)?;
        let requested = sheet.map(str::to_owned);

        // calamine is synchronous; keep workbook parsing off the async executor
        let task_path = path.clone();
        tokio::task::spawn_blocking(move || read_workbook(&task_path, requested.as_deref()))
            .await
            .map_err(|e| Error::Parse {
                path,
                message: format!("workbook reader task failed: {e}"),
            })?
    }

    /// Loads the user records for a named environment
    /// (`users-<environment>.json`).
    pub async fn user_data(&self, environment: &str) -> Result<Vec<UserData>> {
        let name = format!("users-{environment}.json");
        let records = self.read_json(&name).await?;
        records
            .into_iter()
            .map(|record| {
                serde_json::from_value(Value::Object(record)).map_err(|e| Error::Parse {
                    path: self.root.join(&name),
                    message: e.to_string(),
                })
            })
            .collect()
    }

    /// Loads module-specific test data (`<module>-testdata.json`).
    ///
    /// A missing file surfaces as [`Error::FileNotFound`]; callers that treat
    /// absent module data as "no data" apply that policy themselves (see the
    /// fixture layer).
    pub async fn module_test_data(&self, module: &str) -> Result<Vec<Record>> {
        self.read_json(&format!("{module}-testdata.json")).await
    }

    /// Writes a pretty-printed JSON fixture file, creating parent directories
    /// as needed. An existing file at the path is overwritten.
    pub async fn create_sample_data_file(&self, name: &str, records: &[Record]) -> Result<()> {
        let path = self.root.join(name);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let body = serde_json::to_string_pretty(records)?;
        tokio::fs::write(&path, body).await?;
        tracing::debug!(file = %path.display(), rows = records.len(), "wrote sample data file");
        Ok(())
    }
}

/// Keeps the records where every criterion key matches by equality.
///
/// Criteria with no matches yield an empty result, never an error.
pub fn filter_records(records: &[Record], criteria: &Record) -> Vec<Record> {
    records
        .iter()
        .filter(|record| {
            criteria
                .iter()
                .all(|(key, expected)| record.get(key) == Some(expected))
        })
        .cloned()
        .collect()
}

/// True iff `records` is non-empty and every record carries every required
/// field with a non-null value.
pub fn validate_structure(records: &[Record], required: &[&str]) -> bool {
    !records.is_empty()
        && records.iter().all(|record| {
            required
                .iter()
                .all(|field| matches!(record.get(*field), Some(value) if !value.is_null()))
        })
}

fn read_workbook(path: &Path, sheet: Option<&str>) -> Result<Vec<Record>> {
    let mut workbook = open_workbook_auto(path).map_err(|e| Error::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let names = workbook.sheet_names().to_vec();
    let target = match sheet {
        Some(name) => name.to_owned(),
        None => names.first().cloned().ok_or_else(|| Error::Parse {
            path: path.to_path_buf(),
            message: "workbook has no sheets".to_string(),
        })?,
    };
    if !names.iter().any(|name| name == &target) {
        return Err(Error::SheetNotFound {
            sheet: target,
            path: path.to_path_buf(),
        });
    }

    let range = workbook.worksheet_range(&target).map_err(|e| Error::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Ok(Vec::new());
    };
    let headers: Vec<String> = header.iter().map(cell_to_string).collect();

    let mut records = Vec::new();
    for row in rows {
        let mut record = Record::new();
        for (header, cell) in headers.iter().zip(row.iter()) {
            record.insert(header.clone(), cell_to_value(cell));
        }
        records.push(record);
    }
    Ok(records)
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

fn cell_to_value(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::Null,
        Data::String(s) => Value::String(s.clone()),
        Data::Bool(b) => Value::Bool(*b),
        Data::Int(i) => Value::Number((*i).into()),
        Data::Float(f) => serde_json::Number::from_f64(*f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        other => Value::String(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(pairs: &[(&str, Value)]) -> Record {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn filter_matches_every_criterion_by_equality() {
        let records = vec![
            record(&[("role", json!("administrator")), ("active", json!(true))]),
            record(&[("role", json!("administrator")), ("active", json!(false))]),
            record(&[("role", json!("user")), ("active", json!(true))]),
        ];
        let criteria = record(&[("role", json!("administrator")), ("active", json!(true))]);

        let matched = filter_records(&records, &criteria);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].get("active"), Some(&json!(true)));
    }

    #[test]
    fn filter_with_no_match_yields_empty_not_error() {
        let records = vec![record(&[("role", json!("viewer"))])];
        let criteria = record(&[("role", json!("administrator"))]);
        assert!(filter_records(&records, &criteria).is_empty());
    }

    #[test]
    fn validate_rejects_empty_record_sets() {
        assert!(!validate_structure(&[], &["id"]));
        assert!(!validate_structure(&[], &[]));
    }

    #[test]
    fn validate_accepts_non_empty_set_with_no_required_fields() {
        let records = vec![record(&[("id", json!(1))])];
        assert!(validate_structure(&records, &[]));
    }

    #[test]
    fn validate_requires_defined_values() {
        let records = vec![
            record(&[("id", json!(1)), ("name", json!("a"))]),
            record(&[("id", json!(2)), ("name", Value::Null)]),
        ];
        assert!(validate_structure(&records, &["id"]));
        assert!(!validate_structure(&records, &["id", "name"]));
    }
}
