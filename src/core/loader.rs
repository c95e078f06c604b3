use crate::core::{Row, Storage};
use crate::utils::error::{FieldError, ReportError, Result};
use csv::{ReaderBuilder, StringRecord};
use std::collections::HashMap;
use std::path::Path;

pub const REQUIRED_COLUMNS: [&str; 7] = [
    "name",
    "position",
    "completed_tasks",
    "performance",
    "skills",
    "team",
    "experience_years",
];

/// Reads employee CSV files through a `Storage` and turns them into typed rows.
pub struct DataLoader<S: Storage> {
    storage: S,
}

impl<S: Storage> DataLoader<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Loads every file in order and concatenates their rows.
    ///
    /// Fails as a whole on the first unreadable file, bad header or bad cell;
    /// rows already parsed from earlier files are discarded.
    pub fn load<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Vec<Row>> {
        let mut rows = Vec::new();

        for path in paths {
            let path = path.as_ref();
            let file_rows = self.load_file(path)?;
            tracing::debug!("Loaded {} rows from {}", file_rows.len(), path.display());
            rows.extend(file_rows);
        }

        Ok(rows)
    }

    fn load_file(&self, path: &Path) -> Result<Vec<Row>> {
        let content = self
            .storage
            .read_to_string(path)
            .map_err(|source| read_error(path, source))?;

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| read_error(path, e.into()))?
            .clone();
        let columns = resolve_columns(path, &headers)?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| read_error(path, e.into()))?;
            rows.push(coerce_row(path, &record, &columns)?);
        }

        Ok(rows)
    }
}

fn read_error(path: &Path, source: std::io::Error) -> ReportError {
    ReportError::ReadError {
        path: path.to_path_buf(),
        source,
    }
}

/// Maps each required column to its position in the header. A repeated
/// column name resolves to its last occurrence.
fn resolve_columns(path: &Path, headers: &StringRecord) -> Result<HashMap<&'static str, usize>> {
    if headers.is_empty() {
        return Err(ReportError::SchemaError {
            path: path.to_path_buf(),
            message: "file has no header line".to_string(),
        });
    }

    let mut columns = HashMap::new();
    let mut missing = Vec::new();
    for column in REQUIRED_COLUMNS {
        let index = headers
            .iter()
            .enumerate()
            .filter(|(_, header)| *header == column)
            .map(|(index, _)| index)
            .last();
        match index {
            Some(index) => {
                columns.insert(column, index);
            }
            None => missing.push(column),
        }
    }

    if !missing.is_empty() {
        missing.sort_unstable();
        return Err(ReportError::SchemaError {
            path: path.to_path_buf(),
            message: format!("missing required columns: {}", missing.join(", ")),
        });
    }

    Ok(columns)
}

fn coerce_row(
    path: &Path,
    record: &StringRecord,
    columns: &HashMap<&'static str, usize>,
) -> Result<Row> {
    let line = record.position().map_or(0, |p| p.line());
    let invalid = |column: &str, source: FieldError| ReportError::ValidationError {
        path: path.to_path_buf(),
        line,
        column: column.to_string(),
        source,
    };

    let text = |column: &'static str| -> Result<String> {
        columns
            .get(column)
            .and_then(|&index| record.get(index))
            .map(normalize_text)
            .ok_or_else(|| invalid(column, FieldError::Missing))
    };

    let integer = |column: &'static str| -> Result<i64> {
        let value = text(column)?;
        value.parse().map_err(|source| {
            invalid(
                column,
                FieldError::InvalidInteger {
                    value: value.clone(),
                    source,
                },
            )
        })
    };

    let number = |column: &'static str| -> Result<f64> {
        let value = text(column)?.replace(',', ".");
        value.parse().map_err(|source| {
            invalid(
                column,
                FieldError::InvalidNumber {
                    value: value.clone(),
                    source,
                },
            )
        })
    };

    let name = text("name")?;
    let position = text("position")?;
    let skills = text("skills")?;
    let team = text("team")?;
    let completed_tasks = integer("completed_tasks")?;
    let performance = number("performance")?;
    let experience_years = integer("experience_years")?;

    Ok(Row {
        name,
        position,
        completed_tasks,
        performance,
        skills,
        team,
        experience_years,
    })
}

/// Trims the value and collapses inner whitespace runs to a single space.
pub fn normalize_text(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
