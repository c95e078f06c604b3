use std::collections::HashMap;

/// One employee record after whitespace normalisation and type coercion.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub name: String,
    pub position: String,
    pub completed_tasks: i64,
    pub performance: f64,
    pub skills: String,
    pub team: String,
    pub experience_years: i64,
}

/// A single result line of a report, keyed by the report's header names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportRow {
    pub data: HashMap<String, serde_json::Value>,
}

impl ReportRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, column: &str, value: impl Into<serde_json::Value>) -> Self {
        self.data.insert(column.to_string(), value.into());
        self
    }

    pub fn get(&self, column: &str) -> Option<&serde_json::Value> {
        self.data.get(column)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    pub headers: Vec<String>,
    pub rows: Vec<ReportRow>,
}
