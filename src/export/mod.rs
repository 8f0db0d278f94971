//! Schema inference and row projection for semi-structured documents

mod csv;

use serde_json::Value;

use crate::error::ExportError;
use crate::model::{Row, Schema, Table};

pub use self::csv::{encode_table, write_table};

/// Default number of documents inspected when inferring the schema
pub const DEFAULT_SAMPLE_LIMIT: usize = 100;

/// Turns a sequence of documents into a rectangular [`Table`].
///
/// The column schema is inferred from a bounded prefix of the sequence
/// (`sample_limit` documents); every document, sampled or not, is then
/// projected onto that schema. Stateless across invocations.
#[derive(Debug, Clone)]
pub struct Exporter {
    sample_limit: usize,
}

impl Default for Exporter {
    fn default() -> Self {
        Self {
            sample_limit: DEFAULT_SAMPLE_LIMIT,
        }
    }
}

impl Exporter {
    /// Create an exporter with a custom sample limit.
    ///
    /// A zero limit is a caller contract violation and fails fast.
    pub fn new(sample_limit: usize) -> Result<Self, ExportError> {
        if sample_limit == 0 {
            return Err(ExportError::InvalidSampleLimit(sample_limit));
        }
        Ok(Self { sample_limit })
    }

    /// Infer the column schema from the first `sample_limit` documents.
    ///
    /// Field names are appended in document order, first-seen wins, and
    /// duplicates are skipped. Non-object documents contribute no fields.
    pub fn infer_schema(&self, documents: &[Value]) -> Schema {
        let mut schema = Schema::new();
        for doc in documents.iter().take(self.sample_limit) {
            if let Value::Object(fields) = doc {
                for name in fields.keys() {
                    schema.add_field(name);
                }
            }
        }
        schema
    }

    /// Build the full table: inferred header plus one row per document.
    ///
    /// Documents beyond the sample still produce rows; fields the sample
    /// never saw are simply not represented. Zero input documents is the
    /// only error case.
    pub fn build_table(&self, documents: &[Value]) -> Result<Table, ExportError> {
        if documents.is_empty() {
            return Err(ExportError::EmptyInput);
        }

        let schema = self.infer_schema(documents);
        let mut table = Table::new(schema.header());
        for doc in documents {
            table.push_row(project_record(doc, &schema));
        }
        Ok(table)
    }
}

/// Project one document onto a schema, yielding exactly `schema.len()` cells.
///
/// Missing fields and non-object documents degrade to empty cells rather
/// than erroring, so a single malformed document cannot poison an export.
pub fn project_record(document: &Value, schema: &Schema) -> Row {
    let fields = match document {
        Value::Object(fields) => Some(fields),
        _ => None,
    };

    schema
        .iter()
        .map(|name| match fields.and_then(|f| f.get(name)) {
            Some(value) => cell_text(value),
            None => String::new(),
        })
        .collect()
}

/// Flatten one field value into a CSV-safe scalar string.
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        // Nested structures keep their JSON text; lossy for round-trips,
        // accepted limitation of a flat CSV target.
        Value::Array(_) | Value::Object(_) => {
            serde_json::to_string(value).unwrap_or_default()
        }
    }
}
