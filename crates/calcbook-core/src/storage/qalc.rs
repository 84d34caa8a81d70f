//! The .qalc file format: a versioned JSON list of line records.
//!
//! Each record carries the raw line text and, when the line had been
//! evaluated, enough of its result to reconstruct the store entry
//! without re-evaluating the document.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{CalcbookError, Result};
use crate::store::{EntryContent, ResultEntry};

pub const FORMAT_VERSION: &str = "1.0";

#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentFile {
    pub version: String,
    pub lines: Vec<LineRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LineRecord {
    pub line: usize,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<ResultRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Text before reference substitution.
    pub expression: String,
    /// Formatted display text, for readers of the raw file.
    pub result: String,
    /// "single", "multiple" or "error".
    pub result_type: String,
    pub is_equation: bool,
    /// Real-valued solutions, flattened for external tooling.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub solutions: Vec<f64>,
    /// The structured content; the authoritative part of the record.
    pub content: EntryContent,
}

impl ResultRecord {
    pub fn from_entry(entry: &ResultEntry) -> Self {
        let result_type = match &entry.content {
            EntryContent::Error(_) => "error",
            EntryContent::Value(_) => "single",
            EntryContent::Solutions { values, .. } => {
                if values.len() == 1 {
                    "single"
                } else {
                    "multiple"
                }
            }
            EntryContent::System(_) => "multiple",
        };
        let solutions = match &entry.content {
            EntryContent::Solutions { values, .. } => values
                .iter()
                .filter_map(|v| match v.as_value() {
                    Some(calcbook_engine::engine::Value::Real(n)) => Some(n),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        };
        ResultRecord {
            expression: entry.source_expression.clone(),
            result: entry.display_text(),
            result_type: result_type.to_string(),
            is_equation: entry.is_equation,
            solutions,
            content: entry.content.clone(),
        }
    }

    pub fn into_entry(self, line: usize) -> ResultEntry {
        ResultEntry {
            line_number: line,
            source_expression: self.expression,
            is_equation: self.is_equation,
            content: self.content,
        }
    }
}

pub fn save_qalc(path: &Path, file: &DocumentFile) -> Result<()> {
    let json = serde_json::to_string_pretty(file)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_qalc(path: &Path) -> Result<DocumentFile> {
    let json = fs::read_to_string(path)?;
    let file: DocumentFile = serde_json::from_str(&json)?;
    if !file.version.starts_with("1.") {
        return Err(CalcbookError::UnsupportedVersion(file.version));
    }
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use calcbook_engine::engine::{SolvedValue, Value};

    #[test]
    fn test_record_round_trips_entry() {
        let entry = ResultEntry {
            line_number: 3,
            source_expression: "x**2 - 5*x + 6 = 0".to_string(),
            is_equation: true,
            content: EntryContent::Solutions {
                variable: "x".to_string(),
                values: vec![
                    SolvedValue::Num(Value::Real(2.0)),
                    SolvedValue::Num(Value::Real(3.0)),
                ],
            },
        };
        let record = ResultRecord::from_entry(&entry);
        assert_eq!(record.result_type, "multiple");
        assert_eq!(record.solutions, vec![2.0, 3.0]);
        assert_eq!(record.result, "x[0] = 2, x[1] = 3");
        assert_eq!(record.into_entry(3), entry);
    }

    #[test]
    fn test_error_record_type() {
        let entry = ResultEntry {
            line_number: 1,
            source_expression: "1/0".to_string(),
            is_equation: false,
            content: EntryContent::Error("domain error: division by zero".to_string()),
        };
        assert_eq!(ResultRecord::from_entry(&entry).result_type, "error");
    }

    #[test]
    fn test_version_check() {
        let dir = std::env::temp_dir().join("calcbook-qalc-version-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("future.qalc");
        let file = DocumentFile {
            version: "2.0".to_string(),
            lines: Vec::new(),
        };
        save_qalc(&path, &file).unwrap();
        assert!(matches!(
            load_qalc(&path),
            Err(CalcbookError::UnsupportedVersion(_))
        ));
        std::fs::remove_file(&path).ok();
    }
}
