use super::Document;
use crate::error::{CalcbookError, Result};
use crate::storage::{DocumentFile, FORMAT_VERSION, LineRecord, ResultRecord, load_qalc, save_qalc};
use std::path::Path;

impl Document {
    /// Persist the raw lines plus the current store to a .qalc file and
    /// remember the path.
    pub fn save_qalc(&mut self, path: &Path, lines: &[String]) -> Result<()> {
        let records = lines
            .iter()
            .enumerate()
            .map(|(idx, text)| {
                let line = idx + 1;
                LineRecord {
                    line,
                    text: text.clone(),
                    result: self.store.get(line).map(ResultRecord::from_entry),
                }
            })
            .collect();
        let file = DocumentFile {
            version: FORMAT_VERSION.to_string(),
            lines: records,
        };
        save_qalc(path, &file)?;
        self.file_path = Some(path.to_path_buf());
        self.modified = false;
        Ok(())
    }

    /// Save to the current file path.
    pub fn save(&mut self, lines: &[String]) -> Result<()> {
        let path = self.file_path.clone().ok_or(CalcbookError::NoFilePath)?;
        self.save_qalc(&path, lines)
    }

    /// Load a .qalc file, restoring stored results without
    /// re-evaluating anything. Returns the raw line texts in document
    /// order, with gaps filled by blank lines.
    pub fn load_qalc(&mut self, path: &Path) -> Result<Vec<String>> {
        let file = load_qalc(path)?;
        self.store.clear();
        let mut lines: Vec<String> = Vec::new();
        for record in file.lines {
            if record.line == 0 {
                continue;
            }
            if lines.len() < record.line {
                lines.resize(record.line, String::new());
            }
            lines[record.line - 1] = record.text;
            if let Some(result) = record.result {
                self.store.insert(result.into_entry(record.line));
            }
        }
        self.file_path = Some(path.to_path_buf());
        self.modified = false;
        Ok(lines)
    }

    /// Plain-text projection of the document: each line with a stored,
    /// successfully computed result gets it appended after two spaces
    /// and `=`. Error entries export the bare line.
    pub fn export_text(&self, lines: &[String]) -> String {
        let mut out = String::new();
        for (idx, raw) in lines.iter().enumerate() {
            match self.store.get(idx + 1).and_then(|entry| entry.export_text()) {
                Some(result) => {
                    out.push_str(raw);
                    out.push_str("  = ");
                    out.push_str(&result);
                }
                None => out.push_str(raw),
            }
            out.push('\n');
        }
        out
    }
}
