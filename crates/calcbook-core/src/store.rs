//! Line-indexed result store.
//!
//! The store is the single source of truth for `@` reference resolution:
//! an ordered map from line number to the structured result of that line.
//! Sparse is valid, blank and comment lines have no entry. Renumbering
//! under edits is a collect-then-rebuild transformation, never in-place
//! key mutation, so shifted keys cannot collide.

use calcbook_engine::engine::{
    LineRef, ResultSource, SolvedValue, Value, format_solutions, format_value,
    format_variable_solutions,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The retrievable content of an evaluated line. Exactly one shape
/// describes each entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EntryContent {
    /// Canonical scalar result of a numeric line.
    Value(Value),
    /// Ordered solutions of a single equation.
    Solutions {
        variable: String,
        values: Vec<SolvedValue>,
    },
    /// Per-variable solutions of an equation system, in first-seen
    /// variable order.
    System(Vec<(String, Vec<SolvedValue>)>),
    /// Human-readable message of a failed evaluation.
    Error(String),
}

/// One evaluated document line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub line_number: usize,
    /// Text before reference substitution, kept for display/export.
    pub source_expression: String,
    pub is_equation: bool,
    pub content: EntryContent,
}

impl ResultEntry {
    pub fn is_error(&self) -> bool {
        matches!(self.content, EntryContent::Error(_))
    }

    /// The numeric value a reference with the given indices retrieves,
    /// or `None` when the address does not name a usable number.
    ///
    /// A bare reference takes a single value or the first solution; a
    /// solution index on a non-equation line must be `0`; a variable
    /// index is only valid on equation-system lines. Symbolic solutions
    /// are not usable as operands.
    pub fn numeric_result(&self, solution: Option<usize>, variable: Option<usize>) -> Option<Value> {
        match &self.content {
            EntryContent::Error(_) => None,
            EntryContent::System(table) => {
                let (_, values) = table.get(variable.unwrap_or(0))?;
                values.get(solution.unwrap_or(0))?.as_value()
            }
            EntryContent::Solutions { values, .. } => {
                if variable.is_some() {
                    return None;
                }
                values.get(solution.unwrap_or(0))?.as_value()
            }
            EntryContent::Value(v) => {
                if variable.is_some() {
                    return None;
                }
                match solution {
                    None | Some(0) => Some(*v),
                    Some(_) => None,
                }
            }
        }
    }

    /// Canonical on-screen text, with errors adorned.
    pub fn display_text(&self) -> String {
        match &self.content {
            EntryContent::Value(v) => format_value(v),
            EntryContent::Solutions { variable, values } => format_solutions(variable, values),
            EntryContent::System(table) => format_variable_solutions(table),
            EntryContent::Error(message) => format!("Error: {}", message),
        }
    }

    /// Canonical export text; erroring entries export nothing.
    pub fn export_text(&self) -> Option<String> {
        if self.is_error() {
            None
        } else {
            Some(self.display_text())
        }
    }
}

/// Which store entries a resolution pass may observe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    /// Every stored entry (external `get` calls).
    All,
    /// Only entries strictly before the given line (document pass).
    Before(usize),
    /// Every entry except the given line itself (single-line
    /// re-evaluation against a persistent store).
    Except(usize),
}

impl Visibility {
    fn allows(self, line: usize) -> bool {
        match self {
            Visibility::All => true,
            Visibility::Before(limit) => line < limit,
            Visibility::Except(excluded) => line != excluded,
        }
    }
}

/// Ordered mapping from line number to result entry.
#[derive(Debug, Default)]
pub struct ResultStore {
    entries: BTreeMap<usize, ResultEntry>,
}

impl ResultStore {
    pub fn new() -> Self {
        ResultStore::default()
    }

    pub fn get(&self, line: usize) -> Option<&ResultEntry> {
        self.entries.get(&line)
    }

    /// Insert or overwrite the entry at its own line number.
    pub fn insert(&mut self, entry: ResultEntry) {
        self.entries.insert(entry.line_number, entry);
    }

    pub fn remove(&mut self, line: usize) -> Option<ResultEntry> {
        self.entries.remove(&line)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &ResultEntry)> {
        self.entries.iter().map(|(line, entry)| (*line, entry))
    }

    /// Relocate every entry at or after `position` up by `count`.
    pub fn shift_for_insert(&mut self, position: usize, count: usize) {
        if count == 0 {
            return;
        }
        let old = std::mem::take(&mut self.entries);
        for (line, mut entry) in old {
            let new_line = if line >= position { line + count } else { line };
            entry.line_number = new_line;
            self.entries.insert(new_line, entry);
        }
    }

    /// Discard entries in `(position, position + count]` and relocate
    /// entries above that range down by `count`.
    pub fn shift_for_delete(&mut self, position: usize, count: usize) {
        if count == 0 {
            return;
        }
        let old = std::mem::take(&mut self.entries);
        for (line, mut entry) in old {
            if line <= position {
                self.entries.insert(line, entry);
            } else if line <= position + count {
                // Deleted range.
            } else {
                let new_line = line - count;
                entry.line_number = new_line;
                self.entries.insert(new_line, entry);
            }
        }
    }

    /// A read-only view with the given visibility, usable as the
    /// reference resolver's source.
    pub fn view(&self, visibility: Visibility) -> StoreView<'_> {
        StoreView {
            store: self,
            visibility,
        }
    }
}

/// Visibility-limited read access for reference resolution.
pub struct StoreView<'a> {
    store: &'a ResultStore,
    visibility: Visibility,
}

impl ResultSource for StoreView<'_> {
    fn numeric_result(&self, reference: &LineRef) -> Option<Value> {
        if !self.visibility.allows(reference.line) {
            return None;
        }
        self.store
            .get(reference.line)?
            .numeric_result(reference.solution, reference.variable)
    }
}
