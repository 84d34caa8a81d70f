use crate::store::ResultStore;
use calcbook_engine::engine::{AlgebraBackend, SolverBackend};
use std::path::PathBuf;

/// UI-agnostic document state: the result store plus the optional
/// solving capability.
pub struct Document {
    /// Single source of truth for reference resolution.
    pub store: ResultStore,
    /// Equation solver, when available. `None` turns every equation
    /// line into a capability error entry instead of crashing.
    pub solver: Option<Box<dyn SolverBackend>>,
    /// Current file path.
    pub file_path: Option<PathBuf>,
    /// Whether the document has been modified since the last save.
    pub modified: bool,
}

impl Document {
    /// Create a new document with the built-in algebra backend.
    ///
    /// This constructor is side-effect free: it does not touch the
    /// filesystem.
    pub fn new() -> Self {
        Document {
            store: ResultStore::new(),
            solver: Some(Box::new(AlgebraBackend::new())),
            file_path: None,
            modified: false,
        }
    }

    /// Create a document with no solving capability.
    pub fn without_solver() -> Self {
        Document {
            solver: None,
            ..Document::new()
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Document::new()
    }
}
