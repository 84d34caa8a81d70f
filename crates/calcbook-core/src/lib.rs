//! calcbook-core - UI-agnostic document model + storage.

pub mod document;
pub mod error;
pub mod storage;
pub mod store;

pub use document::Document;
pub use error::{CalcbookError, Result};
pub use store::{EntryContent, ResultEntry, ResultStore, StoreView, Visibility};

pub use calcbook_engine::engine::{SolvedValue, Value};
