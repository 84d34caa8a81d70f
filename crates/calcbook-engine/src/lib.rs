//! calcbook_engine - Expression pipeline for the line-oriented calculator.

pub mod engine;
pub mod functions;
