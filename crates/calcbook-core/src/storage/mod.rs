//! Document persistence (.qalc JSON format).

mod qalc;

pub use qalc::{DocumentFile, FORMAT_VERSION, LineRecord, ResultRecord, load_qalc, save_qalc};
