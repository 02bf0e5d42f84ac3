// src/export/mod.rs
//! CSV export and import for credential records
//!
//! Exported files carry plaintext passwords — callers warn loudly, and
//! `features.allow_insecure_export = false` refuses them outright.

pub use self::csv::{
    export_selected_to_csv, export_to_csv, import_from_csv, ImportError, ImportReport,
};

pub mod csv;
