// src/export/logic.rs

use super::ExportFormat;
use super::fs_utils::ensure_writable;
use super::json_csv::{export_csv, export_json};
use super::model::view_to_rows;
use crate::core::logic::MonthView;
use crate::errors::{AppError, AppResult};
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the days of a month view.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute path of the output file
    pub fn export(view: &MonthView, format: &ExportFormat, file: &str, force: bool) -> AppResult<()> {
        let path = Path::new(file);
        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let rows = view_to_rows(view);

        match format {
            ExportFormat::Csv => export_csv(&rows, path),
            ExportFormat::Json => export_json(&rows, path),
        }
    }
}
