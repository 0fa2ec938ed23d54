// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Export transformer for the SIG configuration workbench.
//!
//! Every export is a pure read of a [`sig::ConfigStore`]. The store is first
//! flattened into plain data ([`ExportRow`] for CSV, [`SheetData`] for the
//! workbook) and only then rendered, so the content can be checked without
//! parsing the output files.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod csv_export;
mod error;
mod rows;
mod sheets;
mod workbook;

#[cfg(test)]
mod tests;

pub use csv_export::{CSV_HEADERS, export_csv, rows_to_csv};
pub use error::ExportError;
pub use rows::{ExportRow, SAME_AS_TITLE, export_rows};
pub use sheets::{
    CALLOUT_REASON_MATRIX_SHEET, CALLOUT_REASONS_SHEET, CALLOUT_TYPE_MATRIX_SHEET,
    EVENT_TYPES_SHEET, JOB_CLASSIFICATIONS_SHEET, LOCATION_HIERARCHY_SHEET,
    OTHER_CONFIGURATIONS_SHEET, SheetData, build_sheets,
};
pub use workbook::{ARCOS_RED, export_workbook, sheets_to_workbook};
