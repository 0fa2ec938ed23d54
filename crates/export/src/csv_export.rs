// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ExportError;
use crate::rows::{ExportRow, export_rows};
use sig::ConfigStore;
use tracing::debug;

/// Column headers of the CSV export.
pub const CSV_HEADERS: [&str; 3] = ["Tab", "Section", "Response"];

/// Renders the store as a `Tab,Section,Response` CSV document.
///
/// The header row is always present, even when there are no rows.
///
/// # Errors
///
/// Returns an error if the CSV writer fails.
pub fn export_csv(store: &ConfigStore) -> Result<String, ExportError> {
    let rows: Vec<ExportRow> = export_rows(store);
    rows_to_csv(&rows)
}

/// Renders already-flattened rows as CSV.
///
/// # Errors
///
/// Returns an error if the CSV writer fails.
pub fn rows_to_csv(rows: &[ExportRow]) -> Result<String, ExportError> {
    let mut writer: csv::Writer<Vec<u8>> = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADERS)?;
    for row in rows {
        writer.write_record([&row.tab, &row.section, &row.response])?;
    }

    let bytes: Vec<u8> = writer
        .into_inner()
        .map_err(|err| ExportError::Io(err.into_error()))?;
    debug!(rows = rows.len(), bytes = bytes.len(), "Rendered CSV export");
    Ok(String::from_utf8(bytes)?)
}
