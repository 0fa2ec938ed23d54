// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ExportError;
use crate::sheets::{SheetData, build_sheets};
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, Worksheet};
use sig::ConfigStore;
use tracing::{debug, info};

/// ARCOS brand red used behind sheet headers.
pub const ARCOS_RED: u32 = 0x00E3_051B;

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(ARCOS_RED))
        .set_border(FormatBorder::Thin)
}

/// Renders the store as an `.xlsx` workbook.
///
/// Sheets with no rows are left out. A store with nothing to export still
/// yields a valid file with a single blank sheet.
///
/// # Errors
///
/// Returns an error if the workbook cannot be written.
pub fn export_workbook(store: &ConfigStore) -> Result<Vec<u8>, ExportError> {
    let sheets: Vec<SheetData> = build_sheets(store);
    sheets_to_workbook(&sheets)
}

/// Renders already-built sheets as an `.xlsx` workbook.
///
/// # Errors
///
/// Returns an error if the workbook cannot be written.
pub fn sheets_to_workbook(sheets: &[SheetData]) -> Result<Vec<u8>, ExportError> {
    let mut workbook: Workbook = Workbook::new();
    let format: Format = header_format();

    for sheet in sheets {
        let worksheet: &mut Worksheet = workbook.add_worksheet();
        write_sheet(worksheet, sheet, &format)?;
        debug!(sheet = %sheet.name, rows = sheet.rows.len(), "Wrote worksheet");
    }

    let bytes: Vec<u8> = workbook.save_to_buffer()?;
    info!(sheets = sheets.len(), bytes = bytes.len(), "Rendered workbook export");
    Ok(bytes)
}

fn write_sheet(
    worksheet: &mut Worksheet,
    sheet: &SheetData,
    format: &Format,
) -> Result<(), ExportError> {
    let too_large = || ExportError::SheetTooLarge {
        sheet: sheet.name.clone(),
    };

    worksheet.set_name(&sheet.name)?;

    for (col, header) in sheet.headers.iter().enumerate() {
        let col: u16 = u16::try_from(col).map_err(|_| too_large())?;
        worksheet.write_string_with_format(0, col, header, format)?;
    }

    for (index, cells) in sheet.rows.iter().enumerate() {
        let row: u32 = u32::try_from(index + 1).map_err(|_| too_large())?;
        for (col, value) in cells.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            let col: u16 = u16::try_from(col).map_err(|_| too_large())?;
            worksheet.write_string(row, col, value)?;
        }
    }

    worksheet.autofit();
    Ok(())
}
