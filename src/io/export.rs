use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use std::io::Write;

use crate::domain::{ExpenseRecord, cents_to_f64, format_cents};

/// Media type of the spreadsheet download.
pub const XLSX_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// File name offered for the spreadsheet download.
pub const DEFAULT_FILE_NAME: &str = "expenses.xlsx";

/// Column headers, in column order. There is no index column.
pub const HEADERS: [&str; 4] = ["Date", "Category", "Description", "Amount"];

/// Excel can only store dates in 1900-9999; anything else becomes a text cell.
fn excel_date(date: NaiveDate) -> Option<ExcelDateTime> {
    let year = u16::try_from(date.year()).ok()?;
    ExcelDateTime::from_ymd(year, date.month() as u8, date.day() as u8).ok()
}

/// Exporter for converting a ledger snapshot to various formats
pub struct Exporter<'a> {
    records: &'a [ExpenseRecord],
}

impl<'a> Exporter<'a> {
    pub fn new(records: &'a [ExpenseRecord]) -> Self {
        Self { records }
    }

    /// Serialize the snapshot into an xlsx workbook with a single sheet.
    pub fn to_xlsx(&self) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();
        let date_format = Format::new().set_num_format("yyyy-mm-dd");
        let amount_format = Format::new().set_num_format("0.00");

        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Sheet1")?;

        for (col, header) in HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }

        for (index, record) in self.records.iter().enumerate() {
            let row = u32::try_from(index + 1).context("Too many rows for a worksheet")?;
            match excel_date(record.date) {
                Some(date) => {
                    worksheet.write_datetime_with_format(row, 0, &date, &date_format)?;
                }
                None => {
                    worksheet.write_string(row, 0, record.date.format("%Y-%m-%d").to_string())?;
                }
            }
            worksheet.write_string(row, 1, record.category.as_str())?;
            worksheet.write_string(row, 2, &record.description)?;
            worksheet.write_number_with_format(
                row,
                3,
                cents_to_f64(record.amount_cents),
                &amount_format,
            )?;
        }

        worksheet.set_column_width(0, 12.0)?;
        worksheet.set_column_width(2, 30.0)?;

        let bytes = workbook
            .save_to_buffer()
            .context("Failed to serialize workbook")?;
        Ok(bytes)
    }

    /// Export the snapshot to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(HEADERS)?;

        let mut count = 0;
        for record in self.records {
            csv_writer.write_record([
                record.date.format("%Y-%m-%d").to_string(),
                record.category.to_string(),
                record.description.clone(),
                format_cents(record.amount_cents),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export the snapshot as a JSON array of records
    pub fn export_json<W: Write>(&self, mut writer: W) -> Result<usize> {
        let json = serde_json::to_string_pretty(self.records)?;
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(self.records.len())
    }
}
