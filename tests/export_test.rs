mod common;

use anyhow::Result;
use calamine::{Data, DataType, Reader, Xlsx, open_workbook, open_workbook_from_rs};
use std::io::Cursor;

use common::{add, form, parse_date, test_session};
use expense_tracker::domain::{Category, ExpenseRecord};
use expense_tracker::io::{Exporter, HEADERS};

/// Parse an exported workbook back into its header row and records.
fn read_back(bytes: Vec<u8>) -> Result<(Vec<String>, Vec<ExpenseRecord>)> {
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes))?;
    assert_eq!(workbook.sheet_names(), vec!["Sheet1".to_string()]);

    let range = workbook.worksheet_range("Sheet1")?;
    let mut rows = range.rows();

    let headers = rows
        .next()
        .unwrap()
        .iter()
        .map(|cell| cell.get_string().unwrap().to_string())
        .collect();

    let records = rows
        .map(|row| {
            assert_eq!(row.len(), 4);
            let amount = row[3].get_float().unwrap();
            ExpenseRecord::new(
                row[0].as_date().unwrap(),
                row[1].get_string().unwrap().parse().unwrap(),
                row[2].get_string().unwrap(),
                (amount * 100.0).round() as i64,
            )
        })
        .collect();

    Ok((headers, records))
}

#[test]
fn test_xlsx_round_trip_preserves_rows_and_order() -> Result<()> {
    let mut session = test_session();
    for form in [
        form("2024-01-05", Category::Food, "Lunch", 25000),
        form("2024-01-07", Category::Travel, "Taxi to airport", 5050),
        form("2024-01-03", Category::Food, "Lunch", 25000),
        form("2024-02-29", Category::Health, "Dentist, checkup", 120099),
    ] {
        assert!(session.submit(form).is_added());
    }

    let artifact = session.export()?.unwrap();
    let (headers, records) = read_back(artifact.bytes)?;

    assert_eq!(headers, HEADERS.to_vec());
    assert_eq!(records, session.ledger().records());
    Ok(())
}

#[test]
fn test_xlsx_has_no_index_column() -> Result<()> {
    let records = vec![ExpenseRecord::new(
        parse_date("2024-01-05"),
        Category::Other,
        "Gift",
        999,
    )];
    let bytes = Exporter::new(&records).to_xlsx()?;

    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes))?;
    let range = workbook.worksheet_range("Sheet1")?;
    assert_eq!(range.get_size(), (2, 4));
    assert_eq!(range.get((0, 0)), Some(&Data::String("Date".to_string())));
    assert_eq!(range.get((1, 3)).and_then(|c| c.get_float()), Some(9.99));
    Ok(())
}

#[test]
fn test_export_is_deterministic_in_content() -> Result<()> {
    let mut session = test_session();
    add(&mut session, Category::Shopping, "Shoes", 4000);

    let first = read_back(session.export()?.unwrap().bytes)?;
    let records = session.ledger().records().to_vec();
    let second = read_back(Exporter::new(&records).to_xlsx()?)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_export_reflects_later_appends() -> Result<()> {
    let mut session = test_session();
    add(&mut session, Category::Food, "Lunch", 10000);
    let (_, before) = read_back(session.export()?.unwrap().bytes)?;
    assert_eq!(before.len(), 1);

    add(&mut session, Category::Travel, "Taxi", 5000);
    let (_, after) = read_back(session.export()?.unwrap().bytes)?;
    assert_eq!(after.len(), 2);
    assert_eq!(after[1].description, "Taxi");
    Ok(())
}

#[test]
fn test_export_written_to_disk_opens() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    let path = temp_dir.path().join("expenses.xlsx");

    let mut session = test_session();
    add(&mut session, Category::Food, "Lunch", 25000);
    let artifact = session.export()?.unwrap();
    std::fs::write(&path, &artifact.bytes)?;

    let mut workbook: Xlsx<_> = open_workbook(&path)?;
    let range = workbook.worksheet_range("Sheet1")?;
    assert_eq!(range.height(), 2);
    Ok(())
}

#[test]
fn test_csv_export_round_trip() -> Result<()> {
    let mut session = test_session();
    add(&mut session, Category::Food, "Lunch", 10000);
    add(&mut session, Category::Travel, "Taxi", 5000);

    let mut out = Vec::new();
    Exporter::new(session.ledger().records()).export_csv(&mut out)?;

    let mut reader = csv::Reader::from_reader(out.as_slice());
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    assert_eq!(headers, HEADERS.to_vec());

    let rows: Vec<Vec<String>> = reader
        .records()
        .map(|r| r.map(|r| r.iter().map(str::to_string).collect()))
        .collect::<Result<_, _>>()?;
    assert_eq!(
        rows,
        vec![
            vec!["2024-01-05", "Food", "Lunch", "100.00"],
            vec!["2024-01-05", "Travel", "Taxi", "50.00"],
        ]
    );
    Ok(())
}
