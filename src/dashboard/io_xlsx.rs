// Primitives for reading Excel workbooks.

use calamine::{open_workbook, DataType, Reader, Xlsx};

use crate::dashboard::{io_common::*, *};

/// Reads the responses from a worksheet. The first worksheet is used when no
/// name is given.
pub fn read_xlsx_file(
    path: &str,
    worksheet: &Option<String>,
    missing_markers: &Option<Vec<String>>,
) -> DashboardResult<ResponseTable> {
    info!("Attempting to read responses from {:?}", path);
    let mut workbook: Xlsx<_> = open_workbook(path).context(OpeningExcelSnafu { path })?;
    let wrange = match worksheet {
        Some(name) => workbook
            .worksheet_range(name)
            .context(MissingWorksheetSnafu { name })?
            .context(OpeningExcelSnafu { path })?,
        None => workbook
            .worksheet_range_at(0)
            .context(EmptyExcelSnafu {})?
            .context(OpeningExcelSnafu { path })?,
    };

    let mut rows = wrange.rows();
    let header: Vec<String> = rows
        .next()
        .context(EmptyExcelSnafu {})?
        .iter()
        .map(read_cell)
        .collect();
    debug!("read_xlsx_file: header: {:?}", header);

    let mut builder = new_builder(&header, missing_markers)?;
    for row in rows {
        let cells: Vec<String> = row.iter().map(read_cell).collect();
        builder.add_row_simple(&cells).context(BuildingTableSnafu {})?;
    }
    info!("read_xlsx_file: read {} responses", builder.num_rows());
    Ok(builder.build())
}

// Whole numbers are written without a decimal part, as in the CSV export.
fn read_cell(cell: &DataType) -> String {
    match cell {
        DataType::String(s) => s.clone(),
        DataType::Empty => String::new(),
        DataType::Int(i) => i.to_string(),
        DataType::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => (*f as i64).to_string(),
        DataType::Float(f) => f.to_string(),
        DataType::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_as_text() {
        assert_eq!(read_cell(&DataType::Float(4.0)), "4");
        assert_eq!(read_cell(&DataType::Float(2.5)), "2.5");
        assert_eq!(read_cell(&DataType::Int(12)), "12");
        assert_eq!(read_cell(&DataType::Empty), "");
        assert_eq!(
            read_cell(&DataType::String("Roma".to_string())),
            "Roma"
        );
        assert_eq!(read_cell(&DataType::Bool(true)), "TRUE");
    }

    #[test]
    fn missing_workbook() {
        let res = read_xlsx_file("/nonexistent/responses.xlsx", &None, &None);
        assert!(matches!(res, Err(DashboardError::OpeningExcel { .. })));
    }
}
