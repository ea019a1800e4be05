// Primitives for reading CSV exports.

use crate::dashboard::{io_common::*, *};

/// Parses the CSV export of a spreadsheet. The first record holds the questions.
pub fn read_csv_text(
    text: &str,
    missing_markers: &Option<Vec<String>>,
) -> DashboardResult<ResponseTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(strip_bom(text).as_bytes());
    let headers: Vec<String> = rdr
        .headers()
        .context(ParsingCsvSnafu {})?
        .iter()
        .map(|s| s.to_string())
        .collect();
    if headers.iter().all(|h| h.trim().is_empty()) {
        return EmptyPayloadSnafu {}.fail();
    }
    debug!("read_csv_text: {} columns", headers.len());

    let mut builder = new_builder(&headers, missing_markers)?;
    for (idx, record_r) in rdr.records().enumerate() {
        let record = record_r.context(ParsingCsvSnafu {})?;
        let cells: Vec<&str> = record.iter().collect();
        builder.add_row_simple(&cells).context(BuildingTableSnafu {})?;
        if idx % 1000 == 999 {
            debug!("read_csv_text: read {} rows", idx + 1);
        }
    }
    info!("read_csv_text: read {} responses", builder.num_rows());
    Ok(builder.build())
}

pub fn read_csv_file(
    path: &str,
    missing_markers: &Option<Vec<String>>,
) -> DashboardResult<ResponseTable> {
    info!("Attempting to read responses from {:?}", path);
    let bytes = fs::read(path).context(OpeningFileSnafu { path })?;
    let text = String::from_utf8(bytes).context(NotUtf8Snafu {})?;
    read_csv_text(&text, missing_markers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\u{feff}What is your sex?,Age_grp,What is your age?,\"Necessary medications?\"\n\
Female,18-35,24,\"High costs, Prescription issues\"\n\
Male,36-59,,NA\n";

    #[test]
    fn parse_sample() {
        let table = read_csv_text(SAMPLE, &None).unwrap();
        assert_eq!(table.num_rows(), 2);
        assert_eq!(
            table.column_names(),
            vec![
                "What is your sex?",
                "Age_grp",
                "What is your age?",
                "Necessary medications?"
            ]
        );
        assert_eq!(
            table.value(0, "Necessary medications?").unwrap(),
            Some("High costs, Prescription issues")
        );
        assert_eq!(table.value(1, "What is your age?").unwrap(), None);
        assert_eq!(table.value(1, "Necessary medications?").unwrap(), None);
    }

    #[test]
    fn custom_missing_markers() {
        let markers = Some(vec!["".to_string()]);
        let table = read_csv_text(SAMPLE, &markers).unwrap();
        assert_eq!(table.value(1, "Necessary medications?").unwrap(), Some("NA"));
    }

    #[test]
    fn duplicated_questions() {
        let table = read_csv_text("Other,Other\na,b\n", &None).unwrap();
        assert_eq!(table.column_names(), vec!["Other", "Other.1"]);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let res = read_csv_text("a,b\n1,2\n3\n", &None);
        assert!(matches!(res, Err(DashboardError::ParsingCsv { .. })));
        assert!(res.unwrap_err().is_data_source());
    }

    #[test]
    fn empty_payload() {
        let res = read_csv_text("", &None);
        assert!(matches!(res, Err(DashboardError::EmptyPayload { .. })));
    }

    #[test]
    fn read_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let table = read_csv_file(file.path().to_str().unwrap(), &None).unwrap();
        assert_eq!(table.num_rows(), 2);
    }

    #[test]
    fn invalid_utf8_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[b'a', b',', 0xff, b'\n']).unwrap();
        let res = read_csv_file(file.path().to_str().unwrap(), &None);
        assert!(matches!(res, Err(DashboardError::NotUtf8 { .. })));
    }
}
