use crate::config::*;

/// The cell contents that are treated as a missing answer by default.
///
/// These are the markers that spreadsheet exports and the usual CSV readers treat
/// as empty cells. Note that `None` is not part of the list: it is a valid answer
/// to several questions. Cells made only of whitespace are missing as well.
pub const DEFAULT_MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "n/a", "nan", "null",
];

/// A builder for response tables.
///
/// The readers push the raw cells row by row; the builder takes care of the
/// missing markers and of the duplicated header names.
///
/// ```
/// use survey_stats::TableBuilder;
/// # use survey_stats::StatsError;
///
/// let mut builder = TableBuilder::new(&["What is your sex?".to_string(), "Age_grp".to_string()])?;
/// builder.add_row_simple(&["Female", "18-35"])?;
/// builder.add_row_simple(&["Male", ""])?;
/// let table = builder.build();
///
/// assert_eq!(table.num_rows(), 2);
/// assert_eq!(table.value(1, "Age_grp")?, None);
/// # Ok::<(), StatsError>(())
/// ```
pub struct TableBuilder {
    pub(crate) _names: Vec<String>,
    pub(crate) _values: Vec<Vec<Option<String>>>,
    pub(crate) _missing_markers: Vec<String>,
    pub(crate) _num_rows: usize,
}

impl TableBuilder {
    pub fn new(headers: &[String]) -> Result<TableBuilder, StatsError> {
        if headers.is_empty() {
            return Err(StatsError::EmptyHeader);
        }
        Ok(TableBuilder {
            _names: disambiguate_names(headers),
            _values: headers.iter().map(|_| Vec::new()).collect(),
            _missing_markers: DEFAULT_MISSING_MARKERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            _num_rows: 0,
        })
    }

    /// Replaces the list of markers for missing cells.
    pub fn missing_markers(self, markers: &[String]) -> TableBuilder {
        TableBuilder {
            _missing_markers: markers.to_vec(),
            ..self
        }
    }

    /// Adds a row of raw cells, as read from a file.
    ///
    /// Cells that are blank or equal to one of the missing markers are
    /// recorded as missing.
    pub fn add_row_simple<S: AsRef<str>>(&mut self, cells: &[S]) -> Result<(), StatsError> {
        let row: Vec<Option<String>> = cells
            .iter()
            .map(|c| {
                let s = c.as_ref();
                if s.trim().is_empty() || self._missing_markers.iter().any(|m| m == s) {
                    None
                } else {
                    Some(s.to_string())
                }
            })
            .collect();
        self.add_row(row)
    }

    /// Adds a row in which the missing cells are already identified.
    pub fn add_row(&mut self, cells: Vec<Option<String>>) -> Result<(), StatsError> {
        if cells.len() != self._names.len() {
            return Err(StatsError::RaggedRow {
                row: self._num_rows + 1,
                expected: self._names.len(),
                found: cells.len(),
            });
        }
        for (col, cell) in self._values.iter_mut().zip(cells) {
            col.push(cell);
        }
        self._num_rows += 1;
        Ok(())
    }

    pub fn num_rows(&self) -> usize {
        self._num_rows
    }

    pub fn build(self) -> ResponseTable {
        let columns = self
            ._names
            .into_iter()
            .zip(self._values)
            .map(|(name, values)| Column { name, values })
            .collect();
        ResponseTable {
            columns,
            num_rows: self._num_rows,
        }
    }
}

// Later occurrences of a header get a numeric suffix: "Q", "Q.1", "Q.2"
fn disambiguate_names(headers: &[String]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for h in headers {
        let mut candidate = h.clone();
        let mut suffix = 1;
        while names.contains(&candidate) {
            candidate = format!("{}.{}", h, suffix);
            suffix += 1;
        }
        names.push(candidate);
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_column(cells: &[&str]) -> ResponseTable {
        let mut builder = TableBuilder::new(&["q".to_string()]).unwrap();
        for c in cells {
            builder.add_row_simple(&[*c]).unwrap();
        }
        builder.build()
    }

    #[test]
    fn spreadsheet_markers_are_missing() {
        let markers = ["<NA>", "#NA", "-NaN", "-nan", "#N/A N/A", "1.#QNAN", "NULL", "  "];
        let table = single_column(&markers);
        for row in 0..markers.len() {
            assert_eq!(table.value(row, "q").unwrap(), None, "row {}", row);
        }
    }

    #[test]
    fn none_is_an_answer() {
        let table = single_column(&["None", " Roma "]);
        assert_eq!(table.value(0, "q").unwrap(), Some("None"));
        assert_eq!(table.value(1, "q").unwrap(), Some(" Roma "));
    }

    #[test]
    fn duplicated_names() {
        let headers: Vec<String> = ["Q", "Q", "R", "Q"].iter().map(|s| s.to_string()).collect();
        assert_eq!(disambiguate_names(&headers), vec!["Q", "Q.1", "R", "Q.2"]);
    }
}
