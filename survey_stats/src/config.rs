// ********* Input data structures ***********

use std::collections::HashSet;
use std::error::Error;
use std::fmt::Display;

/// A single survey question: the header text and one cell per respondent.
///
/// A cell is `None` when the respondent left the question unanswered
/// (or the export marked it as missing).
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Column {
    pub name: String,
    pub values: Vec<Option<String>>,
}

/// The full set of responses, one row per respondent.
///
/// Invariant: all the columns have the same length.
/// A table is never modified after it has been built. Use the
/// [`crate::TableBuilder`] to create one.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct ResponseTable {
    pub(crate) columns: Vec<Column>,
    pub(crate) num_rows: usize,
}

impl ResponseTable {
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// The column names, in the order of the source.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    pub fn has_columns(&self, names: &[&str]) -> bool {
        names.iter().all(|n| self.has_column(n))
    }

    pub fn column(&self, name: &str) -> Result<&Column, StatsError> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| StatsError::MissingColumn(name.to_string()))
    }

    pub fn value(&self, row: usize, column: &str) -> Result<Option<&str>, StatsError> {
        let col = self.column(column)?;
        Ok(col.values.get(row).and_then(|v| v.as_deref()))
    }

    /// A view over all the rows of the table.
    pub fn full_view(&self) -> FilteredView<'_> {
        FilteredView {
            table: self,
            rows: (0..self.num_rows).collect(),
        }
    }
}

/// The accepted values for one facet column.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct FacetFilter {
    pub accepted: HashSet<String>,
    /// Whether a respondent who did not answer this question is kept.
    pub include_missing: bool,
}

impl FacetFilter {
    pub fn from_values(values: &[String]) -> FacetFilter {
        FacetFilter {
            accepted: values.iter().cloned().collect(),
            include_missing: false,
        }
    }

    pub fn accepts(&self, value: Option<&str>) -> bool {
        match value {
            Some(v) => self.accepted.contains(v),
            None => self.include_missing,
        }
    }
}

/// The current selection of the analyst, for each facet column.
///
/// Facets are kept in insertion order. A column that is not part of the
/// selection does not constrain the rows.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct FacetSelection {
    pub(crate) facets: Vec<(String, FacetFilter)>,
}

impl FacetSelection {
    pub fn new() -> FacetSelection {
        FacetSelection { facets: Vec::new() }
    }

    /// Adds the values to the accepted set of the column.
    ///
    /// Calling it several times for the same column accumulates the values.
    pub fn select(mut self, column: &str, values: &[String]) -> FacetSelection {
        match self.facets.iter_mut().find(|(name, _)| name == column) {
            Some((_, ff)) => ff.accepted.extend(values.iter().cloned()),
            None => self
                .facets
                .push((column.to_string(), FacetFilter::from_values(values))),
        }
        self
    }

    /// Replaces the filter of a column.
    pub fn set(&mut self, column: &str, filter: FacetFilter) {
        match self.facets.iter_mut().find(|(name, _)| name == column) {
            Some((_, ff)) => *ff = filter,
            None => self.facets.push((column.to_string(), filter)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&FacetFilter> {
        self.facets
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, ff)| ff)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FacetFilter)> {
        self.facets.iter().map(|(name, ff)| (name.as_str(), ff))
    }

    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }
}

/// The rows of a table that satisfy a facet selection.
///
/// Row indices point into the parent table and are kept in source order.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct FilteredView<'a> {
    pub(crate) table: &'a ResponseTable,
    pub(crate) rows: Vec<usize>,
}

impl<'a> FilteredView<'a> {
    pub fn table(&self) -> &'a ResponseTable {
        self.table
    }

    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The cells of a column for the rows of this view, in order.
    pub fn column_values(
        &self,
        column: &str,
    ) -> Result<impl Iterator<Item = Option<&'a str>> + '_, StatsError> {
        let col: &'a Column = self.table.column(column)?;
        Ok(self.rows.iter().map(move |idx| col.values[*idx].as_deref()))
    }
}

// ******** Output data structures *********

/// Counts associated to labels.
///
/// The order of the labels depends on the aggregation that produced it.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct Tally {
    pub counts: Vec<(String, u64)>,
}

impl Tally {
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|(_, c)| c).sum()
    }

    pub fn get(&self, label: &str) -> Option<u64> {
        self.counts
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, c)| *c)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.counts.iter().map(|(l, _)| l.as_str()).collect()
    }

    /// The same counts, largest first. Equal counts keep their current order.
    pub fn sorted_by_count(&self) -> Tally {
        let mut counts = self.counts.clone();
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        Tally { counts }
    }
}

/// One bin of a histogram. The lower bound is inclusive, the upper bound is
/// exclusive except for the last bin.
#[derive(PartialEq, Debug, Clone)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: u64,
}

/// Percentages for each pair of (row label, column label).
///
/// A cell is `None` when no response falls in it, which is different from a
/// percentage of zero.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct ProportionTable {
    pub row_labels: Vec<String>,
    pub col_labels: Vec<String>,
    pub cells: Vec<Vec<Option<f64>>>,
}

impl ProportionTable {
    pub fn get(&self, row: &str, col: &str) -> Option<f64> {
        let r = self.row_labels.iter().position(|l| l == row)?;
        let c = self.col_labels.iter().position(|l| l == col)?;
        self.cells[r][c]
    }
}

/// Number of responses for each observed combination of values.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct GroupedCounts {
    pub groups: Vec<(Vec<String>, u64)>,
}

impl GroupedCounts {
    pub fn get(&self, key: &[&str]) -> Option<u64> {
        self.groups
            .iter()
            .find(|(k, _)| k.len() == key.len() && k.iter().zip(key).all(|(a, b)| a == b))
            .map(|(_, c)| *c)
    }

    pub fn total(&self) -> u64 {
        self.groups.iter().map(|(_, c)| c).sum()
    }
}

/// Errors that prevent an aggregation from completing.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum StatsError {
    /// The table does not contain the requested column.
    MissingColumn(String),
    /// No value is left in the column after coercion.
    EmptyInput(String),
    /// A row does not have the same number of cells as the header.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    EmptyHeader,
}

impl Error for StatsError {}

impl Display for StatsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsError::MissingColumn(name) => write!(f, "missing column {:?}", name),
            StatsError::EmptyInput(name) => {
                write!(f, "no numeric value in column {:?}", name)
            }
            StatsError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} cells, expected {}",
                row, found, expected
            ),
            StatsError::EmptyHeader => write!(f, "the table has no column"),
        }
    }
}
