/*!
Aggregation core for survey dashboards.

This crate holds the computations behind a dashboard of survey responses: selecting
respondents by demographic facets, counting single answers, tallying the options of
"select all that apply" questions, binning numeric answers and cross-tabulating
several questions. It does not perform any I/O: the tables are built with the
[`TableBuilder`].

See the [`manual`] for the matching rules of the multi-answer questions and the
[`quick_start`] for an end to end example.
*/

mod builder;
mod config;
pub mod manual;
pub mod quick_start;

use log::{debug, info};

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

pub use crate::builder::{TableBuilder, DEFAULT_MISSING_MARKERS};
pub use crate::config::*;

// ********* Facets **********

/// The selection that accepts every observed value of the given facet columns.
///
/// Missing answers are accepted for a facet if the column has any, so that
/// filtering with this selection returns the whole table.
pub fn default_selection(
    table: &ResponseTable,
    facets: &[&str],
) -> Result<FacetSelection, StatsError> {
    let view = table.full_view();
    let mut selection = FacetSelection::new();
    for facet in facets {
        let accepted: HashSet<String> = distinct_values(&view, facet)?.into_iter().collect();
        let include_missing = view.column_values(facet)?.any(|v| v.is_none());
        debug!(
            "default_selection: facet {:?}: {} values, missing: {}",
            facet,
            accepted.len(),
            include_missing
        );
        selection.set(
            facet,
            FacetFilter {
                accepted,
                include_missing,
            },
        );
    }
    Ok(selection)
}

/// The distinct answers of a column, in order of first appearance.
///
/// These are the options presented to the analyst for a facet.
pub fn distinct_values(view: &FilteredView, column: &str) -> Result<Vec<String>, StatsError> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut res: Vec<String> = Vec::new();
    for v in view.column_values(column)?.flatten() {
        if seen.insert(v) {
            res.push(v.to_string());
        }
    }
    Ok(res)
}

/// Keeps the rows that match every facet of the selection.
///
/// A facet column that is absent from the table is an error. An empty result
/// is not.
pub fn filter<'a>(
    table: &'a ResponseTable,
    selections: &FacetSelection,
) -> Result<FilteredView<'a>, StatsError> {
    let mut constraints: Vec<(&Column, &FacetFilter)> = Vec::new();
    for (name, ff) in selections.iter() {
        constraints.push((table.column(name)?, ff));
    }
    let rows: Vec<usize> = (0..table.num_rows())
        .filter(|idx| {
            constraints
                .iter()
                .all(|(col, ff)| ff.accepts(col.values[*idx].as_deref()))
        })
        .collect();
    info!(
        "filter: kept {} rows out of {} with {} facets",
        rows.len(),
        table.num_rows(),
        constraints.len()
    );
    Ok(FilteredView { table, rows })
}

// ********* Single and multiple answers **********

/// Counts the answers of a single-answer question.
///
/// Missing answers are not counted. The labels are sorted by decreasing count,
/// and by order of first appearance for equal counts.
pub fn count_by_category(view: &FilteredView, column: &str) -> Result<Tally, StatsError> {
    let mut counts: Vec<(String, u64)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for v in view.column_values(column)?.flatten() {
        if let Some(pos) = positions.get(v) {
            counts[*pos].1 += 1;
        } else {
            positions.insert(v, counts.len());
            counts.push((v.to_string(), 1));
        }
    }
    // The sort is stable: ties stay in order of appearance.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    debug!("count_by_category: {:?}: {:?}", column, counts);
    Ok(Tally { counts })
}

/// Tallies the options of a "select all that apply" question.
///
/// A response is counted for every option of the catalog whose text appears
/// anywhere in the response. All the options of the catalog are returned, in
/// catalog order, including the ones that were never picked.
///
/// The match is a plain substring search: an option that is contained in
/// another option is also counted for the longer one. See the [`manual`].
pub fn tally_options(
    view: &FilteredView,
    column: &str,
    catalog: &[&str],
) -> Result<Tally, StatsError> {
    let mut counts: Vec<(String, u64)> = catalog.iter().map(|o| (o.to_string(), 0)).collect();
    for response in view.column_values(column)?.flatten() {
        for (option, count) in counts.iter_mut() {
            if response.contains(option.as_str()) {
                *count += 1;
            }
        }
    }
    debug!("tally_options: {:?}: {:?}", column, counts);
    Ok(Tally { counts })
}

/// The options of the catalog found in a response, using an exact match.
///
/// The response is split on commas and semicolons. Each piece is trimmed and
/// kept if it is exactly one of the options. An option is returned at most
/// once, in order of appearance.
///
/// Unlike [`tally_options`], a piece that merely contains an option does not
/// match.
pub fn extract_matched_categories<'c>(cell_text: &str, catalog: &[&'c str]) -> Vec<&'c str> {
    let mut matched: Vec<&'c str> = Vec::new();
    for token in cell_text.split(|c: char| c == ',' || c == ';') {
        let token = token.trim();
        if let Some(option) = catalog.iter().find(|o| **o == token) {
            if !matched.contains(option) {
                matched.push(*option);
            }
        }
    }
    matched
}

// ********* Numeric answers **********

/// Interprets a cell as a number.
pub fn parse_numeric(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|x| x.is_finite())
}

/// The numeric values of a column. Missing cells and cells that are not
/// numbers are dropped.
pub fn numeric_values(view: &FilteredView, column: &str) -> Result<Vec<f64>, StatsError> {
    let mut res: Vec<f64> = Vec::new();
    let mut dropped = 0;
    for v in view.column_values(column)?.flatten() {
        match parse_numeric(v) {
            Some(x) => res.push(x),
            None => dropped += 1,
        }
    }
    if dropped > 0 {
        debug!(
            "numeric_values: {:?}: dropped {} non-numeric cells",
            column, dropped
        );
    }
    Ok(res)
}

/// Number of bins for `n` values, following Sturges' rule: ceil(1 + log2(n)).
pub fn sturges_bin_count(n: usize) -> usize {
    (1.0 + (n as f64).log2()).ceil() as usize
}

/// Bins the numeric values of a column into equal-width bins.
///
/// The number of bins is given by [`sturges_bin_count`], and the bins span the
/// range between the smallest and the largest value. If all the values are
/// equal, the range is widened by 0.5 on each side.
pub fn histogram(view: &FilteredView, column: &str) -> Result<Vec<HistogramBin>, StatsError> {
    let data = numeric_values(view, column)?;
    if data.is_empty() {
        return Err(StatsError::EmptyInput(column.to_string()));
    }
    let num_bins = sturges_bin_count(data.len());
    let min = data.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let (lo, hi) = if min == max {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    };
    let width = (hi - lo) / (num_bins as f64);

    let mut bins: Vec<HistogramBin> = (0..num_bins)
        .map(|idx| HistogramBin {
            lower: lo + width * (idx as f64),
            upper: if idx + 1 == num_bins {
                hi
            } else {
                lo + width * ((idx + 1) as f64)
            },
            count: 0,
        })
        .collect();
    for x in data.iter() {
        // The maximum falls on the upper edge of the last bin.
        let mut idx = (((x - lo) / width).floor() as usize).min(num_bins - 1);
        // Rounding in the division may disagree with the reported edges.
        if idx > 0 && *x < bins[idx].lower {
            idx -= 1;
        } else if idx + 1 < num_bins && *x >= bins[idx + 1].lower {
            idx += 1;
        }
        bins[idx].count += 1;
    }
    debug!(
        "histogram: {:?}: {} values in {} bins",
        column,
        data.len(),
        num_bins
    );
    Ok(bins)
}

/// Number of rows in the view.
pub fn count(view: &FilteredView) -> usize {
    view.len()
}

/// The mean of the numeric values of a column, if there is any.
pub fn mean(view: &FilteredView, column: &str) -> Result<Option<f64>, StatsError> {
    let data = numeric_values(view, column)?;
    if data.is_empty() {
        return Ok(None);
    }
    Ok(Some(data.iter().sum::<f64>() / (data.len() as f64)))
}

/// The largest numeric value of a column, if there is any.
pub fn max(view: &FilteredView, column: &str) -> Result<Option<f64>, StatsError> {
    let data = numeric_values(view, column)?;
    Ok(data.into_iter().reduce(f64::max))
}

// ********* Cross-tabulations **********

/// The percentage of successful answers for each pair of (row value, column value).
///
/// Only the rows in which the three columns are answered are considered. The
/// labels are the observed values, sorted. A pair with no response is reported
/// as `None`.
pub fn proportion_table<P>(
    view: &FilteredView,
    row_column: &str,
    col_column: &str,
    target_column: &str,
    success: P,
) -> Result<ProportionTable, StatsError>
where
    P: Fn(&str) -> bool,
{
    let row_values = view.column_values(row_column)?;
    let col_values = view.column_values(col_column)?;
    let target_values = view.column_values(target_column)?;

    // (successes, total) per cell
    let mut cells: HashMap<(&str, &str), (u64, u64)> = HashMap::new();
    let mut row_labels: BTreeSet<&str> = BTreeSet::new();
    let mut col_labels: BTreeSet<&str> = BTreeSet::new();
    for ((r, c), t) in row_values.zip(col_values).zip(target_values) {
        if let (Some(r), Some(c), Some(t)) = (r, c, t) {
            row_labels.insert(r);
            col_labels.insert(c);
            let cell = cells.entry((r, c)).or_insert((0, 0));
            if success(t) {
                cell.0 += 1;
            }
            cell.1 += 1;
        }
    }

    let matrix: Vec<Vec<Option<f64>>> = row_labels
        .iter()
        .map(|r| {
            col_labels
                .iter()
                .map(|c| {
                    cells
                        .get(&(*r, *c))
                        .map(|(s, n)| 100.0 * (*s as f64) / (*n as f64))
                })
                .collect()
        })
        .collect();
    debug!(
        "proportion_table: {} x {} cells for {:?} by {:?}",
        row_labels.len(),
        col_labels.len(),
        row_column,
        col_column
    );
    Ok(ProportionTable {
        row_labels: row_labels.iter().map(|s| s.to_string()).collect(),
        col_labels: col_labels.iter().map(|s| s.to_string()).collect(),
        cells: matrix,
    })
}

/// Counts the rows for each observed combination of the group columns and the
/// value column.
///
/// The keys are the group values followed by the value, sorted. Rows with a
/// missing answer in any of these columns are dropped.
pub fn grouped_counts(
    view: &FilteredView,
    group_columns: &[&str],
    value_column: &str,
) -> Result<GroupedCounts, StatsError> {
    let mut names: Vec<&str> = group_columns.to_vec();
    names.push(value_column);
    let columns = resolve_columns(view, &names)?;

    let mut counts: BTreeMap<Vec<&str>, u64> = BTreeMap::new();
    for idx in view.rows() {
        if let Some(key) = row_key(&columns, *idx) {
            *counts.entry(key).or_insert(0) += 1;
        }
    }
    Ok(to_grouped_counts(counts))
}

/// Counts the rows for each combination of the group columns and of the
/// categories matched in the category column.
///
/// A response contributes once for each of the categories found by
/// [`extract_matched_categories`]. A response without any match is dropped.
pub fn grouped_category_counts(
    view: &FilteredView,
    group_columns: &[&str],
    category_column: &str,
    catalog: &[&str],
) -> Result<GroupedCounts, StatsError> {
    let groups = resolve_columns(view, group_columns)?;
    let category = view.table().column(category_column)?;

    let mut counts: BTreeMap<Vec<&str>, u64> = BTreeMap::new();
    let mut dropped = 0;
    for idx in view.rows() {
        let (key, text) = match (row_key(&groups, *idx), category.values[*idx].as_deref()) {
            (Some(key), Some(text)) => (key, text),
            _ => continue,
        };
        let matched = extract_matched_categories(text, catalog);
        if matched.is_empty() {
            dropped += 1;
        }
        for label in matched {
            let mut k = key.clone();
            k.push(label);
            *counts.entry(k).or_insert(0) += 1;
        }
    }
    if dropped > 0 {
        debug!(
            "grouped_category_counts: {:?}: {} responses without any known category",
            category_column, dropped
        );
    }
    Ok(to_grouped_counts(counts))
}

fn resolve_columns<'a>(
    view: &FilteredView<'a>,
    names: &[&str],
) -> Result<Vec<&'a Column>, StatsError> {
    names.iter().map(|n| view.table().column(n)).collect()
}

// None if any of the cells is missing.
fn row_key<'a>(columns: &[&'a Column], idx: usize) -> Option<Vec<&'a str>> {
    columns.iter().map(|c| c.values[idx].as_deref()).collect()
}

fn to_grouped_counts(counts: BTreeMap<Vec<&str>, u64>) -> GroupedCounts {
    GroupedCounts {
        groups: counts
            .into_iter()
            .map(|(k, c)| (k.iter().map(|s| s.to_string()).collect(), c))
            .collect(),
    }
}
