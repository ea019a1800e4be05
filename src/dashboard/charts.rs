// Chart-ready records for the charting front end.

use serde::Serialize;

use crate::dashboard::*;

#[derive(PartialEq, Debug, Clone, Serialize)]
pub struct Slice {
    pub label: String,
    pub count: u64,
    pub percent: f64,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize)]
pub struct Bar {
    pub label: String,
    pub count: u64,
}

#[derive(PartialEq, Debug, Clone, Serialize)]
pub struct Bin {
    pub lower: f64,
    pub upper: f64,
    pub count: u64,
}

/// A bar of a facet grid: one panel per facet, grouped bars colored by answer.
#[derive(Eq, PartialEq, Debug, Clone, Serialize)]
pub struct GridBar {
    pub facet: String,
    pub x: String,
    pub color: String,
    pub count: u64,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize)]
pub struct Leaf {
    pub path: Vec<String>,
    pub count: u64,
}

#[derive(PartialEq, Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum ChartRecord {
    #[serde(rename = "pie")]
    Pie {
        title: String,
        column: String,
        slices: Vec<Slice>,
    },
    #[serde(rename = "bar")]
    Bar {
        title: String,
        column: String,
        bars: Vec<Bar>,
    },
    #[serde(rename = "histogram")]
    Histogram {
        title: String,
        column: String,
        bins: Vec<Bin>,
    },
    /// Rows of `values` follow `y_labels`, columns follow `x_labels`.
    #[serde(rename = "heatmap")]
    Heatmap {
        title: String,
        #[serde(rename = "xTitle")]
        x_title: String,
        #[serde(rename = "yTitle")]
        y_title: String,
        #[serde(rename = "xLabels")]
        x_labels: Vec<String>,
        #[serde(rename = "yLabels")]
        y_labels: Vec<String>,
        values: Vec<Vec<Option<f64>>>,
    },
    #[serde(rename = "facetGrid")]
    FacetGrid { title: String, bars: Vec<GridBar> },
    #[serde(rename = "treemap")]
    Treemap { title: String, leaves: Vec<Leaf> },
}

impl ChartRecord {
    pub fn title(&self) -> &str {
        match self {
            ChartRecord::Pie { title, .. }
            | ChartRecord::Bar { title, .. }
            | ChartRecord::Histogram { title, .. }
            | ChartRecord::Heatmap { title, .. }
            | ChartRecord::FacetGrid { title, .. }
            | ChartRecord::Treemap { title, .. } => title,
        }
    }
}

/// Halves go to the even digit, like the rounding of numpy and Python.
pub fn round_to_tenth(x: f64) -> f64 {
    (x * 10.0).round_ties_even() / 10.0
}

/// Slices in the order of the tally, with their share of the answers.
pub fn pie_chart(title: &str, column: &str, tally: &Tally) -> ChartRecord {
    let total = tally.total();
    let slices = tally
        .counts
        .iter()
        .map(|(label, count)| Slice {
            label: label.clone(),
            count: *count,
            percent: if total == 0 {
                0.0
            } else {
                round_to_tenth(100.0 * (*count as f64) / (total as f64))
            },
        })
        .collect();
    ChartRecord::Pie {
        title: title.to_string(),
        column: column.to_string(),
        slices,
    }
}

/// Bars sorted by decreasing count. Equal counts keep the catalog order.
pub fn bar_chart(title: &str, column: &str, tally: &Tally) -> ChartRecord {
    let bars = tally
        .sorted_by_count()
        .counts
        .into_iter()
        .map(|(label, count)| Bar { label, count })
        .collect();
    ChartRecord::Bar {
        title: title.to_string(),
        column: column.to_string(),
        bars,
    }
}

pub fn histogram_chart(title: &str, column: &str, bins: &[HistogramBin]) -> ChartRecord {
    ChartRecord::Histogram {
        title: title.to_string(),
        column: column.to_string(),
        bins: bins
            .iter()
            .map(|b| Bin {
                lower: b.lower,
                upper: b.upper,
                count: b.count,
            })
            .collect(),
    }
}

/// The rows of the table are drawn along the y axis.
pub fn heatmap_chart(
    title: &str,
    x_title: &str,
    y_title: &str,
    table: &ProportionTable,
) -> ChartRecord {
    ChartRecord::Heatmap {
        title: title.to_string(),
        x_title: x_title.to_string(),
        y_title: y_title.to_string(),
        x_labels: table.col_labels.clone(),
        y_labels: table.row_labels.clone(),
        values: table.cells.clone(),
    }
}

/// Expects keys of the form (facet, x, color).
pub fn facet_grid_chart(title: &str, counts: &GroupedCounts) -> ChartRecord {
    let bars = counts
        .groups
        .iter()
        .filter_map(|(key, count)| match key.as_slice() {
            [facet, x, color] => Some(GridBar {
                facet: facet.clone(),
                x: x.clone(),
                color: color.clone(),
                count: *count,
            }),
            _ => {
                warn!("facet_grid_chart: ignoring key {:?}", key);
                None
            }
        })
        .collect();
    ChartRecord::FacetGrid {
        title: title.to_string(),
        bars,
    }
}

pub fn treemap_chart(title: &str, counts: &GroupedCounts) -> ChartRecord {
    ChartRecord::Treemap {
        title: title.to_string(),
        leaves: counts
            .groups
            .iter()
            .map(|(path, count)| Leaf {
                path: path.clone(),
                count: *count,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tally(counts: &[(&str, u64)]) -> Tally {
        Tally {
            counts: counts.iter().map(|(l, c)| (l.to_string(), *c)).collect(),
        }
    }

    #[test]
    fn pie_percentages() {
        let chart = pie_chart("Sex", "What is your sex?", &tally(&[("Female", 2), ("Male", 1)]));
        match chart {
            ChartRecord::Pie { slices, .. } => {
                assert_eq!(slices[0].percent, 66.7);
                assert_eq!(slices[1].percent, 33.3);
            }
            _ => panic!("not a pie chart"),
        }
    }

    #[test]
    fn bars_sorted_by_count() {
        let chart = bar_chart(
            "Medications",
            "Necessary medications?",
            &tally(&[("No difficulties", 0), ("High costs", 2), ("Lack of availability", 0)]),
        );
        match chart {
            ChartRecord::Bar { bars, .. } => {
                let labels: Vec<&str> = bars.iter().map(|b| b.label.as_str()).collect();
                assert_eq!(
                    labels,
                    vec!["High costs", "No difficulties", "Lack of availability"]
                );
            }
            _ => panic!("not a bar chart"),
        }
    }

    #[test]
    fn heatmap_json() {
        let table = ProportionTable {
            row_labels: vec!["Roma".to_string()],
            col_labels: vec!["18-35".to_string(), "36-59".to_string()],
            cells: vec![vec![Some(25.0), None]],
        };
        let js = serde_json::to_value(heatmap_chart("Access", "Age Group", "Ethnicity", &table))
            .unwrap();
        assert_eq!(
            js,
            json!({
                "type": "heatmap",
                "title": "Access",
                "xTitle": "Age Group",
                "yTitle": "Ethnicity",
                "xLabels": ["18-35", "36-59"],
                "yLabels": ["Roma"],
                "values": [[25.0, null]]
            })
        );
    }

    #[test]
    fn facet_grid_bars() {
        let counts = GroupedCounts {
            groups: vec![
                (
                    vec!["City".to_string(), "Roma".to_string(), "Yes".to_string()],
                    2,
                ),
                (
                    vec!["Village".to_string(), "Roma".to_string(), "No".to_string()],
                    1,
                ),
            ],
        };
        match facet_grid_chart("Access", &counts) {
            ChartRecord::FacetGrid { bars, .. } => {
                assert_eq!(bars.len(), 2);
                assert_eq!(bars[0].facet, "City");
                assert_eq!(bars[1].color, "No");
            }
            _ => panic!("not a facet grid"),
        }
    }

    #[test]
    fn titles() {
        let chart = treemap_chart("Problems", &GroupedCounts::default());
        assert_eq!(chart.title(), "Problems");
        assert_eq!(round_to_tenth(3.25), 3.2);
        assert_eq!(round_to_tenth(2.25), 2.2);
        assert_eq!(round_to_tenth(2.75), 2.8);
        assert_eq!(round_to_tenth(2.0), 2.0);
    }
}
