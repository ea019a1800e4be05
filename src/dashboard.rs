use log::{debug, info, warn};

use snafu::{prelude::*, Snafu};
use std::fs;

use serde::Serialize;
use serde_json::Value as JSValue;
use survey_stats::*;
use text_diff::print_diff;

use crate::args::Args;
use crate::dashboard::charts::*;
use crate::dashboard::config_reader::*;
use crate::dashboard::loader::{source_from_settings, Loader};
use crate::dashboard::questionnaire::{
    required_columns, ChartDefinition, ChartKind, ACCESSED_HEALTHCARE, ACCOMMODATION, AGE,
    AGE_GROUP, CHARTS, ETHNICITY, FACETS, HEALTHCARE_PROBLEMS, HEALTHCARE_PROBLEMS_OPTIONS,
    HOUSEHOLD_CHILDREN, HOUSEHOLD_ELDERLY, HOUSEHOLD_SIZE,
};

mod charts;
mod config_reader;
mod io_common;
mod io_csv;
mod io_remote;
mod io_xlsx;
mod loader;
mod questionnaire;

#[derive(Debug, Snafu)]
pub enum DashboardError {
    // Data source
    #[snafu(display("Error fetching {url}: {kind}"))]
    FetchingRemote { kind: String, url: String },
    #[snafu(display("The server answered with status {status} for {url}"))]
    HttpStatus { status: u16, url: String },
    #[snafu(display("Error reading the answer from {url}"))]
    ReadingRemote { source: std::io::Error, url: String },
    #[snafu(display("The document at {url} is not a CSV export. Is it shared publicly?"))]
    NotCsv { url: String },
    #[snafu(display("No document id: set the environment variable {variable} or pass --doc-id"))]
    MissingDocumentId { variable: String },
    #[snafu(display("No input file given for the provider {provider}"))]
    MissingInputPath { provider: String },
    #[snafu(display("Error opening file {path}"))]
    OpeningFile {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("The responses are not encoded in UTF-8"))]
    NotUtf8 { source: std::string::FromUtf8Error },
    #[snafu(display("Error parsing the CSV responses"))]
    ParsingCsv { source: csv::Error },
    #[snafu(display("The responses have no header"))]
    EmptyPayload {},
    #[snafu(display("Error opening file {path}"))]
    OpeningExcel {
        source: calamine::XlsxError,
        path: String,
    },
    #[snafu(display("Missing worksheet {name}"))]
    MissingWorksheet { name: String },
    #[snafu(display("The workbook has no worksheet or the worksheet is empty"))]
    EmptyExcel {},
    #[snafu(display("Error building the table of responses"))]
    BuildingTable { source: StatsError },

    // Configuration and outputs
    #[snafu(display("Error opening file {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing JSON"))]
    ParsingJson { source: serde_json::Error },
    #[snafu(display("Error writing file {path}"))]
    WritingOutput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Invalid filter {filter:?}: expected <question>=<answer>"))]
    InvalidFilter { filter: String },

    #[snafu(display("Error computing the dashboard"))]
    Stats { source: StatsError },
    #[snafu(display("Difference detected between the dashboard and the reference {path}"))]
    ReferenceMismatch { path: String },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

impl DashboardError {
    /// True if the responses could not be fetched or parsed.
    pub fn is_data_source(&self) -> bool {
        matches!(
            self,
            DashboardError::FetchingRemote { .. }
                | DashboardError::HttpStatus { .. }
                | DashboardError::ReadingRemote { .. }
                | DashboardError::NotCsv { .. }
                | DashboardError::MissingDocumentId { .. }
                | DashboardError::MissingInputPath { .. }
                | DashboardError::OpeningFile { .. }
                | DashboardError::NotUtf8 { .. }
                | DashboardError::ParsingCsv { .. }
                | DashboardError::EmptyPayload { .. }
                | DashboardError::OpeningExcel { .. }
                | DashboardError::MissingWorksheet { .. }
                | DashboardError::EmptyExcel { .. }
                | DashboardError::BuildingTable { .. }
        )
    }
}

pub type DashboardResult<T> = Result<T, DashboardError>;

/// The headline numbers of the selected responses.
///
/// Averages are rounded to one decimal. A value is absent when no response
/// has a numeric answer.
#[derive(PartialEq, Debug, Clone, Serialize)]
pub struct SummaryStatistics {
    #[serde(rename = "totalSubmissions")]
    pub total_submissions: usize,
    #[serde(rename = "avgHouseholdSize")]
    pub avg_household_size: Option<f64>,
    #[serde(rename = "maxHouseholdSize")]
    pub max_household_size: Option<f64>,
    #[serde(rename = "avgChildren")]
    pub avg_children: Option<f64>,
    #[serde(rename = "avgElderly")]
    pub avg_elderly: Option<f64>,
    #[serde(rename = "avgAge")]
    pub avg_age: Option<f64>,
}

/// The state of one facet: the answers that can be selected and those that are.
#[derive(Eq, PartialEq, Debug, Clone, Serialize)]
pub struct FacetReport {
    pub column: String,
    pub label: String,
    pub options: Vec<String>,
    pub selected: Vec<String>,
    #[serde(rename = "includeMissing")]
    pub include_missing: bool,
}

#[derive(PartialEq, Debug, Clone, Serialize)]
pub struct Dashboard {
    pub summary: SummaryStatistics,
    pub filters: Vec<FacetReport>,
    pub charts: Vec<ChartRecord>,
    /// Titles of the charts that could not be drawn with the available questions.
    pub omitted: Vec<String>,
}

pub fn summarize(view: &FilteredView) -> DashboardResult<SummaryStatistics> {
    let avg = |column: &str| -> DashboardResult<Option<f64>> {
        Ok(mean(view, column).context(StatsSnafu {})?.map(round_to_tenth))
    };
    Ok(SummaryStatistics {
        total_submissions: count(view),
        avg_household_size: avg(HOUSEHOLD_SIZE)?,
        max_household_size: max(view, HOUSEHOLD_SIZE).context(StatsSnafu {})?,
        avg_children: avg(HOUSEHOLD_CHILDREN)?,
        avg_elderly: avg(HOUSEHOLD_ELDERLY)?,
        avg_age: avg(AGE)?,
    })
}

fn display_value(x: &Option<f64>) -> String {
    match x {
        Some(v) => v.to_string(),
        None => "n/a".to_string(),
    }
}

pub fn summary_text(summary: &SummaryStatistics) -> String {
    [
        format!("Total Submissions: {}", summary.total_submissions),
        format!(
            "Avg household size: {}",
            display_value(&summary.avg_household_size)
        ),
        format!(
            "Max household size: {}",
            display_value(&summary.max_household_size)
        ),
        format!(
            "Avg # of children in a household: {}",
            display_value(&summary.avg_children)
        ),
        format!(
            "Avg # of elderly in a household: {}",
            display_value(&summary.avg_elderly)
        ),
        format!("Avg age: {}", display_value(&summary.avg_age)),
    ]
    .join("\n")
}

/// Parses the `<question>=<answer>` filters of the command line. The answers
/// given for the same question are grouped, in order of appearance.
pub fn parse_filters(filters: &[String]) -> DashboardResult<Vec<(String, Vec<String>)>> {
    let mut res: Vec<(String, Vec<String>)> = Vec::new();
    for f in filters {
        let (column, value) = match f.split_once('=') {
            Some((c, v)) if !c.trim().is_empty() => (c.trim(), v.trim()),
            _ => return InvalidFilterSnafu { filter: f.as_str() }.fail(),
        };
        match res.iter_mut().find(|(c, _)| c == column) {
            Some((_, values)) => values.push(value.to_string()),
            None => res.push((column.to_string(), vec![value.to_string()])),
        }
    }
    Ok(res)
}

/// The presets of the command line replace those of the config for the same
/// question.
fn merge_presets(
    config: &Option<Vec<FacetSettings>>,
    cli: Vec<(String, Vec<String>)>,
) -> Vec<(String, Vec<String>)> {
    let mut res: Vec<(String, Vec<String>)> = config
        .iter()
        .flatten()
        .map(|f| (f.column.clone(), f.selected.clone()))
        .collect();
    for (column, values) in cli {
        match res.iter_mut().find(|(c, _)| *c == column) {
            Some((_, v)) => *v = values,
            None => res.push((column, values)),
        }
    }
    res
}

/// The default selection of the facets, restricted by the presets.
pub fn build_selection(
    table: &ResponseTable,
    presets: &[(String, Vec<String>)],
) -> DashboardResult<FacetSelection> {
    let facets: Vec<&str> = FACETS.iter().map(|f| f.column).collect();
    let mut selection = default_selection(table, &facets).context(StatsSnafu {})?;
    for (column, values) in presets {
        debug!("build_selection: {:?} restricted to {:?}", column, values);
        selection.set(column, FacetFilter::from_values(values));
    }
    Ok(selection)
}

fn facet_reports(
    table: &ResponseTable,
    selection: &FacetSelection,
) -> DashboardResult<Vec<FacetReport>> {
    let full = table.full_view();
    let mut res: Vec<FacetReport> = Vec::new();
    for facet in FACETS {
        let options = distinct_values(&full, facet.column).context(StatsSnafu {})?;
        let (selected, include_missing) = match selection.get(facet.column) {
            Some(ff) => (
                options
                    .iter()
                    .filter(|o| ff.accepts(Some(o.as_str())))
                    .cloned()
                    .collect(),
                ff.include_missing,
            ),
            None => (options.clone(), true),
        };
        res.push(FacetReport {
            column: facet.column.to_string(),
            label: facet.label.to_string(),
            options,
            selected,
            include_missing,
        });
    }
    Ok(res)
}

pub fn render_chart(view: &FilteredView, chart: &ChartDefinition) -> DashboardResult<ChartRecord> {
    let record = match chart.kind {
        ChartKind::Pie => {
            let tally = count_by_category(view, chart.column).context(StatsSnafu {})?;
            pie_chart(chart.title, chart.column, &tally)
        }
        ChartKind::MultiAnswer(catalog) => {
            let tally = tally_options(view, chart.column, catalog).context(StatsSnafu {})?;
            bar_chart(chart.title, chart.column, &tally)
        }
        ChartKind::Histogram => match histogram(view, chart.column) {
            Ok(bins) => histogram_chart(chart.title, chart.column, &bins),
            Err(StatsError::EmptyInput(_)) => {
                warn!(
                    "render_chart: no numeric answer for {:?}, the histogram is empty",
                    chart.column
                );
                histogram_chart(chart.title, chart.column, &[])
            }
            Err(e) => return Err(e).context(StatsSnafu {}),
        },
    };
    Ok(record)
}

const HEATMAP_TITLE: &str = "Heatmap: Correlation Between Age, Ethnicity, and Healthcare Access";
const FACET_GRID_TITLE: &str = "Healthcare Access by Ethnicity and Location";
const TREEMAP_TITLE: &str = "Distribution of Healthcare Problems by Ethnicity and Age Group";

/// The charts that combine several questions. Each one is skipped when one of
/// its questions is not in the export.
fn correlation_charts(
    view: &FilteredView,
    omitted: &mut Vec<String>,
) -> DashboardResult<Vec<ChartRecord>> {
    let table = view.table();
    let mut res: Vec<ChartRecord> = Vec::new();

    if table.has_columns(&[AGE_GROUP, ETHNICITY, ACCESSED_HEALTHCARE]) {
        let pt = proportion_table(view, ETHNICITY, AGE_GROUP, ACCESSED_HEALTHCARE, |t| {
            t == "Yes"
        })
        .context(StatsSnafu {})?;
        res.push(heatmap_chart(HEATMAP_TITLE, "Age Group", "Ethnicity", &pt));
    } else {
        warn!("correlation_charts: skipping {:?}", HEATMAP_TITLE);
        omitted.push(HEATMAP_TITLE.to_string());
    }

    if table.has_columns(&[ETHNICITY, ACCOMMODATION, ACCESSED_HEALTHCARE]) {
        let counts = grouped_counts(view, &[ACCOMMODATION, ETHNICITY], ACCESSED_HEALTHCARE)
            .context(StatsSnafu {})?;
        res.push(facet_grid_chart(FACET_GRID_TITLE, &counts));
    } else {
        warn!("correlation_charts: skipping {:?}", FACET_GRID_TITLE);
        omitted.push(FACET_GRID_TITLE.to_string());
    }

    if table.has_columns(&[ETHNICITY, AGE_GROUP, HEALTHCARE_PROBLEMS]) {
        let counts = grouped_category_counts(
            view,
            &[ETHNICITY, AGE_GROUP],
            HEALTHCARE_PROBLEMS,
            HEALTHCARE_PROBLEMS_OPTIONS,
        )
        .context(StatsSnafu {})?;
        res.push(treemap_chart(TREEMAP_TITLE, &counts));
    } else {
        warn!("correlation_charts: skipping {:?}", TREEMAP_TITLE);
        omitted.push(TREEMAP_TITLE.to_string());
    }
    Ok(res)
}

/// Computes all the charts of the dashboard for the selected responses.
pub fn build_dashboard(
    table: &ResponseTable,
    selection: &FacetSelection,
) -> DashboardResult<Dashboard> {
    let missing: Vec<&str> = required_columns()
        .into_iter()
        .filter(|c| !table.has_column(c))
        .collect();
    if let Some(first) = missing.first() {
        warn!("build_dashboard: missing questions: {:?}", missing);
        return Err(StatsError::MissingColumn(first.to_string())).context(StatsSnafu {});
    }

    let view = filter(table, selection).context(StatsSnafu {})?;
    info!(
        "build_dashboard: {} responses selected out of {}",
        view.len(),
        table.num_rows()
    );
    let summary = summarize(&view)?;
    let filters = facet_reports(table, selection)?;

    let mut charts: Vec<ChartRecord> = Vec::new();
    for chart in CHARTS {
        let record = render_chart(&view, chart)?;
        debug!("build_dashboard: rendered {:?}", record.title());
        charts.push(record);
    }
    let mut omitted: Vec<String> = Vec::new();
    charts.extend(correlation_charts(&view, &mut omitted)?);

    Ok(Dashboard {
        summary,
        filters,
        charts,
        omitted,
    })
}

fn source_settings(config: &DashboardConfig, args: &Args) -> SourceSettings {
    let mut settings = config.source.clone();
    if let Some(input_type) = &args.input_type {
        settings.provider = input_type.clone();
    } else if args.input.is_some() && config.source.file_path.is_none() {
        // A local file without a type is read as CSV.
        settings.provider = "csv".to_string();
    }
    if let Some(input) = &args.input {
        settings.file_path = Some(input.clone());
    }
    if let Some(name) = &args.excel_worksheet_name {
        settings.excel_worksheet_name = Some(name.clone());
    }
    settings
}

fn check_reference(dashboard_js: &str, reference_path: &str) -> DashboardResult<()> {
    let reference = read_reference(reference_path)?;
    let pretty_reference = serde_json::to_string_pretty(&reference).context(ParsingJsonSnafu {})?;
    if pretty_reference != dashboard_js {
        warn!("Found differences with the reference dashboard");
        print_diff(pretty_reference.as_str(), dashboard_js, "\n");
        return ReferenceMismatchSnafu {
            path: reference_path,
        }
        .fail();
    }
    info!("check_reference: the dashboard matches {:?}", reference_path);
    Ok(())
}

pub fn run_dashboard(args: &Args) -> DashboardResult<()> {
    let config = match &args.config {
        Some(path) => read_config(path)?,
        None => DashboardConfig::default(),
    };
    let settings = source_settings(&config, args);
    let presets = merge_presets(&config.facets, parse_filters(&args.filter)?);

    let mut loader = Loader::new(source_from_settings(&settings, args.doc_id.clone())?);
    let table = loader.load()?;

    let selection = build_selection(&table, &presets)?;
    let dashboard = build_dashboard(&table, &selection)?;
    if !dashboard.omitted.is_empty() {
        info!("run_dashboard: omitted charts: {:?}", dashboard.omitted);
    }

    // Going through a JSON value so that the keys are ordered like in the reference.
    let dashboard_value: JSValue = serde_json::to_value(&dashboard).context(ParsingJsonSnafu {})?;
    let pretty_js = serde_json::to_string_pretty(&dashboard_value).context(ParsingJsonSnafu {})?;

    match args.out.as_deref() {
        Some("stdout") => println!("{}", pretty_js),
        Some(path) => {
            fs::write(path, &pretty_js).context(WritingOutputSnafu { path })?;
            info!("run_dashboard: dashboard written to {:?}", path);
            println!("{}", summary_text(&dashboard.summary));
        }
        None => println!("{}", summary_text(&dashboard.summary)),
    }

    if let Some(reference_path) = &args.reference {
        check_reference(&pretty_js, reference_path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::questionnaire::SEX;
    use std::io::Write;

    const SEXES: [&str; 5] = ["Female", "Male", "Female", "Male", "Female"];

    fn sample_value(column: &str, row: usize) -> String {
        match column {
            SEX => SEXES[row].to_string(),
            HOUSEHOLD_SIZE | HOUSEHOLD_CHILDREN | HOUSEHOLD_ELDERLY | AGE => (row + 1).to_string(),
            ETHNICITY => "Roma".to_string(),
            AGE_GROUP => if row < 2 { "18-35" } else { "36-59" }.to_string(),
            ACCESSED_HEALTHCARE => if row == 0 { "Yes" } else { "No" }.to_string(),
            HEALTHCARE_PROBLEMS => "Cost of services; Language barriers".to_string(),
            _ => "Yes".to_string(),
        }
    }

    fn sample_table(extra: &[&'static str]) -> ResponseTable {
        let mut columns = required_columns();
        columns.extend(extra);
        let headers: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
        let mut builder = TableBuilder::new(&headers).unwrap();
        for row in 0..SEXES.len() {
            let cells: Vec<String> = columns.iter().map(|c| sample_value(c, row)).collect();
            builder.add_row_simple(&cells).unwrap();
        }
        builder.build()
    }

    #[test]
    fn five_responses() {
        let table = sample_table(&[]);
        let selection = build_selection(&table, &[]).unwrap();
        let dashboard = build_dashboard(&table, &selection).unwrap();

        assert_eq!(dashboard.summary.total_submissions, 5);
        assert_eq!(dashboard.summary.avg_household_size, Some(3.0));
        assert_eq!(dashboard.summary.max_household_size, Some(5.0));
        assert_eq!(dashboard.charts.len(), CHARTS.len());
        assert_eq!(dashboard.omitted.len(), 3);

        let sex = &dashboard.filters[0];
        assert_eq!(sex.column, SEX);
        assert_eq!(sex.options, vec!["Female", "Male"]);
        assert_eq!(sex.selected, vec!["Female", "Male"]);
    }

    #[test]
    fn filtered_dashboard() {
        let table = sample_table(&[]);
        let presets = parse_filters(&[format!("{}=Female", SEX)]).unwrap();
        let selection = build_selection(&table, &presets).unwrap();
        let dashboard = build_dashboard(&table, &selection).unwrap();
        assert_eq!(dashboard.summary.total_submissions, 3);
        // Rows 1, 3 and 5.
        assert_eq!(dashboard.summary.avg_age, Some(3.0));
        assert_eq!(dashboard.filters[0].selected, vec!["Female"]);
        assert_eq!(dashboard.filters[0].options, vec!["Female", "Male"]);
    }

    #[test]
    fn empty_selection_gives_empty_histograms() {
        let table = sample_table(&[]);
        let presets = vec![(SEX.to_string(), vec![])];
        let selection = build_selection(&table, &presets).unwrap();
        let dashboard = build_dashboard(&table, &selection).unwrap();
        assert_eq!(dashboard.summary.total_submissions, 0);
        assert_eq!(dashboard.summary.avg_age, None);
        match &dashboard.charts[0] {
            ChartRecord::Histogram { bins, .. } => assert!(bins.is_empty()),
            _ => panic!("expected the age histogram first"),
        }
    }

    #[test]
    fn correlation_charts_with_all_questions() {
        let table = sample_table(&[ACCESSED_HEALTHCARE, HEALTHCARE_PROBLEMS]);
        let selection = build_selection(&table, &[]).unwrap();
        let dashboard = build_dashboard(&table, &selection).unwrap();
        assert!(dashboard.omitted.is_empty());
        assert_eq!(dashboard.charts.len(), CHARTS.len() + 3);

        match &dashboard.charts[CHARTS.len()] {
            ChartRecord::Heatmap {
                x_labels,
                y_labels,
                values,
                ..
            } => {
                assert_eq!(x_labels, &vec!["18-35", "36-59"]);
                assert_eq!(y_labels, &vec!["Roma"]);
                assert_eq!(values, &vec![vec![Some(50.0), Some(0.0)]]);
            }
            _ => panic!("expected the heatmap"),
        }
        match &dashboard.charts[CHARTS.len() + 2] {
            ChartRecord::Treemap { leaves, .. } => {
                assert_eq!(leaves.len(), 4);
                assert_eq!(
                    leaves[0].path,
                    vec!["Roma", "18-35", "Cost of services"]
                );
                assert_eq!(leaves[0].count, 2);
            }
            _ => panic!("expected the treemap"),
        }
    }

    #[test]
    fn missing_question_is_fatal() {
        let mut builder = TableBuilder::new(&[SEX.to_string()]).unwrap();
        builder.add_row_simple(&["Female"]).unwrap();
        let table = builder.build();
        let res = build_selection(&table, &[]);
        assert!(matches!(res, Err(DashboardError::Stats { .. })));
    }

    #[test]
    fn filters_parsing() {
        let filters = vec![
            "Age_grp=18-35".to_string(),
            "What is your sex?=Female".to_string(),
            "Age_grp = 36-59".to_string(),
        ];
        let parsed = parse_filters(&filters).unwrap();
        assert_eq!(
            parsed,
            vec![
                (
                    "Age_grp".to_string(),
                    vec!["18-35".to_string(), "36-59".to_string()]
                ),
                ("What is your sex?".to_string(), vec!["Female".to_string()]),
            ]
        );
        let res = parse_filters(&["Female".to_string()]);
        assert!(matches!(res, Err(DashboardError::InvalidFilter { .. })));
    }

    #[test]
    fn command_line_presets_win() {
        let config = Some(vec![
            FacetSettings {
                column: SEX.to_string(),
                selected: vec!["Male".to_string()],
            },
            FacetSettings {
                column: AGE_GROUP.to_string(),
                selected: vec!["18-35".to_string()],
            },
        ]);
        let merged = merge_presets(&config, vec![(SEX.to_string(), vec!["Female".to_string()])]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].1, vec!["Female"]);
        assert_eq!(merged[1].1, vec!["18-35"]);
    }

    #[test]
    fn summary_rounds_half_to_even() {
        let headers: Vec<String> = [HOUSEHOLD_SIZE, HOUSEHOLD_CHILDREN, HOUSEHOLD_ELDERLY, AGE]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let mut builder = TableBuilder::new(&headers).unwrap();
        for row in [["1", "0", "0", "30"], ["2", "1", "0", "31"], ["3", "0", "1", "32"], ["3", "0", "0", "33"]] {
            builder.add_row_simple(&row).unwrap();
        }
        let table = builder.build();
        let summary = summarize(&table.full_view()).unwrap();
        // 9 / 4 = 2.25 and 126 / 4 = 31.5
        assert_eq!(summary.avg_household_size, Some(2.2));
        assert_eq!(summary.avg_children, Some(0.2));
        assert_eq!(summary.avg_age, Some(31.5));
        assert_eq!(summary.max_household_size, Some(3.0));
    }

    #[test]
    fn summary_as_text() {
        let summary = SummaryStatistics {
            total_submissions: 5,
            avg_household_size: Some(3.0),
            max_household_size: Some(5.0),
            avg_children: Some(1.5),
            avg_elderly: None,
            avg_age: Some(42.3),
        };
        let text = summary_text(&summary);
        assert!(text.contains("Total Submissions: 5"));
        assert!(text.contains("Max household size: 5\n"));
        assert!(text.contains("Avg # of elderly in a household: n/a"));
    }

    #[test]
    fn reference_comparison() {
        let table = sample_table(&[]);
        let selection = build_selection(&table, &[]).unwrap();
        let dashboard = build_dashboard(&table, &selection).unwrap();
        let value = serde_json::to_value(&dashboard).unwrap();
        let pretty = serde_json::to_string_pretty(&value).unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(pretty.as_bytes()).unwrap();
        let path = file.path().to_str().unwrap();
        assert!(check_reference(&pretty, path).is_ok());

        let other = pretty.replace("\"totalSubmissions\": 5", "\"totalSubmissions\": 6");
        let res = check_reference(&other, path);
        assert!(matches!(res, Err(DashboardError::ReferenceMismatch { .. })));
    }

    #[test]
    fn local_file_settings() {
        let args = Args {
            config: None,
            doc_id: None,
            input: Some("responses.xlsx".to_string()),
            input_type: Some("xlsx".to_string()),
            excel_worksheet_name: Some("Form1".to_string()),
            filter: vec![],
            out: None,
            reference: None,
            verbose: false,
        };
        let settings = source_settings(&DashboardConfig::default(), &args);
        assert_eq!(settings.provider, "xlsx");
        assert_eq!(settings.file_path, Some("responses.xlsx".to_string()));
        assert_eq!(settings.excel_worksheet_name, Some("Form1".to_string()));

        let args = Args {
            input_type: None,
            input: Some("responses.csv".to_string()),
            ..args
        };
        assert_eq!(source_settings(&DashboardConfig::default(), &args).provider, "csv");
    }
}
