use clap::Parser;

/// Descriptive statistics and chart data for MSNA survey responses.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) A JSON file describing the source of the responses and the
    /// initial selection of the facets.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (optional) The identifier of the Google Sheets document. If not provided, it is read
    /// from the environment variable MSNA_DATA_LINK (or the one named in the config).
    #[clap(long, value_parser)]
    pub doc_id: Option<String>,

    /// (file path) A local export of the responses. Setting this option overrides the path
    /// that may be specified with the --config option.
    #[clap(short, long, value_parser)]
    pub input: Option<String>,

    /// (default gsheet) The type of the input: gsheet, csv or xlsx.
    #[clap(long, value_parser)]
    pub input_type: Option<String>,

    /// (default: first worksheet) When using an Excel file, indicates the name of the
    /// worksheet to use.
    #[clap(long, value_parser)]
    pub excel_worksheet_name: Option<String>,

    /// ("<question>=<answer>", repeatable) Restricts a facet to the given answers. Answers
    /// for the same question accumulate. Overrides the selection of the config for this
    /// question.
    #[clap(short, long, value_parser)]
    pub filter: Vec<String>,

    /// (file path, 'stdout' or empty) If specified, the dashboard will be written in JSON
    /// format to the given location.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path) A reference dashboard in JSON format. If provided, msna will check that
    /// the produced dashboard matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
