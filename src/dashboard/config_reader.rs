use crate::dashboard::{
    io_common::{DEFAULT_EXPORT_HOST, DOCUMENT_ID_VARIABLE},
    *,
};

use serde::{Deserialize, Serialize};
use serde_json::Value as JSValue;

/// Where the responses are read from.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct SourceSettings {
    /// One of `gsheet`, `csv` or `xlsx`.
    pub provider: String,
    /// Name of the environment variable holding the identifier of the spreadsheet.
    #[serde(rename = "documentIdVariable")]
    pub document_id_variable: Option<String>,
    #[serde(rename = "exportHost")]
    pub export_host: Option<String>,
    #[serde(rename = "filePath")]
    pub file_path: Option<String>,
    #[serde(rename = "excelWorksheetName")]
    pub excel_worksheet_name: Option<String>,
    #[serde(rename = "missingMarkers")]
    pub missing_markers: Option<Vec<String>>,
}

impl Default for SourceSettings {
    fn default() -> Self {
        SourceSettings {
            provider: "gsheet".to_string(),
            document_id_variable: None,
            export_host: None,
            file_path: None,
            excel_worksheet_name: None,
            missing_markers: None,
        }
    }
}

/// An initial selection for a facet.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct FacetSettings {
    pub column: String,
    pub selected: Vec<String>,
}

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub source: SourceSettings,
    pub facets: Option<Vec<FacetSettings>>,
}

impl SourceSettings {
    pub fn document_id_variable(&self) -> String {
        self.document_id_variable
            .clone()
            .unwrap_or_else(|| DOCUMENT_ID_VARIABLE.to_string())
    }

    pub fn export_host(&self) -> String {
        self.export_host
            .clone()
            .unwrap_or_else(|| DEFAULT_EXPORT_HOST.to_string())
    }
}

pub fn read_config(path: &str) -> DashboardResult<DashboardConfig> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let config: DashboardConfig =
        serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    debug!("read_config: {:?}", config);
    Ok(config)
}

/// Reads a dashboard previously written in JSON format.
pub fn read_reference(path: &str) -> DashboardResult<JSValue> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    Ok(js)
}
