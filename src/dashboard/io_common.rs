// Helpers shared by the readers.

use crate::dashboard::*;

pub const DEFAULT_EXPORT_HOST: &str = "docs.google.com/spreadsheets/d";
pub const DOCUMENT_ID_VARIABLE: &str = "MSNA_DATA_LINK";

pub fn export_url(host: &str, document_id: &str) -> String {
    format!(
        "https://{}/{}/export?format=csv",
        host.trim_end_matches('/'),
        document_id
    )
}

/// The export address without the identifier of the document, for messages.
pub fn redacted_export_url(host: &str) -> String {
    export_url(host, "<document id>")
}

pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

/// Names the blank header cells after their position.
pub fn name_headers(headers: &[String]) -> Vec<String> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, h)| {
            if h.trim().is_empty() {
                format!("Unnamed: {}", idx)
            } else {
                h.clone()
            }
        })
        .collect()
}

pub fn new_builder(
    headers: &[String],
    missing_markers: &Option<Vec<String>>,
) -> DashboardResult<TableBuilder> {
    let builder = TableBuilder::new(&name_headers(headers)).context(BuildingTableSnafu {})?;
    Ok(match missing_markers {
        Some(markers) => builder.missing_markers(markers),
        None => builder,
    })
}
