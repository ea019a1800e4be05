// Sources of responses and the cached loader.

use std::env;
use std::rc::Rc;

use crate::dashboard::{
    io_csv::{read_csv_file, read_csv_text},
    io_remote::fetch_csv,
    io_xlsx::read_xlsx_file,
    *,
};

/// Something that produces a fresh table of responses on each call.
pub trait TableSource {
    fn fetch(&self) -> DashboardResult<ResponseTable>;

    /// A description for the logs. It must not contain secrets.
    fn describe(&self) -> String;
}

impl<S: TableSource + ?Sized> TableSource for Box<S> {
    fn fetch(&self) -> DashboardResult<ResponseTable> {
        (**self).fetch()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// The CSV export of a Google Sheets document.
///
/// Not `Debug`: the document id is a secret.
pub struct GoogleSheetSource {
    host: String,
    document_id: String,
    missing_markers: Option<Vec<String>>,
}

impl TableSource for GoogleSheetSource {
    fn fetch(&self) -> DashboardResult<ResponseTable> {
        let text = fetch_csv(&self.host, &self.document_id)?;
        read_csv_text(&text, &self.missing_markers)
    }

    fn describe(&self) -> String {
        format!("Google Sheets export at {}", self.host)
    }
}

#[derive(Debug, Clone)]
pub struct CsvFileSource {
    pub path: String,
    pub missing_markers: Option<Vec<String>>,
}

impl TableSource for CsvFileSource {
    fn fetch(&self) -> DashboardResult<ResponseTable> {
        read_csv_file(&self.path, &self.missing_markers)
    }

    fn describe(&self) -> String {
        format!("CSV file {}", self.path)
    }
}

#[derive(Debug, Clone)]
pub struct XlsxFileSource {
    pub path: String,
    pub worksheet: Option<String>,
    pub missing_markers: Option<Vec<String>>,
}

impl TableSource for XlsxFileSource {
    fn fetch(&self) -> DashboardResult<ResponseTable> {
        read_xlsx_file(&self.path, &self.worksheet, &self.missing_markers)
    }

    fn describe(&self) -> String {
        match &self.worksheet {
            Some(name) => format!("Excel file {} (worksheet {})", self.path, name),
            None => format!("Excel file {}", self.path),
        }
    }
}

/// Builds the source described by the settings.
///
/// For Google Sheets, the document id given on the command line takes
/// precedence over the environment variable.
pub fn source_from_settings(
    settings: &SourceSettings,
    document_id: Option<String>,
) -> DashboardResult<Box<dyn TableSource>> {
    let markers = settings.missing_markers.clone();
    let source: Box<dyn TableSource> = match settings.provider.as_str() {
        "gsheet" => {
            let variable = settings.document_id_variable();
            let document_id = match document_id.or_else(|| env::var(&variable).ok()) {
                Some(id) if !id.trim().is_empty() => id.trim().to_string(),
                _ => return MissingDocumentIdSnafu { variable }.fail(),
            };
            Box::new(GoogleSheetSource {
                host: settings.export_host(),
                document_id,
                missing_markers: markers,
            })
        }
        "csv" => Box::new(CsvFileSource {
            path: input_path(settings)?,
            missing_markers: markers,
        }),
        "xlsx" => Box::new(XlsxFileSource {
            path: input_path(settings)?,
            worksheet: settings.excel_worksheet_name.clone(),
            missing_markers: markers,
        }),
        x => {
            whatever!("Provider not implemented {:?}", x)
        }
    };
    info!("source_from_settings: reading from {}", source.describe());
    Ok(source)
}

fn input_path(settings: &SourceSettings) -> DashboardResult<String> {
    let path = settings.file_path.clone().context(MissingInputPathSnafu {
        provider: settings.provider.as_str(),
    })?;
    Ok(path)
}

/// Holds the last table read from a source.
///
/// The table is shared and never modified: a refresh drops the cached table and
/// the next load replaces it with a new one.
pub struct Loader<S: TableSource> {
    source: S,
    cached: Option<Rc<ResponseTable>>,
}

impl<S: TableSource> Loader<S> {
    pub fn new(source: S) -> Loader<S> {
        Loader {
            source,
            cached: None,
        }
    }

    /// Returns the cached table, fetching it first if needed.
    pub fn load(&mut self) -> DashboardResult<Rc<ResponseTable>> {
        if let Some(table) = &self.cached {
            debug!("load: using the cached table");
            return Ok(table.clone());
        }
        info!("load: fetching from {}", self.source.describe());
        let table = Rc::new(self.source.fetch()?);
        info!(
            "load: {} responses, {} questions",
            table.num_rows(),
            table.num_columns()
        );
        self.cached = Some(table.clone());
        Ok(table)
    }

    /// Drops the cached table.
    pub fn refresh(&mut self) {
        info!("refresh: clearing the cached table");
        self.cached = None;
    }

    pub fn reload(&mut self) -> DashboardResult<Rc<ResponseTable>> {
        self.refresh();
        self.load()
    }

    pub fn is_cached(&self) -> bool {
        self.cached.is_some()
    }
}
