/*!

# Quick start with Google Sheets

This example shows how to produce the dashboard data from survey responses collected
online. The responses of a Google Form (or of a KoboToolbox project exported to Google
Sheets) end up in a spreadsheet, in which the first row holds the questions and each
following row holds the answers of one respondent.

**Sharing the spreadsheet** The dashboard downloads the spreadsheet with its CSV export.
In the "Share" menu, allow anyone with the link to view the document. The identifier of
the document is the long string in the address of the spreadsheet:

```text
https://docs.google.com/spreadsheets/d/<document id>/edit#gid=0
```

**Keeping the identifier secret** The identifier gives access to all the responses. It
should not be written in a configuration file. Set it in the environment instead:

```bash
export MSNA_DATA_LINK='<document id>'
```

**Running the dashboard**

```bash
msna --out dashboard.json
```

The dashboard is written in JSON format: the summary statistics, the filters that were
applied and one record per chart. To look at a subset of the respondents, pass one
`--filter` flag per accepted value. The values of the same question accumulate:

```bash
msna --filter "What is your sex?=Female" \
  --filter "Age_grp=18-35" --filter "Age_grp=36-59"
```

**Working offline** The spreadsheet can also be downloaded in CSV or Excel format and
read from the disk:

```bash
msna -i responses.xlsx --input-type xlsx --excel-worksheet-name "Form Responses 1"
```

**Using the library** The same computations are available from Rust:

```
use survey_stats::*;
# use survey_stats::StatsError;

let headers = vec!["What is your sex?".to_string(), "Age_grp".to_string()];
let mut builder = TableBuilder::new(&headers)?;
builder.add_row_simple(&["Female", "18-35"])?;
builder.add_row_simple(&["Male", "18-35"])?;
builder.add_row_simple(&["Female", "60+"])?;
let table = builder.build();

let selection = FacetSelection::new().select("What is your sex?", &["Female".to_string()]);
let view = filter(&table, &selection)?;
let ages = count_by_category(&view, "Age_grp")?;
assert_eq!(ages.get("18-35"), Some(1));
assert_eq!(ages.get("60+"), Some(1));
# Ok::<(), StatsError>(())
```

*/
