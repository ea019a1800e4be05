/*!

This is the long-form manual for `survey_stats` and the `msna` dashboard.

## Tables and missing answers

A [`crate::ResponseTable`] holds one column per survey question, with the verbatim
question text as the column name, and one row per respondent. Every cell is either
an answer (a string) or missing. When the table is built with the
[`crate::TableBuilder`], a cell is missing if it is blank or if it is equal to one
of the [`crate::DEFAULT_MISSING_MARKERS`] (`NA`, `N/A`, `NaN`, `#N/A`, `null`, ...).

Missing answers are never counted: they do not appear in the category counts, in the
tallies of options, or in the denominators of the proportions.

## Facets

A facet is a demographic question used to select respondents (sex, age group,
citizenship, ...). The default selection of a facet accepts every value that was
observed in the table, and also the respondents that did not answer if there are
any. An explicit selection only accepts the listed values:

|               | default selection | explicit selection `Female` |
|---------------|-------------------|-----------------------------|
| `Female`      | kept              | kept                        |
| `Male`        | kept              | dropped                     |
| (missing)     | kept              | dropped                     |

Facets are combined with a logical AND.

## Questions with multiple answers

Two different matching rules are used for the "select all that apply" questions.
They are both kept on purpose, because they reproduce the charts of the reference
dashboard, but they do not agree on every input.

### Tally of options: substring match

[`crate::tally_options`] counts a response under every option of the catalog that
appears anywhere in the text of the response. No separator is assumed, so the
response `High costs and long wait times` is counted under `High costs`.

A consequence is that an option which is contained in another option is counted
twice. With the catalog `["Other", "Other (please specify)"]`, the response
`Other (please specify)` increments both options.

### Category extraction: exact match

[`crate::extract_matched_categories`] splits the response on `,` and `;`, trims
every piece, and keeps the pieces that are exactly equal to an option. The response
`Discrimination at work` does not match `Discrimination`. A response without any
match is dropped from the grouped counts computed by
[`crate::grouped_category_counts`]; it is not counted under a "none" label.

## Histograms

The number of bins follows Sturges' rule: `ceil(1 + log2(N))` where `N` is the number
of numeric values. Cells that cannot be read as numbers are dropped first. There is
no histogram for a column without any numeric value: this is reported as
[`crate::StatsError::EmptyInput`].

## Proportions

[`crate::proportion_table`] reports a percentage for each pair of values of two
questions. A pair of values without any respondent is reported as missing (`None`)
and not as 0%.

*/
