//! `harvest countries`: run one lookup and print the result.

use harvest_core::{AppConfig, Country};
use harvest_countries::{flatten_records, Endpoint, RestCountriesClient};

use crate::CountriesQuery;

const HEADERS: [&str; 3] = ["Country", "Capital", "Flag URL"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Table,
    Json,
    Raw,
}

impl OutputFormat {
    pub(crate) fn from_flags(json: bool, raw: bool) -> Self {
        match (json, raw) {
            (_, true) => Self::Raw,
            (true, false) => Self::Json,
            (false, false) => Self::Table,
        }
    }
}

impl From<&CountriesQuery> for Endpoint {
    fn from(query: &CountriesQuery) -> Self {
        match query {
            CountriesQuery::All => Endpoint::All,
            CountriesQuery::Name { name } => Endpoint::Name(name.clone()),
            CountriesQuery::Code { code } => Endpoint::Code(code.clone()),
            CountriesQuery::Codes { codes } => Endpoint::Codes(codes.clone()),
            CountriesQuery::Currency { currency } => Endpoint::Currency(currency.clone()),
            CountriesQuery::Demonym { demonym } => Endpoint::Demonym(demonym.clone()),
            CountriesQuery::Lang { language } => Endpoint::Language(language.clone()),
            CountriesQuery::Capital { capital } => Endpoint::Capital(capital.clone()),
            CountriesQuery::Region { region } => Endpoint::Region(region.clone()),
            CountriesQuery::Subregion { subregion } => Endpoint::Subregion(subregion.clone()),
            CountriesQuery::Translation { translation } => {
                Endpoint::Translation(translation.clone())
            }
            CountriesQuery::Independent { status } => Endpoint::Independent(*status),
        }
    }
}

/// Runs `query` against the configured API and prints it in `format`.
///
/// # Errors
///
/// Returns an error if the client cannot be built, the lookup fails, or the
/// rows cannot be serialized.
pub(crate) async fn run_countries(
    config: &AppConfig,
    query: &CountriesQuery,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let client = RestCountriesClient::with_base_url(
        config.request_timeout_secs,
        &config.user_agent,
        &config.countries_base_url,
    )
    .map_err(|e| anyhow::anyhow!("failed to build countries client: {e}"))?;

    let endpoint = Endpoint::from(query);
    match format {
        OutputFormat::Raw => {
            let raw = client.lookup_raw(&endpoint).await?;
            println!("{}", serde_json::to_string_pretty(&flatten_records(&raw))?);
        }
        OutputFormat::Json => {
            let rows = client.lookup(&endpoint).await?;
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Table => {
            let rows = client.lookup(&endpoint).await?;
            if rows.is_empty() {
                println!("no countries matched");
            } else {
                print!("{}", render_table(&rows));
            }
        }
    }

    Ok(())
}

/// Renders rows as a left-aligned, space-padded table with a header rule.
pub(crate) fn render_table(rows: &[Country]) -> String {
    let cells = |c: &Country| [c.name.clone(), c.capital.clone(), c.flag_url.clone()];

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(cells(row)) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADERS.map(str::to_owned), &widths);
    push_line(&mut out, &widths.map(|w| "-".repeat(w)), &widths);
    for row in rows {
        push_line(&mut out, &cells(row), &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String; 3], widths: &[usize; 3]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
