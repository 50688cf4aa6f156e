//! `harvest item`: scrape one page, print it, and persist it.

use std::path::{Path, PathBuf};

use harvest_core::{AppConfig, EbayItem, Serializable};

/// Scrapes `url`, prints the record, and writes it unless `no_save` is set.
///
/// # Errors
///
/// Returns an error if the scraper cannot be built, the scrape fails, or the
/// record cannot be written.
pub(crate) async fn run_item(
    config: &AppConfig,
    url: &str,
    output: Option<&Path>,
    no_save: bool,
) -> anyhow::Result<()> {
    let scraper =
        harvest_scraper::EbayScraper::new(config.request_timeout_secs, &config.user_agent)
            .map_err(|e| anyhow::anyhow!("failed to build item scraper: {e}"))?;

    let item = scraper.get_item(url).await?;
    println!("{item}");

    if no_save {
        return Ok(());
    }

    let written = save_item(&item, output, &config.output_dir)?;
    println!("saved {}", written.display());
    Ok(())
}

/// Writes to `output` when given, otherwise to the default file name inside
/// `output_dir`.
pub(crate) fn save_item(
    item: &EbayItem,
    output: Option<&Path>,
    output_dir: &Path,
) -> anyhow::Result<PathBuf> {
    let written = match output {
        Some(path) => item.persist(Some(path))?,
        None => item.persist_in(output_dir)?,
    };
    tracing::info!(path = %written.display(), "wrote item record");
    Ok(written)
}
