//! Fetch command - download the comic's tile grid.

use std::path::Path;

use tracing::info;

use clickdrag::fetch::{FetchPlan, Fetcher};
use clickdrag::provider::{ReqwestClient, XkcdProvider};

use crate::error::CliError;

/// Downloads every tile of the published grid into `image_dir`.
///
/// Missing tiles (the grid is sparse at its edges) are logged and skipped
/// by the fetcher; they do not fail the command.
pub fn run(image_dir: &Path) -> Result<(), CliError> {
    let client = ReqwestClient::new()?;
    let provider = XkcdProvider::new(client);
    let fetcher = Fetcher::new(provider, image_dir);

    let summary = fetcher.run(&FetchPlan::comic_1110())?;
    info!(
        fetched = summary.fetched,
        skipped = summary.skipped,
        "fetch complete"
    );
    Ok(())
}
