use std::fs;

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

use crate::catalog::{self, GameRecord};
use crate::cli::Cli;
use crate::sanitize::sanitize;

/// Titles containing this substring are demo builds and are skipped outright.
const DEMO_MARKER: &str = "Demo";

pub fn run(_cli: Cli) -> Result<()> {
    let root = Utf8PathBuf::from(catalog::ROOT_DIR);
    let created = generate(&root, catalog::GAMES, catalog::MAX_GAMES);
    println!("Finished creating fixtures for {created} games.");
    Ok(())
}

/// Walk `records` in table order and materialize one fixture per non-demo
/// record, stopping once `limit` fixtures exist. The demo check runs before
/// the budget is touched, so skipped records never consume it. A failed
/// record is reported and left behind; the run always continues.
pub fn generate(root: &Utf8Path, records: &[GameRecord], limit: usize) -> usize {
    let mut created = 0usize;

    for record in records {
        if created >= limit {
            break;
        }

        if record.title.contains(DEMO_MARKER) {
            debug!(title = record.title, "skipping demo record");
            continue;
        }

        match create_fixture(root, record) {
            Ok(dir) => {
                debug!(path = %dir, "fixture directory ready");
                println!(
                    "Created fixture for '{}' (AppID: {}) by '{}'",
                    record.title, record.app_id, record.developer
                );
                created += 1;
            }
            Err(err) => {
                eprintln!(
                    "Error creating fixture for '{}' (AppID: {}): {err:#}",
                    record.title, record.app_id
                );
            }
        }
    }

    created
}

/// Create `root/<developer>/<title>/<app_id>/` plus the empty marker file.
/// Existing directories are fine; an existing marker is truncated.
fn create_fixture(root: &Utf8Path, record: &GameRecord) -> Result<Utf8PathBuf> {
    let dir = root
        .join(sanitize(record.developer))
        .join(sanitize(record.title))
        .join(record.app_id);
    fs::create_dir_all(dir.as_std_path()).with_context(|| format!("creating directory {dir}"))?;

    let marker = dir.join(catalog::MARKER_FILE);
    fs::write(marker.as_std_path(), b"").with_context(|| format!("writing {marker}"))?;

    Ok(dir)
}
