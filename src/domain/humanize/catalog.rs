//! Tag catalog loading.
//!
//! The catalog file maps category names to lists of tag records. Only the
//! flattened enumeration of tag commands reaches the prompt; categories
//! exist for the humans maintaining the file.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use serde::Deserialize;

/// Fixed identifier surfaced to the prompt even when the file omits it.
const BREATH_TAG: &str = "<breath>";

/// One entry of the catalog file. Unknown fields are tolerated.
#[derive(Debug, Deserialize)]
pub struct TagRecord {
    pub command: String,
    #[serde(default)]
    pub description: Option<String>,
}

type CatalogFile = HashMap<String, Vec<TagRecord>>;

/// Loads the catalog file and flattens it into the comma-separated,
/// lexicographically sorted, deduplicated enumeration used by the
/// prompt composer.
///
/// Catalog absence must not make the service unavailable, so a missing,
/// unreadable or malformed file degrades to an empty string.
pub fn load_catalog(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();

    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Tag catalog unavailable, continuing with empty catalog"
            );
            return String::new();
        }
    };

    match parse_catalog(&raw) {
        Ok(tags) => {
            tracing::info!(path = %path.display(), tags = %tags, "Tag catalog loaded");
            tags
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Tag catalog malformed, continuing with empty catalog"
            );
            String::new()
        }
    }
}

/// Parses the raw catalog JSON into the formatted enumeration.
fn parse_catalog(raw: &str) -> Result<String, serde_json::Error> {
    let catalog: CatalogFile = serde_json::from_str(raw)?;
    Ok(format_catalog(&catalog))
}

/// Collects every distinct command across all categories, together with
/// the fixed `<breath>` tag, into a sorted enumeration.
fn format_catalog(catalog: &CatalogFile) -> String {
    let mut commands: BTreeSet<&str> = catalog
        .values()
        .flatten()
        .map(|record| record.command.as_str())
        .collect();
    commands.insert(BREATH_TAG);

    commands.into_iter().collect::<Vec<_>>().join(", ")
}
