//! Quote sheet loading from JSON files and the embedded demo sheet.

use std::{
    collections::HashSet,
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{info, warn};

use crate::{domain::QuoteSheet, util::assets};

#[derive(Debug, Error)]
pub enum QuoteSheetError {
    #[error("failed to read quote sheet {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse quote sheet {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("demo quote sheet is not bundled with this build")]
    DemoUnavailable,
}

/// Reads and parses a quote sheet from disk.
pub fn load_quote_sheet(path: &Path) -> Result<QuoteSheet, QuoteSheetError> {
    let text = fs::read_to_string(path).map_err(|source| QuoteSheetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let sheet = parse_quote_sheet(&text, &path.display().to_string())?;
    info!(
        path = %path.display(),
        quotes = sheet.quotes.len(),
        "read quote sheet from disk"
    );
    Ok(sheet)
}

/// Parses quote sheet JSON. `origin` names the source in error messages.
pub fn parse_quote_sheet(text: &str, origin: &str) -> Result<QuoteSheet, QuoteSheetError> {
    let sheet: QuoteSheet =
        serde_json::from_str(text).map_err(|source| QuoteSheetError::Parse {
            origin: origin.to_string(),
            source,
        })?;
    warn_on_duplicate_ids(&sheet, origin);
    Ok(sheet)
}

/// The sheet bundled into the binary, shown when nothing else is configured.
pub fn demo_quote_sheet() -> Result<QuoteSheet, QuoteSheetError> {
    let text = assets::demo_sheet_json().ok_or(QuoteSheetError::DemoUnavailable)?;
    parse_quote_sheet(&text, "demo sheet")
}

fn warn_on_duplicate_ids(sheet: &QuoteSheet, origin: &str) {
    let mut seen = HashSet::new();
    for quote in &sheet.quotes {
        if !seen.insert(quote.quote_id) {
            warn!(
                origin,
                quote_id = quote.quote_id,
                "duplicate quote id in sheet; price overrides for this id only reach its first occurrence"
            );
        }
    }
}
