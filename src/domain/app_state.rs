use std::{fmt, path::PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::{
    entities::{PriceUpdate, Quote, QuoteSheet, ShipmentInfo},
    pricing::reprice,
};

/// Where the quotes on the board came from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SheetSource {
    #[default]
    Demo,
    File(PathBuf),
}

impl fmt::Display for SheetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetSource::Demo => write!(f, "Built-in demo sheet"),
            SheetSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub source: SheetSource,
    pub shipment: ShipmentInfo,
    pub quotes: Vec<Quote>,
    /// Number of customer-price overrides applied since the sheet was loaded.
    pub overrides: usize,
}

impl AppState {
    pub fn from_sheet(sheet: QuoteSheet, source: SheetSource) -> Self {
        let mut state = Self::default();
        state.replace_sheet(sheet, source);
        state
    }

    /// Swaps in a freshly loaded sheet, dropping any price overrides.
    pub fn replace_sheet(&mut self, sheet: QuoteSheet, source: SheetSource) {
        info!(
            source = %source,
            quotes = sheet.quotes.len(),
            "loaded quote sheet"
        );
        self.source = source;
        self.shipment = sheet.shipment;
        self.quotes = sheet.quotes;
        self.overrides = 0;
    }

    /// Reprices the matching quote. Returns `false` for an unknown quote id.
    pub fn apply_price_update(&mut self, update: PriceUpdate) -> bool {
        let Some(quote) = self
            .quotes
            .iter_mut()
            .find(|quote| quote.quote_id == update.quote_id)
        else {
            warn!(quote_id = update.quote_id, "price update for unknown quote");
            return false;
        };
        reprice(quote, update.new_price);
        self.overrides += 1;
        info!(
            quote_id = update.quote_id,
            new_price = update.new_price,
            "customer price overridden"
        );
        true
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            last_sheet: match &self.source {
                SheetSource::File(path) => Some(path.clone()),
                SheetSource::Demo => None,
            },
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub last_sheet: Option<PathBuf>,
}
