//! Command-line / environment configuration and log setup.

use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

use crate::{
    domain::{AppState, PersistedState, SheetSource},
    infra::quote_sheet::{demo_quote_sheet, load_quote_sheet},
};

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Parser)]
#[command(name = "freight-quote-board")]
#[command(about = "Compare freight carrier quotes by service level", long_about = None)]
pub struct Args {
    /// Quote sheet (JSON) to open on startup
    #[arg(long, env = "QUOTE_BOARD_SHEET", value_name = "PATH")]
    pub sheet: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` or `freight_quote_board=trace`
    #[arg(long, env = "QUOTE_BOARD_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log: String,
}

pub fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_filter(filter);

    tracing_subscriber::registry().with(stderr_layer).init();
}

/// Board state to launch with, plus a warning for the user when a
/// configured sheet could not be opened.
#[derive(Clone, Debug)]
pub struct StartupSheet {
    pub state: AppState,
    pub warning: Option<String>,
}

/// Picks the first sheet that loads: the configured path, then the last
/// sheet opened, then the bundled demo.
pub fn resolve_startup_sheet(args: &Args, persisted: Option<PersistedState>) -> StartupSheet {
    let candidates = args
        .sheet
        .iter()
        .cloned()
        .chain(persisted.and_then(|saved| saved.last_sheet));

    let mut warning = None;
    for path in candidates {
        match load_quote_sheet(&path) {
            Ok(sheet) => {
                return StartupSheet {
                    state: AppState::from_sheet(sheet, SheetSource::File(path)),
                    warning,
                };
            }
            Err(err) => {
                warn!(error = %err, "skipping quote sheet");
                if warning.is_none() {
                    warning = Some(format!("Could not open quote sheet: {err}"));
                }
            }
        }
    }

    match demo_quote_sheet() {
        Ok(sheet) => {
            info!("no quote sheet configured; showing demo data");
            StartupSheet {
                state: AppState::from_sheet(sheet, SheetSource::Demo),
                warning,
            }
        }
        Err(err) => {
            warn!(error = %err, "demo sheet unavailable; starting empty");
            StartupSheet {
                state: AppState::default(),
                warning: warning.or_else(|| Some(err.to_string())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    const SHEET: &str = r#"{
        "shipment": { "fromZip": "10001", "toZip": "94105", "weight": 900, "pallets": 2, "pickupDate": "2026-11-02" },
        "quotes": [ { "quoteId": 5, "carrier": { "name": "Harbor Haul" }, "customerPrice": 640.0, "profit": 90.0, "carrierTotalRate": 550.0 } ]
    }"#;

    fn args(sheet: Option<PathBuf>) -> Args {
        Args {
            sheet,
            log: DEFAULT_LOG_FILTER.to_string(),
        }
    }

    #[test]
    fn parses_flags() {
        let parsed = Args::try_parse_from(["freight-quote-board", "--sheet", "q.json", "--log", "debug"])
            .unwrap();
        assert_eq!(parsed.sheet, Some(PathBuf::from("q.json")));
        assert_eq!(parsed.log, "debug");
    }

    #[test]
    fn configured_sheet_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lane.json");
        fs::write(&path, SHEET).unwrap();

        let startup = resolve_startup_sheet(&args(Some(path.clone())), None);
        assert_eq!(startup.state.source, SheetSource::File(path));
        assert_eq!(startup.state.quotes.len(), 1);
        assert!(startup.warning.is_none());
    }

    #[test]
    fn falls_back_to_persisted_then_demo() {
        let dir = tempfile::tempdir().unwrap();
        let saved = dir.path().join("saved.json");
        fs::write(&saved, SHEET).unwrap();
        let persisted = PersistedState {
            last_sheet: Some(saved.clone()),
        };

        let startup = resolve_startup_sheet(
            &args(Some(dir.path().join("missing.json"))),
            Some(persisted),
        );
        assert_eq!(startup.state.source, SheetSource::File(saved));
        assert!(startup.warning.is_some());

        let demo = resolve_startup_sheet(&args(None), None);
        assert_eq!(demo.state.source, SheetSource::Demo);
        assert!(!demo.state.quotes.is_empty());
    }
}
