use std::sync::OnceLock;

use rust_embed::RustEmbed;
use tracing::warn;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static TAILWIND_CSS: OnceLock<String> = OnceLock::new();

const DEMO_SHEET: &str = "demo_quotes.json";

/// Returns the contents of `assets/main.css`.
pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| load_stylesheet("main.css")).as_str()
}

/// Returns the generated `assets/tailwind.css`, or an empty sheet when it was not built.
pub fn tailwind_css() -> &'static str {
    TAILWIND_CSS
        .get_or_init(|| load_stylesheet("tailwind.css"))
        .as_str()
}

/// Raw JSON of the bundled demo quote sheet.
pub fn demo_sheet_json() -> Option<String> {
    load_text(DEMO_SHEET)
}

fn load_stylesheet(name: &str) -> String {
    load_text(name).unwrap_or_else(|| {
        warn!(asset = name, "stylesheet missing from embedded assets; rendering unstyled");
        String::new()
    })
}

fn load_text(name: &str) -> Option<String> {
    let file = EmbeddedAssets::get(canonical_asset_path(name))?;
    match String::from_utf8(file.data.into_owned()) {
        Ok(text) => Some(text),
        Err(_) => {
            warn!(asset = name, "embedded asset is not valid UTF-8");
            None
        }
    }
}

fn canonical_asset_path(path: &str) -> &str {
    path.trim_start_matches('/').trim_start_matches("assets/")
}
