//! Shared class strings so cards and pages stay visually consistent.

// ============================================
// BUTTON STYLES
// ============================================

pub fn btn_primary() -> &'static str {
    "rounded-lg bg-sky-500 px-4 py-2 text-sm font-semibold text-white hover:bg-sky-400 disabled:opacity-50"
}

pub fn btn_secondary() -> &'static str {
    "rounded-lg border border-slate-700 px-4 py-2 text-sm text-slate-300 hover:border-sky-600 hover:text-sky-300"
}

pub fn btn_icon() -> &'static str {
    "rounded-full p-1 text-slate-400 transition hover:bg-slate-800 hover:text-slate-100"
}

pub fn btn_toggle() -> &'static str {
    "flex w-full items-center justify-center gap-2 rounded-lg bg-slate-800/70 px-4 py-2 text-sm font-medium text-slate-300 transition hover:bg-slate-800"
}

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "min-w-[5.5rem] rounded-lg border border-sky-500/60 bg-sky-500/15 px-4 py-2 font-semibold text-sky-300"
    } else {
        "min-w-[5.5rem] rounded-lg border border-slate-700 px-4 py-2 text-slate-400 transition hover:border-sky-700 hover:bg-sky-900/20 hover:text-sky-300"
    }
}

// ============================================
// INPUT STYLES
// ============================================

pub fn input_class() -> &'static str {
    "rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-sky-500 focus:outline-none"
}

pub fn label_class() -> &'static str {
    "block text-xs font-semibold uppercase text-slate-500"
}

// ============================================
// PANELS / CARDS
// ============================================

pub fn panel() -> &'static str {
    "rounded-xl border border-slate-800 bg-slate-900/40"
}

pub fn card() -> &'static str {
    "overflow-hidden rounded-xl border border-slate-800 bg-slate-900/60 shadow-lg transition hover:border-slate-700"
}

pub fn card_section() -> &'static str {
    "border-b border-slate-800 px-6 py-4"
}

pub fn service_row(selected: bool) -> &'static str {
    if selected {
        "flex w-full items-center justify-between rounded-lg border border-sky-500 bg-sky-500/10 p-3 text-left shadow-sm transition"
    } else {
        "flex w-full items-center justify-between rounded-lg border border-slate-800 bg-slate-900/60 p-3 text-left transition hover:border-slate-700 hover:bg-slate-800/60"
    }
}

pub fn row_title(selected: bool) -> &'static str {
    if selected {
        "font-medium text-sky-200"
    } else {
        "font-medium text-slate-200"
    }
}

pub fn row_caption(selected: bool) -> &'static str {
    if selected {
        "text-xs text-sky-300/80"
    } else {
        "text-xs text-slate-500"
    }
}

// ============================================
// BADGES / TEXT
// ============================================

pub fn best_badge() -> &'static str {
    "rounded-full bg-emerald-500 px-2 py-0.5 text-xs font-semibold text-white"
}

pub fn best_carrier_badge() -> &'static str {
    "rounded-full bg-emerald-500 px-3 py-1 text-xs font-bold text-white shadow-lg"
}

pub fn text_muted() -> &'static str {
    "text-slate-500"
}

pub fn text_secondary() -> &'static str {
    "text-slate-300"
}

/// Accent colours for the four headline figures of a quote.
pub fn stat_accent(kind: StatAccent) -> &'static str {
    match kind {
        StatAccent::Price => "text-emerald-400",
        StatAccent::Profit => "text-sky-400",
        StatAccent::Transit => "text-purple-400",
        StatAccent::Rate => "text-orange-400",
        StatAccent::Neutral => "text-slate-200",
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatAccent {
    Price,
    Profit,
    Transit,
    Rate,
    Neutral,
}
