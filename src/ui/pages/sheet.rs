use std::path::PathBuf;

use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{format_weight, group_and_rank, AppState, SheetSource},
    infra::quote_sheet::{demo_quote_sheet, load_quote_sheet},
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
};

#[component]
pub fn SheetPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let initial_path = state.with(|st| match &st.source {
        SheetSource::File(path) => path.display().to_string(),
        SheetSource::Demo => String::new(),
    });
    let mut path_input = use_signal(|| initial_path);

    let (source, quote_count, carrier_count, overrides, shipment) = state.with(|st| {
        (
            st.source.clone(),
            st.quotes.len(),
            group_and_rank(&st.quotes).len(),
            st.overrides,
            st.shipment.clone(),
        )
    });
    let weight = format_weight(shipment.weight);
    let can_reload = matches!(source, SheetSource::File(_));

    let on_load = move |_| {
        let raw = path_input();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            push_toast(toasts, ToastKind::Warning, "Enter the path of a quote sheet first.");
            return;
        }
        open_sheet(state, toasts, PathBuf::from(trimmed));
    };

    let on_reload = move |_| {
        let current = state.with(|st| st.source.clone());
        if let SheetSource::File(path) = current {
            open_sheet(state, toasts, path);
        }
    };

    let on_demo = move |_| match demo_quote_sheet() {
        Ok(sheet) => {
            state.with_mut(|st| st.replace_sheet(sheet, SheetSource::Demo));
            persist_user_state(&state);
            path_input.set(String::new());
            push_toast(toasts, ToastKind::Info, "Showing the built-in demo sheet.");
        }
        Err(err) => push_toast(toasts, ToastKind::Error, err.to_string()),
    };

    rsx! {
        div { class: "space-y-8",
            section {
                class: "{theme::panel()} p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Open Quote Sheet" }
                p { class: "mt-1 text-sm {theme::text_muted()}",
                    "JSON with a shipment and its carrier quotes. Opening a sheet discards price overrides."
                }
                div { class: "mt-4 flex flex-wrap items-end gap-3",
                    div { class: "flex-1",
                        label { class: "{theme::label_class()}", "Sheet path" }
                        input {
                            class: "mt-1 w-full {theme::input_class()}",
                            placeholder: "/path/to/quotes.json",
                            value: path_input(),
                            oninput: move |evt| path_input.set(evt.value()),
                        }
                    }
                    button { class: "{theme::btn_primary()}", onclick: on_load, "Open" }
                    button {
                        class: "{theme::btn_secondary()}",
                        disabled: !can_reload,
                        onclick: on_reload,
                        "Reload"
                    }
                    button { class: "{theme::btn_secondary()}", onclick: on_demo, "Use demo sheet" }
                }
            }

            section {
                class: "{theme::panel()} p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Current Sheet" }
                dl { class: "mt-4 grid gap-4 text-sm sm:grid-cols-2",
                    SheetFact { name: "Source", value: source.to_string() }
                    SheetFact { name: "Quotes", value: quote_count.to_string() }
                    SheetFact { name: "Carriers", value: carrier_count.to_string() }
                    SheetFact { name: "Price overrides", value: overrides.to_string() }
                    SheetFact { name: "Lane", value: format!("{} → {}", shipment.from_zip, shipment.to_zip) }
                    SheetFact { name: "Load", value: format!("{} pallets, {weight} lbs", shipment.pallets) }
                    SheetFact { name: "Pickup", value: shipment.pickup_date.clone() }
                }
            }
        }
    }
}

fn open_sheet(mut state: Signal<AppState>, toasts: Signal<Vec<ToastMessage>>, path: PathBuf) {
    match load_quote_sheet(&path) {
        Ok(sheet) => {
            let count = sheet.quotes.len();
            let message = format!("Loaded {count} quotes from {}.", path.display());
            state.with_mut(|st| st.replace_sheet(sheet, SheetSource::File(path)));
            persist_user_state(&state);
            push_toast(toasts, ToastKind::Success, message);
        }
        Err(err) => push_toast(toasts, ToastKind::Error, err.to_string()),
    }
}

#[component]
fn SheetFact(name: &'static str, value: String) -> Element {
    rsx! {
        div {
            dt { class: "{theme::label_class()}", "{name}" }
            dd { class: "mt-1 {theme::text_secondary()}", "{value}" }
        }
    }
}
