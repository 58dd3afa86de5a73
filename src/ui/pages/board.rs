use dioxus::prelude::*;

use crate::{
    domain::{format_currency, group_and_rank, AppState, BoardSummary, PriceUpdate},
    ui::{
        components::{
            carrier_card::CarrierCard,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
};

#[component]
pub fn BoardPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let on_price_update = use_callback(move |update: PriceUpdate| {
        let applied = state.with_mut(|st| st.apply_price_update(update));
        if applied {
            push_toast(
                toasts,
                ToastKind::Success,
                format!(
                    "Quote #{} repriced to {}.",
                    update.quote_id,
                    format_currency(update.new_price)
                ),
            );
        } else {
            push_toast(
                toasts,
                ToastKind::Error,
                format!("Quote #{} is no longer on the board.", update.quote_id),
            );
        }
    });

    let (quotes, shipment) = state.with(|st| (st.quotes.clone(), st.shipment.clone()));

    if quotes.is_empty() {
        return rsx! {
            div { class: "{theme::panel()} p-8 text-center",
                p { class: "mb-4 text-5xl text-slate-600", "🚚" }
                h3 { class: "mb-2 text-lg font-medium text-slate-100", "No Quotes Available" }
                p { class: "{theme::text_muted()}", "No carrier quotes found for this shipment." }
            }
        };
    }

    let groups = group_and_rank(&quotes);
    let summary = BoardSummary::from_groups(&groups);
    let headline = summary_line(&summary);
    let lowest = summary
        .lowest_price
        .map(format_currency)
        .unwrap_or_else(|| "N/A".to_string());

    rsx! {
        div { class: "space-y-6",
            div { class: "{theme::panel()} p-6",
                div { class: "flex items-center justify-between",
                    div {
                        h2 { class: "text-xl font-semibold text-slate-100", "Carrier Service Level Comparison" }
                        p { class: "mt-1 text-sm {theme::text_muted()}", "{headline}" }
                    }
                    div { class: "text-right",
                        p { class: "text-2xl font-bold text-emerald-400", "{lowest}" }
                        p { class: "text-sm {theme::text_muted()}", "Lowest Quote" }
                    }
                }
            }

            div { class: "space-y-6",
                for (index, group) in groups.into_iter().enumerate() {
                    div {
                        key: "{group.fingerprint()}",
                        class: "relative",
                        if index == 0 {
                            div { class: "absolute -right-2 -top-2 z-10",
                                span { class: "{theme::best_carrier_badge()}", "BEST CARRIER" }
                            }
                        }
                        CarrierCard {
                            group,
                            shipment: shipment.clone(),
                            on_price_update,
                        }
                    }
                }
            }
        }
    }
}

fn summary_line(summary: &BoardSummary) -> String {
    let lowest = summary
        .lowest_price
        .map(format_currency)
        .unwrap_or_else(|| "N/A".to_string());
    format!(
        "{} • {} • Best price: {}",
        pluralize(summary.carrier_count, "carrier"),
        pluralize(summary.quote_count, "total service option"),
        lowest
    )
}

fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
