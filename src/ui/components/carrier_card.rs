use dioxus::prelude::*;

use super::{kpi_card::KpiCard, quote_details::QuoteDetails, service_badge::ServiceBadge};
use crate::{
    domain::{
        format_currency, format_weight, service_label, CarrierGroup, PriceUpdate, Quote,
        ServiceNavigator, ServiceTier, ShipmentInfo,
    },
    ui::theme::{self, StatAccent},
};

/// One carrier with its service levels, cheapest first.
///
/// Selection and expansion are local to the card. The parent keys cards by
/// [`CarrierGroup::fingerprint`], so a different quote set mounts a fresh card
/// starting on the cheapest option.
#[component]
pub fn CarrierCard(
    group: CarrierGroup,
    shipment: ShipmentInfo,
    on_price_update: EventHandler<PriceUpdate>,
) -> Element {
    let mut navigator = use_signal(ServiceNavigator::new);
    let mut expanded = use_signal(|| false);

    let count = group.len();
    let selected = navigator().current(count);
    let position = selected + 1;
    let Some(current) = group.quotes.get(selected).cloned() else {
        return rsx! { Fragment {} };
    };

    let levels_label = if count == 1 {
        "1 service level".to_string()
    } else {
        format!("{count} service levels")
    };
    let best_price = format_currency(group.best_price());
    let avg_transit = group
        .avg_transit_days()
        .map(|days| format!("{days:.1} days"))
        .unwrap_or_else(|| "N/A".to_string());
    let current_transit = current
        .known_transit_days()
        .map(|days| days.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    let rows: Vec<(usize, String, Quote)> = group
        .quotes
        .iter()
        .enumerate()
        .map(|(index, quote)| (index, service_row_key(index, quote), quote.clone()))
        .collect();
    let details_key = service_row_key(selected, &current);
    let avg_price = format_currency(group.avg_price());
    let avg_profit = format_currency(group.avg_profit());
    let is_expanded = expanded();
    let chevron = if is_expanded { "▲" } else { "▼" };
    let toggle_label = if is_expanded {
        "Hide Detailed Quote Information"
    } else {
        "Show Detailed Quote Information"
    };
    let display_name = if group.name.is_empty() {
        "Unknown carrier".to_string()
    } else {
        group.name.clone()
    };

    rsx! {
        div {
            class: "{theme::card()}",

            div {
                class: "{theme::card_section()} bg-gradient-to-r from-sky-950/60 to-indigo-950/60",
                div { class: "flex items-center justify-between",
                    div { class: "flex items-center gap-4",
                        div { class: "rounded-lg bg-sky-600 p-3 text-xl", "🚚" }
                        div {
                            h3 { class: "text-xl font-bold text-slate-100", "{display_name}" }
                            div { class: "mt-1 flex items-center gap-4 text-sm {theme::text_muted()}",
                                if let Some(scac) = group.info.scac.clone() {
                                    span { "🏅 SCAC: {scac}" }
                                }
                                if let Some(mc) = group.info.mc_number.clone() {
                                    span { "🛡️ MC: {mc}" }
                                }
                                if let Some(dot) = group.info.dot_number.clone() {
                                    span { "📈 DOT: {dot}" }
                                }
                            }
                        }
                    }
                    div { class: "text-right",
                        p { class: "text-sm font-medium text-slate-300", "⭐ {levels_label}" }
                        p { class: "text-sm {theme::text_muted()}", "Best: {best_price}" }
                    }
                }
            }

            if count > 1 {
                div {
                    class: "{theme::card_section()} bg-slate-900/80",
                    div { class: "flex items-center justify-between",
                        div { class: "flex items-center gap-3",
                            span { class: "text-sm font-medium text-slate-400", "Service Level:" }
                            button {
                                class: "{theme::btn_icon()}",
                                onclick: move |_| navigator.with_mut(|nav| nav.previous(count)),
                                "◀"
                            }
                            ServiceBadge {
                                tier: ServiceTier::of(&current),
                                label: service_label(&current).to_string(),
                            }
                            button {
                                class: "{theme::btn_icon()}",
                                onclick: move |_| navigator.with_mut(|nav| nav.next(count)),
                                "▶"
                            }
                        }
                        div { class: "flex items-center gap-2 text-sm {theme::text_muted()}",
                            span { "{position} of {count}" }
                            if navigator().is_best(count) {
                                span {
                                    class: "rounded-full bg-emerald-500/15 px-2 py-1 text-xs font-medium text-emerald-300",
                                    "BEST PRICE"
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "{theme::card_section()} grid grid-cols-2 gap-4 md:grid-cols-4",
                KpiCard {
                    title: "Customer Price".to_string(),
                    value: format_currency(current.customer_price),
                    accent: StatAccent::Price,
                }
                KpiCard {
                    title: "Your Profit".to_string(),
                    value: format_currency(current.profit),
                    accent: StatAccent::Profit,
                }
                KpiCard {
                    title: "Transit Days".to_string(),
                    value: current_transit,
                    accent: StatAccent::Transit,
                }
                KpiCard {
                    title: "Carrier Rate".to_string(),
                    value: format_currency(current.carrier_total_rate),
                    accent: StatAccent::Rate,
                }
            }

            if count > 1 {
                div {
                    class: "{theme::card_section()}",
                    h4 { class: "mb-3 text-sm font-semibold text-slate-300", "All Service Levels" }
                    div { class: "grid grid-cols-1 gap-2",
                        for (index, row_key, quote) in rows {
                            ServiceRow {
                                key: "{row_key}",
                                quote,
                                selected: index == selected,
                                cheapest: index == 0,
                                on_select: move |_| navigator.with_mut(|nav| nav.select(index, count)),
                            }
                        }
                    }
                    div { class: "mt-3 grid grid-cols-3 gap-4 text-xs {theme::text_muted()}",
                        span { "Avg price: {avg_price}" }
                        span { "Avg profit: {avg_profit}" }
                        span { "Avg transit: {avg_transit}" }
                    }
                }
            }

            ShipmentStrip { shipment }

            div { class: "px-6 py-4",
                button {
                    class: "{theme::btn_toggle()}",
                    onclick: move |_| expanded.with_mut(|open| *open = !*open),
                    span { "{toggle_label}" }
                    span { class: "{theme::text_muted()}", "{chevron}" }
                }
            }

            if is_expanded {
                div { class: "px-6 pb-6",
                    QuoteDetails {
                        key: "{details_key}",
                        quote: current.clone(),
                        on_price_update,
                    }
                }
            }
        }
    }
}

/// Render key for a service row. Sheets may repeat quote ids, so the
/// position keeps sibling keys unique.
fn service_row_key(index: usize, quote: &Quote) -> String {
    format!("{index}-{}", quote.quote_id)
}

#[component]
fn ServiceRow(quote: Quote, selected: bool, cheapest: bool, on_select: EventHandler<()>) -> Element {
    let tier = ServiceTier::of(&quote);
    let label = service_label(&quote).to_string();
    let transit = quote
        .known_transit_days()
        .map(|days| format!("{days} days transit"))
        .unwrap_or_default();
    let price = format_currency(quote.customer_price);
    let profit = format_currency(quote.profit);

    rsx! {
        button {
            class: "{theme::service_row(selected)}",
            onclick: move |_| on_select.call(()),
            div { class: "flex items-center gap-3",
                span { class: "text-sm {tier.text_class()}", "{tier.icon()}" }
                div {
                    p { class: "{theme::row_title(selected)}", "{label}" }
                    p { class: "{theme::row_caption(selected)}", "{transit}" }
                }
            }
            div { class: "flex items-center gap-2",
                div { class: "text-right",
                    p { class: "font-bold {theme::row_title(selected)}", "{price}" }
                    p { class: "{theme::row_caption(selected)}", "Profit: {profit}" }
                }
                if cheapest {
                    span { class: "{theme::best_badge()}", "BEST" }
                }
            }
        }
    }
}

#[component]
fn ShipmentStrip(shipment: ShipmentInfo) -> Element {
    let weight = format_weight(shipment.weight);
    rsx! {
        div {
            class: "{theme::card_section()} grid grid-cols-2 gap-4 bg-sky-950/30 text-sm text-slate-300 md:grid-cols-4",
            span { "📍 {shipment.from_zip} → {shipment.to_zip}" }
            span { "📦 {shipment.pallets} pallets" }
            span { "⚖️ {weight} lbs" }
            span { "📅 {shipment.pickup_date}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(id: u64) -> Quote {
        Quote {
            quote_id: id,
            carrier: Default::default(),
            carrier_code: None,
            customer_price: 100.0,
            profit: 10.0,
            carrier_total_rate: 90.0,
            transit_days: None,
            service_level: None,
        }
    }

    #[test]
    fn repeated_quote_ids_get_distinct_row_keys() {
        let rows = [quote(7), quote(7), quote(8)];
        let keys: Vec<String> = rows
            .iter()
            .enumerate()
            .map(|(index, quote)| service_row_key(index, quote))
            .collect();
        assert_eq!(keys, vec!["0-7", "1-7", "2-8"]);
    }
}
