use dioxus::prelude::*;

use crate::{
    domain::{
        format_currency, margin_pct, parse_price_input, service_label, PriceUpdate, Quote,
    },
    ui::theme,
};

/// Pricing breakdown for one quote with a customer-price override.
#[component]
pub fn QuoteDetails(quote: Quote, on_price_update: EventHandler<PriceUpdate>) -> Element {
    let initial_price = if quote.customer_price.is_finite() {
        format!("{:.2}", quote.customer_price)
    } else {
        String::new()
    };
    let mut price_input = use_signal(|| initial_price);
    let mut input_error = use_signal(|| None::<String>);

    let quote_id = quote.quote_id;
    let margin = margin_pct(&quote)
        .map(|pct| format!("{pct:.1}%"))
        .unwrap_or_else(|| "N/A".to_string());
    let transit = quote
        .known_transit_days()
        .map(|days| format!("{days} days"))
        .unwrap_or_else(|| "N/A".to_string());
    let service_code = quote.service_code().unwrap_or("—").to_string();
    let label = service_label(&quote).to_string();

    let rows = [
        ("Carrier rate", format_currency(quote.carrier_total_rate)),
        ("Customer price", format_currency(quote.customer_price)),
        ("Profit", format_currency(quote.profit)),
        ("Margin", margin),
        ("Transit", transit),
        ("Service", label),
        ("Service code", service_code),
        ("Quote #", quote_id.to_string()),
    ];

    let on_apply = move |_| match parse_price_input(&price_input()) {
        Ok(new_price) => {
            input_error.set(None);
            on_price_update.call(PriceUpdate {
                quote_id,
                new_price,
            });
        }
        Err(err) => input_error.set(Some(err.to_string())),
    };

    rsx! {
        div {
            class: "{theme::panel()} p-4",
            dl {
                class: "grid grid-cols-2 gap-x-6 gap-y-2 text-sm md:grid-cols-4",
                for (name, value) in rows {
                    div {
                        dt { class: "{theme::label_class()}", "{name}" }
                        dd { class: "mt-0.5 {theme::text_secondary()}", "{value}" }
                    }
                }
            }
            div {
                class: "mt-4 flex flex-wrap items-end gap-3",
                div {
                    label { class: "{theme::label_class()}", "Override customer price" }
                    input {
                        class: "mt-1 w-40 {theme::input_class()}",
                        value: price_input(),
                        oninput: move |evt| price_input.set(evt.value()),
                    }
                }
                button {
                    class: "{theme::btn_primary()}",
                    onclick: on_apply,
                    "Apply price"
                }
                if let Some(message) = input_error() {
                    p { class: "text-xs text-rose-300", "{message}" }
                }
            }
        }
    }
}
