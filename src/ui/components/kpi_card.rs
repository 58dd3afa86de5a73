use dioxus::prelude::*;

use crate::ui::theme::{self, StatAccent};

#[component]
pub fn KpiCard(
    title: String,
    value: String,
    #[props(default = StatAccent::Neutral)] accent: StatAccent,
) -> Element {
    rsx! {
        div {
            class: "text-center",
            p { class: "text-2xl font-bold {theme::stat_accent(accent)}", "{value}" }
            h3 { class: "text-xs {theme::text_muted()}", "{title}" }
        }
    }
}
