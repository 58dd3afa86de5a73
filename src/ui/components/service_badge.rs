use dioxus::prelude::*;

use crate::domain::ServiceTier;

#[component]
pub fn ServiceBadge(tier: ServiceTier, label: String) -> Element {
    rsx! {
        span {
            class: "inline-flex min-w-0 items-center gap-2",
            span { class: "text-sm {tier.text_class()}", "{tier.icon()}" }
            span { class: "truncate font-medium text-slate-100", "{label}" }
        }
    }
}
