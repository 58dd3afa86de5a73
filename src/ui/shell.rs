use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::AppState;
use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    let (lane, source) = state.with(|st| {
        (
            format!("{} → {}", st.shipment.from_zip, st.shipment.to_zip),
            st.source.to_string(),
        )
    });

    let version = version_label();

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header {
                class: "border-b border-sky-900/40 bg-slate-950/90 backdrop-blur px-6 py-4",
                div { class: "mx-auto flex max-w-6xl items-center justify-between gap-4",
                    div { class: "flex items-center gap-3",
                        span { class: "text-2xl", "🚚" }
                        div {
                            h1 { class: "text-xl font-semibold tracking-tight text-sky-200", "{APP_NAME}" }
                            p { class: "text-xs italic {theme::text_muted()}", "{lane}" }
                        }
                    }
                    nav { class: "flex gap-2 text-sm",
                        NavButton {
                            active: matches!(current_route, Route::Board {}),
                            onclick: move |_| { nav.push(Route::Board {}); },
                            label: "📊 Quotes",
                        }
                        NavButton {
                            active: matches!(current_route, Route::Sheet {}),
                            onclick: move |_| { nav.push(Route::Sheet {}); },
                            label: "📂 Sheet",
                        }
                    }
                }
            }
            main { class: "mx-auto max-w-6xl px-6 py-8", {children} }
            footer { class: "mx-auto max-w-6xl px-6 pb-6 text-xs {theme::text_muted()}",
                "{source} · {version}"
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: "{theme::nav_button(active)}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
