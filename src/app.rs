use dioxus::{prelude::*, signals::Signal};
use tracing::warn;

use crate::{
    config::StartupSheet,
    domain::AppState,
    ui::{
        components::toast::{ToastKind, ToastMessage, ToastStack},
        pages::{BoardPage, SheetPage},
        shell::Shell,
    },
    util::{assets, persistence::save_persisted_state},
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Board {},
    #[route("/sheet")]
    Sheet {},
}

#[component]
pub fn App() -> Element {
    let startup = use_hook(|| {
        try_consume_context::<StartupSheet>().unwrap_or_else(|| StartupSheet {
            state: AppState::default(),
            warning: None,
        })
    });

    let state = use_signal(|| startup.state.clone());
    use_context_provider(|| state);

    let toasts = use_signal(|| {
        startup
            .warning
            .iter()
            .map(|text| ToastMessage::new(ToastKind::Warning, text.clone()))
            .collect::<Vec<_>>()
    });
    use_context_provider(|| toasts);

    rsx! {
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        ToastStack {}
    }
}

pub fn persist_user_state(state: &Signal<AppState>) {
    let snapshot = state.with(|st| st.to_persisted());
    if let Err(err) = save_persisted_state(&snapshot) {
        warn!(error = %err, "failed to persist user state");
    }
}

#[component]
pub fn Board() -> Element {
    rsx! { Shell { BoardPage {} } }
}

#[component]
pub fn Sheet() -> Element {
    rsx! { Shell { SheetPage {} } }
}
