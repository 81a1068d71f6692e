use dioxus::prelude::*;
use dioxus_logger::tracing;
use shipyard::config::Config;

use crate::client::{router::Route, state::AppState};

#[component]
pub fn App() -> Element {
    use_context_provider(|| {
        let config = Config::from_env().unwrap_or_else(|e| {
            tracing::error!("Configuration error, using defaults: {}", e);
            Config::default()
        });

        AppState::new(config)
    });

    rsx! {
        document::Title { "Shipyard" }
        Router::<Route> {}
    }
}
