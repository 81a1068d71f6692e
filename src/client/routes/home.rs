use dioxus::prelude::*;
use shipyard::{model::spacecraft::Spacecraft, view::Filter};

use crate::client::{
    components::{FilterChips, Page, SpacecraftCard, SpacecraftDialog},
    state::AppState,
};

#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();
    let filter = use_signal(Filter::default);
    let mut selected = use_signal(|| None::<Spacecraft>);

    // Fetched once per visit; changing the filter only rebuilds the view
    let fetch_state = state.clone();
    let snapshot = use_resource(move || {
        let state = fetch_state.clone();
        async move { state.service().load_snapshot().await }
    });

    let favorites = &state.client.config().favorites;

    let listing = match &*snapshot.read_unchecked() {
        Some(snapshot) => {
            let items = snapshot.build_view(filter(), favorites);

            rsx!(
                if items.is_empty() {
                    p { class: "opacity-70", "No spacecraft to show" }
                }
                ul { class: "grid gap-4 w-full max-w-[1440px] sm:grid-cols-2 lg:grid-cols-3",
                    for (index, spacecraft) in items.into_iter().enumerate() {
                        li { key: "{index}",
                            SpacecraftCard {
                                spacecraft: spacecraft,
                                on_select: move |craft| selected.set(Some(craft)),
                            }
                        }
                    }
                }
            )
        }
        None => rsx!(
            span { class: "loading loading-spinner loading-lg" }
        ),
    };

    rsx!(
        document::Title { "Catalog | Shipyard" }
        Page { class: "flex flex-col items-center gap-4",
            FilterChips { current: filter }
            {listing}
            if let Some(spacecraft) = selected() {
                SpacecraftDialog {
                    key: "{spacecraft.info.url}{spacecraft.info.name}{spacecraft.info.created}",
                    spacecraft: spacecraft,
                    on_close: move |_| selected.set(None),
                }
            }
        }
    )
}
