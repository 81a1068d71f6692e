use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaStar, FaXmark};
use dioxus_free_icons::Icon;
use shipyard::model::spacecraft::{Details, Spacecraft};

use crate::client::state::AppState;

/// Detail view of a single spacecraft, resolving its film references on open.
#[component]
pub fn SpacecraftDialog(spacecraft: Spacecraft, on_close: EventHandler<()>) -> Element {
    let state = use_context::<AppState>();

    let films = spacecraft.info.films.clone();
    let titles = use_resource(move || {
        let client = state.client.clone();
        let films = films.clone();
        async move { client.resolve_film_titles(&films).await }
    });

    let info = &spacecraft.info;
    let cost = spacecraft.display_cost();
    let created = spacecraft.created_date();
    let category = spacecraft.category();

    let common = [
        ("Model", info.model.as_str()),
        ("Manufacturer", info.manufacturer.as_str()),
        ("Cost", cost.as_str()),
        ("Length", info.length.as_str()),
        ("Crew", info.crew.as_str()),
        ("Passengers", info.passengers.as_str()),
        ("Max Atmosphering Speed", info.max_atmosphering_speed.as_str()),
        ("Cargo Capacity", info.cargo_capacity.as_str()),
        ("Consumables", info.consumables.as_str()),
    ];
    let specific: Vec<(&str, &str)> = match &spacecraft.details {
        Details::Vehicle(details) => vec![("Vehicle Class", details.vehicle_class.as_str())],
        Details::Starship(details) => vec![
            ("Starship Class", details.starship_class.as_str()),
            ("Hyperdrive Rating", details.hyperdrive_rating.as_str()),
            ("Megalights per hour", details.display_mglt()),
        ],
    };

    // Titles are matched to references by index, not by arrival order
    let film_list = match &*titles.read_unchecked() {
        Some(titles) => rsx!(
            for (index, title) in titles.iter().enumerate() {
                li { key: "{index}", "- {title.label()}" }
            }
        ),
        None => rsx!(
            for (index, _) in info.films.iter().enumerate() {
                li { key: "{index}", class: "opacity-70", "- loading..." }
            }
        ),
    };

    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box",
                button {
                    class: "btn btn-sm btn-circle btn-ghost absolute right-2 top-2",
                    onclick: move |_| on_close.call(()),
                    Icon {
                        width: 16,
                        height: 16,
                        icon: FaXmark
                    }
                }
                h3 { class: "text-lg font-bold flex items-center gap-2",
                    "{info.name}"
                    if spacecraft.favorite {
                        Icon {
                            width: 16,
                            height: 16,
                            icon: FaStar
                        }
                    }
                }
                p { class: "text-sm italic", "({category}) ({created})" }
                ul { class: "py-2",
                    for (label, value) in common.into_iter().chain(specific) {
                        li { key: "{label}", b { "{label}: " } "{value}" }
                    }
                }
                if !info.films.is_empty() {
                    h4 { class: "font-semibold", "Films" }
                    ul { {film_list} }
                }
            }
            div {
                class: "modal-backdrop",
                onclick: move |_| on_close.call(()),
            }
        }
    )
}
