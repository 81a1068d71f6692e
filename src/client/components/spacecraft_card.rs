use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaStar;
use dioxus_free_icons::Icon;
use shipyard::model::spacecraft::Spacecraft;

#[component]
pub fn SpacecraftCard(spacecraft: Spacecraft, on_select: EventHandler<Spacecraft>) -> Element {
    let class = if spacecraft.favorite {
        "card shadow-sm h-full border border-warning"
    } else {
        "card shadow-sm h-full"
    };
    let cost = spacecraft.display_cost();
    let selection = spacecraft.clone();

    rsx!(
        div { class: "{class}",
            div { class: "card-body",
                h2 { class: "card-title",
                    "{spacecraft.info.name}"
                    if spacecraft.favorite {
                        Icon {
                            width: 16,
                            height: 16,
                            icon: FaStar
                        }
                    }
                }
                p { b { "Model: " } "{spacecraft.info.model}" }
                p { b { "Manufacturer: " } "{spacecraft.info.manufacturer}" }
                p { class: "text-sm opacity-70", "{cost}" }
                div { class: "card-actions justify-end",
                    button {
                        class: "btn btn-sm btn-outline",
                        onclick: move |_| on_select.call(selection.clone()),
                        "Learn More"
                    }
                }
            }
        }
    )
}
