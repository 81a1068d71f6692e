use dioxus::prelude::*;

use crate::client::components::{Page, SpacecraftForm};

#[component]
pub fn AddSpacecraft() -> Element {
    rsx!(
        document::Title { "Add Spacecraft | Shipyard" }
        Page { class: "flex flex-col items-center gap-4",
            h1 { class: "text-2xl", "Add New Spacecraft" }
            SpacecraftForm {}
        }
    )
}
