use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPlus, FaRocket};
use dioxus_free_icons::Icon;

pub use crate::client::router::Route;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200 fixed top-0 z-10",
            div {
                class: "navbar-start",
                Link { to: Route::Home {}, class: "flex items-center gap-2",
                    Icon {
                        width: 24,
                        height: 24,
                        icon: FaRocket
                    }
                    p { class: "text-xl",
                        "Shipyard"
                    }
                }
            }
            div {
                class: "navbar-end",
                Link { to: Route::AddSpacecraft {}, class: "btn btn-primary flex gap-2",
                    Icon {
                        width: 16,
                        height: 16,
                        icon: FaPlus
                    }
                    p { "Add Spacecraft" }
                }
            }
        }

        Outlet::<Route> {}
    }
}
