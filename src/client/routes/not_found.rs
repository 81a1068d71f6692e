use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Page { class: "flex flex-col items-center justify-center gap-4",
            p { class: "text-xl", "Nothing docked at /{path}" }
            Link { to: Route::Home {}, class: "btn btn-outline", "Back to the catalog" }
        }
    )
}
