use dioxus::prelude::*;
use shipyard::view::Filter;

/// Row of chips selecting the catalog filter; the selected chip is filled.
#[component]
pub fn FilterChips(current: Signal<Filter>) -> Element {
    rsx!(
        ul { class: "flex gap-2",
            for filter in Filter::ALL {
                li { key: "{filter}",
                    button {
                        class: if current() == filter { "badge badge-lg badge-warning" } else { "badge badge-lg badge-outline" },
                        onclick: move |_| {
                            let mut current = current;
                            current.set(filter);
                        },
                        "{filter.label()}"
                    }
                }
            }
        }
    )
}
