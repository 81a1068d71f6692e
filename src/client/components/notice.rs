use dioxus::prelude::*;

/// Inline alert reporting the outcome of a form submission.
#[component]
pub fn Notice(message: String, is_error: bool, on_close: EventHandler<()>) -> Element {
    let class = if is_error {
        "alert alert-error"
    } else {
        "alert alert-success"
    };

    rsx!(
        div { class: "toast toast-top toast-center",
            div { class: "{class}", role: "alert",
                span { "{message}" }
                button {
                    class: "btn btn-xs btn-ghost",
                    onclick: move |_| on_close.call(()),
                    "Dismiss"
                }
            }
        }
    )
}
