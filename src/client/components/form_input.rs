use dioxus::prelude::*;

#[component]
pub fn FormInput(
    label: &'static str,
    name: &'static str,
    value: String,
    oninput: EventHandler<String>,
    #[props(default)] required: bool,
) -> Element {
    rsx!(
        label { class: "form-control w-full",
            div { class: "label",
                span { class: "label-text",
                    "{label}"
                    if required { " *" }
                }
            }
            input {
                class: "input input-bordered w-full",
                r#type: "text",
                name: name,
                value: "{value}",
                required: required,
                oninput: move |e| oninput.call(e.value()),
            }
        }
    )
}
