use dioxus::prelude::*;
use dioxus_logger::tracing;
use shipyard::model::{draft::SpacecraftDraft, spacecraft::Category};

use crate::client::{
    components::{FormInput, Notice},
    state::AppState,
};

#[derive(Clone, PartialEq)]
struct Outcome {
    message: String,
    is_error: bool,
}

/// Form creating a vehicle or starship in the local override store.
#[component]
pub fn SpacecraftForm() -> Element {
    let state = use_context::<AppState>();
    let mut draft = use_signal(SpacecraftDraft::default);
    let mut outcome = use_signal(|| None::<Outcome>);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();

        let category = draft.read().category;
        match state.service().create(draft()) {
            Ok(record) => {
                outcome.set(Some(Outcome {
                    message: format!("{} {} added", category, record.info.name),
                    is_error: false,
                }));
                draft.set(SpacecraftDraft::new(category));
            }
            Err(e) => {
                tracing::warn!("Failed to add spacecraft: {}", e);
                outcome.set(Some(Outcome {
                    message: e.to_string(),
                    is_error: true,
                }));
            }
        }
    };

    let current = draft.read().clone();

    rsx!(
        form {
            class: "flex flex-col gap-2 w-full max-w-xl",
            onsubmit: on_submit,
            label { class: "form-control w-full",
                div { class: "label",
                    span { class: "label-text", "Type" }
                }
                select {
                    class: "select select-bordered",
                    value: "{current.category}",
                    onchange: move |e| {
                        if let Ok(category) = e.value().parse::<Category>() {
                            draft.write().category = category;
                        }
                    },
                    for category in Category::ALL {
                        option { value: "{category}", selected: current.category == category,
                            if category == Category::Vehicle { "Vehicle" } else { "Starship" }
                        }
                    }
                }
            }
            FormInput {
                label: "Name",
                name: "name",
                value: current.name.clone(),
                required: true,
                oninput: move |v| draft.write().name = v,
            }
            FormInput {
                label: "Model",
                name: "model",
                value: current.model.clone(),
                required: true,
                oninput: move |v| draft.write().model = v,
            }
            FormInput {
                label: "Manufacturer",
                name: "manufacturer",
                value: current.manufacturer.clone(),
                required: true,
                oninput: move |v| draft.write().manufacturer = v,
            }
            FormInput {
                label: "Cost in credits",
                name: "cost_in_credits",
                value: current.cost_in_credits.clone(),
                oninput: move |v| draft.write().cost_in_credits = v,
            }
            FormInput {
                label: "Length",
                name: "length",
                value: current.length.clone(),
                oninput: move |v| draft.write().length = v,
            }
            FormInput {
                label: "Crew",
                name: "crew",
                value: current.crew.clone(),
                oninput: move |v| draft.write().crew = v,
            }
            FormInput {
                label: "Passengers",
                name: "passengers",
                value: current.passengers.clone(),
                oninput: move |v| draft.write().passengers = v,
            }
            FormInput {
                label: "Max atmosphering speed",
                name: "max_atmosphering_speed",
                value: current.max_atmosphering_speed.clone(),
                oninput: move |v| draft.write().max_atmosphering_speed = v,
            }
            FormInput {
                label: "Cargo capacity",
                name: "cargo_capacity",
                value: current.cargo_capacity.clone(),
                oninput: move |v| draft.write().cargo_capacity = v,
            }
            FormInput {
                label: "Consumables",
                name: "consumables",
                value: current.consumables.clone(),
                oninput: move |v| draft.write().consumables = v,
            }
            if current.category == Category::Vehicle {
                FormInput {
                    label: "Vehicle class",
                    name: "vehicle_class",
                    value: current.vehicle_class.clone(),
                    oninput: move |v| draft.write().vehicle_class = v,
                }
            } else {
                FormInput {
                    label: "Starship class",
                    name: "starship_class",
                    value: current.starship_class.clone(),
                    oninput: move |v| draft.write().starship_class = v,
                }
                FormInput {
                    label: "Hyperdrive rating",
                    name: "hyperdrive_rating",
                    value: current.hyperdrive_rating.clone(),
                    oninput: move |v| draft.write().hyperdrive_rating = v,
                }
                FormInput {
                    label: "MGLT (megalights per hour)",
                    name: "mglt",
                    value: current.mglt.clone(),
                    oninput: move |v| draft.write().mglt = v,
                }
            }
            label { class: "label cursor-pointer justify-start gap-2",
                input {
                    r#type: "checkbox",
                    class: "checkbox",
                    checked: current.favorite,
                    onchange: move |e| draft.write().favorite = e.checked(),
                }
                span { class: "label-text", "Favorite" }
            }
            button { class: "btn btn-primary", r#type: "submit", "Add Spacecraft" }
        }
        if let Some(Outcome { message, is_error }) = outcome() {
            Notice {
                message: message,
                is_error: is_error,
                on_close: move |_| outcome.set(None),
            }
        }
    )
}
