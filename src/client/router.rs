use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{AddSpacecraft, Home, NotFound},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/add")]
    AddSpacecraft {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
