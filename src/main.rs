#![allow(non_snake_case)]

mod client;

fn main() {
    dioxus::launch(client::App);
}
