use dioxus::prelude::*;

use components::navbar::Navbar;
use config::Config;
use views::{Compare, Home};

mod components;
mod config;
mod functions;
mod helpers;
mod models;
mod summary;
mod views;

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
        #[route("/")]
        Home {},
        #[route("/compare/:from/:to?:from_name&:to_name")]
        Compare { from: String, to: String, from_name: String, to_name: String },
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(Config::load);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
