use crate::Route;
use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_regular_icons::FaChartBar, Icon};

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component]
pub fn Navbar() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        div { class: "bg-slate-700 p-5",
            div { id: "navbar",
                Icon { width: 20, height: 20, fill: "white", icon: FaChartBar }
                Link { to: Route::Home {}, "Microbenchmarks" }
            }

            Outlet::<Route> {}
        }
    }
}
