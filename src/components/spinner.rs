use dioxus::prelude::*;

#[component]
pub fn Spinner() -> Element {
    rsx! {
        div { class: "spinner",
            div { class: "spinner-border", role: "status",
                span { class: "visually-hidden", "Loading..." }
            }
        }
    }
}

#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div { class: "error", role: "alert",
            strong { "Unable to load comparison: " }
            "{message}"
        }
    }
}
