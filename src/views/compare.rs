use crate::components::microbench_cmp::MicrobenchCmp;
use crate::models::comparison::Revision;
use dioxus::prelude::*;

#[component]
pub fn Compare(from: String, to: String, from_name: String, to_name: String) -> Element {
    let from = Revision::new(from, from_name);
    let to = Revision::new(to, to_name);

    let from_label = from.label();
    let to_label = to.label();

    rsx! {
        div {
            h1 { class: "m-y-2 text-4xl text-white", "{from_label} → {to_label}" }
            MicrobenchCmp { from, to }
        }
    }
}
