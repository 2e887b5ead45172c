use crate::models::comparison::Revision;
use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    let mut from_hash = use_signal(String::new);
    let mut from_name = use_signal(String::new);
    let mut to_hash = use_signal(String::new);
    let mut to_name = use_signal(String::new);

    let ready = !from_hash.read().trim().is_empty() && !to_hash.read().trim().is_empty();

    rsx! {
        div {
            h1 { class: "m-2 text-4xl text-white", "Compare microbenchmarks" }
            form {
                class: "revision-form",
                onsubmit: move |event| {
                    event.prevent_default();
                    let from = Revision::new(from_hash(), from_name());
                    let to = Revision::new(to_hash(), to_name());
                    navigator().push(compare_route(&from, &to));
                },
                label {
                    "Baseline commit"
                    input {
                        value: "{from_hash}",
                        placeholder: "commit hash",
                        oninput: move |event| from_hash.set(event.value()),
                    }
                }
                label {
                    "Baseline name"
                    input {
                        value: "{from_name}",
                        placeholder: "main",
                        oninput: move |event| from_name.set(event.value()),
                    }
                }
                label {
                    "Target commit"
                    input {
                        value: "{to_hash}",
                        placeholder: "commit hash",
                        oninput: move |event| to_hash.set(event.value()),
                    }
                }
                label {
                    "Target name"
                    input {
                        value: "{to_name}",
                        placeholder: "pull request",
                        oninput: move |event| to_name.set(event.value()),
                    }
                }
                button { r#type: "submit", disabled: !ready, "Compare" }
            }
        }
    }
}

fn compare_route(from: &Revision, to: &Revision) -> Route {
    Route::Compare {
        from: from.commit_hash.trim().to_owned(),
        to: to.commit_hash.trim().to_owned(),
        from_name: from.name.trim().to_owned(),
        to_name: to.name.trim().to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_carries_trimmed_revisions() {
        let route = compare_route(
            &Revision::new(" aaa111 ", "main "),
            &Revision::new("bbb222\n", ""),
        );

        assert_eq!(
            route,
            Route::Compare {
                from: "aaa111".into(),
                to: "bbb222".into(),
                from_name: "main".into(),
                to_name: "".into(),
            }
        );
    }
}
