use dioxus::logger::tracing::{debug, info, warn};
use dioxus::prelude::*;

use crate::{
    components::{
        comparison_table::ComparisonTable,
        spinner::{ErrorBanner, Spinner},
    },
    config::Config,
    functions::fetch_comparison::fetch_comparison,
    models::{
        comparison::Revision,
        load_state::{ComparisonLoader, LoadState},
    },
    summary::markdown_summary,
};

/// Fetches the comparison between two revisions and renders it as a table.
///
/// A new request is issued whenever `from` or `to` changes. Responses of
/// superseded requests are dropped.
#[component]
pub fn MicrobenchCmp(from: ReadOnlySignal<Revision>, to: ReadOnlySignal<Revision>) -> Element {
    let config = use_context::<Config>();
    let mut loader = use_signal(ComparisonLoader::default);

    use_effect(move || {
        let from = from.read().clone();
        let to = to.read().clone();
        let api_url = config.api_url.clone();

        let ticket = loader.write().begin();
        debug!("comparing {} against {}", to.commit_hash, from.commit_hash);

        spawn(async move {
            let result = fetch_comparison(&api_url, &from, &to).await;
            match &result {
                Ok(rows) => info!(
                    "loaded {} benchmarks for {}..{}",
                    rows.len(),
                    from.commit_hash,
                    to.commit_hash
                ),
                Err(err) => warn!("comparison {}..{} failed: {err}", from.commit_hash, to.commit_hash),
            }

            if !loader.write().complete(ticket, result) {
                debug!("dropping stale comparison {}..{}", from.commit_hash, to.commit_hash);
            }
        });
    });

    let state = loader.read().state().clone();

    rsx! {
        ComparisonView { from: from.read().clone(), to: to.read().clone(), state }
    }
}

/// Shows the spinner while nothing has arrived yet, then the table or the error.
#[component]
pub fn ComparisonView(from: Revision, to: Revision, state: LoadState) -> Element {
    match state {
        LoadState::Idle | LoadState::Loading => rsx! {
            Spinner {}
        },
        LoadState::Failed(message) => rsx! {
            ErrorBanner { message }
        },
        LoadState::Loaded(rows) => {
            let markdown = markdown_summary(&from, &to, &rows);
            rsx! {
                ComparisonTable { from, to, rows }
                details { class: "summary",
                    summary { "Markdown summary" }
                    pre { "{markdown}" }
                }
            }
        }
    }
}
