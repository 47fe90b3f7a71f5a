//! Rules Page

use leptos::*;

use crate::api::{self, Endpoint};
use crate::components::{Panel, ScrollBox};
use crate::state::use_fetch;

/// Rule view component
#[component]
pub fn RuleView() -> impl IntoView {
    let endpoint = use_context::<Endpoint>().expect("Endpoint not found");
    let rules = use_fetch("reglas", move || async move { api::fetch_rules(&endpoint).await });

    view! {
        <Panel title="📜 Reglas Suricata">
            <ScrollBox>
                <ul>
                    {move || {
                        rules.get()
                            .loaded()
                            .cloned()
                            .unwrap_or_default()
                            .into_iter()
                            .map(|rule| view! { <li>{rule}</li> })
                            .collect_view()
                    }}
                </ul>
            </ScrollBox>
        </Panel>
    }
}

