//! Logs Page
//!
//! Raw Suricata EVE records, pretty-printed one block per record.

use leptos::*;

use crate::api::{self, Endpoint, LogRecord};
use crate::components::{Panel, ScrollBox};
use crate::state::use_fetch;

/// Record as shown in its block, indented by two spaces
pub fn pretty_record(record: &LogRecord) -> String {
    serde_json::to_string_pretty(record).unwrap_or_else(|_| record.to_string())
}

/// Logs page component
#[component]
pub fn LogView() -> impl IntoView {
    let endpoint = use_context::<Endpoint>().expect("Endpoint not found");
    let logs = use_fetch("logs", move || async move { api::fetch_logs(&endpoint).await });

    view! {
        <Panel title="📄 Logs de Suricata">
            <ScrollBox>
                {move || {
                    logs.get()
                        .loaded()
                        .cloned()
                        .unwrap_or_default()
                        .iter()
                        .map(|record| view! { <pre>{pretty_record(record)}</pre> })
                        .collect_view()
                }}
            </ScrollBox>
        </Panel>
    }
}
