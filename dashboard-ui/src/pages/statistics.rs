//! Statistics Page
//!
//! Anomaly summary: event totals, the anomaly percentage and the sources
//! with most alerts.

use leptos::*;

use crate::api::{self, Endpoint, Statistics};
use crate::components::Panel;
use crate::state::{use_fetch, FetchState};

pub const LOADING_TEXT: &str = "🔄 Cargando estadísticas...";

/// Percentage with exactly two decimals
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Summary lines shown above the source list
pub fn summary_lines(stats: &Statistics) -> [String; 3] {
    [
        format!("Total de eventos: {}", stats.total_events),
        format!("Anomalías detectadas: {}", stats.anomalies_detected),
        format!(
            "Porcentaje de anomalías: {}",
            format_percentage(stats.anomaly_percentage)
        ),
    ]
}

/// One list item per anomalous source, in the order received
pub fn source_items(stats: &Statistics) -> Vec<String> {
    stats
        .top_anomalous_ips
        .iter()
        .map(|source| format!("{} ({} eventos)", source.id, source.count))
        .collect()
}

/// Statistics page component
#[component]
pub fn StatisticsView() -> impl IntoView {
    let endpoint = use_context::<Endpoint>().expect("Endpoint not found");
    let stats = use_fetch("estadísticas", move || async move {
        api::fetch_stats(&endpoint).await
    });

    move || match stats.get() {
        FetchState::Loaded(stats) => view! { <StatisticsPanel stats=stats /> }.into_view(),
        // A failed load keeps the loading text
        FetchState::Loading | FetchState::Failed(_) => view! { <p>{LOADING_TEXT}</p> }.into_view(),
    }
}

#[component]
fn StatisticsPanel(stats: Statistics) -> impl IntoView {
    let [total, anomalies, percentage] = summary_lines(&stats);

    view! {
        <Panel title="📊 Estadísticas del Sistema">
            <p>{total}</p>
            <p>{anomalies}</p>
            <p>{percentage}</p>
            <h3 class="font-semibold mt-4">"Top IPs con anomalías"</h3>
            <ul class="list-disc list-inside">
                {source_items(&stats)
                    .into_iter()
                    .map(|item| view! { <li>{item}</li> })
                    .collect_view()}
            </ul>
        </Panel>
    }
}
