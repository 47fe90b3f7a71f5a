//! App Root Component
//!
//! Header, navigation and the route outlet. The resolved endpoint is
//! provided to every view through context.

use leptos::*;
use leptos_router::*;

use crate::api::Endpoint;
use crate::components::Nav;
use crate::pages::{LogView, RuleView, StatisticsView};

/// Root application component
#[component]
pub fn App(endpoint: Endpoint) -> impl IntoView {
    provide_context(endpoint);

    view! {
        <Router>
            <div class="min-h-screen bg-gray-100 p-4">
                <Nav />

                // Unmatched paths render only the header and navigation
                <main>
                    <Routes>
                        <Route path="/" view=StatisticsView />
                        <Route path="/logs" view=LogView />
                        <Route path="/rules" view=RuleView />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
