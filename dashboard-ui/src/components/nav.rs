//! Navigation Component
//!
//! Header with the dashboard title and links to the three views.

use leptos::*;
use leptos_router::*;

/// Navigation links, in display order
pub const NAV_LINKS: [(&str, &str); 3] = [
    ("/", "Estadísticas"),
    ("/logs", "Logs"),
    ("/rules", "Reglas"),
];

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <header class="mb-4">
            <h1 class="text-2xl font-bold mb-4">"SuricataML Dashboard"</h1>
            <nav class="flex space-x-4 mb-4">
                {NAV_LINKS
                    .iter()
                    .map(|(href, label)| view! { <NavLink href=*href label=*label /> })
                    .collect_view()}
            </nav>
        </header>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            exact=true
            class="text-blue-600 hover:underline"
            active_class="font-semibold"
        >
            {label}
        </A>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_cover_every_route() {
        let hrefs: Vec<&str> = NAV_LINKS.iter().map(|(href, _)| *href).collect();
        assert_eq!(hrefs, vec!["/", "/logs", "/rules"]);
    }
}
