//! App Root Component
//!
//! Main application component with routing.

use leptos::*;
use leptos_router::*;

use crate::pages::Home;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes>
                <Route path="/" view=Home />
                <Route path="/*any" view=NotFound />
            </Routes>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1 class="not-found-title">"Page Not Found"</h1>
            <p class="not-found-hint">"The page you're looking for doesn't exist."</p>
            <A href="/" class="not-found-link">"Go Home"</A>
        </div>
    }
}
