//! Home Page
//!
//! Landing page composing the application bar and the primary drawer.

use leptos::*;

use crate::components::{PrimaryAppBar, PrimaryDrawer};
use crate::theme::LayoutTheme;

/// Landing page
#[component]
pub fn Home() -> impl IntoView {
    let theme = LayoutTheme::default();

    view! {
        <div class="page">
            <PrimaryAppBar theme=theme />
            <PrimaryDrawer theme=theme />
            "Home"
        </div>
    }
}
