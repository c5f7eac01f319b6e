//! Primary Application Bar
//!
//! Fixed top bar with the application brand.

use leptos::*;

use crate::theme::LayoutTheme;

/// Application bar pinned to the top of the viewport
#[component]
pub fn PrimaryAppBar(theme: LayoutTheme) -> impl IntoView {
    view! {
        <header class="app-bar" style=theme.app_bar_style()>
            <span class="app-bar-brand">"Huddle"</span>
        </header>
    }
}
