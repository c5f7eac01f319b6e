//! Drawer Toggle
//!
//! Fixed-height bar holding the drawer's collapse affordance: a single
//! icon button with a chevron-left glyph. The button carries no wired
//! action.

use leptos::*;

/// Toggle bar rendered at the top of the primary drawer
#[component]
pub fn DrawerToggle() -> impl IntoView {
    view! {
        <div class="drawer-toggle">
            <button class="icon-button" aria-label="Collapse drawer">
                <svg viewBox="0 0 24 24" width="24" height="24" fill="currentColor">
                    <path d="M15.41 7.41 14 6l-6 6 6 6 1.41-1.41L10.83 12z" />
                </svg>
            </button>
        </div>
    }
}
