//! Primary Drawer
//!
//! Collapsible side panel. At narrow viewport widths it renders as a
//! temporary overlay (dismissed by clicking the backdrop); at wider
//! widths it is docked permanently beside the page content. The open
//! state is re-derived from the breakpoint on every media-query change.

use leptos::*;

use crate::components::DrawerToggle;
use crate::state::viewport::use_narrow_viewport;
use crate::theme::LayoutTheme;

/// Number of placeholder rows rendered in the drawer body
pub const PLACEHOLDER_ROWS: u32 = 100;

/// How the drawer participates in layout at the current viewport width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerVariant {
    /// Overlay panel floating above content, dismissible
    Temporary,
    /// Docked panel that always occupies layout space
    Permanent,
}

impl DrawerVariant {
    /// Variant for the given breakpoint state
    pub fn for_viewport(narrow: bool) -> Self {
        if narrow {
            DrawerVariant::Temporary
        } else {
            DrawerVariant::Permanent
        }
    }

    /// CSS class for this variant
    pub fn class(self) -> &'static str {
        match self {
            DrawerVariant::Temporary => "drawer-temporary",
            DrawerVariant::Permanent => "drawer-permanent",
        }
    }
}

/// Open state derived from the breakpoint: open unless narrow
pub fn initially_open(narrow: bool) -> bool {
    !narrow
}

/// Labels for the placeholder rows, 1 through [`PLACEHOLDER_ROWS`]
pub fn placeholder_labels() -> impl Iterator<Item = u32> {
    1..=PLACEHOLDER_ROWS
}

/// Collapsible side panel below the application bar
#[component]
pub fn PrimaryDrawer(theme: LayoutTheme) -> impl IntoView {
    let narrow = use_narrow_viewport();
    let (open, set_open) = create_signal(initially_open(narrow.get_untracked()));

    // Re-derive the open state whenever the breakpoint flips.
    create_effect(move |_| {
        set_open.set(initially_open(narrow.get()));
    });

    let variant = move || DrawerVariant::for_viewport(narrow.get());

    let drawer_class = move || {
        let mut class = format!("drawer {}", variant().class());
        if open.get() {
            class.push_str(" drawer-open");
        }
        class
    };

    view! {
        <Show when=move || variant() == DrawerVariant::Temporary && open.get()>
            <div class="drawer-backdrop" on:click=move |_| set_open.set(false)></div>
        </Show>
        <aside class=drawer_class style=theme.drawer_style()>
            <div class="drawer-body">
                <div class="drawer-toggle-anchor">
                    <DrawerToggle />
                </div>
                {placeholder_labels()
                    .map(|n| view! { <p class="drawer-row">{n}</p> })
                    .collect_view()}
            </div>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::viewport::is_narrow_width;

    #[test]
    fn test_narrow_viewports_get_temporary_closed_drawer() {
        for width in [0.0, 320.0, 599.0] {
            let narrow = is_narrow_width(width);
            assert_eq!(DrawerVariant::for_viewport(narrow), DrawerVariant::Temporary);
            assert!(!initially_open(narrow));
        }
    }

    #[test]
    fn test_wide_viewports_get_permanent_open_drawer() {
        for width in [600.0, 1024.0, 1920.0] {
            let narrow = is_narrow_width(width);
            assert_eq!(DrawerVariant::for_viewport(narrow), DrawerVariant::Permanent);
            assert!(initially_open(narrow));
        }
    }

    #[test]
    fn test_resync_is_idempotent() {
        // Crossing the boundary flips the state; re-evaluating at the
        // same width leaves it unchanged.
        let mut open = initially_open(is_narrow_width(1024.0));
        assert!(open);

        open = initially_open(is_narrow_width(320.0));
        assert!(!open);

        let again = initially_open(is_narrow_width(320.0));
        assert_eq!(open, again);
    }

    #[test]
    fn test_variant_classes() {
        assert_eq!(DrawerVariant::Temporary.class(), "drawer-temporary");
        assert_eq!(DrawerVariant::Permanent.class(), "drawer-permanent");
    }

    #[test]
    fn test_placeholder_labels() {
        let labels: Vec<u32> = placeholder_labels().collect();
        assert_eq!(labels.len(), 100);
        assert_eq!(labels.first(), Some(&1));
        assert_eq!(labels.last(), Some(&100));
        assert!(labels.windows(2).all(|w| w[0] < w[1]));
    }
}
