//! UI Components
//!
//! Leptos components for the page chrome.

pub mod app_bar;
pub mod drawer_toggle;
pub mod primary_drawer;

pub use app_bar::PrimaryAppBar;
pub use drawer_toggle::DrawerToggle;
pub use primary_drawer::PrimaryDrawer;
