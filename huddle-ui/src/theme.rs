//! Layout Theme
//!
//! Numeric layout constants shared by the page chrome. Components receive
//! the struct explicitly at construction rather than reading ambient
//! context.

/// Layout constants for the application bar and primary drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutTheme {
    /// Height of the primary application bar, in logical pixels
    pub app_bar_height: u32,
    /// Width of the primary drawer when open, in logical pixels
    pub drawer_width: u32,
}

impl Default for LayoutTheme {
    fn default() -> Self {
        Self {
            app_bar_height: 50,
            drawer_width: 240,
        }
    }
}

impl LayoutTheme {
    /// Inline style for the application bar
    pub fn app_bar_style(&self) -> String {
        format!("height: {}px;", self.app_bar_height)
    }

    /// Inline style for the drawer panel: offset below the app bar,
    /// filling the remaining viewport height at the configured width
    pub fn drawer_style(&self) -> String {
        format!(
            "margin-top: {h}px; height: calc(100vh - {h}px); width: {w}px;",
            h = self.app_bar_height,
            w = self.drawer_width,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let theme = LayoutTheme::default();
        assert_eq!(theme.app_bar_height, 50);
        assert_eq!(theme.drawer_width, 240);
    }

    #[test]
    fn test_app_bar_style() {
        let theme = LayoutTheme::default();
        assert_eq!(theme.app_bar_style(), "height: 50px;");
    }

    #[test]
    fn test_drawer_style_uses_both_constants() {
        let theme = LayoutTheme {
            app_bar_height: 64,
            drawer_width: 300,
        };
        let style = theme.drawer_style();
        assert!(style.contains("margin-top: 64px;"));
        assert!(style.contains("height: calc(100vh - 64px);"));
        assert!(style.contains("width: 300px;"));
    }
}
