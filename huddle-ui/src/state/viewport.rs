//! Viewport Breakpoint
//!
//! Reactive tracking of the narrow-viewport media query. The signal is
//! initialized from the current match state and updated from the
//! `MediaQueryList` change events, so the last resize always wins.

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{MediaQueryList, MediaQueryListEvent};

/// Widths at or below this many logical pixels count as narrow
pub const NARROW_MAX_WIDTH_PX: u32 = 599;

/// The media query string for the narrow breakpoint
pub fn narrow_media_query() -> String {
    format!("(max-width: {}px)", NARROW_MAX_WIDTH_PX)
}

/// Breakpoint rule: does a viewport width count as narrow?
pub fn is_narrow_width(width_px: f64) -> bool {
    width_px <= NARROW_MAX_WIDTH_PX as f64
}

/// Reactive boolean that is true while the viewport is narrow
///
/// Registers a change callback on the `MediaQueryList` for the lifetime
/// of the page. When the media query cannot be evaluated, falls back to
/// a one-shot measurement of the window width.
pub fn use_narrow_viewport() -> ReadSignal<bool> {
    let mql: Option<MediaQueryList> = window().match_media(&narrow_media_query()).ok().flatten();

    let initial = match &mql {
        Some(mql) => mql.matches(),
        None => window()
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .map(is_narrow_width)
            .unwrap_or(false),
    };
    let (narrow, set_narrow) = create_signal(initial);

    if let Some(mql) = mql {
        let on_change = Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
            set_narrow.set(event.matches());
        }) as Box<dyn FnMut(MediaQueryListEvent)>);
        mql.set_onchange(Some(on_change.as_ref().unchecked_ref()));
        on_change.forget();
    }

    narrow
}
