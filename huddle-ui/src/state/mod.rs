//! UI State
//!
//! Reactive signals derived from the browser environment.

pub mod viewport;
