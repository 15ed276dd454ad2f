//! UI components built with Leptos.
//!
//! - [`Home`] - The single page (main entry point)
//! - [`wallet`] - Connect button, network switcher, account info
//! - [`theme`] - Light/dark toggle
//! - [`hydration`] - Client-only rendering guard
//! - [`ui`] - Card, badge, button and alert primitives
//! - [`icons`] - Centralized icon definitions (change theme here)

mod home;
pub mod hydration;
pub mod icons;
pub mod theme;
pub mod ui;
pub mod wallet;

pub use home::Home;
