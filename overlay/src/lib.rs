//! Overlay rendering and host plugin surface for the Gigant tracker.
//!
//! The host owns the actual drawing backend and camera; this crate
//! reaches them through the [`draw::WorldView`] and
//! [`draw::DrawSurface`] traits and contains no decision logic beyond
//! "can this element be seen".

pub mod draw;
pub mod plugin;
pub mod render;

pub use draw::{is_on_screen, DrawSurface, ScreenSize, WorldView};
pub use plugin::{BackgroundWork, OverlayPlugin, RitualOverlayPlugin};
pub use render::draw_frame;
