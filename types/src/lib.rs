//! Shared configuration types for the Gigant ritual overlay.
//!
//! This crate holds plain-data settings types consumed by both the
//! core tracker and the overlay renderer, plus the range bounds the
//! host's settings UI binds its sliders to.

pub mod settings;

pub use settings::{
    Rgba, RitualSettings, GIGANT_LABEL_SCALE_DEFAULT, GIGANT_LABEL_SCALE_MAX,
    GIGANT_LABEL_SCALE_MIN, RITUAL_RADIUS_DEFAULT, RITUAL_RADIUS_MAX, RITUAL_RADIUS_MIN,
    RITUAL_RADIUS_THICKNESS_DEFAULT, RITUAL_RADIUS_THICKNESS_MAX, RITUAL_RADIUS_THICKNESS_MIN,
};
