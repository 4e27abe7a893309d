//! User-facing settings for the ritual overlay.
//!
//! Every ranged field has exported MIN/MAX/DEFAULT constants so the
//! host's settings UI can build sliders without duplicating bounds,
//! and [`RitualSettings::sanitize`] clamps values loaded from a
//! hand-edited config file back into range.

use serde::{Deserialize, Serialize};

/// RGBA color as used by the host's draw primitives.
pub type Rgba = [u8; 4];

// Ritual radius overlay (world-space circle around each rune)
pub const RITUAL_RADIUS_MIN: f32 = 100.0;
pub const RITUAL_RADIUS_MAX: f32 = 2000.0;
pub const RITUAL_RADIUS_DEFAULT: f32 = 1000.0;

pub const RITUAL_RADIUS_THICKNESS_MIN: f32 = 1.0;
pub const RITUAL_RADIUS_THICKNESS_MAX: f32 = 10.0;
pub const RITUAL_RADIUS_THICKNESS_DEFAULT: f32 = 3.0;

// "GIGANT" name label above tracked monsters
pub const GIGANT_LABEL_SCALE_MIN: f32 = 4.0;
pub const GIGANT_LABEL_SCALE_MAX: f32 = 25.0;
pub const GIGANT_LABEL_SCALE_DEFAULT: f32 = 8.0;

const WHITE: Rgba = [255, 255, 255, 255];
const ORANGE: Rgba = [255, 165, 0, 255];
const YELLOW: Rgba = [255, 255, 0, 255];

/// Settings for the Gigant ritual overlay.
///
/// All fields carry serde defaults so partial config files stay
/// loadable across versions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RitualSettings {
    /// Master switch; when off, discovery/tick/render are all no-ops.
    pub enabled: bool,

    /// Draw the "GIGANT" label above tracked monsters.
    pub show_gigant_labels: bool,
    /// Character scale of the label text.
    pub gigant_label_scale: f32,

    /// Draw confirmed spawn positions on the minimap and in the world.
    pub show_spawn_positions: bool,
    pub spawn_color: Rgba,

    /// Draw the ritual effect radius around each rune marker.
    pub show_ritual_radius: bool,
    pub ritual_radius: f32,
    pub ritual_radius_color: Rgba,
    pub ritual_radius_thickness: f32,

    /// Draw the "RITUAL" label on spawns confirmed inside blocker range.
    pub show_inside_ritual_labels: bool,
    pub inside_ritual_color: Rgba,

    /// Draw each blocker's running spawn count.
    pub show_blocker_counts: bool,
    pub blocker_count_color: Rgba,
}

impl Default for RitualSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            show_gigant_labels: true,
            gigant_label_scale: GIGANT_LABEL_SCALE_DEFAULT,
            show_spawn_positions: true,
            spawn_color: WHITE,
            show_ritual_radius: true,
            ritual_radius: RITUAL_RADIUS_DEFAULT,
            ritual_radius_color: ORANGE,
            ritual_radius_thickness: RITUAL_RADIUS_THICKNESS_DEFAULT,
            show_inside_ritual_labels: true,
            inside_ritual_color: ORANGE,
            show_blocker_counts: true,
            blocker_count_color: YELLOW,
        }
    }
}

impl RitualSettings {
    /// Clamp every ranged field into its documented bounds.
    ///
    /// Non-finite values fall back to the field default.
    pub fn sanitize(&mut self) {
        self.gigant_label_scale = clamp_or_default(
            self.gigant_label_scale,
            GIGANT_LABEL_SCALE_MIN,
            GIGANT_LABEL_SCALE_MAX,
            GIGANT_LABEL_SCALE_DEFAULT,
        );
        self.ritual_radius = clamp_or_default(
            self.ritual_radius,
            RITUAL_RADIUS_MIN,
            RITUAL_RADIUS_MAX,
            RITUAL_RADIUS_DEFAULT,
        );
        self.ritual_radius_thickness = clamp_or_default(
            self.ritual_radius_thickness,
            RITUAL_RADIUS_THICKNESS_MIN,
            RITUAL_RADIUS_THICKNESS_MAX,
            RITUAL_RADIUS_THICKNESS_DEFAULT,
        );
    }

    /// Sanitized copy, for callers holding a shared reference.
    pub fn sanitized(&self) -> Self {
        let mut copy = self.clone();
        copy.sanitize();
        copy
    }
}

fn clamp_or_default(value: f32, min: f32, max: f32, default: f32) -> f32 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = RitualSettings::default();
        assert!(!settings.enabled);
        assert!(settings.show_gigant_labels);
        assert_eq!(settings.ritual_radius, 1000.0);
        assert_eq!(settings.ritual_radius_thickness, 3.0);
        assert_eq!(settings.gigant_label_scale, 8.0);
        assert_eq!(settings.blocker_count_color, [255, 255, 0, 255]);
    }

    #[test]
    fn test_sanitize_clamps_ranges() {
        let mut settings = RitualSettings {
            ritual_radius: 50_000.0,
            ritual_radius_thickness: 0.0,
            gigant_label_scale: f32::NAN,
            ..Default::default()
        };
        settings.sanitize();
        assert_eq!(settings.ritual_radius, RITUAL_RADIUS_MAX);
        assert_eq!(settings.ritual_radius_thickness, RITUAL_RADIUS_THICKNESS_MIN);
        assert_eq!(settings.gigant_label_scale, GIGANT_LABEL_SCALE_DEFAULT);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml = r#"
enabled = true
ritual_radius = 1500.0
"#;
        let settings: RitualSettings = toml::from_str(toml).unwrap();
        assert!(settings.enabled);
        assert_eq!(settings.ritual_radius, 1500.0);
        // Unspecified fields come from Default
        assert!(settings.show_spawn_positions);
        assert_eq!(settings.spawn_color, [255, 255, 255, 255]);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut settings = RitualSettings::default();
        settings.enabled = true;
        settings.ritual_radius = 1200.0;
        settings.spawn_color = [10, 20, 30, 255];

        let serialized = toml::to_string(&settings).unwrap();
        let parsed: RitualSettings = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed, settings);
    }
}
