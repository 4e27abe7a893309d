//! Host plugin lifecycle surface.
//!
//! The host loads one plugin object and drives it through serialized
//! callbacks: area change, entity discovery, a per-frame tick and a
//! per-frame render. Callbacks never run concurrently, so the plugin
//! holds its state directly with no interior synchronization.

use crate::draw::{DrawSurface, WorldView};
use crate::render::draw_frame;
use gigant_core::{EntityLookup, GameEntity, RitualTracker};
use gigant_types::RitualSettings;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// A unit of background work the host may schedule off-frame.
pub type BackgroundWork = Box<dyn FnOnce() + Send>;

/// The lifecycle contract the host expects of an overlay plugin.
pub trait OverlayPlugin {
    /// One-time setup after load. Returning false aborts the load.
    fn initialise(&mut self) -> bool;

    /// The player changed area instance; no tracked state survives.
    fn area_changed(&mut self);

    /// The host observed a new entity.
    fn entity_added(&mut self, entity: &dyn GameEntity);

    /// Per-frame logic update. May hand the host background work to
    /// schedule; this plugin never does.
    fn tick(&mut self, entities: &dyn EntityLookup) -> Option<BackgroundWork>;

    /// Per-frame draw pass.
    fn render(
        &mut self,
        entities: &dyn EntityLookup,
        view: &dyn WorldView,
        surface: &mut dyn DrawSurface,
    );
}

/// The Gigant ritual overlay plugin.
pub struct RitualOverlayPlugin {
    settings: RitualSettings,
    tracker: RitualTracker,
}

impl RitualOverlayPlugin {
    pub fn new(settings: RitualSettings) -> Self {
        Self {
            settings,
            tracker: RitualTracker::new(),
        }
    }

    /// Settings as shown in the host's settings UI.
    pub fn settings(&self) -> &RitualSettings {
        &self.settings
    }

    /// Apply updated settings from the host's settings UI.
    pub fn update_settings(&mut self, settings: RitualSettings) {
        self.settings = settings;
    }

    pub fn tracker(&self) -> &RitualTracker {
        &self.tracker
    }
}

impl Default for RitualOverlayPlugin {
    fn default() -> Self {
        Self::new(RitualSettings::default())
    }
}

impl OverlayPlugin for RitualOverlayPlugin {
    fn initialise(&mut self) -> bool {
        // The embedding host may already have a subscriber installed;
        // that is fine, ours is best-effort.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
        info!("gigant ritual overlay initialised");
        true
    }

    fn area_changed(&mut self) {
        self.tracker.area_changed();
    }

    fn entity_added(&mut self, entity: &dyn GameEntity) {
        if !self.settings.enabled {
            return;
        }
        self.tracker.entity_discovered(entity);
    }

    fn tick(&mut self, entities: &dyn EntityLookup) -> Option<BackgroundWork> {
        if self.settings.enabled {
            self.tracker.tick(entities);
        }
        None
    }

    fn render(
        &mut self,
        entities: &dyn EntityLookup,
        view: &dyn WorldView,
        surface: &mut dyn DrawSurface,
    ) {
        if !self.settings.enabled {
            return;
        }
        let settings = self.settings.sanitized();
        draw_frame(&settings, &self.tracker, entities, view, surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::{FixedView, RecordingSurface};
    use gigant_core::classify::RITUAL_RUNE_METADATA;
    use gigant_core::{EntityId, GridPos, HostError, StatEntry};

    struct Rune;

    impl GameEntity for Rune {
        fn id(&self) -> EntityId {
            42
        }
        fn is_valid(&self) -> bool {
            true
        }
        fn is_dead(&self) -> bool {
            false
        }
        fn is_hostile(&self) -> bool {
            false
        }
        fn metadata(&self) -> &str {
            RITUAL_RUNE_METADATA
        }
        fn grid_pos(&self) -> GridPos {
            GridPos::new(300, 300)
        }
        fn world_pos(&self) -> glam::Vec3 {
            glam::Vec3::new(300.0, 300.0, 0.0)
        }
        fn magic_mods(&self) -> Result<Option<Vec<String>>, HostError> {
            Ok(None)
        }
        fn stats(&self) -> Option<&[StatEntry]> {
            None
        }
    }

    struct NoEntities;

    impl EntityLookup for NoEntities {
        fn entity(&self, _id: EntityId) -> Option<&dyn GameEntity> {
            None
        }
    }

    #[test]
    fn test_disabled_plugin_ignores_everything() {
        let mut plugin = RitualOverlayPlugin::default();
        plugin.entity_added(&Rune);
        assert!(plugin.tick(&NoEntities).is_none());
        assert_eq!(plugin.tracker().runes().count(), 0);

        let view = FixedView::new(1920.0, 1080.0);
        let mut surface = RecordingSurface::default();
        plugin.render(&NoEntities, &view, &mut surface);
        assert!(surface.texts.is_empty());
        assert_eq!(surface.lines, 0);
    }

    #[test]
    fn test_enabled_plugin_tracks_and_renders_runes() {
        let mut plugin = RitualOverlayPlugin::new(RitualSettings {
            enabled: true,
            ..Default::default()
        });
        plugin.entity_added(&Rune);
        assert!(plugin.tick(&NoEntities).is_none());
        assert_eq!(plugin.tracker().runes().count(), 1);

        let view = FixedView::new(1920.0, 1080.0);
        let mut surface = RecordingSurface::default();
        plugin.render(&NoEntities, &view, &mut surface);
        // The rune's radius circle comes out as line segments
        assert!(surface.lines > 0);
    }

    #[test]
    fn test_area_change_resets_tracker() {
        let mut plugin = RitualOverlayPlugin::new(RitualSettings {
            enabled: true,
            ..Default::default()
        });
        plugin.entity_added(&Rune);
        plugin.area_changed();
        assert_eq!(plugin.tracker().runes().count(), 0);
    }

    #[test]
    fn test_render_sanitizes_out_of_range_settings() {
        let mut plugin = RitualOverlayPlugin::new(RitualSettings {
            enabled: true,
            ritual_radius: f32::NAN,
            ..Default::default()
        });
        plugin.entity_added(&Rune);

        let view = FixedView::new(1920.0, 1080.0);
        let mut surface = RecordingSurface::default();
        // Must not propagate NaN into the draw path
        plugin.render(&NoEntities, &view, &mut surface);
        assert!(surface.lines > 0);
    }
}
