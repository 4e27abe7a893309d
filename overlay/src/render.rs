//! Pure presentation over the tracker's collections.
//!
//! Every pass reads tracked state, projects it, and paints; nothing
//! here mutates the tracker. Any element whose projection fails (off
//! screen, behind the camera) is skipped for that frame.

use crate::draw::{is_on_screen, DrawSurface, WorldView};
use gigant_core::{EntityLookup, GridPos, RitualTracker};
use gigant_types::{Rgba, RitualSettings};
use glam::Vec2;

const BLACK: Rgba = [0, 0, 0, 255];
const WHITE: Rgba = [255, 255, 255, 255];

/// World-space radius of the filled circle at each spawn position.
const SPAWN_WORLD_RADIUS: f32 = 50.0;
/// Minimap radius (pixels) of the filled circle at each spawn.
const SPAWN_MINIMAP_RADIUS: f32 = 6.0;
/// Extra screen allowance beyond a circle's radius before culling.
const CIRCLE_SCREEN_ALLOWANCE: f32 = 100.0;

const INSIDE_RITUAL_LABEL_SCALE: f32 = 6.0;

/// Draw one frame of the overlay.
///
/// `settings` is expected to be sanitized; the plugin takes care of
/// that before calling in.
pub fn draw_frame(
    settings: &RitualSettings,
    tracker: &RitualTracker,
    entities: &dyn EntityLookup,
    view: &dyn WorldView,
    surface: &mut dyn DrawSurface,
) {
    if settings.show_gigant_labels {
        draw_gigant_labels(settings, tracker, entities, view, surface);
    }
    if settings.show_spawn_positions {
        draw_spawn_positions(settings, tracker, view, surface);
    }
    if settings.show_ritual_radius {
        draw_ritual_radius(settings, tracker, view, surface);
    }
    if settings.show_inside_ritual_labels {
        draw_inside_ritual_labels(settings, tracker, view, surface);
    }
    if settings.show_blocker_counts {
        draw_blocker_counts(settings, tracker, view, surface);
    }
}

/// "GIGANT" above every tracked monster still resolvable and valid.
fn draw_gigant_labels(
    settings: &RitualSettings,
    tracker: &RitualTracker,
    entities: &dyn EntityLookup,
    view: &dyn WorldView,
    surface: &mut dyn DrawSurface,
) {
    for id in tracker.tracked_giants() {
        let Some(entity) = entities.entity(id) else {
            continue;
        };
        if !entity.is_valid() {
            continue;
        }
        let Some(screen) = view.world_to_screen(entity.world_pos()) else {
            continue;
        };
        if screen.x > 0.0 && screen.y > 0.0 {
            let anchor = screen + Vec2::new(-40.0, -60.0);
            draw_spaced_label(
                surface,
                "GIGANT",
                anchor,
                settings.gigant_label_scale,
                2,
                WHITE,
            );
        }
    }
}

/// Filled circles at every confirmed spawn: on the minimap when it is
/// open, and always in the world.
fn draw_spawn_positions(
    settings: &RitualSettings,
    tracker: &RitualTracker,
    view: &dyn WorldView,
    surface: &mut dyn DrawSurface,
) {
    for spawn in tracker.spawn_positions() {
        if view.minimap_visible() {
            draw_filled_circle_on_map(view, surface, spawn, SPAWN_MINIMAP_RADIUS, settings.spawn_color);
        }
        draw_filled_circle_on_world(view, surface, spawn, SPAWN_WORLD_RADIUS, settings.spawn_color);
    }
}

/// Unfilled effect-radius circle around every rune marker.
fn draw_ritual_radius(
    settings: &RitualSettings,
    tracker: &RitualTracker,
    view: &dyn WorldView,
    surface: &mut dyn DrawSurface,
) {
    for (_, pos) in tracker.runes() {
        draw_circle_on_world(
            view,
            surface,
            pos,
            settings.ritual_radius,
            settings.ritual_radius_color,
            settings.ritual_radius_thickness,
        );
    }
}

/// "RITUAL" at every spawn confirmed inside blocker range.
fn draw_inside_ritual_labels(
    settings: &RitualSettings,
    tracker: &RitualTracker,
    view: &dyn WorldView,
    surface: &mut dyn DrawSurface,
) {
    for spawn in tracker.inside_ritual_spawns() {
        let world = view.grid_to_world(spawn);
        let Some(screen) = view.world_to_screen(world) else {
            continue;
        };
        if screen.x > 0.0 && screen.y > 0.0 {
            let anchor = screen + Vec2::new(-30.0, -15.0);
            draw_spaced_label(
                surface,
                "RITUAL",
                anchor,
                INSIDE_RITUAL_LABEL_SCALE,
                2,
                settings.inside_ritual_color,
            );
        }
    }
}

/// Each blocker's running count as shadowed text at its position.
fn draw_blocker_counts(
    settings: &RitualSettings,
    tracker: &RitualTracker,
    view: &dyn WorldView,
    surface: &mut dyn DrawSurface,
) {
    for blocker in tracker.blockers() {
        let world = view.grid_to_world(blocker.position);
        let Some(screen) = view.world_to_screen(world) else {
            continue;
        };
        if screen.x > 0.0 && screen.y > 0.0 {
            let text = blocker.count.to_string();
            let anchor = screen + Vec2::new(-10.0, -10.0);
            draw_shadowed_text(surface, &text, anchor, 1, settings.blocker_count_color);
        }
    }
}

// --- Primitive helpers ---

/// One string with a black shadow pass under it. `shadow` is the
/// offset extent in pixels on both axes.
fn draw_shadowed_text(
    surface: &mut dyn DrawSurface,
    text: &str,
    pos: Vec2,
    shadow: i32,
    color: Rgba,
) {
    for dx in -shadow..=shadow {
        for dy in -shadow..=shadow {
            if dx != 0 || dy != 0 {
                surface.text(text, pos + Vec2::new(dx as f32, dy as f32), BLACK);
            }
        }
    }
    surface.text(text, pos, color);
}

/// A label drawn character by character so its width follows `scale`
/// regardless of the host font; character advance is `2 * scale`.
fn draw_spaced_label(
    surface: &mut dyn DrawSurface,
    text: &str,
    anchor: Vec2,
    scale: f32,
    shadow: i32,
    color: Rgba,
) {
    let mut buf = [0u8; 4];
    for (i, ch) in text.chars().enumerate() {
        let pos = Vec2::new(anchor.x + i as f32 * 2.0 * scale, anchor.y);
        draw_shadowed_text(surface, ch.encode_utf8(&mut buf), pos, shadow, color);
    }
}

/// Filled minimap circle approximated by concentric line rings.
fn draw_filled_circle_on_map(
    view: &dyn WorldView,
    surface: &mut dyn DrawSurface,
    grid: GridPos,
    radius: f32,
    color: Rgba,
) {
    let center = view.minimap_screen_pos(grid);
    const SEGMENTS: u32 = 16;
    let segment_angle = std::f32::consts::TAU / SEGMENTS as f32;

    let mut r = 1.0;
    while r <= radius {
        for i in 0..SEGMENTS {
            let angle = i as f32 * segment_angle;
            let current = center + Vec2::from_angle(angle) * r;
            let next = center + Vec2::from_angle(angle + segment_angle) * r;
            surface.line(current, next, 1.0, color);
        }
        r += 1.0;
    }
}

/// Filled world-space circle, culled with a generous allowance so it
/// still draws while partially visible.
fn draw_filled_circle_on_world(
    view: &dyn WorldView,
    surface: &mut dyn DrawSurface,
    grid: GridPos,
    radius: f32,
    color: Rgba,
) {
    let world = view.grid_to_world(grid);
    if !is_on_screen(view, world, radius + CIRCLE_SCREEN_ALLOWANCE) {
        return;
    }
    surface.filled_circle_world(world, radius, color);
}

/// Unfilled world-space circle as 64 projected line segments.
/// Segments whose endpoints fail to project are skipped individually,
/// so a circle straddling the screen edge still draws partially.
fn draw_circle_on_world(
    view: &dyn WorldView,
    surface: &mut dyn DrawSurface,
    grid: GridPos,
    radius: f32,
    color: Rgba,
    thickness: f32,
) {
    let center = view.grid_to_world(grid);
    if !is_on_screen(view, center, radius + CIRCLE_SCREEN_ALLOWANCE) {
        return;
    }

    const SEGMENTS: u32 = 64;
    let segment_angle = std::f32::consts::TAU / SEGMENTS as f32;

    for i in 0..SEGMENTS {
        let angle = i as f32 * segment_angle;
        let offset = Vec2::from_angle(angle) * radius;
        let next_offset = Vec2::from_angle(angle + segment_angle) * radius;

        let current = center + offset.extend(0.0);
        let next = center + next_offset.extend(0.0);

        let (Some(from), Some(to)) = (view.world_to_screen(current), view.world_to_screen(next))
        else {
            continue;
        };
        surface.line(from, to, thickness, color);
    }
}

/// Render-side host doubles shared by this crate's tests.
#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::draw::ScreenSize;
    use glam::Vec3;

    /// Identity projection over a fixed window; the world XY plane
    /// maps straight onto screen pixels.
    pub struct FixedView {
        size: ScreenSize,
        pub minimap: bool,
        behind: bool,
    }

    impl FixedView {
        pub fn new(width: f32, height: f32) -> Self {
            Self {
                size: ScreenSize { width, height },
                minimap: true,
                behind: false,
            }
        }

        /// Every projection fails, as if the camera faced away.
        pub fn behind_camera(mut self) -> Self {
            self.behind = true;
            self
        }
    }

    impl WorldView for FixedView {
        fn world_to_screen(&self, world: Vec3) -> Option<Vec2> {
            if self.behind {
                None
            } else {
                Some(Vec2::new(world.x, world.y))
            }
        }

        fn grid_to_world(&self, grid: GridPos) -> Vec3 {
            Vec3::new(grid.x as f32, grid.y as f32, 0.0)
        }

        fn minimap_visible(&self) -> bool {
            self.minimap
        }

        fn minimap_screen_pos(&self, grid: GridPos) -> Vec2 {
            Vec2::new(grid.x as f32, grid.y as f32)
        }

        fn window_size(&self) -> ScreenSize {
            self.size
        }
    }

    /// Records every primitive the renderer emits.
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub texts: Vec<(String, Vec2, Rgba)>,
        pub lines: usize,
        pub world_circles: Vec<(Vec3, f32, Rgba)>,
    }

    impl DrawSurface for RecordingSurface {
        fn text(&mut self, text: &str, pos: Vec2, color: Rgba) {
            self.texts.push((text.to_string(), pos, color));
        }

        fn line(&mut self, _from: Vec2, _to: Vec2, _thickness: f32, _color: Rgba) {
            self.lines += 1;
        }

        fn filled_circle_world(&mut self, center: Vec3, radius: f32, color: Rgba) {
            self.world_circles.push((center, radius, color));
        }
    }
}
