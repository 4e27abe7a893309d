//! Projection and draw-surface traits backed by the host.

use gigant_core::GridPos;
use gigant_types::Rgba;
use glam::{Vec2, Vec3};

/// Game window size in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenSize {
    pub width: f32,
    pub height: f32,
}

/// Per-frame camera, terrain and minimap reads supplied by the host.
pub trait WorldView {
    /// Project a world position to screen space. `None` when the
    /// point is behind the camera or the camera state is degenerate.
    fn world_to_screen(&self, world: Vec3) -> Option<Vec2>;

    /// Grid coordinate to world position, terrain height included.
    fn grid_to_world(&self, grid: GridPos) -> Vec3;

    fn minimap_visible(&self) -> bool;

    /// Screen position of a grid coordinate on the minimap.
    fn minimap_screen_pos(&self, grid: GridPos) -> Vec2;

    fn window_size(&self) -> ScreenSize;
}

/// Host draw primitives. Everything the renderer paints goes through
/// these three calls.
pub trait DrawSurface {
    fn text(&mut self, text: &str, pos: Vec2, color: Rgba);

    fn line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Rgba);

    fn filled_circle_world(&mut self, center: Vec3, radius: f32, color: Rgba);
}

/// Screen-space rejection with a margin: true when `world` projects
/// within `allowance` pixels of the window. Behind-camera projections
/// are always rejected.
pub fn is_on_screen(view: &dyn WorldView, world: Vec3, allowance: f32) -> bool {
    let Some(screen) = view.world_to_screen(world) else {
        return false;
    };
    let size = view.window_size();
    screen.x >= -allowance
        && screen.x <= size.width + allowance
        && screen.y >= -allowance
        && screen.y <= size.height + allowance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::FixedView;

    #[test]
    fn test_on_screen_allowance() {
        let view = FixedView::new(1920.0, 1080.0);
        assert!(is_on_screen(&view, Vec3::new(100.0, 100.0, 0.0), 50.0));
        // Inside the margin strip just off the right edge
        assert!(is_on_screen(&view, Vec3::new(1950.0, 500.0, 0.0), 50.0));
        // Beyond the margin
        assert!(!is_on_screen(&view, Vec3::new(2000.1, 500.0, 0.0), 50.0));
        assert!(!is_on_screen(&view, Vec3::new(-60.0, 500.0, 50.0), 50.0));
    }

    #[test]
    fn test_behind_camera_rejected() {
        let view = FixedView::new(1920.0, 1080.0).behind_camera();
        assert!(!is_on_screen(&view, Vec3::new(100.0, 100.0, 0.0), 1000.0));
    }
}
