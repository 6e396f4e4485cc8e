use ggez::graphics::Rect;
use ggez::mint::Point2;

use crate::maze::TILE_SIZE;

/// Whether a circle would overlap `rect` after one step of `vel`.
///
/// The rectangle is inflated by a padding derived from the tile size and the
/// circle radius, so an actor stops flush against a wall edge instead of
/// sinking in up to its center.
pub fn circle_hits_rect(pos: Point2<f32>, radius: f32, vel: Point2<f32>, rect: &Rect) -> bool {
    let padding = TILE_SIZE / 2.0 - radius - 1.0;
    pos.y - radius + vel.y <= rect.y + rect.h + padding
        && pos.x + radius + vel.x >= rect.x - padding
        && pos.y + radius + vel.y >= rect.y - padding
        && pos.x - radius + vel.x <= rect.x + rect.w + padding
}

pub fn circles_touch(a: Point2<f32>, a_radius: f32, b: Point2<f32>, b_radius: f32) -> bool {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx.powi(2) + dy.powi(2)).sqrt() < a_radius + b_radius
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(col: f32, row: f32) -> Rect {
        Rect::new(col * TILE_SIZE, row * TILE_SIZE, TILE_SIZE, TILE_SIZE)
    }

    #[test]
    fn step_into_a_wall_collides() {
        // Circle centered one tile below a wall, stepping up into it.
        let pos = Point2 { x: 60.0, y: 60.0 };
        let vel = Point2 { x: 0.0, y: -2.0 };
        assert!(circle_hits_rect(pos, 15.0, vel, &tile(1.0, 0.0)));
    }

    #[test]
    fn step_fully_inside_collides() {
        let pos = Point2 { x: 50.0, y: 50.0 };
        let vel = Point2 { x: 0.0, y: 0.0 };
        assert!(circle_hits_rect(pos, 15.0, vel, &tile(1.0, 1.0)));
    }

    #[test]
    fn resting_flush_against_a_wall_does_not_collide() {
        // Same spot as the stepping case but with no velocity: the padded
        // bounds end exactly one pixel short of the circle.
        let pos = Point2 { x: 60.0, y: 60.0 };
        let vel = Point2 { x: 0.0, y: 0.0 };
        assert!(!circle_hits_rect(pos, 15.0, vel, &tile(1.0, 0.0)));
    }

    #[test]
    fn sliding_past_a_wall_does_not_collide() {
        // Moving right along a corridor; the wall above is out of the way.
        let pos = Point2 { x: 60.0, y: 60.0 };
        let vel = Point2 { x: 2.0, y: 0.0 };
        assert!(!circle_hits_rect(pos, 15.0, vel, &tile(1.0, 0.0)));
        assert!(!circle_hits_rect(pos, 15.0, vel, &tile(2.0, 2.0)));
    }

    #[test]
    fn distant_wall_never_collides() {
        let pos = Point2 { x: 60.0, y: 140.0 };
        let vel = Point2 { x: 2.0, y: 0.0 };
        assert!(!circle_hits_rect(pos, 15.0, vel, &tile(0.0, 0.0)));
    }

    #[test]
    fn circles_touch_on_strict_overlap_only() {
        let a = Point2 { x: 0.0, y: 0.0 };
        let near = Point2 { x: 20.0, y: 0.0 };
        let apart = Point2 { x: 30.0, y: 0.0 };
        assert!(circles_touch(a, 15.0, near, 15.0));
        assert!(!circles_touch(a, 15.0, apart, 15.0));
    }
}
