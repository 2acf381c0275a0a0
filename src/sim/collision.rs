//! Collision detection between the player and obstacles
//!
//! The player is a circle; each obstacle is two capsule-like pillars, each
//! modelled as a rectangle body plus a circular cap at the gate lip. Bodies
//! are shortened so hits line up with the sprites rather than their bounding
//! boxes.
//!
//! All tests are strict: exact tangency is not a collision.

use glam::Vec2;

use super::obstacles::Obstacle;
use super::shapes::{Circle, Rect};

/// Circle vs axis-aligned rectangle
#[inline]
pub fn circle_rect_overlap(circle: &Circle, rect: &Rect) -> bool {
    let closest = rect.clamp_point(circle.center);
    circle.center.distance_squared(closest) < circle.radius * circle.radius
}

/// Circle vs circle
#[inline]
pub fn circle_circle_overlap(a: &Circle, b: &Circle) -> bool {
    let reach = a.radius + b.radius;
    a.center.distance_squared(b.center) < reach * reach
}

/// Player hitbox: centered on the bounding box, radius a fraction of the
/// smaller side
pub fn player_hitbox(bounds: &Rect, ratio: f32) -> Circle {
    Circle::new(bounds.center(), bounds.size.min_element() * ratio)
}

/// The four collision primitives of one obstacle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleHitbox {
    pub top_body: Rect,
    pub top_cap: Circle,
    pub bottom_body: Rect,
    pub bottom_cap: Circle,
}

impl ObstacleHitbox {
    /// Decompose an obstacle. `body_scale` shortens each body
    /// (0.9 = 10% shorter than the sprite).
    pub fn new(obstacle: &Obstacle, screen_height: f32, body_scale: f32) -> Self {
        let cap_radius = obstacle.width / 2.0;
        let center_x = obstacle.x + cap_radius;

        let top_height = ((obstacle.top - cap_radius) * body_scale).max(0.0);
        let bottom_height = ((obstacle.bottom - cap_radius) * body_scale).max(0.0);

        Self {
            top_body: Rect::new(obstacle.x, 0.0, obstacle.width, top_height),
            top_cap: Circle::new(Vec2::new(center_x, top_height + cap_radius), cap_radius),
            bottom_body: Rect::new(
                obstacle.x,
                screen_height - bottom_height,
                obstacle.width,
                bottom_height,
            ),
            bottom_cap: Circle::new(
                Vec2::new(center_x, screen_height - bottom_height - cap_radius),
                cap_radius,
            ),
        }
    }

    /// Does the player circle touch any of the four primitives?
    pub fn overlaps(&self, player: &Circle) -> bool {
        circle_rect_overlap(player, &self.top_body)
            || circle_circle_overlap(player, &self.top_cap)
            || circle_rect_overlap(player, &self.bottom_body)
            || circle_circle_overlap(player, &self.bottom_cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn obstacle(x: f32, top: f32) -> Obstacle {
        Obstacle {
            x,
            width: OBSTACLE_WIDTH,
            top,
            bottom: BASE_HEIGHT - top - GATE_GAP,
            passed: false,
        }
    }

    #[test]
    fn test_circle_rect_inside_and_outside() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert!(circle_rect_overlap(&Circle::new(Vec2::new(50.0, 25.0), 1.0), &rect));
        assert!(circle_rect_overlap(&Circle::new(Vec2::new(105.0, 25.0), 6.0), &rect));
        assert!(!circle_rect_overlap(&Circle::new(Vec2::new(110.0, 25.0), 6.0), &rect));
    }

    #[test]
    fn test_circle_rect_tangent_is_not_a_hit() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        // Touching the right edge exactly
        assert!(!circle_rect_overlap(&Circle::new(Vec2::new(110.0, 25.0), 10.0), &rect));
        // Touching the bottom edge exactly
        assert!(!circle_rect_overlap(&Circle::new(Vec2::new(50.0, 60.0), 10.0), &rect));
        // Touching a corner exactly (3-4-5 triangle)
        assert!(!circle_rect_overlap(&Circle::new(Vec2::new(103.0, 54.0), 5.0), &rect));
        assert!(circle_rect_overlap(&Circle::new(Vec2::new(103.0, 54.0), 5.01), &rect));
    }

    #[test]
    fn test_circle_circle_tangent_is_not_a_hit() {
        let a = Circle::new(Vec2::new(0.0, 0.0), 3.0);
        let b = Circle::new(Vec2::new(5.0, 0.0), 2.0);
        assert!(!circle_circle_overlap(&a, &b));
        let c = Circle::new(Vec2::new(4.99, 0.0), 2.0);
        assert!(circle_circle_overlap(&a, &c));
    }

    #[test]
    fn test_player_hitbox() {
        let hitbox = player_hitbox(&Rect::new(80.0, 300.0, 64.0, 48.0), PLAYER_HITBOX_RATIO);
        assert_eq!(hitbox.center, Vec2::new(112.0, 324.0));
        assert!((hitbox.radius - 16.8).abs() < 1e-5);
    }

    #[test]
    fn test_obstacle_decomposition() {
        let hitbox = ObstacleHitbox::new(&obstacle(100.0, 230.0), BASE_HEIGHT, BODY_HITBOX_SCALE);

        // (230 - 30) * 0.9 = 180
        assert_eq!(hitbox.top_body, Rect::new(100.0, 0.0, 60.0, 180.0));
        assert_eq!(hitbox.top_cap, Circle::new(Vec2::new(130.0, 210.0), 30.0));

        // bottom = 640 - 230 - 170 = 240, (240 - 30) * 0.9 = 189
        assert_eq!(hitbox.bottom_body.pos, Vec2::new(100.0, 451.0));
        assert_eq!(hitbox.bottom_body.size, Vec2::new(60.0, 189.0));
        assert_eq!(hitbox.bottom_cap, Circle::new(Vec2::new(130.0, 421.0), 30.0));
    }

    #[test]
    fn test_short_pillars_have_empty_bodies() {
        let stub = Obstacle {
            x: 100.0,
            width: OBSTACLE_WIDTH,
            top: 25.0,
            bottom: 25.0,
            passed: false,
        };
        let hitbox = ObstacleHitbox::new(&stub, 50.0, BODY_HITBOX_SCALE);
        assert_eq!(hitbox.top_body.size.y, 0.0);
        assert_eq!(hitbox.bottom_body.size.y, 0.0);
        assert_eq!(hitbox.bottom_body.pos.y, 50.0);
    }

    #[test]
    fn test_player_in_gate_is_safe() {
        let hitbox = ObstacleHitbox::new(&obstacle(100.0, 230.0), BASE_HEIGHT, BODY_HITBOX_SCALE);
        // Gate runs y = 230..400; player centered in it
        let player = Circle::new(Vec2::new(130.0, 315.0), 16.8);
        assert!(!hitbox.overlaps(&player));
    }

    #[test]
    fn test_player_hits_each_primitive() {
        let hitbox = ObstacleHitbox::new(&obstacle(100.0, 230.0), BASE_HEIGHT, BODY_HITBOX_SCALE);
        let r = 16.8;
        assert!(hitbox.overlaps(&Circle::new(Vec2::new(130.0, 100.0), r)));
        assert!(hitbox.overlaps(&Circle::new(Vec2::new(130.0, 250.0), r)));
        assert!(hitbox.overlaps(&Circle::new(Vec2::new(130.0, 550.0), r)));
        assert!(hitbox.overlaps(&Circle::new(Vec2::new(130.0, 395.0), r)));
    }

    #[test]
    fn test_clipping_a_sprite_corner_is_forgiven() {
        let hitbox = ObstacleHitbox::new(&obstacle(100.0, 230.0), BASE_HEIGHT, BODY_HITBOX_SCALE);
        // Overlaps the sprite's square lower-left corner at (100, 230) but
        // misses the rounded cap and the shortened body
        let player = Circle::new(Vec2::new(95.0, 228.0), 6.0);
        assert!(circle_rect_overlap(&player, &Rect::new(100.0, 0.0, 60.0, 230.0)));
        assert!(!hitbox.overlaps(&player));
    }
}
