use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Axis-aligned box collision shape.
///
/// `offset` is the min corner relative to the entity position. A disabled
/// collider is invisible to overlap queries.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vector2,
    pub offset: Vector2,
    pub enabled: bool,
}

impl BoxCollider {
    /// Create an enabled BoxCollider centred on the entity position.
    pub fn centered(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
            offset: Vector2::new(-width * 0.5, -height * 0.5),
            enabled: true,
        }
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vector2) -> (Vector2, Vector2) {
        let p0 = position + self.offset;
        let p1 = p0 + self.size;
        let min = Vector2::new(p0.x.min(p1.x), p0.y.min(p1.y));
        let max = Vector2::new(p0.x.max(p1.x), p0.y.max(p1.y));
        (min, max)
    }

    /// AABB vs circle test in world space. Disabled colliders never intersect.
    pub fn intersects_circle(&self, position: Vector2, center: Vector2, radius: f32) -> bool {
        if !self.enabled {
            return false;
        }
        let (min, max) = self.aabb(position);
        let closest_x = center.x.clamp(min.x, max.x);
        let closest_y = center.y.clamp(min.y, max.y);
        let dx = center.x - closest_x;
        let dy = center.y - closest_y;
        dx * dx + dy * dy <= radius * radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_collider_straddles_position() {
        let c = BoxCollider::centered(2.0, 1.0);
        let (min, max) = c.aabb(Vector2::new(10.0, 10.0));
        assert_eq!((min.x, min.y), (9.0, 9.5));
        assert_eq!((max.x, max.y), (11.0, 10.5));
    }

    #[test]
    fn circle_touching_edge_intersects() {
        let c = BoxCollider::centered(1.0, 1.0);
        // box spans x in [2.5, 3.5]; circle of radius 2.5 at origin reaches 2.5
        assert!(c.intersects_circle(Vector2::new(3.0, 0.0), Vector2::zero(), 2.5));
        assert!(!c.intersects_circle(Vector2::new(3.0, 0.0), Vector2::zero(), 2.4));
    }

    #[test]
    fn circle_inside_box_intersects() {
        let c = BoxCollider::centered(10.0, 10.0);
        assert!(c.intersects_circle(Vector2::zero(), Vector2::new(1.0, 1.0), 0.1));
    }

    #[test]
    fn disabled_collider_never_intersects() {
        let mut c = BoxCollider::centered(1.0, 1.0);
        c.enabled = false;
        assert!(!c.intersects_circle(Vector2::zero(), Vector2::zero(), 5.0));
    }
}
