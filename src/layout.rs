//! Ring layout for orbiting objects.
//!
//! Attached objects are placed on concentric rings around their anchor. Ring 0
//! holds `base_per_ring` objects and every following ring holds twice as many
//! as the one before it. Objects fill rings in attachment order, are spread
//! evenly around their ring, and the whole ring revolves over time; even rings
//! turn counter-clockwise, odd rings clockwise.
//!
//! Everything here is a pure function of its inputs. The orbit system calls
//! [`RingLayout::offset`] for every attached object on every frame.

use raylib::prelude::Vector2;

/// Position of a flat attachment index within the ring structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingSlot {
    /// Ring number, 0 being the innermost.
    pub ring: usize,
    /// Slot within the ring, 0-based.
    pub slot: usize,
    /// Total number of slots in this ring.
    pub capacity: usize,
}

/// Parameters of the ring layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingLayout {
    /// Capacity of the innermost ring. Must be at least 1.
    pub base_per_ring: usize,
    /// Radius of ring 0; ring `r` sits at `hover_distance * (r + 1)`.
    pub hover_distance: f32,
    /// Revolution speed in degrees per second.
    pub revolution_speed: f32,
}

impl RingLayout {
    pub fn new(base_per_ring: usize, hover_distance: f32, revolution_speed: f32) -> Self {
        Self {
            base_per_ring: base_per_ring.max(1),
            hover_distance,
            revolution_speed,
        }
    }

    /// Locate index `i` in the rings.
    pub fn slot(&self, i: usize) -> RingSlot {
        let mut ring = 0;
        let mut capacity = self.base_per_ring.max(1);
        let mut first = 0usize;
        while i - first >= capacity {
            first += capacity;
            capacity = capacity.saturating_mul(2);
            ring += 1;
        }
        RingSlot {
            ring,
            slot: i - first,
            capacity,
        }
    }

    /// `+1` for even rings, `-1` for odd rings.
    pub fn direction(ring: usize) -> f32 {
        if ring % 2 == 0 { 1.0 } else { -1.0 }
    }

    pub fn radius(&self, ring: usize) -> f32 {
        self.hover_distance * (ring as f32 + 1.0)
    }

    /// Angle in degrees of index `i` at time `t` seconds.
    pub fn angle_degrees(&self, i: usize, t: f32) -> f32 {
        let s = self.slot(i);
        let base = s.slot as f32 / s.capacity as f32 * 360.0;
        base + t * self.revolution_speed * Self::direction(s.ring)
    }

    /// Offset from the anchor for index `i` at time `t` seconds.
    pub fn offset(&self, i: usize, t: f32) -> Vector2 {
        let s = self.slot(i);
        let radius = self.radius(s.ring);
        let angle = self.angle_degrees(i, t).to_radians();
        Vector2 {
            x: radius * angle.cos(),
            y: radius * angle.sin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn layout() -> RingLayout {
        RingLayout::new(7, 1.5, 30.0)
    }

    #[test]
    fn base_seven_ring_membership() {
        let l = layout();
        for i in 0..7 {
            let s = l.slot(i);
            assert_eq!(s.ring, 0, "index {i}");
            assert_eq!(s.capacity, 7);
            assert_eq!(s.slot, i);
        }
        for i in 7..21 {
            let s = l.slot(i);
            assert_eq!(s.ring, 1, "index {i}");
            assert_eq!(s.capacity, 14);
            assert_eq!(s.slot, i - 7);
        }
        for i in 21..49 {
            let s = l.slot(i);
            assert_eq!(s.ring, 2, "index {i}");
            assert_eq!(s.capacity, 28);
        }
        assert_eq!(l.slot(49).ring, 3);
    }

    #[test]
    fn ring_matches_cumulative_capacity_formula() {
        for base in 1..6usize {
            let l = RingLayout::new(base, 1.0, 0.0);
            for i in 0..500usize {
                let r = l.slot(i).ring;
                // sum_{j<r} base*2^j = base*(2^r - 1)
                let below = base * ((1usize << r) - 1);
                let through = base * ((1usize << (r + 1)) - 1);
                assert!(below <= i && i < through, "base {base} index {i} ring {r}");
            }
        }
    }

    #[test]
    fn zero_base_is_clamped() {
        let l = RingLayout::new(0, 1.0, 0.0);
        assert_eq!(l.base_per_ring, 1);
        assert_eq!(l.slot(0).ring, 0);
        assert_eq!(l.slot(1).ring, 1);
        assert_eq!(l.slot(3).ring, 2);
    }

    #[test]
    fn offset_magnitude_is_ring_radius() {
        let l = layout();
        for (i, t) in [(0usize, 0.0f32), (3, 1.25), (10, 7.5), (30, 100.0)] {
            let ring = l.slot(i).ring as f32;
            let o = l.offset(i, t);
            assert!(approx_eq(o.length(), 1.5 * (ring + 1.0)), "index {i}");
        }
    }

    #[test]
    fn offset_is_deterministic() {
        let l = layout();
        let a = l.offset(17, 3.3);
        let b = l.offset(17, 3.3);
        assert_eq!(a.x.to_bits(), b.x.to_bits());
        assert_eq!(a.y.to_bits(), b.y.to_bits());
    }

    #[test]
    fn first_slot_starts_on_positive_x() {
        let o = layout().offset(0, 0.0);
        assert!(approx_eq(o.x, 1.5));
        assert!(approx_eq(o.y, 0.0));
    }

    #[test]
    fn rings_revolve_in_alternating_directions() {
        let l = layout();
        // index 0 on ring 0, index 7 on ring 1; both at base angle 0
        assert!(approx_eq(l.angle_degrees(0, 1.0), 30.0));
        assert!(approx_eq(l.angle_degrees(7, 1.0), -30.0));
        assert!(approx_eq(l.angle_degrees(21, 2.0), 60.0));
    }

    #[test]
    fn slots_spread_evenly() {
        let l = RingLayout::new(4, 1.0, 0.0);
        assert!(approx_eq(l.angle_degrees(1, 0.0), 90.0));
        assert!(approx_eq(l.angle_degrees(2, 0.0), 180.0));
        // ring 1 has 8 slots
        assert!(approx_eq(l.angle_degrees(5, 0.0), 45.0));
    }
}
