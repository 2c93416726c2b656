//! Orbit controller.
//!
//! Attached objects hold an offset from the player rather than a position of
//! their own. [`orbit_system`] eases each offset toward the ring slot the
//! object's attachment index maps to and spins the object; then
//! [`follow_anchor_system`] places every orbiting object at its anchor's
//! position plus the offset.
//!
//! Run both after the physics steps so objects track where the player ended
//! up this frame.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::orbiting::Orbiting;
use crate::components::rotation::Rotation;
use crate::math::clamp01;
use crate::resources::attachments::Attachments;
use crate::resources::gameconfig::OrbitConfig;
use crate::resources::worldtime::WorldTime;

/// Ease offsets toward their ring slots and apply self rotation.
pub fn orbit_system(
    time: Res<WorldTime>,
    config: Res<OrbitConfig>,
    attachments: Res<Attachments>,
    mut query: Query<(&mut Orbiting, Option<&mut Rotation>)>,
) {
    let layout = config.layout();
    let t = clamp01(config.hover_speed * time.delta);
    let spin = config.self_rotation_speed * time.delta;

    for (index, entity) in attachments.iter().enumerate() {
        let Ok((mut orbiting, rotation)) = query.get_mut(entity) else {
            continue;
        };
        let target = layout.offset(index, time.elapsed);
        orbiting.offset = orbiting.offset.lerp(target, t);
        if let Some(mut rotation) = rotation {
            rotation.degrees += spin;
        }
    }
}

/// Updates positions of orbiting entities to follow their anchors.
pub fn follow_anchor_system(
    mut followers: Query<(&Orbiting, &mut MapPosition)>,
    anchors: Query<&MapPosition, Without<Orbiting>>,
) {
    for (orbiting, mut follower_pos) in followers.iter_mut() {
        if let Ok(anchor_pos) = anchors.get(orbiting.anchor) {
            follower_pos.pos = anchor_pos.pos + orbiting.offset;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raylib::prelude::Vector2;

    #[test]
    fn follower_tracks_anchor_plus_offset() {
        let mut world = World::new();
        let anchor = world.spawn(MapPosition::new(3.0, -1.0)).id();
        let follower = world
            .spawn((
                MapPosition::new(0.0, 0.0),
                Orbiting::new(anchor).with_offset(Vector2 { x: 1.0, y: 2.0 }),
            ))
            .id();

        let mut schedule = Schedule::default();
        schedule.add_systems(follow_anchor_system);
        schedule.run(&mut world);

        let pos = world.get::<MapPosition>(follower).unwrap().pos;
        assert_eq!((pos.x, pos.y), (4.0, 1.0));
    }

    #[test]
    fn follower_with_missing_anchor_stays_put() {
        let mut world = World::new();
        let ghost = world.spawn_empty().id();
        world.despawn(ghost);
        let follower = world
            .spawn((MapPosition::new(5.0, 5.0), Orbiting::new(ghost)))
            .id();

        let mut schedule = Schedule::default();
        schedule.add_systems(follow_anchor_system);
        schedule.run(&mut world);

        let pos = world.get::<MapPosition>(follower).unwrap().pos;
        assert_eq!((pos.x, pos.y), (5.0, 5.0));
    }
}
