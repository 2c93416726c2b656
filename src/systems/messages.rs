//! Drives [`MessageSequence`] components into their [`DynamicText`].

use bevy_ecs::prelude::*;

use crate::components::dynamictext::DynamicText;
use crate::components::messagesequence::{MessageSequence, SequenceState};
use crate::resources::worldtime::WorldTime;

/// Start idle sequences and advance running ones by the scaled frame delta.
pub fn message_sequence_system(
    time: Res<WorldTime>,
    mut query: Query<(&mut MessageSequence, &mut DynamicText)>,
) {
    for (mut sequence, mut text) in query.iter_mut() {
        if sequence.state == SequenceState::Idle {
            if let Some(first) = sequence.start() {
                text.set_content(first);
                text.set_visible(true);
            }
            continue;
        }
        if let Some(next) = sequence.tick(time.delta) {
            text.set_content(next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raylib::prelude::Color;

    fn run(world: &mut World, schedule: &mut Schedule, dt: f32) {
        world.resource_mut::<WorldTime>().delta = dt;
        schedule.run(world);
    }

    #[test]
    fn text_follows_sequence() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        let messages = (0..6).map(|i| format!("line {i}")).collect();
        let e = world
            .spawn((
                MessageSequence::new(messages, 1.0),
                DynamicText::new("", 20.0, Color::WHITE).hidden(),
            ))
            .id();
        let mut schedule = Schedule::default();
        schedule.add_systems(message_sequence_system);

        run(&mut world, &mut schedule, 0.0);
        let text = world.get::<DynamicText>(e).unwrap();
        assert_eq!(text.content, "line 0");
        assert!(text.visible);

        for _ in 0..10 {
            run(&mut world, &mut schedule, 1.0);
        }
        assert_eq!(world.get::<DynamicText>(e).unwrap().content, "line 5");
        assert_eq!(
            world.get::<MessageSequence>(e).unwrap().state,
            SequenceState::Finished
        );
    }

    #[test]
    fn short_list_leaves_text_untouched() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        let e = world
            .spawn((
                MessageSequence::new(vec!["only".into()], 1.0),
                DynamicText::new("placeholder", 20.0, Color::WHITE),
            ))
            .id();
        let mut schedule = Schedule::default();
        schedule.add_systems(message_sequence_system);
        run(&mut world, &mut schedule, 5.0);
        run(&mut world, &mut schedule, 5.0);
        assert_eq!(world.get::<DynamicText>(e).unwrap().content, "placeholder");
    }
}
