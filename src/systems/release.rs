//! Release state machine.
//!
//! `Idle -> Active -> Idle`, entered at most once per scene:
//!
//! - [`release_trigger_system`] starts the phase the frame the attachment
//!   count reaches the target: the player is frozen (its move speed saved),
//!   every release prompt is shown and [`ReleaseStartedEvent`] fires.
//! - [`release_step_system`] ejects one object per activation, most recently
//!   attached first. After the last one the target drops to 0, the saved
//!   speed comes back, prompts hide and [`ReleaseFinishedEvent`] fires.
//!
//! Schedule the step before the trigger so the activation that completes the
//! collection is not also taken as the first release.

use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::prelude::Vector2;

use crate::components::body::{BodyParts, release_body};
use crate::components::boxcollider::BoxCollider;
use crate::components::dynamictext::DynamicText;
use crate::components::mapposition::MapPosition;
use crate::components::markers::{Player, ReleasePrompt};
use crate::components::orbiting::Orbiting;
use crate::components::playermotion::PlayerMotion;
use crate::components::rigidbody::RigidBody;
use crate::events::orbit::{ObjectReleasedEvent, ReleaseFinishedEvent, ReleaseStartedEvent};
use crate::math::normalize_or_zero;
use crate::resources::attachments::Attachments;
use crate::resources::gameconfig::OrbitConfig;
use crate::resources::input::InputState;
use crate::resources::release::{ReleasePhase, ReleaseState};
use crate::resources::worldtime::WorldTime;

fn show_prompts(prompts: &mut Query<&mut DynamicText, With<ReleasePrompt>>, visible: bool) {
    for mut text in prompts.iter_mut() {
        text.set_visible(visible);
    }
}

/// Enter the release phase once the attachment count equals the target.
pub fn release_trigger_system(
    mut commands: Commands,
    mut release: ResMut<ReleaseState>,
    attachments: Res<Attachments>,
    mut players: Query<&mut PlayerMotion, With<Player>>,
    mut prompts: Query<&mut DynamicText, With<ReleasePrompt>>,
) {
    if !release.should_trigger(attachments.len()) {
        return;
    }
    let count = release.target;

    if let Ok(mut motion) = players.single_mut() {
        release.saved_move_speed = Some(motion.move_speed);
        motion.move_speed = 0.0;
    }
    show_prompts(&mut prompts, true);
    release.phase = ReleasePhase::Active { remaining: count };

    commands.trigger(ReleaseStartedEvent { count });
    info!("release phase started with {} objects", count);
}

/// Eject the most recently attached object on each activation edge.
#[allow(clippy::too_many_arguments, clippy::type_complexity)]
pub fn release_step_system(
    mut commands: Commands,
    input: Res<InputState>,
    time: Res<WorldTime>,
    config: Res<OrbitConfig>,
    mut release: ResMut<ReleaseState>,
    mut attachments: ResMut<Attachments>,
    mut players: Query<(&MapPosition, &mut PlayerMotion), With<Player>>,
    mut objects: Query<
        (&mut MapPosition, Option<&mut BoxCollider>, Option<&mut RigidBody>),
        Without<Player>,
    >,
    mut prompts: Query<&mut DynamicText, With<ReleasePrompt>>,
) {
    let ReleasePhase::Active { mut remaining } = release.phase else {
        return;
    };
    if !input.activated() {
        return;
    }
    let player_pos = players
        .single()
        .map(|(pos, _)| pos.pos)
        .unwrap_or(Vector2::zero());

    match attachments.pop() {
        Some(entity) => {
            remaining = remaining.saturating_sub(1);
            commands.entity(entity).remove::<Orbiting>();

            if let Ok((mut pos, mut collider, mut body)) = objects.get_mut(entity) {
                let direction = normalize_or_zero(pos.pos - player_pos);
                let push = config.push_object_speed;
                let mut parts = BodyParts::new(collider.as_deref_mut(), body.as_deref_mut());
                if !release_body(&mut parts, direction, push) {
                    pos.pos = pos.pos + direction.scale_by(push * time.delta);
                }
            }
            commands.trigger(ObjectReleasedEvent { entity, remaining });
            info!("released {:?}, {} remaining", entity, remaining);
        }
        None => {
            warn!(
                "release queue empty with {} releases outstanding; ending phase",
                remaining
            );
            remaining = 0;
        }
    }

    if remaining > 0 {
        release.phase = ReleasePhase::Active { remaining };
        return;
    }

    release.target = 0;
    release.phase = ReleasePhase::Idle;
    if let Some(speed) = release.saved_move_speed.take()
        && let Ok((_, mut motion)) = players.single_mut()
    {
        motion.move_speed = speed;
    }
    show_prompts(&mut prompts, false);

    commands.trigger(ReleaseFinishedEvent);
    info!("release phase finished");
}
