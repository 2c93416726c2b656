//! Interaction protocol: turning a free interactable into an orbiting one.
//!
//! - [`try_interact`] reacts to the activation edge. It picks the nearest
//!   free interactable inside `interact_radius` and starts its attach
//!   sequence: the backdrop cue switches on, the object's overlay text is
//!   revealed and an [`AttachTask`] is inserted.
//! - [`advance_attach_tasks`] runs every frame, counts tasks down and
//!   finalizes the ones whose delay is over: the backdrop reverts, the object
//!   leaves the physics simulation, joins [`Attachments`] and starts
//!   [`Orbiting`] the player.
//!
//! Nothing here runs while the release phase is active; tasks already in
//! flight are held until it ends.

use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::components::attachtask::{AttachPhase, AttachTask};
use crate::components::body::{BodyParts, attach_body};
use crate::components::boxcollider::BoxCollider;
use crate::components::dynamictext::DynamicText;
use crate::components::mapposition::MapPosition;
use crate::components::markers::{Backdrop, Interactable, Player};
use crate::components::orbiting::Orbiting;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::events::orbit::ObjectAttachedEvent;
use crate::resources::attachments::Attachments;
use crate::resources::backdrop::BackdropCue;
use crate::resources::gameconfig::OrbitConfig;
use crate::resources::input::InputState;
use crate::resources::release::ReleaseState;
use crate::resources::worldtime::WorldTime;

fn set_backdrops(backdrops: &mut Query<&mut Sprite, With<Backdrop>>, key: &str) {
    for mut sprite in backdrops.iter_mut() {
        if sprite.tex_key != key {
            sprite.tex_key = key.to_string();
        }
    }
}

/// Start one attach sequence on the activation edge.
///
/// Candidates have an enabled collider touching the interaction circle and
/// are neither attached nor already mid-sequence. The nearest one wins.
#[allow(clippy::too_many_arguments)]
pub fn try_interact(
    mut commands: Commands,
    input: Res<InputState>,
    config: Res<OrbitConfig>,
    release: Res<ReleaseState>,
    cue: Res<BackdropCue>,
    mut attachments: ResMut<Attachments>,
    players: Query<&MapPosition, With<Player>>,
    candidates: Query<
        (Entity, &MapPosition, &BoxCollider),
        (With<Interactable>, Without<AttachTask>, Without<Orbiting>),
    >,
    mut backdrops: Query<&mut Sprite, With<Backdrop>>,
    mut overlays: Query<&mut DynamicText, With<Interactable>>,
) {
    if !input.activated() || release.is_active() {
        return;
    }
    let Ok(player) = players.single() else {
        return;
    };
    let center = player.pos;
    let radius = config.interact_radius;

    let nearest = candidates
        .iter()
        .filter(|(entity, pos, collider)| {
            !attachments.contains(*entity) && collider.intersects_circle(pos.pos, center, radius)
        })
        .map(|(entity, pos, _)| {
            let d = pos.pos - center;
            (entity, d.x * d.x + d.y * d.y)
        })
        .min_by(|a, b| a.1.total_cmp(&b.1));

    let Some((entity, _)) = nearest else {
        return;
    };

    let ticket = attachments.take_ticket();
    commands
        .entity(entity)
        .insert(AttachTask::new(config.interaction_delay, ticket));

    if let Some(active) = cue.active.as_deref() {
        set_backdrops(&mut backdrops, active);
    }
    if let Ok(mut overlay) = overlays.get_mut(entity) {
        overlay.set_visible(true);
    }
    debug!(
        "attach sequence started: {:?} ticket={} delay={}s",
        entity, ticket, config.interaction_delay
    );
}

/// Advance every attach task by the scaled frame delta and finalize the
/// ones that are ready.
///
/// A task is not ticked on the frame it was inserted, so it finishes no
/// earlier than `interaction_delay` seconds after the activation frame.
/// Tasks that become ready on the same frame are attached in ticket order so
/// ring slots follow the order the sequences were started in. Once the
/// attachment count reaches the release target, the remaining ready tasks
/// stay in `Resuming` and attach after the release phase.
#[allow(clippy::too_many_arguments, clippy::type_complexity)]
pub fn advance_attach_tasks(
    mut commands: Commands,
    time: Res<WorldTime>,
    release: Res<ReleaseState>,
    cue: Res<BackdropCue>,
    mut attachments: ResMut<Attachments>,
    players: Query<(Entity, &MapPosition), With<Player>>,
    mut tasks: Query<(
        Entity,
        &mut AttachTask,
        &MapPosition,
        Option<&mut BoxCollider>,
        Option<&mut RigidBody>,
    )>,
    mut backdrops: Query<&mut Sprite, With<Backdrop>>,
) {
    if release.is_active() {
        return;
    }
    let Ok((player, player_pos)) = players.single() else {
        return;
    };
    let anchor = player_pos.pos;

    let mut ready: Vec<(u64, Entity)> = Vec::new();
    for (entity, mut task, ..) in tasks.iter_mut() {
        // the frame a task starts on does not count toward its delay
        if task.is_added() {
            continue;
        }
        if task.tick(time.delta) || task.phase == AttachPhase::Resuming {
            ready.push((task.ticket, entity));
        }
    }
    if ready.is_empty() {
        return;
    }
    ready.sort_by_key(|(ticket, _)| *ticket);

    if cue.active.is_some()
        && let Some(original) = cue.original.as_deref()
    {
        set_backdrops(&mut backdrops, original);
    }

    for (_, entity) in ready {
        // never step past the release target; the rest wait in `Resuming`
        if release.target > 0 && attachments.len() >= release.target {
            debug!("{:?} held until the release phase is over", entity);
            break;
        }
        let Ok((_, mut task, pos, mut collider, mut body)) = tasks.get_mut(entity) else {
            continue;
        };
        task.phase = AttachPhase::Done;

        if !attachments.push(entity) {
            warn!("{:?} is already attached; dropping its attach task", entity);
            commands.entity(entity).remove::<AttachTask>();
            continue;
        }
        let mut parts = BodyParts::new(collider.as_deref_mut(), body.as_deref_mut());
        attach_body(&mut parts);

        let offset = pos.pos - anchor;
        let index = attachments.len() - 1;
        commands
            .entity(entity)
            .remove::<AttachTask>()
            .insert(Orbiting::new(player).with_offset(offset));
        commands.trigger(ObjectAttachedEvent { entity, index });
        info!("object {:?} attached at index {}", entity, index);
    }
}
