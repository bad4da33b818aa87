//! Movement domain: fixed-tick systems driving the kinematic core.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::content::GameplayTuning;
use crate::core::{AudioCue, AudioCueEvent, HazardDamageEvent};
use crate::kinematics::{
    HazardCooldown, HazardSettings, Integrator, JumpController, JumpState, KinematicBody,
    RunnerPolicy, VelocityPolicy, detect_hazard,
};
use crate::movement::cast::AvianCaster;
use crate::movement::{Obstacle, Runner, RunnerInput};

/// Turn held keys into the runner's drive.
pub(crate) fn steer_runner(
    input: Res<RunnerInput>,
    mut query: Query<&mut RunnerPolicy, With<Runner>>,
) {
    for mut policy in &mut query {
        let drive = input.drive(policy.mode);
        policy.set_drive(drive);
    }
}

/// Feed jump edges to the state machine and step it once.
pub(crate) fn advance_jump_states(
    time: Res<Time>,
    input: Res<RunnerInput>,
    mut query: Query<(&mut JumpController, &KinematicBody, &RunnerPolicy), With<Runner>>,
    mut cues: MessageWriter<AudioCueEvent>,
) {
    let now = time.elapsed_secs();

    for (mut jump, body, policy) in &mut query {
        if policy.control_enabled {
            if input.jump_just_pressed {
                jump.press();
            }
            if input.jump_just_released {
                jump.release();
            }
        }

        if let Some(state) = jump.advance(body.grounded, now) {
            debug!("Jump state -> {:?} (grounded={})", state, body.grounded);
            if state == JumpState::Jumping {
                cues.write(AudioCueEvent {
                    cue: AudioCue::Jump,
                });
            }
        }
    }
}

/// Apply a pending take-off or early release to the body velocity.
pub(crate) fn apply_jump_velocity(
    tuning: Res<GameplayTuning>,
    mut query: Query<(&mut JumpController, &mut KinematicBody)>,
) {
    for (mut jump, mut body) in &mut query {
        jump.apply_to(&mut body, tuning.runner.jump_modifier);
    }
}

pub(crate) fn compute_target_velocities<P: VelocityPolicy + Component>(
    mut query: Query<(&P, &mut KinematicBody)>,
) {
    for (policy, mut body) in &mut query {
        body.target_velocity = policy.target_velocity(&body);
    }
}

/// Hazards only hurt bodies under control; a halted runner still settles but takes no hits.
pub(crate) fn hazards_armed(policy: Option<&RunnerPolicy>) -> bool {
    policy.is_none_or(|policy| policy.control_enabled)
}

/// Integrate every kinematic body against the physics world, then check for hazard hits.
pub(crate) fn integrate_bodies(
    time: Res<Time>,
    gravity: Res<Gravity>,
    integrator: Res<Integrator>,
    hazard_settings: Res<HazardSettings>,
    spatial_query: SpatialQuery,
    obstacles: Query<(), With<Obstacle>>,
    mut bodies: Query<(
        Entity,
        &mut Transform,
        &mut KinematicBody,
        &Collider,
        &CollisionLayers,
        Option<&mut HazardCooldown>,
        Option<&RunnerPolicy>,
    )>,
    mut hazard_events: MessageWriter<HazardDamageEvent>,
    mut cues: MessageWriter<AudioCueEvent>,
) {
    let dt = time.delta_secs();
    let now = time.elapsed_secs();

    for (entity, mut transform, mut body, collider, layers, cooldown, policy) in &mut bodies {
        let caster = AvianCaster::new(&spatial_query, entity, collider, layers);
        let mut position = transform.translation.truncate();

        let was_grounded = body.grounded;
        let outcome = integrator.step(&mut body, &mut position, &caster, gravity.0, dt);
        transform.translation.x = position.x;
        transform.translation.y = position.y;

        if body.grounded != was_grounded {
            debug!("{:?} grounded={} normal={:?}", entity, body.grounded, body.ground_normal);
        }

        let Some(mut cooldown) = cooldown else {
            continue;
        };
        if !hazards_armed(policy) {
            continue;
        }

        for pass in outcome.passes() {
            let hit = detect_hazard(
                &pass,
                &caster,
                |collider| obstacles.contains(collider),
                &mut cooldown,
                &hazard_settings,
                integrator.shell_radius,
                now,
            );

            if let Some(hit) = hit {
                info!("{:?} hit obstacle {:?} for {}", entity, hit.collider, hit.damage);
                hazard_events.write(HazardDamageEvent {
                    target: entity,
                    hazard: hit.collider,
                    damage: hit.damage,
                });
                cues.write(AudioCueEvent {
                    cue: AudioCue::Ouch,
                });
            }
        }
    }
}
