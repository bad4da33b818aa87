//! Gameplay domain: energy, pickups, capture, escape, and run outcome systems.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::content::{GameplayTuning, PickupKind, vec2};
use crate::core::{
    AudioCue, AudioCueEvent, Difficulty, EnergyChangedEvent, GameLostEvent, GameState,
    GameWonEvent, HazardDamageEvent, RunRestartedEvent, RunSession, ScoreChangedEvent,
};
use crate::gameplay::spawn::spawn_props;
use crate::gameplay::{
    Checkpoint, Energy, EnergyStatus, EscapeSequence, GetawayVehicle, LevelProp, Pickup,
    RunnerContacts, Score,
};
use crate::kinematics::{
    CopPolicy, Haltable, HazardCooldown, HazardSettings, JumpController, KinematicBody,
    RunnerPolicy,
};
use crate::movement::{CameraFocus, Cop, GameLayer, RUNNER_COLOR, Runner, SpawnPoint};

pub const LOSS_ENERGY: &str = "Lost All Health!";
pub const LOSS_CAUGHT: &str = "Caught by police!";

const WARNING_COLOR: Color = Color::srgb(0.95, 0.55, 0.15);
const CRITICAL_COLOR: Color = Color::srgb(0.9, 0.15, 0.15);

/// Entities on `layer` overlapping `collider` placed at `position`.
fn overlapping(
    spatial_query: &SpatialQuery,
    collider: &Collider,
    position: Vec2,
    layer: GameLayer,
) -> Vec<Entity> {
    spatial_query.shape_intersections(
        collider,
        position,
        0.0,
        &SpatialQueryFilter::from_mask(layer),
    )
}

fn energy_changed(energy: &Energy) -> EnergyChangedEvent {
    EnergyChangedEvent {
        current: energy.current(),
        max: energy.max,
    }
}

/// Runner tint for an energy band.
pub(crate) fn status_color(status: EnergyStatus) -> Color {
    match status {
        EnergyStatus::Healthy => RUNNER_COLOR,
        EnergyStatus::Warning => WARNING_COLOR,
        EnergyStatus::Critical => CRITICAL_COLOR,
    }
}

// ============================================================================
// Energy
// ============================================================================

pub(crate) fn drain_energy(
    time: Res<Time>,
    mut energy: ResMut<Energy>,
    mut changed: MessageWriter<EnergyChangedEvent>,
) {
    if energy.drain(time.delta_secs()) {
        changed.write(energy_changed(&energy));
    }
}

/// Stopped energy is frozen, so late hits after the run ends are dropped.
pub(crate) fn apply_hazard_damage(
    mut hits: MessageReader<HazardDamageEvent>,
    mut energy: ResMut<Energy>,
    mut changed: MessageWriter<EnergyChangedEvent>,
) {
    for hit in hits.read() {
        if !energy.is_draining() {
            debug!("Ignoring hit on {:?}, energy is stopped", hit.target);
            continue;
        }
        energy.decrease(hit.damage);
        info!(
            "{:?} hit obstacle {:?} for {} energy ({:.1} left)",
            hit.target,
            hit.hazard,
            hit.damage,
            energy.current()
        );
        changed.write(energy_changed(&energy));
    }
}

pub(crate) fn check_energy_depleted(energy: Res<Energy>, mut lost: MessageWriter<GameLostEvent>) {
    if energy.is_depleted() {
        lost.write(GameLostEvent {
            reason: LOSS_ENERGY.to_string(),
        });
    }
}

/// Tint the runner by energy band and log band changes.
pub(crate) fn show_energy_status(
    energy: Res<Energy>,
    tuning: Res<GameplayTuning>,
    mut last: Local<Option<EnergyStatus>>,
    mut runner: Query<&mut Sprite, With<Runner>>,
) {
    let bands = &tuning.energy;
    let status = energy.status(bands.warning_fraction, bands.critical_fraction);
    if *last == Some(status) {
        return;
    }

    match status {
        EnergyStatus::Critical => warn!("Energy critical: {:.1}", energy.current()),
        _ => debug!("Energy {:?}: {:.1}", status, energy.current()),
    }
    for mut sprite in &mut runner {
        sprite.color = status_color(status);
    }
    *last = Some(status);
}

// ============================================================================
// Overlaps
// ============================================================================

/// Sweep the runner's collider against every trigger layer once per tick.
pub(crate) fn sense_runner_contacts(
    spatial_query: SpatialQuery,
    runner: Query<(&Transform, &Collider), With<Runner>>,
    mut contacts: ResMut<RunnerContacts>,
) {
    contacts.clear();
    let Ok((transform, collider)) = runner.single() else {
        return;
    };

    let position = transform.translation.truncate();
    contacts.pickups = overlapping(&spatial_query, collider, position, GameLayer::Pickup);
    contacts.checkpoints = overlapping(&spatial_query, collider, position, GameLayer::Checkpoint);
    contacts.cops = overlapping(&spatial_query, collider, position, GameLayer::Cop);
    contacts.getaways = overlapping(&spatial_query, collider, position, GameLayer::Getaway);
}

pub(crate) fn collect_pickups(
    mut commands: Commands,
    contacts: Res<RunnerContacts>,
    tuning: Res<GameplayTuning>,
    pickups: Query<&Pickup>,
    mut energy: ResMut<Energy>,
    mut score: ResMut<Score>,
    mut energy_changed_events: MessageWriter<EnergyChangedEvent>,
    mut score_changed: MessageWriter<ScoreChangedEvent>,
    mut cues: MessageWriter<AudioCueEvent>,
) {
    for &entity in &contacts.pickups {
        let Ok(pickup) = pickups.get(entity) else {
            continue;
        };

        match pickup.kind {
            PickupKind::Powerup => {
                energy.increase(tuning.energy.powerup_value);
                energy_changed_events.write(energy_changed(&energy));
            }
            PickupKind::Loot => {
                score.add(tuning.energy.loot_value);
                score_changed.write(ScoreChangedEvent { score: score.0 });
            }
        }
        debug!("Collected {:?} ({:?})", pickup.kind, entity);
        cues.write(AudioCueEvent {
            cue: AudioCue::Collect,
        });
        commands.entity(entity).despawn();
    }
}

pub(crate) fn reach_checkpoints(
    contacts: Res<RunnerContacts>,
    mut runner: Query<&mut SpawnPoint, With<Runner>>,
    checkpoints: Query<&Checkpoint>,
) {
    let Ok(mut spawn_point) = runner.single_mut() else {
        return;
    };

    for &entity in &contacts.checkpoints {
        let Ok(checkpoint) = checkpoints.get(entity) else {
            continue;
        };
        if spawn_point.0 != checkpoint.spawn {
            info!("Checkpoint reached, respawn moved to {:?}", checkpoint.spawn);
            spawn_point.0 = checkpoint.spawn;
        }
    }
}

pub(crate) fn detect_capture(
    contacts: Res<RunnerContacts>,
    session: Res<RunSession>,
    mut lost: MessageWriter<GameLostEvent>,
    mut cues: MessageWriter<AudioCueEvent>,
) {
    if session.escaping || contacts.cops.is_empty() {
        return;
    }

    cues.write(AudioCueEvent {
        cue: AudioCue::PoliceSiren,
    });
    lost.write(GameLostEvent {
        reason: LOSS_CAUGHT.to_string(),
    });
}

/// Hand the run over to the getaway vehicle once the runner touches it.
pub(crate) fn reach_getaway(
    mut commands: Commands,
    contacts: Res<RunnerContacts>,
    tuning: Res<GameplayTuning>,
    mut session: ResMut<RunSession>,
    mut energy: ResMut<Energy>,
    mut runner: Query<(Entity, &mut RunnerPolicy, &mut Visibility), With<Runner>>,
    vehicles: Query<(), With<GetawayVehicle>>,
    mut cops: Query<&mut CopPolicy>,
    mut cues: MessageWriter<AudioCueEvent>,
) {
    if session.escaping {
        return;
    }
    let Some(vehicle) = contacts
        .getaways
        .iter()
        .copied()
        .find(|&entity| vehicles.contains(entity))
    else {
        return;
    };
    let Ok((runner_entity, mut policy, mut visibility)) = runner.single_mut() else {
        return;
    };

    info!("Runner reached the getaway vehicle, starting escape");
    session.begin_escape();
    policy.stop();
    *visibility = Visibility::Hidden;
    energy.stop();
    for mut cop in &mut cops {
        cop.stop();
    }

    commands.entity(runner_entity).remove::<CameraFocus>();
    commands
        .entity(vehicle)
        .insert((CameraFocus, EscapeSequence::new(tuning.escape)));
    cues.write(AudioCueEvent {
        cue: AudioCue::EngineStart,
    });
}

pub(crate) fn advance_escape(
    mut commands: Commands,
    time: Res<Time>,
    mut vehicles: Query<(Entity, &mut Transform, &mut EscapeSequence)>,
    mut won: MessageWriter<GameWonEvent>,
) {
    for (entity, mut transform, mut sequence) in &mut vehicles {
        let displacement = sequence.advance(time.delta_secs());
        transform.translation += displacement.extend(0.0);

        if sequence.is_finished() {
            debug!("Escape sequence done after {:.2}s", sequence.elapsed());
            commands.entity(entity).remove::<EscapeSequence>();
            won.write(GameWonEvent);
        }
    }
}

// ============================================================================
// Outcome
// ============================================================================

/// End the run as a loss. Only the first request during gameplay counts.
pub(crate) fn handle_game_lost(
    mut events: MessageReader<GameLostEvent>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut session: ResMut<RunSession>,
    mut energy: ResMut<Energy>,
    mut runner: Query<&mut RunnerPolicy, With<Runner>>,
    mut cops: Query<&mut CopPolicy>,
    mut cues: MessageWriter<AudioCueEvent>,
) {
    let Some(reason) = events.read().next().map(|event| event.reason.clone()) else {
        return;
    };
    events.clear();
    if *state.get() != GameState::Gameplay {
        debug!("Ignoring loss '{}' in {:?}", reason, state.get());
        return;
    }

    warn!("Game over: {}", reason);
    session.record_loss(reason);
    energy.stop();
    for mut policy in &mut runner {
        policy.stop();
    }
    for mut cop in &mut cops {
        cop.stop();
    }

    cues.write(AudioCueEvent {
        cue: AudioCue::GameOver,
    });
    next_state.set(GameState::GameOver);
}

pub(crate) fn handle_game_won(
    mut events: MessageReader<GameWonEvent>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
    score: Res<Score>,
    mut cues: MessageWriter<AudioCueEvent>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();
    if *state.get() != GameState::Gameplay {
        debug!("Ignoring win in {:?}", state.get());
        return;
    }

    info!("Level complete with ${}", score.0);
    cues.write(AudioCueEvent {
        cue: AudioCue::Victory,
    });
    next_state.set(GameState::LevelComplete);
}

/// R restarts from either end screen.
pub(crate) fn restart_run(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    tuning: Res<GameplayTuning>,
    difficulty: Res<Difficulty>,
    mut next_state: ResMut<NextState<GameState>>,
    mut session: ResMut<RunSession>,
    mut energy: ResMut<Energy>,
    mut score: ResMut<Score>,
    mut runner: Query<
        (
            Entity,
            &mut Transform,
            &mut KinematicBody,
            &mut RunnerPolicy,
            &mut JumpController,
            &mut HazardCooldown,
            &mut Visibility,
            &SpawnPoint,
        ),
        With<Runner>,
    >,
    mut cops: Query<
        (&mut Transform, &mut KinematicBody, &mut CopPolicy, &SpawnPoint),
        (With<Cop>, Without<Runner>),
    >,
    focused: Query<Entity, With<CameraFocus>>,
    mut energy_changed_events: MessageWriter<EnergyChangedEvent>,
    mut score_changed: MessageWriter<ScoreChangedEvent>,
    mut restarted: MessageWriter<RunRestartedEvent>,
) {
    if !keyboard.just_pressed(KeyCode::KeyR) {
        return;
    }
    let Ok((
        runner_entity,
        mut transform,
        mut body,
        mut policy,
        mut jump,
        mut cooldown,
        mut visibility,
        spawn_point,
    )) = runner.single_mut()
    else {
        return;
    };

    let profile = tuning.difficulty.profile(*difficulty);

    let mut position = transform.translation.truncate();
    body.teleport(&mut position, spawn_point.0);
    transform.translation.x = position.x;
    transform.translation.y = position.y;
    policy.enable_control();
    jump.reset();
    cooldown.reset();
    *visibility = Visibility::Inherited;

    // Cops keep their starting lead on the runner relative to the respawn point
    let shift = spawn_point.0 - vec2(tuning.level.runner_spawn);
    for (mut cop_transform, mut cop_body, mut cop_policy, cop_spawn) in &mut cops {
        let mut cop_position = cop_transform.translation.truncate();
        cop_body.teleport(&mut cop_position, cop_spawn.0 + shift);
        cop_transform.translation.x = cop_position.x;
        cop_transform.translation.y = cop_position.y;
        cop_policy.move_speed = profile.cop_speed;
    }

    for entity in &focused {
        commands.entity(entity).remove::<CameraFocus>();
    }
    commands.entity(runner_entity).insert(CameraFocus);

    energy.refill();
    energy.drain_rate = profile.energy_drain;
    energy.resume();
    score.reset();
    let previous = session.loss_reason.clone();
    session.restart();
    energy_changed_events.write(energy_changed(&energy));
    score_changed.write(ScoreChangedEvent { score: 0 });
    restarted.write(RunRestartedEvent {
        attempt: session.attempts,
    });

    info!(
        "Restarting run (attempt {}, last ended by {}) at {:?} on {:?}",
        session.attempts,
        previous.as_deref().unwrap_or("escape"),
        spawn_point.0,
        *difficulty
    );
    next_state.set(GameState::Gameplay);
}

/// Recreate pickups, checkpoints and the getaway for a new attempt.
pub(crate) fn respawn_props(
    mut commands: Commands,
    mut restarted: MessageReader<RunRestartedEvent>,
    tuning: Res<GameplayTuning>,
    props: Query<Entity, With<LevelProp>>,
) {
    if restarted.is_empty() {
        return;
    }
    restarted.clear();

    for entity in &props {
        commands.entity(entity).despawn();
    }
    spawn_props(&mut commands, &tuning);
}

/// Push the selected difficulty profile into the live run.
pub(crate) fn apply_difficulty(
    difficulty: Res<Difficulty>,
    tuning: Res<GameplayTuning>,
    state: Res<State<GameState>>,
    session: Res<RunSession>,
    mut energy: ResMut<Energy>,
    mut hazard_settings: ResMut<HazardSettings>,
    mut cops: Query<&mut CopPolicy>,
) {
    let profile = tuning.difficulty.profile(*difficulty);

    energy.drain_rate = profile.energy_drain;
    hazard_settings.damage = profile.obstacle_damage;

    // Halted cops stay halted until the next restart
    if *state.get() == GameState::Gameplay && !session.escaping {
        for mut cop in &mut cops {
            cop.move_speed = profile.cop_speed;
        }
    }

    debug!(
        "Applied {:?}: cop_speed={}, drain={}, obstacle_damage={}",
        *difficulty, profile.cop_speed, profile.energy_drain, profile.obstacle_damage
    );
}
