//! Kinematics domain: unit tests for integration, jumping, hazards, and policies.

use std::cell::Cell;

use bevy::prelude::*;

use super::{
    CollisionHit, CopPolicy, DriveMode, Haltable, HazardCooldown, HazardSettings, Integrator,
    JumpController, JumpState, JumpTiming, KinematicBody, MovementPass, RunnerPolicy,
    ShapeCaster, VelocityPolicy, detect_hazard,
};

// -----------------------------------------------------------------------------
// Test geometry: infinite planes swept by a point
// -----------------------------------------------------------------------------

struct Plane {
    normal: Vec2,
    offset: f32,
    collider: Entity,
}

#[derive(Default)]
struct PlaneWorld {
    planes: Vec<Plane>,
    casts: Cell<usize>,
}

impl PlaneWorld {
    fn with_plane(mut self, point: Vec2, normal: Vec2, collider: Entity) -> Self {
        let normal = normal.normalize();
        self.planes.push(Plane {
            normal,
            offset: normal.dot(point),
            collider,
        });
        self
    }
}

impl ShapeCaster for PlaneWorld {
    fn cast(&self, origin: Vec2, direction: Dir2, max_distance: f32) -> Vec<CollisionHit> {
        self.casts.set(self.casts.get() + 1);
        let mut hits: Vec<CollisionHit> = self
            .planes
            .iter()
            .filter_map(|plane| {
                let approach = plane.normal.dot(*direction);
                if approach >= 0.0 {
                    return None;
                }
                let separation = plane.normal.dot(origin) - plane.offset;
                let distance = separation / -approach;
                (0.0..=max_distance)
                    .contains(&distance)
                    .then_some(CollisionHit {
                        normal: plane.normal,
                        distance,
                        collider: plane.collider,
                    })
            })
            .collect();
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}

fn colliders(count: usize) -> Vec<Entity> {
    let mut world = World::new();
    (0..count).map(|_| world.spawn_empty().id()).collect()
}

fn grounded_body() -> KinematicBody {
    KinematicBody {
        grounded: true,
        ..default()
    }
}

// -----------------------------------------------------------------------------
// Integrator tests
// -----------------------------------------------------------------------------

#[test]
fn test_gravity_uses_modifier_only_while_falling() {
    let dt = 0.1;
    let gravity = Vec2::new(0.0, -10.0);

    let mut falling = KinematicBody::default().with_gravity_modifier(2.0);
    falling.velocity.y = -1.0;
    Integrator::apply_gravity(&mut falling, gravity, dt);
    assert!((falling.velocity.y - (-1.0 - 20.0 * dt)).abs() < 1e-6);

    let mut rising = KinematicBody::default().with_gravity_modifier(2.0);
    rising.velocity.y = 1.0;
    Integrator::apply_gravity(&mut rising, gravity, dt);
    assert!((rising.velocity.y - (1.0 - 10.0 * dt)).abs() < 1e-6);
}

#[test]
fn test_fall_onto_flat_floor_grounds_and_zeroes_velocity() {
    let ids = colliders(1);
    let world = PlaneWorld::default().with_plane(Vec2::ZERO, Vec2::Y, ids[0]);
    let integrator = Integrator::default();
    let gravity = Vec2::new(0.0, -10.0);

    let mut body = KinematicBody::default();
    let mut position = Vec2::new(0.0, 1.0);

    let mut landed_on = None;
    for tick in 1..=10 {
        integrator.step(&mut body, &mut position, &world, gravity, 0.1);
        if body.grounded {
            landed_on = Some(tick);
            break;
        }
        assert!(!body.grounded);
    }

    // Cumulative fall after 4 ticks is 0.1 + 0.2 + 0.3 + 0.4 = 1.0
    assert_eq!(landed_on, Some(4));
    assert_eq!(body.velocity.y, 0.0);
    assert!((position.y - integrator.shell_radius).abs() < 1e-4);
    assert_eq!(body.ground_normal, Vec2::Y);
}

#[test]
fn test_ground_normal_threshold_is_exclusive() {
    let ids = colliders(2);
    let integrator = Integrator::default();

    let steep = Vec2::new((1.0f32 - 0.65 * 0.65).sqrt(), 0.65);
    let walkable = Vec2::new((1.0f32 - 0.66 * 0.66).sqrt(), 0.66);

    for (normal, collider, expect_grounded) in [(steep, ids[0], false), (walkable, ids[1], true)] {
        let world = PlaneWorld {
            planes: vec![Plane {
                normal,
                offset: 0.0,
                collider,
            }],
            ..default()
        };
        let mut body = KinematicBody::default();
        body.velocity.y = -20.0;
        let mut position = Vec2::new(0.0, 1.0);

        integrator.step(&mut body, &mut position, &world, Vec2::ZERO, 0.1);

        assert_eq!(body.grounded, expect_grounded, "normal.y = {}", normal.y);
    }
}

#[test]
fn test_grounded_is_cleared_every_tick() {
    let integrator = Integrator::default();
    let world = PlaneWorld::default();
    let mut body = grounded_body();
    let mut position = Vec2::ZERO;

    integrator.step(&mut body, &mut position, &world, Vec2::new(0.0, -10.0), 0.02);

    assert!(!body.grounded);
}

#[test]
fn test_upward_hit_does_not_ground() {
    let ids = colliders(1);
    // Ceiling one unit above, facing down
    let world = PlaneWorld::default().with_plane(Vec2::new(0.0, 1.0), Vec2::NEG_Y, ids[0]);
    let integrator = Integrator::default();

    let mut body = KinematicBody::default();
    body.velocity.y = 15.0;
    let mut position = Vec2::ZERO;

    integrator.step(&mut body, &mut position, &world, Vec2::ZERO, 0.1);

    assert!(!body.grounded);
    assert_eq!(body.velocity.y, 0.0);
    assert!((position.y - (1.0 - integrator.shell_radius)).abs() < 1e-4);
}

#[test]
fn test_airborne_wall_hit_stops_horizontal_velocity() {
    let ids = colliders(1);
    let world = PlaneWorld::default().with_plane(Vec2::new(1.0, 0.0), Vec2::NEG_X, ids[0]);
    let integrator = Integrator::default();

    let mut body = KinematicBody::default();
    body.target_velocity.x = 20.0;
    let mut position = Vec2::new(0.5, 3.0);

    integrator.step(&mut body, &mut position, &world, Vec2::ZERO, 0.1);

    assert_eq!(body.velocity.x, 0.0);
    assert!((position.x - (1.0 - integrator.shell_radius)).abs() < 1e-4);
}

#[test]
fn test_blocked_body_never_closer_than_shell_radius() {
    let ids = colliders(2);
    let world = PlaneWorld::default()
        .with_plane(Vec2::ZERO, Vec2::Y, ids[0])
        .with_plane(Vec2::new(2.0, 0.0), Vec2::NEG_X, ids[1]);
    let integrator = Integrator::default();
    let gravity = Vec2::new(0.0, -9.81);

    let mut body = KinematicBody::default();
    let mut position = Vec2::new(0.0, 0.5);

    for _ in 0..200 {
        body.target_velocity.x = 7.0;
        integrator.step(&mut body, &mut position, &world, gravity, 0.02);
        assert!(position.x <= 2.0 - integrator.shell_radius + 1e-4);
        assert!(position.y >= integrator.shell_radius - 1e-4);
    }

    assert!(body.grounded);
    assert!((position.x - (2.0 - integrator.shell_radius)).abs() < 1e-3);
}

#[test]
fn test_horizontal_motion_follows_ground_slope() {
    let integrator = Integrator::default();
    let world = PlaneWorld::default();

    let mut body = KinematicBody::default();
    body.ground_normal = Vec2::new(-1.0, 1.0).normalize();
    body.target_velocity.x = 1.0;
    let mut position = Vec2::ZERO;

    let outcome = integrator.step(&mut body, &mut position, &world, Vec2::ZERO, 1.0);

    let expected = Vec2::new(1.0, 1.0).normalize();
    assert!((outcome.horizontal.actual() - expected).length() < 1e-5);
}

#[test]
fn test_tiny_displacement_skips_cast_and_move() {
    let integrator = Integrator::default();
    let world = PlaneWorld::default();
    let mut body = KinematicBody::default();
    let mut position = Vec2::new(3.0, 4.0);

    let pass = integrator.perform_movement(
        &mut body,
        &mut position,
        &world,
        Vec2::new(0.0005, 0.0),
        false,
    );

    assert_eq!(world.casts.get(), 0);
    assert_eq!(position, Vec2::new(3.0, 4.0));
    assert_eq!(pass.actual(), Vec2::ZERO);
}

#[test]
fn test_teleport_resets_momentum() {
    let mut body = grounded_body();
    body.velocity = Vec2::new(4.0, -2.0);
    body.target_velocity = Vec2::new(7.0, 0.0);
    let mut position = Vec2::new(50.0, 1.0);

    body.teleport(&mut position, Vec2::new(-3.0, 2.0));

    assert_eq!(position, Vec2::new(-3.0, 2.0));
    assert_eq!(body.velocity, Vec2::ZERO);
    assert_eq!(body.target_velocity, Vec2::ZERO);
    assert!(!body.grounded);
}

// -----------------------------------------------------------------------------
// Jump state machine tests
// -----------------------------------------------------------------------------

#[test]
fn test_immediate_jump_cycle_visits_every_state() {
    let mut jump = JumpController::new(JumpTiming::Immediate);

    assert_eq!(jump.advance(true, 0.0), None);
    jump.press();
    assert_eq!(jump.advance(true, 0.0), Some(JumpState::PrepareToJump));
    assert_eq!(jump.advance(true, 0.02), Some(JumpState::Jumping));
    assert_eq!(jump.advance(true, 0.04), None);
    assert_eq!(jump.advance(false, 0.06), Some(JumpState::InFlight));
    assert_eq!(jump.advance(false, 0.08), None);
    assert_eq!(jump.advance(true, 0.10), Some(JumpState::Landed));
    assert_eq!(jump.advance(true, 0.12), Some(JumpState::Grounded));
    assert_eq!(jump.advance(true, 0.14), None);
}

#[test]
fn test_gated_jump_waits_for_min_air_time() {
    let mut jump = JumpController::new(JumpTiming::AirTimeGated { min_air_time: 0.1 });

    jump.press();
    assert_eq!(jump.advance(true, 0.0), Some(JumpState::PrepareToJump));
    assert_eq!(jump.advance(true, 0.02), Some(JumpState::Jumping));
    // Ungrounded but too early
    assert_eq!(jump.advance(false, 0.04), None);
    assert_eq!(jump.state, JumpState::Jumping);
    assert_eq!(jump.advance(false, 0.1), Some(JumpState::InFlight));
    assert_eq!(jump.advance(true, 0.12), Some(JumpState::Landed));
    assert_eq!(jump.advance(false, 0.14), Some(JumpState::Grounded));
}

#[test]
fn test_gated_jump_ignores_grounded_flicker_after_take_off() {
    let mut jump = JumpController::new(JumpTiming::AirTimeGated { min_air_time: 0.5 });

    jump.press();
    jump.advance(true, 1.0);
    jump.advance(true, 1.02);

    // Still touching the ground on the first ticks after take-off
    assert_eq!(jump.advance(true, 1.04), None);
    assert_eq!(jump.advance(false, 1.2), None);
    assert_eq!(jump.advance(true, 1.3), None);
    assert_eq!(jump.state, JumpState::Jumping);

    assert_eq!(jump.advance(false, 1.5), Some(JumpState::InFlight));
    assert_eq!(jump.advance(true, 1.52), Some(JumpState::Landed));
}

#[test]
fn test_press_while_airborne_is_ignored() {
    let mut jump = JumpController::new(JumpTiming::Immediate);

    jump.press();
    assert_eq!(jump.advance(false, 0.0), None);
    assert_eq!(jump.state, JumpState::Grounded);

    // The request does not linger until touchdown
    assert_eq!(jump.advance(true, 0.02), None);
}

#[test]
fn test_take_off_speed_applied_on_jumping_tick() {
    let mut jump = JumpController::new(JumpTiming::Immediate).with_take_off_speed(7.0);
    let mut body = grounded_body();
    body.velocity = Vec2::new(3.5, 0.0);

    jump.press();
    jump.advance(true, 0.0);
    jump.apply_to(&mut body, 1.0);
    assert_eq!(body.velocity.y, 0.0);

    assert_eq!(jump.advance(true, 0.02), Some(JumpState::Jumping));
    jump.apply_to(&mut body, 1.0);

    assert_eq!(body.velocity.y, 7.0);
    assert_eq!(body.velocity.x, 3.5);
}

#[test]
fn test_jump_modifier_scales_take_off() {
    let mut jump = JumpController::new(JumpTiming::Immediate).with_take_off_speed(7.0);
    let mut body = grounded_body();

    jump.press();
    jump.advance(true, 0.0);
    jump.advance(true, 0.02);
    jump.apply_to(&mut body, 1.5);

    assert_eq!(body.velocity.y, 10.5);
}

#[test]
fn test_release_cuts_upward_velocity_once() {
    let mut jump = JumpController::new(JumpTiming::Immediate).with_deceleration(0.5);
    let mut body = KinematicBody::default();
    body.velocity.y = 6.0;

    jump.release();
    jump.apply_to(&mut body, 1.0);
    assert_eq!(body.velocity.y, 3.0);

    jump.apply_to(&mut body, 1.0);
    assert_eq!(body.velocity.y, 3.0);
}

#[test]
fn test_release_while_falling_is_consumed() {
    let mut jump = JumpController::new(JumpTiming::Immediate);
    let mut body = KinematicBody::default();
    body.velocity.y = -2.0;

    jump.release();
    jump.apply_to(&mut body, 1.0);
    assert_eq!(body.velocity.y, -2.0);

    body.velocity.y = 4.0;
    jump.apply_to(&mut body, 1.0);
    assert_eq!(body.velocity.y, 4.0);
}

#[test]
fn test_release_before_take_off_is_discarded() {
    let mut jump = JumpController::new(JumpTiming::Immediate).with_take_off_speed(7.0);
    let mut body = grounded_body();

    jump.press();
    jump.release();
    jump.advance(true, 0.0);
    jump.advance(true, 0.02);
    jump.apply_to(&mut body, 1.0);
    assert_eq!(body.velocity.y, 7.0);

    // Nothing pending: the next apply leaves the take-off alone
    jump.apply_to(&mut body, 1.0);
    assert_eq!(body.velocity.y, 7.0);
}

// -----------------------------------------------------------------------------
// Hazard detection tests
// -----------------------------------------------------------------------------

fn blocked_pass() -> MovementPass {
    MovementPass {
        intended: Vec2::new(0.5, 0.0),
        start: Vec2::new(0.9, 0.5),
        end: Vec2::new(0.99, 0.5),
    }
}

#[test]
fn test_hazard_cooldown_spaces_damage() {
    let ids = colliders(1);
    let world = PlaneWorld::default().with_plane(Vec2::new(1.0, 0.0), Vec2::NEG_X, ids[0]);
    let settings = HazardSettings::default();
    let mut cooldown = HazardCooldown::new(2.0);
    let is_hazard = |entity: Entity| entity == ids[0];

    let hits: Vec<bool> = [0.0, 1.9, 2.1]
        .into_iter()
        .map(|now| {
            detect_hazard(
                &blocked_pass(),
                &world,
                is_hazard,
                &mut cooldown,
                &settings,
                0.01,
                now,
            )
            .is_some()
        })
        .collect();

    assert_eq!(hits, vec![true, false, true]);
}

#[test]
fn test_hazard_reports_collider_and_damage() {
    let ids = colliders(1);
    let world = PlaneWorld::default().with_plane(Vec2::new(1.0, 0.0), Vec2::NEG_X, ids[0]);
    let settings = HazardSettings {
        damage: 25.0,
        ..default()
    };
    let mut cooldown = HazardCooldown::default();

    let hit = detect_hazard(
        &blocked_pass(),
        &world,
        |entity| entity == ids[0],
        &mut cooldown,
        &settings,
        0.01,
        0.0,
    );

    assert_eq!(hit.map(|h| (h.collider, h.damage)), Some((ids[0], 25.0)));
}

#[test]
fn test_non_hazard_surface_does_no_damage() {
    let ids = colliders(1);
    let world = PlaneWorld::default().with_plane(Vec2::new(1.0, 0.0), Vec2::NEG_X, ids[0]);
    let mut cooldown = HazardCooldown::default();

    let hit = detect_hazard(
        &blocked_pass(),
        &world,
        |_| false,
        &mut cooldown,
        &HazardSettings::default(),
        0.01,
        0.0,
    );

    assert!(hit.is_none());
    // A miss must not start the cooldown
    assert!(cooldown.is_ready(0.0));
}

#[test]
fn test_unblocked_pass_skips_hazard_query() {
    let ids = colliders(1);
    let world = PlaneWorld::default().with_plane(Vec2::new(10.0, 0.0), Vec2::NEG_X, ids[0]);
    let mut cooldown = HazardCooldown::default();
    let pass = MovementPass {
        intended: Vec2::new(0.5, 0.0),
        start: Vec2::ZERO,
        end: Vec2::new(0.45, 0.0),
    };

    let hit = detect_hazard(
        &pass,
        &world,
        |_| true,
        &mut cooldown,
        &HazardSettings::default(),
        0.01,
        0.0,
    );

    assert!(hit.is_none());
    assert_eq!(world.casts.get(), 0);
}

#[test]
fn test_hazard_found_after_integrated_wall_hit() {
    let ids = colliders(2);
    let world = PlaneWorld::default()
        .with_plane(Vec2::ZERO, Vec2::Y, ids[0])
        .with_plane(Vec2::new(1.0, 0.0), Vec2::NEG_X, ids[1]);
    let integrator = Integrator::default();
    let mut cooldown = HazardCooldown::default();

    let mut body = KinematicBody::default();
    body.target_velocity.x = 7.0;
    let mut position = Vec2::new(0.9, 0.01);

    let outcome = integrator.step(&mut body, &mut position, &world, Vec2::ZERO, 0.1);
    let hit = outcome.passes().iter().find_map(|pass| {
        detect_hazard(
            pass,
            &world,
            |entity| entity == ids[1],
            &mut cooldown,
            &HazardSettings::default(),
            integrator.shell_radius,
            0.0,
        )
    });

    assert_eq!(hit.map(|h| h.collider), Some(ids[1]));
}

#[test]
fn test_cooldown_reset_allows_immediate_hit() {
    let mut cooldown = HazardCooldown::new(2.0);
    cooldown.trigger(10.0);
    assert!(!cooldown.is_ready(10.5));

    cooldown.reset();
    assert!(cooldown.is_ready(10.5));
}

// -----------------------------------------------------------------------------
// Velocity policy tests
// -----------------------------------------------------------------------------

#[test]
fn test_endless_drive_bias() {
    assert_eq!(RunnerPolicy::endless_drive(false, false), 1.0);
    assert!((RunnerPolicy::endless_drive(true, false) - 0.3).abs() < 1e-6);
    assert!((RunnerPolicy::endless_drive(false, true) - 1.3).abs() < 1e-6);
    assert!((RunnerPolicy::endless_drive(true, true) - 0.6).abs() < 1e-6);
}

#[test]
fn test_runner_target_carries_vertical_velocity() {
    let mut policy = RunnerPolicy::new(7.0, DriveMode::Endless);
    policy.set_drive(1.0);
    let mut body = KinematicBody::default();
    body.velocity.y = -3.0;

    assert_eq!(policy.target_velocity(&body), Vec2::new(7.0, -3.0));
}

#[test]
fn test_stopped_runner_ignores_drive() {
    let mut policy = RunnerPolicy::new(7.0, DriveMode::Endless);
    policy.set_drive(1.3);
    policy.stop();
    policy.set_drive(1.3);

    assert!(!policy.control_enabled);
    assert_eq!(policy.target_velocity(&KinematicBody::default()).x, 0.0);

    policy.enable_control();
    policy.set_drive(0.5);
    assert_eq!(policy.target_velocity(&KinematicBody::default()).x, 3.5);
}

#[test]
fn test_cop_moves_at_constant_speed_until_stopped() {
    let mut cop = CopPolicy::new(6.0);
    let mut body = KinematicBody::default();
    body.velocity = Vec2::new(-1.0, 2.0);

    assert_eq!(cop.target_velocity(&body), Vec2::new(6.0, 2.0));

    cop.stop();
    assert_eq!(cop.target_velocity(&body), Vec2::new(0.0, 2.0));
}
