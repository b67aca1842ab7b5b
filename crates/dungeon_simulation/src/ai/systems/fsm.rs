//! FSM AI systems: transitions, movement, archer attacks.

use bevy::prelude::*;
use crate::ai::{has_line_of_sight, AIConfig, AIState, EnemyKind};
use crate::combat::{ActiveProjectiles, ProjectileFired, RangedWeapon, SimClock, Team, Wielder};
use crate::components::{Damageable, Facing, Health, Player, SolidObstacles, Velocity};
use crate::shared::planar;

/// Новое состояние врага
///
/// Engaged только если игрок жив, в aggro range И видим (LOS считается только внутри range).
pub fn evaluate_state(
    config: &AIConfig,
    position: Vec2,
    player: Option<Vec2>,
    obstacles: &[crate::shared::Aabb],
) -> AIState {
    let Some(player) = player else {
        return AIState::Idle;
    };

    if position.distance(player) > config.aggro_range {
        return AIState::Idle;
    }

    if !has_line_of_sight(position, player, obstacles, &config.sight) {
        return AIState::Idle;
    }

    config.engaged_state()
}

/// Позиция живого игрока (None если игрока нет или он мёртв)
fn living_player(players: &Query<(&Transform, &Health), With<Player>>) -> Option<Vec2> {
    let (transform, health) = players.single().ok()?;
    health.is_alive().then(|| planar(transform))
}

/// Система: FSM transitions
///
/// Idle ↔ Pursuing/Engaging по дистанции до игрока и line-of-sight.
pub fn ai_fsm_transitions(
    mut ai_query: Query<(Entity, &Transform, &AIConfig, &Health, &mut AIState), Without<Player>>,
    players: Query<(&Transform, &Health), With<Player>>,
    obstacles: Res<SolidObstacles>,
) {
    let player = living_player(&players);

    for (entity, transform, config, health, mut state) in ai_query.iter_mut() {
        let new_state = if health.is_alive() {
            evaluate_state(config, planar(transform), player, obstacles.as_slice())
        } else {
            AIState::Idle
        };

        if *state != new_state {
            crate::logger::log(&format!(
                "🧠 {:?} ({:?}): {:?} → {:?}",
                entity, config.kind, *state, new_state
            ));
            *state = new_state;
        }
    }
}

/// Система: AI movement от FSM state
///
/// Idle → vx = 0. Engaged → vx = speed * sign(playerX - selfX), facing к игроку.
/// Лучник с hold distance стоит на месте, если уже достаточно близко.
pub fn ai_movement_from_state(
    mut ai_query: Query<(&Transform, &AIConfig, &AIState, &mut Velocity, &mut Facing), Without<Player>>,
    players: Query<(&Transform, &Health), With<Player>>,
) {
    let player = living_player(&players);

    for (transform, config, state, mut velocity, mut facing) in ai_query.iter_mut() {
        let position = planar(transform);

        let target = match (state, player) {
            (AIState::Pursuing | AIState::Engaging, Some(target)) => target,
            _ => {
                velocity.0.x = 0.0;
                continue;
            }
        };

        *facing = Facing::toward(position.x, target.x);

        let holding = config
            .hold_distance
            .is_some_and(|hold| position.distance(target) <= hold);

        velocity.0.x = if holding {
            0.0
        } else {
            config.speed * facing.sign()
        };
    }
}

/// Система: выстрелы лучников
///
/// Лучник в Engaging стреляет в игрока, если distance > min_safe_distance
/// И оружие не на cooldown (обе проверки независимы).
pub fn ai_attack_execution(
    clock: Res<SimClock>,
    mut ai_query: Query<
        (Entity, &Transform, &Velocity, &Facing, &AIConfig, &AIState, &mut RangedWeapon),
        Without<Player>,
    >,
    players: Query<(&Transform, &Health), With<Player>>,
    mut projectiles: ResMut<ActiveProjectiles>,
    mut fired_events: EventWriter<ProjectileFired>,
) {
    let Some(player) = living_player(&players) else {
        return;
    };
    let now = clock.now();

    for (entity, transform, velocity, facing, config, state, mut weapon) in ai_query.iter_mut() {
        if config.kind != EnemyKind::Archer || *state != AIState::Engaging {
            continue;
        }

        let position = planar(transform);
        if position.distance(player) <= config.min_safe_distance {
            continue;
        }

        let wielder = Wielder {
            entity,
            team: Team::Enemy,
            position,
            velocity: velocity.0,
            facing: *facing,
        };

        if weapon.attack(&wielder, player, now, &mut projectiles) {
            crate::logger::log(&format!("🏹 Archer {:?} fired at player", entity));
            fired_events.write(ProjectileFired {
                shooter: entity,
                team: Team::Enemy,
                damage: weapon.damage,
                origin: position,
            });
        }
    }
}
