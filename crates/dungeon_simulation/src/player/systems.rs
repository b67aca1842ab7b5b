//! Player systems: input → motion, атаки, регенерация.

use bevy::prelude::*;
use crate::combat::systems::report_damage;
use crate::combat::{
    ActiveProjectiles, DamageDealt, DamageSource, EntityDied, MeleeWeapon, ProjectileFired,
    RangedWeapon, SimClock, Team, Wielder,
};
use crate::components::{
    BodyBounds, Character, Damageable, Facing, Health, PlatformerBody, Player, PlayerTuning,
    Regeneration, Velocity,
};
use crate::player::PlayerInput;
use crate::shared::planar;

/// Система: input → velocity + facing
///
/// - Горизонталь: movement_speed по left/right
/// - Лестница: vy сбрасывается и управляется up/down
/// - Прыжок: только если physics слой разрешил (can_jump)
pub fn apply_player_input(
    input: Res<PlayerInput>,
    mut players: Query<(&PlayerTuning, &PlatformerBody, &Health, &mut Velocity, &mut Facing), With<Player>>,
) {
    for (tuning, body, health, mut velocity, mut facing) in players.iter_mut() {
        if !health.is_alive() {
            velocity.0 = Vec2::ZERO;
            continue;
        }

        velocity.0.x = input.horizontal() * tuning.movement_speed;

        if body.on_ladder {
            velocity.0.y = input.vertical() * tuning.climb_speed;
        } else if input.jump && body.can_jump {
            velocity.0.y = tuning.jump_speed;
        }

        if let Some(direction) = Facing::from_direction(velocity.0.x) {
            *facing = direction;
        }
    }
}

/// Система: атаки игрока (swing, выстрел, charged shot)
///
/// Мёртвый игрок не атакует. One-shot действия сбрасываются в любом случае.
pub fn player_attacks(
    clock: Res<SimClock>,
    mut input: ResMut<PlayerInput>,
    mut players: Query<
        (
            Entity,
            &Transform,
            &Velocity,
            &Facing,
            &Health,
            Option<&mut MeleeWeapon>,
            Option<&mut RangedWeapon>,
        ),
        With<Player>,
    >,
    mut targets: Query<(Entity, &Transform, &BodyBounds, &mut Health), (With<Character>, Without<Player>)>,
    mut projectiles: ResMut<ActiveProjectiles>,
    mut damage_events: EventWriter<DamageDealt>,
    mut death_events: EventWriter<EntityDied>,
    mut fired_events: EventWriter<ProjectileFired>,
) {
    let now = clock.now();

    let Ok((entity, transform, velocity, facing, health, melee, ranged)) = players.single_mut() else {
        input.consume_actions();
        return;
    };

    if !health.is_alive() {
        input.consume_actions();
        return;
    }

    let wielder = Wielder {
        entity,
        team: Team::Player,
        position: planar(transform),
        velocity: velocity.0,
        facing: *facing,
    };

    // Swing: урон всем пересечённым врагам
    if let Some(mut sword) = melee.filter(|_| input.melee) {
        let candidates = targets
            .iter_mut()
            .map(|(target, transform, bounds, health)| (target, bounds.at(planar(transform)), health.into_inner()));

        if let Some(hits) = sword.attack(&wielder, candidates, now) {
            crate::logger::log(&format!("⚔️ Player swing: {} hit(s)", hits.len()));
            for hit in hits {
                report_damage(
                    DamageDealt {
                        attacker: entity,
                        target: hit.target,
                        damage: sword.damage,
                        source: DamageSource::Melee,
                        target_died: hit.killed,
                    },
                    &mut damage_events,
                    &mut death_events,
                );
            }
        }
    }

    if let Some(mut bow) = ranged {
        let mut fired_damage = None;

        // Обычный выстрел
        if let Some(target) = input.fire_at {
            if bow.attack(&wielder, target, now, &mut projectiles) {
                fired_damage = Some(bow.damage);
            }
        }

        // Charged shot: press → накопление → release
        if input.charge_held && !bow.is_charging() {
            bow.begin_charge();
        } else if !input.charge_held && bow.is_charging() {
            let damage = bow.charge.map_or(bow.damage, |charge| charge.damage());
            if bow.release_charge(&wielder, input.aim, now, &mut projectiles) {
                fired_damage = Some(damage);
            }
        }
        bow.tick_charge(clock.delta());

        if let Some(damage) = fired_damage {
            crate::logger::log(&format!("🏹 Player fired ({} dmg)", damage));
            fired_events.write(ProjectileFired {
                shooter: entity,
                team: Team::Player,
                damage,
                origin: wielder.position,
            });
        }
    }

    input.consume_actions();
}

/// Система: пассивная регенерация здоровья
pub fn regenerate_health(clock: Res<SimClock>, mut query: Query<(&Regeneration, &mut Health)>) {
    let delta = clock.delta();

    for (regeneration, mut health) in query.iter_mut() {
        health.regenerate(regeneration.per_second, delta);
    }
}
