//! Damage application: contact damage, death handling.

use bevy::prelude::*;
use crate::combat::{DamageDealt, DamageSource, EntityDied, MeleeWeapon, SimClock};
use crate::components::{BodyBounds, Character, Damageable, EnemyRoster, Health, Player};
use crate::shared::planar;

/// Записать DamageDealt (+ EntityDied если удар смертельный) и залогировать
pub fn report_damage(
    hit: DamageDealt,
    damage_events: &mut EventWriter<DamageDealt>,
    death_events: &mut EventWriter<EntityDied>,
) {
    crate::logger::log(&format!(
        "💥 {:?} hit {:?} for {} ({:?})",
        hit.attacker, hit.target, hit.damage, hit.source
    ));

    if hit.target_died {
        crate::logger::log_info(&format!(
            "☠️ Entity {:?} killed by {:?}",
            hit.target, hit.attacker
        ));
        death_events.write(EntityDied {
            entity: hit.target,
            killer: Some(hit.attacker),
        });
    }

    damage_events.write(hit);
}

/// Применить урон к Health и сообщить о нём
///
/// Returns false если цель уже мертва (урон не применён).
pub fn apply_damage(
    attacker: Entity,
    target: Entity,
    health: &mut Health,
    damage: f32,
    source: DamageSource,
    damage_events: &mut EventWriter<DamageDealt>,
    death_events: &mut EventWriter<EntityDied>,
) -> bool {
    if !health.is_alive() {
        return false;
    }

    let target_died = health.take_damage(damage);
    report_damage(
        DamageDealt {
            attacker,
            target,
            damage,
            source,
            target_died,
        },
        damage_events,
        death_events,
    );
    true
}

/// System: непрерывный контактный урон от melee врагов
///
/// Каждый живой враг с MeleeWeapon, пересекающий живого игрока и готовый по cooldown,
/// наносит урон своего оружия. Зависит от tick rate (в отличие от swing).
pub fn resolve_contact_damage(
    clock: Res<SimClock>,
    roster: Res<EnemyRoster>,
    mut players: Query<(Entity, &Transform, &BodyBounds, &mut Health), With<Player>>,
    mut enemies: Query<(&Transform, &BodyBounds, &Health, &mut MeleeWeapon), (With<Character>, Without<Player>)>,
    mut damage_events: EventWriter<DamageDealt>,
    mut death_events: EventWriter<EntityDied>,
) {
    let Ok((player, player_transform, player_bounds, mut player_health)) = players.single_mut() else {
        return;
    };
    let player_box = player_bounds.at(planar(player_transform));
    let now = clock.now();

    for enemy in roster.iter() {
        if !player_health.is_alive() {
            break;
        }

        let Ok((transform, bounds, health, mut weapon)) = enemies.get_mut(enemy) else {
            continue;
        };
        if !health.is_alive() || !bounds.at(planar(transform)).overlaps(&player_box) {
            continue;
        }

        if let Some(damage) = weapon.try_contact(now) {
            apply_damage(
                enemy,
                player,
                &mut player_health,
                damage,
                DamageSource::Contact,
                &mut damage_events,
                &mut death_events,
            );
        }
    }
}

/// System: деспавн мёртвых врагов + чистка roster
///
/// Мёртвый враг удаляется в том же тике, в котором health дошёл до 0.
/// Игрок не деспавнится — его смерть обрабатывает reset уровня.
pub fn despawn_dead_enemies(
    mut commands: Commands,
    mut roster: ResMut<EnemyRoster>,
    enemies: Query<&Health, (With<Character>, Without<Player>)>,
) {
    roster.retain(|&enemy| match enemies.get(enemy) {
        Ok(health) if health.is_alive() => true,
        Ok(_) => {
            crate::logger::log(&format!("⚰️ Despawning dead enemy {:?}", enemy));
            commands.entity(enemy).despawn();
            false
        }
        Err(_) => false,
    });
}
