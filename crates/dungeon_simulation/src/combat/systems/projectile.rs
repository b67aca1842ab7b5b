//! Projectile systems: движение + разрешение попаданий.

use bevy::prelude::*;
use crate::combat::systems::apply_damage;
use crate::combat::{
    ActiveProjectiles, DamageDealt, DamageSource, EntityDied, Projectile, ProjectileStep, SimClock, Team,
};
use crate::components::{BodyBounds, Character, Damageable, EnemyRoster, Health, Player, SolidObstacles};
use crate::shared::planar;

/// System: движение, lifetime и стены для всех активных projectiles
///
/// Истёкшие и врезавшиеся в стену удаляются ДО проверки урона.
pub fn advance_projectiles(
    clock: Res<SimClock>,
    obstacles: Res<SolidObstacles>,
    mut projectiles: ResMut<ActiveProjectiles>,
) {
    let delta = clock.delta();

    projectiles.retain_mut(|projectile| match projectile.advance(delta, obstacles.as_slice()) {
        ProjectileStep::Flying => true,
        ProjectileStep::Expired => false,
        ProjectileStep::HitObstacle => {
            crate::logger::log(&format!(
                "🧱 Projectile from {:?} hit obstacle at {:?}",
                projectile.shooter, projectile.position
            ));
            false
        }
    });
}

/// System: попадания projectiles в персонажей
///
/// - Projectile игрока: урон ПЕРВОМУ живому пересечённому врагу в порядке roster
///   (не ближайшему), затем удаляется
/// - Projectile врага: урон игроку если жив и пересекается, затем удаляется
/// - Никого не задел — летит дальше
pub fn resolve_projectile_hits(
    roster: Res<EnemyRoster>,
    mut projectiles: ResMut<ActiveProjectiles>,
    mut players: Query<(Entity, &Transform, &BodyBounds, &mut Health), With<Player>>,
    mut enemies: Query<(&Transform, &BodyBounds, &mut Health), (With<Character>, Without<Player>)>,
    mut damage_events: EventWriter<DamageDealt>,
    mut death_events: EventWriter<EntityDied>,
) {
    projectiles.retain_mut(|projectile| {
        let hit = match projectile.team {
            Team::Player => first_enemy_hit(projectile, &roster, &mut enemies),
            Team::Enemy => player_hit(projectile, &mut players),
        };

        let Some((target, mut health)) = hit else {
            return true;
        };

        apply_damage(
            projectile.shooter,
            target,
            &mut health,
            projectile.damage,
            DamageSource::Ranged,
            &mut damage_events,
            &mut death_events,
        );
        false
    });
}

fn first_enemy_hit<'a>(
    projectile: &Projectile,
    roster: &EnemyRoster,
    enemies: &'a mut Query<(&Transform, &BodyBounds, &mut Health), (With<Character>, Without<Player>)>,
) -> Option<(Entity, Mut<'a, Health>)> {
    let bounds = projectile.bounds();

    let target = roster.iter().find(|&enemy| {
        enemies.get(enemy).is_ok_and(|(transform, body, health)| {
            health.is_alive() && body.at(planar(transform)).overlaps(&bounds)
        })
    })?;

    let (_, _, health) = enemies.get_mut(target).ok()?;
    Some((target, health))
}

fn player_hit<'a>(
    projectile: &Projectile,
    players: &'a mut Query<(Entity, &Transform, &BodyBounds, &mut Health), With<Player>>,
) -> Option<(Entity, Mut<'a, Health>)> {
    let (player, transform, body, health) = players.single_mut().ok()?;

    if player == projectile.shooter || !health.is_alive() {
        return None;
    }
    if !body.at(planar(transform)).overlaps(&projectile.bounds()) {
        return None;
    }

    Some((player, health))
}
