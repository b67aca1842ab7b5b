//! Tests for contact damage + despawn.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use crate::combat::{
        step, CombatPlugin, DamageDealt, DamageSource, EntityDied, MeleeWeapon, RangedWeapon,
    };
    use crate::components::{Character, EnemyRoster, Health, Player};

    fn combat_app() -> App {
        let mut app = App::new();
        app.add_plugins(CombatPlugin);
        app
    }

    fn spawn_blade_enemy(world: &mut World, position: Vec2) -> Entity {
        let enemy = world
            .spawn((
                Character,
                Transform::from_translation(position.extend(0.0)),
                Health::new(60.0),
                MeleeWeapon::enemy_blade(),
            ))
            .id();
        world.resource_mut::<EnemyRoster>().push(enemy);
        enemy
    }

    fn drain_damage(world: &mut World) -> Vec<DamageDealt> {
        world.resource_mut::<Events<DamageDealt>>().drain().collect()
    }

    #[test]
    fn test_contact_damage_respects_cooldown() {
        let mut app = combat_app();
        let world = app.world_mut();

        let player = world.spawn((Player, Transform::default())).id();
        let enemy = spawn_blade_enemy(world, Vec2::new(10.0, 0.0));

        // Тики на t = 0, 1, 2, 3 (3.5 сек контакта), cooldown 1.0
        for _ in 0..4 {
            step(world, 1.0);
        }

        let events = drain_damage(world);
        assert_eq!(events.len(), 4);
        assert!(events.iter().all(|e| e.source == DamageSource::Contact && e.attacker == enemy));
        assert_eq!(world.get::<Health>(player).unwrap().current, 100.0 - 4.0 * 18.0);
    }

    #[test]
    fn test_contact_damage_at_frame_rate() {
        let mut app = combat_app();
        let world = app.world_mut();

        world.spawn((Player, Transform::default()));
        spawn_blade_enemy(world, Vec2::new(10.0, 0.0));

        // 60 тиков по 1/60 ≈ 1 секунда → удар на t=0 и на t≈1.0 не раньше
        for _ in 0..60 {
            step(world, 1.0 / 60.0);
        }

        let events = drain_damage(world);
        assert!(events.len() <= 2);
        assert!(!events.is_empty());
    }

    #[test]
    fn test_no_contact_without_overlap() {
        let mut app = combat_app();
        let world = app.world_mut();

        let player = world.spawn((Player, Transform::default())).id();
        // Тела 32 шириной: касание краёв (x = 32) не пересечение
        spawn_blade_enemy(world, Vec2::new(32.0, 0.0));

        step(world, 1.0);

        assert_eq!(world.get::<Health>(player).unwrap().current, 100.0);
        assert!(drain_damage(world).is_empty());
    }

    #[test]
    fn test_ranged_only_enemy_has_no_contact_damage() {
        let mut app = combat_app();
        let world = app.world_mut();

        let player = world.spawn((Player, Transform::default())).id();
        let archer = world
            .spawn((Character, Transform::default(), Health::new(40.0), RangedWeapon::archer_bow()))
            .id();
        world.resource_mut::<EnemyRoster>().push(archer);

        step(world, 1.0);

        assert_eq!(world.get::<Health>(player).unwrap().current, 100.0);
    }

    #[test]
    fn test_contact_kill_reports_death() {
        let mut app = combat_app();
        let world = app.world_mut();

        let player = world
            .spawn((Player, Transform::default(), Health::with_current(100.0, 10.0)))
            .id();
        let first = spawn_blade_enemy(world, Vec2::new(5.0, 0.0));
        let second = spawn_blade_enemy(world, Vec2::new(-5.0, 0.0));

        step(world, 1.0);

        // Первый враг убил игрока — второй уже не бьёт
        let events = drain_damage(world);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].attacker, first);
        assert!(events[0].target_died);
        assert_ne!(events[0].attacker, second);

        let deaths: Vec<EntityDied> = world.resource_mut::<Events<EntityDied>>().drain().collect();
        assert_eq!(deaths.len(), 1);
        assert_eq!(deaths[0].entity, player);
        assert_eq!(deaths[0].killer, Some(first));

        // Игрок не деспавнится
        assert!(world.get_entity(player).is_ok());
    }

    #[test]
    fn test_despawn_dead_enemies_prunes_roster() {
        let mut app = combat_app();
        let world = app.world_mut();

        world.spawn((Player, Transform::from_xyz(-500.0, 0.0, 0.0)));
        let dead = spawn_blade_enemy(world, Vec2::new(100.0, 0.0));
        let alive = spawn_blade_enemy(world, Vec2::new(200.0, 0.0));
        world.get_mut::<Health>(dead).unwrap().current = 0.0;

        step(world, 1.0);

        assert!(world.get_entity(dead).is_err());
        let roster: Vec<Entity> = world.resource::<EnemyRoster>().iter().collect();
        assert_eq!(roster, vec![alive]);
    }
}
