//! Tests for player systems.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use crate::combat::{
        step, ActiveProjectiles, CombatPlugin, DamageDealt, DamageSource, MeleeWeapon, ProjectileFired,
        RangedWeapon,
    };
    use crate::components::{
        Character, EnemyRoster, Facing, Health, PlatformerBody, Player, Regeneration, Velocity,
    };
    use crate::player::{PlayerInput, PlayerPlugin};

    fn player_app() -> App {
        let mut app = App::new();
        app.add_plugins((CombatPlugin, PlayerPlugin));
        app
    }

    fn spawn_player(world: &mut World) -> Entity {
        world
            .spawn((
                Player,
                Transform::default(),
                MeleeWeapon::player_sword(),
                RangedWeapon::player_bow(),
            ))
            .id()
    }

    fn spawn_enemy(world: &mut World, position: Vec2) -> Entity {
        let enemy = world
            .spawn((Character, Transform::from_translation(position.extend(0.0)), Health::new(60.0)))
            .id();
        world.resource_mut::<EnemyRoster>().push(enemy);
        enemy
    }

    fn input(world: &mut World) -> Mut<'_, PlayerInput> {
        world.resource_mut::<PlayerInput>()
    }

    #[test]
    fn test_horizontal_movement_and_facing() {
        let mut app = player_app();
        let world = app.world_mut();
        let player = spawn_player(world);

        input(world).left = true;
        step(world, 1.0 / 60.0);

        assert_eq!(world.get::<Velocity>(player).unwrap().0.x, -5.0);
        assert_eq!(*world.get::<Facing>(player).unwrap(), Facing::Left);

        // Отпустили — стоим, facing сохраняется
        input(world).left = false;
        step(world, 1.0 / 60.0);

        assert_eq!(world.get::<Velocity>(player).unwrap().0.x, 0.0);
        assert_eq!(*world.get::<Facing>(player).unwrap(), Facing::Left);
    }

    #[test]
    fn test_left_wins_when_both_held() {
        let mut app = player_app();
        let world = app.world_mut();
        let player = spawn_player(world);

        {
            let mut input = input(world);
            input.left = true;
            input.right = true;
        }
        step(world, 1.0 / 60.0);

        assert_eq!(world.get::<Velocity>(player).unwrap().0.x, -5.0);
        assert_eq!(*world.get::<Facing>(player).unwrap(), Facing::Left);
    }

    #[test]
    fn test_jump_requires_can_jump() {
        let mut app = player_app();
        let world = app.world_mut();
        let player = spawn_player(world);

        input(world).jump = true;
        step(world, 1.0 / 60.0);
        assert_eq!(world.get::<Velocity>(player).unwrap().0.y, 0.0);

        world.get_mut::<PlatformerBody>(player).unwrap().can_jump = true;
        step(world, 1.0 / 60.0);
        assert_eq!(world.get::<Velocity>(player).unwrap().0.y, 15.0);
    }

    #[test]
    fn test_ladder_climbing() {
        let mut app = player_app();
        let world = app.world_mut();
        let player = spawn_player(world);

        world.get_mut::<Velocity>(player).unwrap().0.y = -7.0;
        world.get_mut::<PlatformerBody>(player).unwrap().on_ladder = true;

        // На лестнице без up/down — vy сброшен
        step(world, 1.0 / 60.0);
        assert_eq!(world.get::<Velocity>(player).unwrap().0.y, 0.0);

        input(world).up = true;
        step(world, 1.0 / 60.0);
        assert_eq!(world.get::<Velocity>(player).unwrap().0.y, 5.0);
    }

    #[test]
    fn test_swing_hits_enemy_in_front() {
        let mut app = player_app();
        let world = app.world_mut();
        spawn_player(world);
        let front = spawn_enemy(world, Vec2::new(50.0, 0.0));
        let behind = spawn_enemy(world, Vec2::new(-50.0, 0.0));

        input(world).melee = true;
        step(world, 1.0 / 60.0);

        assert_eq!(world.get::<Health>(front).unwrap().current, 35.0);
        assert_eq!(world.get::<Health>(behind).unwrap().current, 60.0);
        assert!(!world.resource::<PlayerInput>().melee);

        let events: Vec<DamageDealt> = world.resource_mut::<Events<DamageDealt>>().drain().collect();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].source, DamageSource::Melee);
        assert_eq!(events[0].damage, 25.0);
    }

    #[test]
    fn test_fire_at_creates_projectile() {
        let mut app = player_app();
        let world = app.world_mut();
        let player = spawn_player(world);

        input(world).fire_at = Some(Vec2::new(100.0, 0.0));
        step(world, 1.0 / 60.0);

        assert_eq!(world.resource::<ActiveProjectiles>().len(), 1);
        assert_eq!(world.resource::<PlayerInput>().fire_at, None);

        let fired: Vec<ProjectileFired> = world.resource_mut::<Events<ProjectileFired>>().drain().collect();
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].shooter, player);
        assert_eq!(fired[0].damage, 12.0);
    }

    #[test]
    fn test_charged_shot() {
        let mut app = player_app();
        let world = app.world_mut();
        spawn_player(world);

        {
            let mut input = input(world);
            input.charge_held = true;
            input.aim = Vec2::new(500.0, 0.0);
        }
        // Зарядка 0.6 из 1.2 сек → ratio 0.5
        step(world, 0.3);
        step(world, 0.3);
        assert!(world.resource::<ActiveProjectiles>().is_empty());

        input(world).charge_held = false;
        step(world, 1.0 / 60.0);

        let projectiles = world.resource::<ActiveProjectiles>();
        assert_eq!(projectiles.len(), 1);
        let damage = projectiles.iter().next().unwrap().damage;
        assert!((damage - 24.0).abs() < 1e-3);
    }

    #[test]
    fn test_dead_player_cannot_attack() {
        let mut app = player_app();
        let world = app.world_mut();
        let player = spawn_player(world);
        world.get_mut::<Health>(player).unwrap().current = 0.0;
        let enemy = spawn_enemy(world, Vec2::new(50.0, 0.0));

        {
            let mut input = input(world);
            input.melee = true;
            input.fire_at = Some(Vec2::new(100.0, 0.0));
        }
        step(world, 1.0 / 60.0);

        assert_eq!(world.get::<Health>(enemy).unwrap().current, 60.0);
        assert!(world.resource::<ActiveProjectiles>().is_empty());
        assert_eq!(*world.resource::<PlayerInput>(), PlayerInput::default());
    }

    #[test]
    fn test_regeneration() {
        let mut app = player_app();
        let world = app.world_mut();
        let player = world
            .spawn((Player, Transform::default(), Health::with_current(100.0, 50.0), Regeneration::default()))
            .id();

        for _ in 0..10 {
            step(world, 2.0);
        }

        assert_eq!(world.get::<Health>(player).unwrap().current, 60.0);
    }
}
