//! Determinism tests: одинаковый seed → одинаковый результат симуляции

use bevy::prelude::*;
use dungeon_simulation::{
    create_headless_app, load_level, step, world_snapshot, DeterministicRng, EnemyRoster,
    LevelLayout, PlayerInput, SimulationPlugin,
};

/// Прогоняет `ticks` тиков скриптованного боя и возвращает bincode snapshot
fn run_simulation(seed: u64, ticks: u32) -> Vec<u8> {
    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin);

    let world = app.world_mut();
    let layout = {
        let mut rng = world.resource_mut::<DeterministicRng>();
        LevelLayout::generate(&mut rng.rng, 4)
    };
    world.insert_resource(layout);
    load_level(world);

    for tick in 0..ticks {
        let target = world
            .resource::<EnemyRoster>()
            .iter()
            .next()
            .and_then(|enemy| world.get::<Transform>(enemy))
            .map(|transform| transform.translation.truncate());

        {
            let mut input = world.resource_mut::<PlayerInput>();
            input.right = tick % 120 < 60;
            input.melee = tick % 30 == 0;
            input.fire_at = target;
        }

        step(world, 1.0 / 60.0);
    }

    world_snapshot(world).expect("snapshot encodes")
}

#[test]
fn test_same_seed_same_snapshot() {
    let a = run_simulation(42, 300);
    let b = run_simulation(42, 300);

    assert!(!a.is_empty());
    assert_eq!(a, b, "Одинаковый seed должен давать одинаковый snapshot");
}

#[test]
fn test_layout_depends_on_seed() {
    let mut first = create_headless_app(1);
    let mut second = create_headless_app(2);

    let a = LevelLayout::generate(&mut first.world_mut().resource_mut::<DeterministicRng>().rng, 4);
    let b = LevelLayout::generate(&mut second.world_mut().resource_mut::<DeterministicRng>().rng, 4);

    assert_ne!(a, b);
}
