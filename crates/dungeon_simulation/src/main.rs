//! Headless симуляция арены
//!
//! Процедурный уровень из seed, скриптованный игрок (идёт вправо, стреляет в ближайшего врага).

use bevy::prelude::*;
use dungeon_simulation::logger::{log_info, log_warning};
use dungeon_simulation::{
    create_headless_app, load_level, step, world_snapshot, DeterministicRng, EnemyRoster,
    LevelLayout, Player, PlayerInput, SimulationPlugin,
};

const TICKS: u32 = 1000;
const DELTA: f32 = 1.0 / 60.0;

fn nearest_enemy(world: &mut World) -> Option<Vec2> {
    let player = world
        .query_filtered::<&Transform, With<Player>>()
        .iter(world)
        .next()?
        .translation
        .truncate();

    let enemies: Vec<Entity> = world.resource::<EnemyRoster>().iter().collect();
    enemies
        .into_iter()
        .filter_map(|enemy| world.get::<Transform>(enemy).map(|t| t.translation.truncate()))
        .min_by(|a, b| a.distance(player).total_cmp(&b.distance(player)))
}

fn main() {
    let seed = 42;
    let mut app = create_headless_app(seed);
    log_info(&format!("Starting dungeon headless simulation (seed: {})", seed));

    app.add_plugins(SimulationPlugin);

    let world = app.world_mut();
    let layout = {
        let mut rng = world.resource_mut::<DeterministicRng>();
        LevelLayout::generate(&mut rng.rng, 4)
    };
    world.insert_resource(layout);
    load_level(world);

    for tick in 0..TICKS {
        let target = nearest_enemy(world);
        {
            let mut input = world.resource_mut::<PlayerInput>();
            input.right = true;
            input.fire_at = target;
        }

        step(world, DELTA);

        if tick % 100 == 0 {
            log_info(&format!(
                "Tick {}: {} entities, {} enemies",
                tick,
                world.entities().len(),
                world.resource::<EnemyRoster>().len()
            ));
        }
    }

    match world_snapshot(world) {
        Ok(bytes) => log_info(&format!("Simulation complete! Snapshot: {} bytes", bytes.len())),
        Err(error) => log_warning(&format!("Snapshot encoding failed: {}", error)),
    }
}
