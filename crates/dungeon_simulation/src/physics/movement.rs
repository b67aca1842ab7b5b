//! Интеграция velocity → Transform для headless режима

use bevy::prelude::*;
use crate::combat::{CombatTick, SimClock, TickSet};
use crate::components::{Character, Velocity};

/// Система интеграции velocity → Transform (headless режим)
///
/// position += velocity * dt. Хост с настоящей platformer physics
/// заменяет `MotionPlugin` своим шагом.
pub fn integrate_velocity_to_transform(
    clock: Res<SimClock>,
    mut query: Query<(&Velocity, &mut Transform), With<Character>>,
) {
    let delta = clock.delta();

    for (velocity, mut transform) in query.iter_mut() {
        transform.translation += velocity.0.extend(0.0) * delta;
    }
}

/// Plugin для headless движения
///
/// Регистрирует интеграцию в фазе `TickSet::Motion` (после AI и player input).
pub struct MotionPlugin;

impl Plugin for MotionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            CombatTick,
            integrate_velocity_to_transform.in_set(TickSet::Motion),
        );
    }
}
