//! Projectile — движущаяся, истекающая сущность с уроном
//!
//! Projectiles не entities: живут в `ActiveProjectiles` (simulation-owned коллекция),
//! куда пишут все стрелки и которую чистит resolution loop.

use bevy::prelude::*;
use crate::combat::components::Team;
use crate::shared::Aabb;

/// Стартовое время жизни projectile (секунды)
pub const PROJECTILE_LIFETIME: f32 = 4.0;

/// Скорости оружия подобраны под 60 fps: velocity * delta * 60
pub const PROJECTILE_REFERENCE_HZ: f32 = 60.0;

/// Размер collision box стрелы
pub const PROJECTILE_SIZE: Vec2 = Vec2::new(12.0, 6.0);

/// Итог одного шага projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileStep {
    /// Летит дальше (может попасть в персонажа)
    Flying,
    /// lifetime <= 0
    Expired,
    /// Врезался в стену
    HitObstacle,
}

#[derive(Debug, Clone, PartialEq, Reflect)]
pub struct Projectile {
    pub position: Vec2,

    /// Unit direction × speed (units per 1/60 sec)
    pub velocity: Vec2,

    pub damage: f32,

    /// Weak reference на стрелка: identity для атрибуции урона, не ownership
    pub shooter: Entity,

    /// Команда стрелка на момент выстрела
    pub team: Team,

    pub remaining_lifetime: f32,

    pub size: Vec2,
}

impl Projectile {
    pub fn new(position: Vec2, velocity: Vec2, damage: f32, shooter: Entity, team: Team) -> Self {
        Self {
            position,
            velocity,
            damage,
            shooter,
            team,
            remaining_lifetime: PROJECTILE_LIFETIME,
            size: PROJECTILE_SIZE,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_size(self.position, self.size)
    }

    /// Угол полёта (радианы) — только для рендера
    pub fn angle(&self) -> f32 {
        self.velocity.y.atan2(self.velocity.x)
    }

    /// Один тик: движение → lifetime → стены (до любой проверки урона)
    pub fn advance(&mut self, delta_time: f32, obstacles: &[Aabb]) -> ProjectileStep {
        self.position += self.velocity * delta_time * PROJECTILE_REFERENCE_HZ;

        self.remaining_lifetime -= delta_time;
        if self.remaining_lifetime <= 0.0 {
            return ProjectileStep::Expired;
        }

        if self.bounds().overlaps_any(obstacles) {
            return ProjectileStep::HitObstacle;
        }

        ProjectileStep::Flying
    }
}

/// Активные projectiles (общие для всех стрелков)
///
/// Порядок = порядок выстрелов. Мутируется только внутри тика.
#[derive(Resource, Debug, Default, Clone)]
pub struct ActiveProjectiles {
    projectiles: Vec<Projectile>,
}

impl ActiveProjectiles {
    pub fn push(&mut self, projectile: Projectile) {
        self.projectiles.push(projectile);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.projectiles.iter()
    }

    pub fn len(&self) -> usize {
        self.projectiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty()
    }

    pub fn clear(&mut self) {
        self.projectiles.clear();
    }

    /// Оставить только projectiles для которых `keep` вернул true
    pub fn retain_mut(&mut self, keep: impl FnMut(&mut Projectile) -> bool) {
        self.projectiles.retain_mut(keep);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arrow(velocity: Vec2) -> Projectile {
        Projectile::new(Vec2::ZERO, velocity, 10.0, Entity::PLACEHOLDER, Team::Player)
    }

    #[test]
    fn test_movement_uses_reference_rate() {
        let mut projectile = arrow(Vec2::new(10.0, 0.0));

        let step = projectile.advance(0.5, &[]);

        assert_eq!(step, ProjectileStep::Flying);
        assert_eq!(projectile.position, Vec2::new(300.0, 0.0)); // 10 * 0.5 * 60
        assert_eq!(projectile.remaining_lifetime, 3.5);
    }

    #[test]
    fn test_lifetime_expires_on_fourth_tick() {
        let mut projectile = arrow(Vec2::ZERO);

        assert_eq!(projectile.advance(1.0, &[]), ProjectileStep::Flying);
        assert_eq!(projectile.advance(1.0, &[]), ProjectileStep::Flying);
        assert_eq!(projectile.advance(1.0, &[]), ProjectileStep::Flying);
        assert_eq!(projectile.advance(1.0, &[]), ProjectileStep::Expired);
    }

    #[test]
    fn test_obstacle_stops_projectile() {
        let mut projectile = arrow(Vec2::new(1.0, 0.0));
        let wall = Aabb::from_center_size(Vec2::new(60.0, 0.0), Vec2::new(20.0, 100.0));

        // После 1 sec: x = 60 — внутри стены
        assert_eq!(projectile.advance(1.0, &[wall]), ProjectileStep::HitObstacle);
    }

    #[test]
    fn test_angle() {
        let projectile = arrow(Vec2::new(0.0, 5.0));
        assert!((projectile.angle() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_active_projectiles_retain() {
        let mut active = ActiveProjectiles::default();
        active.push(arrow(Vec2::X));
        active.push(arrow(Vec2::Y));
        assert_eq!(active.len(), 2);

        active.retain_mut(|p| p.velocity.x > 0.0);
        assert_eq!(active.len(), 1);

        active.clear();
        assert!(active.is_empty());
    }
}
