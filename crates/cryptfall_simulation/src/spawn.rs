//! Spawn-helpers: полные наборы компонентов персонажей
//!
//! Реестр врагов — сам ECS World: спавн добавляет entity в мир,
//! death sequencing удаляет. Никаких глобальных списков.

use bevy::prelude::*;

use crate::ai::PatrolPath;
use crate::components::{
    CharacterKind, ColliderState, Health, HealthBar, MeleeStats, MovementSpeed, NavAgent, Player,
    SwordTrail, VisionRadius,
};
use crate::state::StateMachine;

/// Стартовое здоровье игрока
pub const PLAYER_MAX_HEALTH: u32 = 5;
/// Стартовое здоровье врага
pub const ENEMY_MAX_HEALTH: u32 = 2;

/// Спавнит единственного игрока уровня
pub fn spawn_player(commands: &mut Commands, position: Vec3) -> Entity {
    commands
        .spawn((
            Transform::from_translation(position),
            Player,
            SwordTrail::default(),
            StateMachine::new(CharacterKind::Player),
            Health::new(PLAYER_MAX_HEALTH),
            MeleeStats::default(),
            MovementSpeed::default(),
        ))
        .id()
}

/// Спавнит врага с готовым (валидированным) patrol-путём
///
/// initialize_enemies подхватит его на ближайшем тике: маршрут на нулевой
/// waypoint + переход в Run.
pub fn spawn_enemy(
    commands: &mut Commands,
    kind: CharacterKind,
    position: Vec3,
    path: PatrolPath,
) -> Entity {
    debug_assert!(kind.is_enemy());

    commands
        .spawn((
            Transform::from_translation(position),
            StateMachine::new(kind),
            Health::new(ENEMY_MAX_HEALTH),
            MeleeStats::default(),
            VisionRadius::default(),
            NavAgent::default(),
            HealthBar::default(),
            ColliderState::default(),
            path,
        ))
        .id()
}
