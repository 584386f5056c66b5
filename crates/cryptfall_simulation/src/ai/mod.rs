//! Enemy AI: patrol-путь + perception loop
//!
//! Простой distance-driven FSM: attack range → Attack, vision → Chase,
//! иначе циклический патруль по waypoint'ам. Без spatial index — линейный
//! скан на малых количествах врагов (осознанный предел масштабирования).

use bevy::prelude::*;

use crate::error::ConfigurationError;

pub mod perception;

pub use perception::{enemy_tick, initialize_enemies};

/// Дистанция, на которой waypoint считается достигнутым
pub const WAYPOINT_RADIUS: f32 = 1.0;

/// Циклический patrol-путь врага
///
/// Инварианты: путь непустой (валидируется при создании),
/// cursor всегда валидный индекс.
#[derive(Component, Debug, Clone)]
pub struct PatrolPath {
    waypoints: Vec<Vec3>,
    cursor: usize,
}

impl PatrolPath {
    /// Fail fast на пустом пути — это ошибка авторинга уровня
    pub fn new(waypoints: Vec<Vec3>) -> Result<Self, ConfigurationError> {
        if waypoints.is_empty() {
            return Err(ConfigurationError::EmptyPatrolPath);
        }
        Ok(Self {
            waypoints,
            cursor: 0,
        })
    }

    pub fn current(&self) -> Vec3 {
        self.waypoints[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Сдвигает курсор на следующую точку (с wrap'ом) и возвращает её
    pub fn advance(&mut self) -> Vec3 {
        self.cursor = (self.cursor + 1) % self.waypoints.len();
        self.current()
    }
}

/// AI Plugin
///
/// Порядок выполнения (chain):
/// 1. initialize_enemies — свежезаспавненные враги получают маршрут и Run
/// 2. enemy_tick — perception loop + патруль
pub struct AIPlugin;

impl Plugin for AIPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            (perception::initialize_enemies, perception::enemy_tick).chain(),
        );
    }
}
