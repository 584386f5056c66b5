//! Навигационный агент — surface движкового pathfinding

use bevy::prelude::*;

/// Proxy движкового pathfinding-агента
///
/// Архитектура:
/// - ядро пишет destination / stopped / enabled (high-level intent)
/// - движковый bridge читает и конвертирует в реальный nav-agent target
/// - расчёт пути и steering полностью на стороне движка
#[derive(Component, Debug, Clone, PartialEq)]
pub struct NavAgent {
    /// Текущая цель движения (world coordinates)
    pub destination: Option<Vec3>,
    /// true — агент стоит (вход в Idle/Attack/Die)
    pub stopped: bool,
    /// false — агент полностью выключен (death sequencing)
    pub enabled: bool,
}

impl Default for NavAgent {
    fn default() -> Self {
        Self {
            destination: None,
            stopped: false,
            enabled: true,
        }
    }
}

impl NavAgent {
    pub fn set_destination(&mut self, point: Vec3) {
        self.destination = Some(point);
    }
}
