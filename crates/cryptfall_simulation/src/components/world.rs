//! World-level ресурсы: victory point, player input, win/lose banners
//!
//! Явный world-контекст вместо глобальных singleton'ов: любая система
//! читает эти ресурсы через ECS, мутация только из single-threaded тика.

use bevy::prelude::*;

/// Точка победы уровня (дойти — выиграть)
#[derive(Resource, Debug, Clone, Copy)]
pub struct VictoryPoint {
    pub position: Vec3,
}

/// Наблюдаемое состояние win/lose UI (сами баннеры рисует движок)
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct OutcomeBanners {
    pub win_visible: bool,
    pub lose_visible: bool,
}

/// Input игрока за текущий тик (пишется движковым bridge'ем)
///
/// axes — нормализованные horizontal/vertical оси.
/// attack_pressed — edge-сигнал "кнопка атаки нажата в этом тике";
/// потребляется player-тиком один раз.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct PlayerInput {
    pub axes: Vec2,
    pub attack_pressed: bool,
}

impl PlayerInput {
    pub fn press_attack(&mut self) {
        self.attack_pressed = true;
    }
}
